// Modal overlay rendering
//
// Modals are rendered on top of the main content:
// - Help modal: keyboard shortcuts and current theme
// - Auth modal: sign in / sign up form
// - Detail modal: full cat profile with adopt action

use crate::catalog;
use crate::tui::app::App;
use crate::tui::modal::{AuthForm, AuthMode, Modal};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Health checks every cat comes with
const HEALTH_CHECKLIST: [&str; 3] = [
    "Vaccinated & Dewormed",
    "Microchipped",
    "30-Day Health Insurance",
];

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Auth(form) => render_auth(f, form, app),
        Modal::Detail(cat_id) => render_detail(f, cat_id, app),
    }
}

/// Calculate centered rect for modal dialog
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn modal_block<'a>(title: impl Into<Line<'a>>, footer: &'a str, app: &App) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight))
        .border_type(app.theme.border_type)
        .title(title)
        .title_bottom(Line::from(footer).centered())
}

/// Render the help modal overlay
fn render_help(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.highlight);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.title)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(app.theme.border);

    // Helper to create a keybind line: "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Screens", header_style)),
        kb("1, F1", "Home"),
        kb("2, F2", "Our Cats"),
        kb("3, F3", "Cart"),
        kb("Tab", "Next screen"),
        Line::raw(""),
        Line::from(Span::styled("  Cats", header_style)),
        kb("←→↑↓, hjkl", "Select a cat"),
        kb("Enter", "Cat details"),
        kb("a, Space", "Adopt"),
        kb("/", "Search (Our Cats)"),
        kb("[ ]", "Previous / next breed"),
        kb("x", "Clear filters"),
        kb("d, Del", "Remove from cart"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("s", "Sign in / sign out"),
        kb("c", "Chat with PurrBot"),
        kb("t", "Cycle theme"),
        kb("L", "Toggle system logs"),
        kb("?", "Toggle this help"),
        kb("q, Ctrl+C", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme.kind.name(), key_style),
        ]),
    ]);

    let area = centered_rect(44, 31, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(modal_block(" Help ", " Press ? or Esc to close ", app));

    f.render_widget(paragraph, area);
}

fn render_auth(f: &mut Frame, form: &AuthForm, app: &App) {
    let theme = &app.theme;
    let mut lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            form.mode.heading(),
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(
            form.mode.subheading(),
            Style::default().fg(theme.muted),
        ))
        .centered(),
        Line::raw(""),
    ];

    for field in form.fields() {
        let focused = *field == form.focused();
        let label_style = if focused {
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        };
        let cursor = if focused { "▏" } else { "" };

        lines.push(Line::from(Span::styled(
            format!("  {}", field.label()),
            label_style,
        )));
        lines.push(Line::from(vec![
            Span::styled(
                if focused { "  ▸ " } else { "    " },
                Style::default().fg(theme.highlight),
            ),
            Span::styled(
                format!("{}{}", form.display_value(*field), cursor),
                Style::default().fg(theme.foreground),
            ),
        ]));
        lines.push(Line::raw(""));
    }

    if let Some(error) = form.error {
        lines.push(
            Line::from(Span::styled(error, Style::default().fg(theme.log_error))).centered(),
        );
    }

    let switch = match form.mode {
        AuthMode::SignIn => "Don't have an account? Ctrl+T to sign up",
        AuthMode::SignUp => "Already have an account? Ctrl+T to sign in",
    };
    lines.push(Line::from(Span::styled(switch, Style::default().fg(theme.muted))).centered());

    let height = lines.len() as u16 + 2;
    let area = centered_rect(52, height, f.area());
    f.render_widget(Clear, area);

    let title = match form.mode {
        AuthMode::SignIn => " Sign In ",
        AuthMode::SignUp => " Create Account ",
    };
    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(theme.background))
        .block(modal_block(title, " Enter submit · Tab next field · Esc cancel ", app));
    f.render_widget(paragraph, area);
}

fn render_detail(f: &mut Frame, cat_id: &str, app: &App) {
    // Cat ids come from the catalog; nothing to draw if one ever doesn't resolve
    let Some(cat) = catalog::find(cat_id) else {
        return;
    };
    let theme = &app.theme;
    let label = Style::default().fg(theme.muted);
    let value = Style::default()
        .fg(theme.foreground)
        .add_modifier(Modifier::BOLD);
    let in_cart = app.shop.cart().contains(cat.id);

    let mut lines = vec![
        Line::from(Span::styled(
            cat.breed.as_str(),
            Style::default().fg(theme.highlight),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Age ", label),
            Span::styled(format!("{} months", cat.age), value),
            Span::styled("   Gender ", label),
            Span::styled(cat.gender.to_string(), value),
            Span::styled("   Price ", label),
            Span::styled(
                format!("${}", cat.price),
                Style::default()
                    .fg(theme.price)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::raw(""),
        Line::from(Span::styled(cat.description, Style::default().fg(theme.foreground))),
        Line::raw(""),
        Line::from(Span::styled("Personality", label)),
        Line::from(Span::styled(
            cat.tags
                .iter()
                .map(|t| format!("#{}", t))
                .collect::<Vec<_>>()
                .join("  "),
            Style::default().fg(theme.tag),
        )),
        Line::raw(""),
    ];
    for check in HEALTH_CHECKLIST {
        lines.push(Line::from(vec![
            Span::styled("✓ ", Style::default().fg(theme.adopted)),
            Span::styled(check, Style::default().fg(theme.foreground)),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(if in_cart {
        Line::from(Span::styled(
            "✓ In Cart",
            Style::default()
                .fg(theme.adopted)
                .add_modifier(Modifier::BOLD),
        ))
        .centered()
    } else {
        Line::from(Span::styled(
            " ♥ Adopt Me (Enter) ",
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        ))
        .centered()
    });

    let area = centered_rect(64, 24, f.area());
    f.render_widget(Clear, area);

    let title = Line::from(Span::styled(
        format!(" {} ", cat.name),
        Style::default()
            .fg(theme.title)
            .add_modifier(Modifier::BOLD),
    ));
    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(theme.background))
        .wrap(Wrap { trim: false })
        .block(modal_block(title, " Enter adopt · Esc close ", app));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_clamped() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(40, 20, area), Rect::new(30, 10, 40, 20));

        let small = Rect::new(0, 0, 30, 10);
        let r = centered_rect(40, 20, small);
        assert_eq!((r.width, r.height), (30, 10));
    }
}
