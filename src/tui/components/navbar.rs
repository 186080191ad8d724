// Navigation bar component
//
// Renders the shop name, one tab per screen, the cart badge and who is
// signed in.

use crate::shop::ViewState;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Tab label, with the cart count badge when the cart has entries
pub fn tab_label(view: ViewState, cart_count: usize) -> String {
    match view {
        ViewState::Cart if cart_count > 0 => format!("{} ({})", view.label(), cart_count),
        _ => view.label().to_string(),
    }
}

/// Render the navigation bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let active = app.shop.view();
    let cart_count = app.shop.cart().count();

    let mut spans = vec![Span::styled(
        " 🐾 Sonu's Cat Shop ",
        Style::default()
            .fg(theme.title)
            .add_modifier(Modifier::BOLD),
    )];

    for (i, view) in ViewState::ALL.iter().enumerate() {
        spans.push(Span::raw("  "));
        let label = format!(" {} {} ", i + 1, tab_label(*view, cart_count));
        let style = if *view == active {
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.selection)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.foreground)
        };
        spans.push(Span::styled(label, style));
    }

    // Right side: account and chat
    let account = match app.shop.user() {
        Some(user) => format!(" 👤 {} ", user.name),
        None => " s Sign in ".to_string(),
    };
    let chat = if app.shop.assistant().is_awaiting() {
        format!(" {} PurrBot ", app.spinner_char())
    } else if app.chat_open {
        " c Close chat ".to_string()
    } else {
        " c Chat ".to_string()
    };

    let navbar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title_top(
                Line::from(vec![
                    Span::styled(account, Style::default().fg(theme.highlight)),
                    Span::styled(chat, Style::default().fg(theme.muted)),
                    Span::styled(" ? ", Style::default().fg(theme.muted)),
                ])
                .right_aligned(),
            ),
    );

    f.render_widget(navbar, area);
}
