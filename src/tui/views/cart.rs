// Cart screen: adoption request entries and summary

use crate::cart::CartEntry;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Relative "added" time for a cart entry
pub fn added_ago(added_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - added_at).num_seconds().max(0);
    match secs {
        0..=59 => "Added just now".to_string(),
        60..=3599 => format!("Added {} min ago", secs / 60),
        _ => format!("Added {} h ago", secs / 3600),
    }
}

/// "Adoption Fee (2 cats)"
pub fn fee_label(count: usize) -> String {
    format!(
        "Adoption Fee ({} {})",
        count,
        if count == 1 { "cat" } else { "cats" }
    )
}

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;

    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(4)]).split(area);
    f.render_widget(
        Paragraph::new(Span::styled(
            "Your Adoption Request",
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );

    if app.shop.cart().is_empty() {
        render_empty(f, chunks[1], app);
        return;
    }

    let body = if Breakpoint::from_width(area.width).at_least(Breakpoint::Normal) {
        Layout::horizontal([Constraint::Min(30), Constraint::Length(34)]).split(chunks[1])
    } else {
        Layout::vertical([Constraint::Min(4), Constraint::Length(7)]).split(chunks[1])
    };

    render_entries(f, body[0], app);
    render_summary(f, body[1], app);
}

fn render_entries(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let now = Utc::now();

    let items: Vec<ListItem> = app
        .shop
        .cart()
        .entries()
        .iter()
        .map(|entry: &CartEntry| {
            let cat = entry.cat;
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("{:<10}", cat.name),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("${}", cat.price),
                        Style::default().fg(theme.price),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("{} · {}", cat.breed, added_ago(entry.added_at, now)),
                    Style::default().fg(theme.muted),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .style(Style::default().fg(theme.foreground))
        .highlight_style(
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.selection),
        )
        .highlight_symbol("▸ ")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border)),
        );

    let mut state = ListState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_summary(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let cart = app.shop.cart();
    let total = format!("${}", cart.total());
    let width = area.width.saturating_sub(4) as usize;

    // Label left, value right
    let row = |label: String, value: &str, style: Style| -> Line {
        let pad = width.saturating_sub(label.chars().count() + value.chars().count());
        Line::from(vec![
            Span::styled(label, style),
            Span::raw(" ".repeat(pad)),
            Span::styled(value.to_string(), style),
        ])
    };

    let muted = Style::default().fg(theme.muted);
    let lines = vec![
        row(fee_label(cart.count()), &total, muted),
        row("Starter Kit".to_string(), "Free", Style::default().fg(theme.adopted)),
        Line::raw(""),
        row(
            "Total".to_string(),
            &total,
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let summary = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(" Summary "),
    );
    f.render_widget(summary, area);
}

fn render_empty(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            "Your basket is empty",
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Ready to meet your new best friend?",
            Style::default().fg(theme.muted),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "Press 2 to browse cats",
            Style::default().fg(theme.highlight),
        )),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn relative_added_time() {
        let now = Utc::now();
        assert_eq!(added_ago(now, now), "Added just now");
        assert_eq!(added_ago(now - Duration::seconds(125), now), "Added 2 min ago");
        assert_eq!(added_ago(now - Duration::hours(3), now), "Added 3 h ago");
        // Clock skew never shows a negative age
        assert_eq!(added_ago(now + Duration::seconds(5), now), "Added just now");
    }

    #[test]
    fn fee_label_pluralizes() {
        assert_eq!(fee_label(1), "Adoption Fee (1 cat)");
        assert_eq!(fee_label(3), "Adoption Fee (3 cats)");
    }
}
