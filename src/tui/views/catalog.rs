// Catalog screen: header, search box, breed selector, card grid

use crate::tui::app::App;
use crate::tui::components::cat_card;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// "8 lovely felines waiting for you"
pub fn count_line(count: usize) -> String {
    format!("{} lovely felines waiting for you", count)
}

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Min(4),
    ])
    .split(area);

    let cats = app.shop.filtered();

    render_header(f, chunks[0], app, cats.len());
    render_filters(f, chunks[1], app);

    if cats.is_empty() {
        render_empty(f, chunks[2], app);
        app.columns = 1;
        return;
    }

    let cart = app.shop.cart();
    app.columns = cat_card::render_grid(
        f,
        chunks[2],
        &cats,
        Some(app.selected),
        |cat| cart.contains(cat.id),
        &app.theme,
    );
}

fn render_header(f: &mut Frame, area: Rect, app: &App, count: usize) {
    let theme = &app.theme;
    let lines = vec![
        Line::from(Span::styled(
            "Our Cats",
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(count_line(count), Style::default().fg(theme.muted))),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_filters(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let chunks = Layout::horizontal([Constraint::Min(20), Constraint::Length(26)]).split(area);

    let search_border = if app.search_focused {
        theme.highlight
    } else {
        theme.border
    };
    let query = app.shop.query();
    let search_text = if query.is_empty() && !app.search_focused {
        Span::styled("Search by name or trait... (/)", Style::default().fg(theme.muted))
    } else if app.search_focused {
        Span::styled(format!("{}▏", query), Style::default().fg(theme.foreground))
    } else {
        Span::styled(query.to_string(), Style::default().fg(theme.foreground))
    };
    let search = Paragraph::new(Line::from(vec![Span::raw("🔍 "), search_text])).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(search_border)),
    );
    f.render_widget(search, chunks[0]);

    let breed = Paragraph::new(format!("‹ {} ›", app.shop.breed().label()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.foreground))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border))
                .title(" Breed [ ] "),
        );
    f.render_widget(breed, chunks[1]);
}

fn render_empty(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled("🔍", Style::default().fg(theme.muted))),
        Line::from(Span::styled(
            "No cats found",
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Try adjusting your filters or search terms.",
            Style::default().fg(theme.muted),
        )),
        Line::from(Span::styled(
            "Press x to clear filters",
            Style::default().fg(theme.muted),
        )),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_count() {
        assert_eq!(count_line(8), "8 lovely felines waiting for you");
    }
}
