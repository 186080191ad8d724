// Cat card component
//
// One bordered card per cat, laid out in a responsive grid. The grid scrolls
// by whole rows so the selected card is always visible.

use crate::catalog::Cat;
use crate::tui::layout::{Breakpoint, CARD_HEIGHT};
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Number of personality tags shown on a card
const CARD_TAGS: usize = 3;

/// "12 mo · Female"
pub fn age_line(cat: &Cat) -> String {
    format!("{} mo · {}", cat.age, cat.gender)
}

pub fn tag_line(cat: &Cat) -> String {
    cat.tags
        .iter()
        .take(CARD_TAGS)
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_card(
    f: &mut Frame,
    area: Rect,
    cat: &Cat,
    selected: bool,
    adopted: bool,
    theme: &Theme,
) {
    let mut name_line = vec![Span::styled(
        cat.name,
        Style::default()
            .fg(theme.foreground)
            .add_modifier(Modifier::BOLD),
    )];
    if adopted {
        name_line.push(Span::styled(
            "  ✓ Adopted",
            Style::default().fg(theme.adopted),
        ));
    }

    let lines = vec![
        Line::from(name_line),
        Line::from(Span::styled(
            cat.breed.as_str(),
            Style::default().fg(theme.muted),
        )),
        Line::from(Span::styled(age_line(cat), Style::default().fg(theme.muted))),
        Line::from(Span::styled(
            format!("${}", cat.price),
            Style::default()
                .fg(theme.price)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(tag_line(cat), Style::default().fg(theme.tag))),
    ];

    let border_style = if selected {
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border)
    };

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(border_style),
    );

    f.render_widget(card, area);
}

/// First visible row so that `selected` stays on screen
pub fn first_visible_row(selected: usize, columns: usize, visible_rows: usize) -> usize {
    let selected_row = selected / columns.max(1);
    selected_row.saturating_sub(visible_rows.max(1) - 1)
}

/// Render cats as a grid of cards. Returns the number of columns used.
pub fn render_grid(
    f: &mut Frame,
    area: Rect,
    cats: &[&Cat],
    selected: Option<usize>,
    is_adopted: impl Fn(&Cat) -> bool,
    theme: &Theme,
) -> usize {
    let columns = Breakpoint::from_width(area.width).card_columns();
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let first_row = first_visible_row(selected.unwrap_or(0), columns, visible_rows);

    for r in 0..visible_rows {
        let y = area.y + (r as u16) * CARD_HEIGHT;
        if y >= area.bottom() {
            break;
        }
        let row_area = Rect::new(
            area.x,
            y,
            area.width,
            CARD_HEIGHT.min(area.bottom() - y),
        );
        let cells = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(row_area);

        for (c, cell) in cells.iter().enumerate() {
            let idx = (first_row + r) * columns + c;
            let Some(&cat) = cats.get(idx) else {
                return columns;
            };
            render_card(f, *cell, cat, selected == Some(idx), is_adopted(cat), theme);
        }
    }

    columns
}
