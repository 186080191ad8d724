// Chat overlay: PurrBot transcript and input line
//
// Drawn over the right side of the content area. The transcript is wrapped
// here rather than by Paragraph so the view can pin it to the bottom.

use crate::assistant::Role;
use crate::tui::app::App;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Minimum overlay width in columns
const MIN_WIDTH: u16 = 40;

/// Greedy word wrap by display width
///
/// Words longer than `width` get a line of their own. Explicit newlines are
/// kept.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = if current.is_empty() {
                word.width()
            } else {
                current.width() + 1 + word.width()
            };
            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    lines
}

/// Area the overlay occupies inside `area`
pub fn overlay_area(area: Rect) -> Rect {
    let width = (area.width * 2 / 5).max(MIN_WIDTH).min(area.width);
    Rect::new(area.right() - width, area.y, width, area.height)
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let area = overlay_area(area);
    f.render_widget(Clear, area);

    let assistant = app.shop.assistant();
    let status = if assistant.is_online() {
        "Always online"
    } else {
        "Offline"
    };

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.highlight))
        .style(Style::default().bg(theme.background))
        .title(Line::from(vec![
            Span::styled(
                " PurrBot AI ",
                Style::default()
                    .fg(theme.title)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("· {} ", status), Style::default().fg(theme.muted)),
        ]));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).split(inner);
    let text_width = chunks[0].width.saturating_sub(2) as usize;

    // Transcript
    let mut lines: Vec<Line> = Vec::new();
    for turn in assistant.transcript() {
        let (who, color) = match turn.role {
            Role::User => ("You", theme.user_bubble),
            Role::Assistant => ("PurrBot", theme.bot_bubble),
        };
        lines.push(Line::from(Span::styled(
            who,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        for wrapped in wrap_text(&turn.text, text_width) {
            lines.push(Line::from(Span::styled(
                format!(" {}", wrapped),
                Style::default().fg(theme.foreground),
            )));
        }
        lines.push(Line::raw(""));
    }
    if assistant.is_awaiting() {
        lines.push(Line::from(Span::styled(
            format!(
                "{} PurrBot is thinking{}",
                app.spinner_char(),
                app.thinking_dots()
            ),
            Style::default().fg(theme.muted),
        )));
    }

    // Pin to the bottom, minus however far the user scrolled up
    let visible = chunks[0].height as usize;
    let max_offset = lines.len().saturating_sub(visible);
    let offset = max_offset.saturating_sub(app.chat_scroll as usize);

    let transcript = Paragraph::new(lines).scroll((offset.min(u16::MAX as usize) as u16, 0));
    f.render_widget(transcript, chunks[0]);

    // Input
    let (input_text, input_style, border) = if app.chat_input_enabled() {
        (
            format!("{}▏", app.chat_input),
            Style::default().fg(theme.foreground),
            theme.highlight,
        )
    } else {
        (
            "Waiting for PurrBot...".to_string(),
            Style::default().fg(theme.muted),
            theme.border,
        )
    };
    let input = Paragraph::new(input_text).style(input_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(border))
            .title(" Ask about our cats... "),
    );
    f.render_widget(input, chunks[1]);
}
