// Toast notifications
//
// One-line feedback for visitor actions, drawn just under the navbar on the
// right and dropped by the tick once its time is up.

use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// How long a toast stays up by default
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Tone of a toast, picks its icon and border color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Warning,
}

impl ToastKind {
    fn icon(self) -> &'static str {
        match self {
            Self::Success => "♥",
            Self::Info => "ℹ",
            Self::Warning => "!",
        }
    }

    fn color(self, theme: &Theme) -> Color {
        match self {
            Self::Success => theme.adopted,
            Self::Info => theme.highlight,
            Self::Warning => theme.log_warn,
        }
    }
}

pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    shown_at: Instant,
    ttl: Duration,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self::with_duration(kind, message, TOAST_DURATION)
    }

    pub fn with_duration(kind: ToastKind, message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            kind,
            message: message.into(),
            shown_at: Instant::now(),
            ttl,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.ttl
    }

    /// Where the toast goes inside `area` (top right, below a 3-row navbar)
    pub fn placement(&self, area: Rect) -> Rect {
        // icon, space, message, plus one column of padding and a border each side
        let wanted = self.message.width() as u16 + 6;
        let width = wanted.min(area.width);
        let x = area.right().saturating_sub(width + 1).max(area.x);
        Rect::new(x, area.y + 3, width, 3).intersection(area)
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let toast_area = self.placement(area);
        let color = self.kind.color(theme);

        let line = Line::from(vec![
            Span::styled(
                format!("{} ", self.kind.icon()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.message.as_str(), Style::default().fg(theme.foreground)),
        ])
        .centered();

        let paragraph = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(theme.background)),
        );

        f.render_widget(Clear, toast_area);
        f.render_widget(paragraph, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_expires_immediately() {
        assert!(Toast::with_duration(ToastKind::Info, "bye", Duration::ZERO).is_expired());
        assert!(!Toast::new(ToastKind::Info, "hi").is_expired());
    }

    #[test]
    fn placement_sits_top_right_and_clamps() {
        let toast = Toast::new(ToastKind::Success, "Luna added");
        let area = Rect::new(0, 0, 100, 30);
        let r = toast.placement(area);
        assert_eq!((r.width, r.height, r.y), (16, 3, 3));
        assert_eq!(r.right(), 99);

        let tiny = toast.placement(Rect::new(0, 0, 8, 4));
        assert!(tiny.width <= 8 && tiny.bottom() <= 4);
    }
}
