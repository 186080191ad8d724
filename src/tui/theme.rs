// Theme system for the TUI
//
// Built-in color presets selected by name from config. Each theme defines
// colors for all UI elements.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    PurrDark,
    PurrLight,
    Terminal,
}

impl ThemeKind {
    pub const ALL: [ThemeKind; 3] = [ThemeKind::PurrDark, ThemeKind::PurrLight, ThemeKind::Terminal];

    /// Get display name (also the config value)
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::PurrDark => "Purr Dark",
            ThemeKind::PurrLight => "Purr Light",
            ThemeKind::Terminal => "Terminal",
        }
    }

    /// Look up by config name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let current = Self::ALL.iter().position(|&t| t == self).unwrap_or(0);
        Self::ALL[(current + 1) % Self::ALL.len()]
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::PurrDark => Theme::purr_dark(),
            ThemeKind::PurrLight => Theme::purr_light(),
            ThemeKind::Terminal => Theme::terminal(),
        }
    }
}

/// Complete resolved theme ready for use in the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub kind: ThemeKind,

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,

    // ─── UI Element Colors ───────────────────────────────────
    pub title: Color,
    pub border: Color,
    pub border_type: BorderType,
    pub highlight: Color,
    pub status_bar: Color,
    pub selection: Color,
    pub selection_fg: Color,

    // ─── Shop Colors ─────────────────────────────────────────
    pub price: Color,
    pub tag: Color,
    pub adopted: Color,
    pub user_bubble: Color,
    pub bot_bubble: Color,

    // ─── Log Levels ──────────────────────────────────────────
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::purr_dark()
    }
}

impl Theme {
    /// Resolve a configured theme name, falling back to the default
    pub fn from_config(name: &str) -> Self {
        match ThemeKind::from_name(name) {
            Some(kind) => kind.theme(),
            None => {
                tracing::warn!("Unknown theme {:?}, using {}", name, ThemeKind::default().name());
                Self::default()
            }
        }
    }

    /// Warm orange on near-black
    pub fn purr_dark() -> Self {
        Self {
            kind: ThemeKind::PurrDark,
            background: Color::Rgb(28, 25, 23),
            foreground: Color::Rgb(245, 245, 244),
            muted: Color::Rgb(168, 162, 158),
            title: Color::Rgb(251, 146, 60),
            border: Color::Rgb(87, 83, 78),
            border_type: BorderType::Rounded,
            highlight: Color::Rgb(249, 115, 22),
            status_bar: Color::Rgb(168, 162, 158),
            selection: Color::Rgb(124, 45, 18),
            selection_fg: Color::Rgb(255, 237, 213),
            price: Color::Rgb(251, 146, 60),
            tag: Color::Rgb(253, 186, 116),
            adopted: Color::Rgb(74, 222, 128),
            user_bubble: Color::Rgb(249, 115, 22),
            bot_bubble: Color::Rgb(214, 211, 209),
            log_error: Color::Rgb(248, 113, 113),
            log_warn: Color::Rgb(250, 204, 21),
            log_info: Color::Rgb(214, 211, 209),
            log_debug: Color::Rgb(120, 113, 108),
        }
    }

    /// Stone on cream, for light terminals
    pub fn purr_light() -> Self {
        Self {
            kind: ThemeKind::PurrLight,
            background: Color::Rgb(255, 247, 237),
            foreground: Color::Rgb(28, 25, 23),
            muted: Color::Rgb(120, 113, 108),
            title: Color::Rgb(194, 65, 12),
            border: Color::Rgb(214, 211, 209),
            border_type: BorderType::Rounded,
            highlight: Color::Rgb(234, 88, 12),
            status_bar: Color::Rgb(87, 83, 78),
            selection: Color::Rgb(254, 215, 170),
            selection_fg: Color::Rgb(28, 25, 23),
            price: Color::Rgb(194, 65, 12),
            tag: Color::Rgb(154, 52, 18),
            adopted: Color::Rgb(22, 163, 74),
            user_bubble: Color::Rgb(234, 88, 12),
            bot_bubble: Color::Rgb(68, 64, 60),
            log_error: Color::Rgb(220, 38, 38),
            log_warn: Color::Rgb(202, 138, 4),
            log_info: Color::Rgb(68, 64, 60),
            log_debug: Color::Rgb(168, 162, 158),
        }
    }

    /// Named ANSI colors only; inherits the terminal's own palette
    pub fn terminal() -> Self {
        Self {
            kind: ThemeKind::Terminal,
            background: Color::Reset,
            foreground: Color::Reset,
            muted: Color::DarkGray,
            title: Color::Yellow,
            border: Color::Gray,
            border_type: BorderType::Plain,
            highlight: Color::Cyan,
            status_bar: Color::Gray,
            selection: Color::Blue,
            selection_fg: Color::White,
            price: Color::Yellow,
            tag: Color::Magenta,
            adopted: Color::Green,
            user_bubble: Color::Cyan,
            bot_bubble: Color::Reset,
            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Reset,
            log_debug: Color::DarkGray,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in ThemeKind::ALL {
            assert_eq!(ThemeKind::from_name(kind.name()), Some(kind));
            assert_eq!(kind.theme().kind, kind);
        }
        assert_eq!(ThemeKind::from_name("purr light"), Some(ThemeKind::PurrLight));
    }

    #[test]
    fn unknown_name_falls_back() {
        assert_eq!(Theme::from_config("Solarized").kind, ThemeKind::PurrDark);
    }

    #[test]
    fn cycle_visits_every_theme() {
        let mut kind = ThemeKind::default();
        for _ in 0..ThemeKind::ALL.len() {
            kind = kind.next();
        }
        assert_eq!(kind, ThemeKind::default());
    }
}
