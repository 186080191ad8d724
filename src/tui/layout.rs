// Width breakpoints for the storefront layout
//
// Render code asks for a breakpoint instead of comparing widths directly.

/// Terminal width class
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// Under 60 columns: one card per row, short hints
    Compact,
    /// 60-99 columns
    Normal,
    /// 100-139 columns
    Wide,
    /// 140 columns and up
    UltraWide,
}

/// Height of one cat card, borders included
pub const CARD_HEIGHT: u16 = 8;

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Self::Compact,
            60..=99 => Self::Normal,
            100..=139 => Self::Wide,
            _ => Self::UltraWide,
        }
    }

    pub fn at_least(self, min: Breakpoint) -> bool {
        self >= min
    }

    /// Cat cards per grid row
    pub fn card_columns(self) -> usize {
        match self {
            Self::Compact => 1,
            Self::Normal => 2,
            Self::Wide => 3,
            Self::UltraWide => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        let cases = [
            (0, Breakpoint::Compact),
            (59, Breakpoint::Compact),
            (60, Breakpoint::Normal),
            (99, Breakpoint::Normal),
            (100, Breakpoint::Wide),
            (139, Breakpoint::Wide),
            (140, Breakpoint::UltraWide),
        ];
        for (width, expected) in cases {
            assert_eq!(Breakpoint::from_width(width), expected, "width {}", width);
        }
    }

    #[test]
    fn ordering_is_by_width() {
        assert!(Breakpoint::Wide.at_least(Breakpoint::Normal));
        assert!(Breakpoint::Wide.at_least(Breakpoint::Wide));
        assert!(!Breakpoint::Normal.at_least(Breakpoint::Wide));
    }

    #[test]
    fn grid_widens_with_terminal() {
        let cols: Vec<_> = [40, 80, 120, 160]
            .into_iter()
            .map(|w| Breakpoint::from_width(w).card_columns())
            .collect();
        assert_eq!(cols, vec![1, 2, 3, 4]);
    }
}
