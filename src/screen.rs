//! Screen identities for the three-screen greeting flow.
//!
//! Visitors move forward only:
//!
//! - [`Screen::Opening`]: Splash with recipient name, date and the start button
//! - [`Screen::Gallery`]: Auto-scrolling photo cards and the video panel
//! - [`Screen::Message`]: Typed message blocks and the footer signature

/// One of the three mutually exclusive screens.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Hash)]
pub enum Screen {
    /// Splash screen, active at startup.
    #[default]
    Opening,

    /// Photo gallery with video section.
    Gallery,

    /// Typed message.
    Message,
}

impl Screen {
    /// All screens in flow order.
    pub const ALL: [Self; 3] = [Self::Opening, Self::Gallery, Self::Message];

    /// Screen the primary button on this screen leads to.
    #[inline]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Opening => Some(Self::Gallery),
            Self::Gallery => Some(Self::Message),
            Self::Message => None,
        }
    }

    /// Whether this screen's content scrolls (and so can auto-scroll).
    #[inline]
    pub const fn is_scrollable(self) -> bool { !matches!(self, Self::Opening) }

    /// Stable index for per-screen arrays.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Opening => 0,
            Self::Gallery => 1,
            Self::Message => 2,
        }
    }

    /// Short name for logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Opening => "opening",
            Self::Gallery => "gallery",
            Self::Message => "message",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_default() {
        assert_eq!(Screen::default(), Screen::Opening);
    }

    #[test]
    fn test_screen_flow() {
        assert_eq!(Screen::Opening.next(), Some(Screen::Gallery));
        assert_eq!(Screen::Gallery.next(), Some(Screen::Message));
        assert_eq!(Screen::Message.next(), None, "Message is the last screen");
    }

    #[test]
    fn test_only_opening_is_static() {
        assert!(!Screen::Opening.is_scrollable());
        assert!(Screen::Gallery.is_scrollable());
        assert!(Screen::Message.is_scrollable());
    }

    #[test]
    fn test_indices_match_all_order() {
        for (i, screen) in Screen::ALL.iter().enumerate() {
            assert_eq!(screen.index(), i, "{screen:?} index out of order");
        }
    }
}
