//! Gift icon click counter.
//!
//! The bounce starts on exactly the Nth click. Clicks after that keep
//! counting but never restart it; the counter only clears when the bounce
//! timer ends. Fewer than N clicks are remembered indefinitely.

use crate::animations::bounce_offset;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EasterEgg {
    clicks: u8,
    bounce_started: Option<u64>,
}

impl EasterEgg {
    pub const fn new() -> Self {
        Self {
            clicks: 0,
            bounce_started: None,
        }
    }

    #[inline]
    pub const fn clicks(&self) -> u8 { self.clicks }

    #[inline]
    pub const fn is_bouncing(&self) -> bool { self.bounce_started.is_some() }

    /// Count one click. Returns `true` if this click started the bounce.
    pub fn click(
        &mut self,
        now_ms: u64,
        required: u8,
    ) -> bool {
        self.clicks = self.clicks.saturating_add(1);
        if self.clicks == required {
            self.bounce_started = Some(now_ms);
            true
        } else {
            false
        }
    }

    /// Stop the bounce and clear the counter.
    pub fn finish(&mut self) {
        self.clicks = 0;
        self.bounce_started = None;
    }

    /// Vertical offset of the gift icon at `now_ms`.
    pub fn offset(
        &self,
        now_ms: u64,
    ) -> i32 {
        self.bounce_started
            .map_or(0, |start| bounce_offset(now_ms.saturating_sub(start)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_third_click_starts_bounce() {
        let mut egg = EasterEgg::new();
        assert!(!egg.click(0, 3));
        assert!(!egg.click(10, 3));
        assert!(egg.click(20, 3), "Third click should start the bounce");
        assert!(egg.is_bouncing());
    }

    #[test]
    fn test_extra_clicks_do_not_retrigger() {
        let mut egg = EasterEgg::new();
        for i in 0..3 {
            egg.click(i, 3);
        }
        assert!(!egg.click(100, 3), "Fourth click must not restart the bounce");
        assert_eq!(egg.clicks(), 4);
        assert_eq!(egg.offset(2), 0, "Bounce still timed from the third click");
    }

    #[test]
    fn test_finish_resets_counter() {
        let mut egg = EasterEgg::new();
        for i in 0..4 {
            egg.click(i, 3);
        }
        egg.finish();
        assert_eq!(egg, EasterEgg::new());
        assert_eq!(egg.offset(500), 0, "No bounce after finishing");
    }

    #[test]
    fn test_offset_while_bouncing() {
        let mut egg = EasterEgg::new();
        egg.click(1000, 1);
        assert_eq!(egg.offset(1000), 0);
        assert!(egg.offset(1500) < 0, "Icon should be in the air mid-bounce");
    }
}
