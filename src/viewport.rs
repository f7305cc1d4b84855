//! Viewport metrics for scrollable screens.
//!
//! Scrolling logic (auto-scroll, typing follow) never touches layout directly.
//! It reads and writes through [`ViewportMetrics`], so the same algorithm runs
//! against a [`ScrollRegion`] in the app and against recording fakes in tests.
//!
//! # Smooth Scrolling
//!
//! `smooth_scroll_to` only records a target. [`ScrollRegion::step_smooth`]
//! moves the offset toward it each frame with time-based easing:
//!
//! ```text
//! step = (target - offset) * min(1, elapsed_ms / SMOOTH_SCROLL_TAU_MS)
//! ```
//!
//! with a 1px minimum step so the approach never stalls, and a snap once within
//! half a pixel. A direct `set_scroll_offset` cancels any smooth scroll in flight.

/// Read/write access to one scrollable region.
pub trait ViewportMetrics {
    /// Current scroll offset from the top of the content.
    fn scroll_offset(&self) -> f32;

    /// Height of the visible window onto the content.
    fn viewport_height(&self) -> f32;

    /// Total content height.
    fn content_height(&self) -> f32;

    /// Largest reachable offset (content minus viewport, never negative).
    fn max_scroll(&self) -> f32 { (self.content_height() - self.viewport_height()).max(0.0) }

    /// Jump to `offset` immediately.
    fn set_scroll_offset(
        &mut self,
        offset: f32,
    );

    /// Animate toward `offset`.
    fn smooth_scroll_to(
        &mut self,
        offset: f32,
    );
}

/// Easing time constant for smooth scrolling.
const SMOOTH_SCROLL_TAU_MS: f32 = 120.0;

/// Distance at which a smooth scroll snaps to its target.
const SMOOTH_SNAP_PX: f32 = 0.5;

/// Concrete scroll state for one screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollRegion {
    offset: f32,
    viewport_height: f32,
    content_height: f32,
    smooth_target: Option<f32>,
}

impl ScrollRegion {
    /// Region at offset 0.
    pub const fn new(
        viewport_height: f32,
        content_height: f32,
    ) -> Self {
        Self {
            offset: 0.0,
            viewport_height,
            content_height,
            smooth_target: None,
        }
    }

    /// Update the content height (e.g. as typed text grows), re-clamping the offset.
    pub fn set_content_height(
        &mut self,
        content_height: f32,
    ) {
        self.content_height = content_height;
        self.offset = self.clamp(self.offset);
    }

    /// Visible content range as `(top, bottom)`.
    #[inline]
    pub fn visible_range(&self) -> (f32, f32) { (self.offset, self.offset + self.viewport_height) }

    /// Target of the smooth scroll in flight, if any.
    #[inline]
    pub const fn smooth_target(&self) -> Option<f32> { self.smooth_target }

    /// Jump to the top and drop any smooth scroll.
    pub fn reset(&mut self) {
        self.offset = 0.0;
        self.smooth_target = None;
    }

    /// Advance a smooth scroll by `elapsed_ms`. Returns `true` if the offset moved.
    pub fn step_smooth(
        &mut self,
        elapsed_ms: u64,
    ) -> bool {
        let Some(target) = self.smooth_target else {
            return false;
        };

        let delta = target - self.offset;
        if delta.abs() <= SMOOTH_SNAP_PX {
            self.offset = target;
            self.smooth_target = None;
            return delta != 0.0;
        }

        let fraction = (elapsed_ms as f32 / SMOOTH_SCROLL_TAU_MS).min(1.0);
        let mut step = delta * fraction;
        if step.abs() < 1.0 {
            step = 1.0_f32.copysign(delta).clamp(-delta.abs(), delta.abs());
        }
        self.offset += step;

        if (target - self.offset).abs() <= SMOOTH_SNAP_PX {
            self.offset = target;
            self.smooth_target = None;
        }
        true
    }

    fn clamp(
        &self,
        offset: f32,
    ) -> f32 {
        offset.clamp(0.0, self.max_scroll())
    }
}

impl ViewportMetrics for ScrollRegion {
    fn scroll_offset(&self) -> f32 { self.offset }

    fn viewport_height(&self) -> f32 { self.viewport_height }

    fn content_height(&self) -> f32 { self.content_height }

    fn set_scroll_offset(
        &mut self,
        offset: f32,
    ) {
        self.smooth_target = None;
        self.offset = self.clamp(offset);
    }

    fn smooth_scroll_to(
        &mut self,
        offset: f32,
    ) {
        self.smooth_target = Some(self.clamp(offset));
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_scroll() {
        let region = ScrollRegion::new(240.0, 1000.0);
        assert_eq!(region.max_scroll(), 760.0);

        let short = ScrollRegion::new(240.0, 100.0);
        assert_eq!(short.max_scroll(), 0.0, "Short content should not scroll");
    }

    #[test]
    fn test_set_offset_clamps() {
        let mut region = ScrollRegion::new(240.0, 1000.0);
        region.set_scroll_offset(-10.0);
        assert_eq!(region.scroll_offset(), 0.0);
        region.set_scroll_offset(5000.0);
        assert_eq!(region.scroll_offset(), 760.0);
    }

    #[test]
    fn test_visible_range() {
        let mut region = ScrollRegion::new(240.0, 1000.0);
        region.set_scroll_offset(100.0);
        assert_eq!(region.visible_range(), (100.0, 340.0));
    }

    #[test]
    fn test_smooth_scroll_converges() {
        let mut region = ScrollRegion::new(240.0, 1000.0);
        region.smooth_scroll_to(300.0);
        assert_eq!(region.scroll_offset(), 0.0, "Smooth scroll should not jump");

        let mut frames = 0;
        while region.smooth_target().is_some() && frames < 200 {
            region.step_smooth(16);
            frames += 1;
        }
        assert_eq!(region.scroll_offset(), 300.0, "Should land exactly on target");
        assert!(frames < 200, "Should converge, took {frames} frames");
    }

    #[test]
    fn test_smooth_scroll_moves_monotonically() {
        let mut region = ScrollRegion::new(240.0, 1000.0);
        region.set_scroll_offset(500.0);
        region.smooth_scroll_to(0.0);

        let mut prev = region.scroll_offset();
        while region.step_smooth(16) {
            assert!(region.scroll_offset() <= prev, "Scrolling up should never move down");
            prev = region.scroll_offset();
        }
        assert_eq!(region.scroll_offset(), 0.0);
    }

    #[test]
    fn test_smooth_target_is_clamped() {
        let mut region = ScrollRegion::new(240.0, 400.0);
        region.smooth_scroll_to(900.0);
        assert_eq!(region.smooth_target(), Some(160.0));
    }

    #[test]
    fn test_direct_set_cancels_smooth() {
        let mut region = ScrollRegion::new(240.0, 1000.0);
        region.smooth_scroll_to(300.0);
        region.set_scroll_offset(10.0);
        assert_eq!(region.smooth_target(), None);
        assert!(!region.step_smooth(16), "Nothing left to animate");
    }

    #[test]
    fn test_shrinking_content_reclamps_offset() {
        let mut region = ScrollRegion::new(240.0, 1000.0);
        region.set_scroll_offset(700.0);
        region.set_content_height(500.0);
        assert_eq!(region.scroll_offset(), 260.0);
    }
}
