//! Constant-velocity auto-scroll for the gallery and message screens.
//!
//! The driver keeps its own virtual position instead of reading the offset
//! back from the viewport, so sub-pixel speeds (0.5px per tick) accumulate
//! even when the host rounds offsets.
//!
//! # Tick Behavior
//!
//! ```text
//! owner inactive        -> Stopped   (caller cancels the timer)
//! position >= max       -> Looped    (position = 0, smooth scroll to top)
//! otherwise             -> Advanced  (position += speed, jump to position)
//! ```
//!
//! Position can overshoot `max` by less than one step, for exactly one tick,
//! before the next tick loops it back to zero.

use crate::screen::Screen;
use crate::viewport::ViewportMetrics;

/// Outcome of one auto-scroll tick.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AutoScrollTick {
    /// Offset advanced to the contained position.
    Advanced(f32),
    /// Reached the bottom; smooth-scrolling back to the top.
    Looped,
    /// Owning screen is no longer active; the timer should be cancelled.
    Stopped,
}

/// Auto-scroll state for one screen.
#[derive(Clone, Debug, PartialEq)]
pub struct AutoScroll {
    screen: Screen,
    position: f32,
    speed: f32,
}

impl AutoScroll {
    /// Start at the top of `screen` with `speed` pixels per tick.
    pub const fn new(
        screen: Screen,
        speed: f32,
    ) -> Self {
        Self {
            screen,
            position: 0.0,
            speed,
        }
    }

    /// Screen this driver scrolls.
    #[inline]
    pub const fn screen(&self) -> Screen { self.screen }

    /// Virtual scroll position.
    #[inline]
    pub const fn position(&self) -> f32 { self.position }

    /// Run one tick against `viewport`.
    pub fn tick(
        &mut self,
        active: Option<Screen>,
        viewport: &mut impl ViewportMetrics,
    ) -> AutoScrollTick {
        if active != Some(self.screen) {
            return AutoScrollTick::Stopped;
        }

        let max = viewport.max_scroll();
        if self.position >= max {
            self.position = 0.0;
            viewport.smooth_scroll_to(0.0);
            AutoScrollTick::Looped
        } else {
            self.position += self.speed;
            viewport.set_scroll_offset(self.position);
            AutoScrollTick::Advanced(self.position)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
