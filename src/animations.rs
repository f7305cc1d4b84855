//! Decorative animation math.
//!
//! - **Parallax**: floating shapes drift and rotate with the scroll offset
//! - **Bounce**: the gift icon hops after the easter-egg click
//! - **Easing**: fade/slide-in of photo cards and pop-in of the message card
//! - **Color fades**: the music toggle glow eases between lit and unlit
//!
//! # Parallax
//!
//! Shape `i` moves at its own speed so the layers separate while scrolling:
//! ```text
//! offset   = scrolled * (0.5 + 0.1 * i)
//! rotation = scrolled * 0.1 degrees
//! ```
//!
//! # Color Fades
//!
//! Colors interpolate in RGB565 space with 8-bit fixed-point math, stepping
//! at least one unit per channel per frame so a fade can never stall short of
//! its target.

use core::f32::consts::PI;

use embedded_graphics::{pixelcolor::Rgb565, prelude::IntoStorage};

// =============================================================================
// Parallax Constants
// =============================================================================

/// Parallax speed of the first (slowest) shape.
const PARALLAX_BASE_SPEED: f32 = 0.5;

/// Extra parallax speed per shape index.
const PARALLAX_SPEED_STEP: f32 = 0.1;

/// Shape rotation in degrees per scrolled pixel.
const PARALLAX_ROTATION: f32 = 0.1;

// =============================================================================
// Bounce Constants
// =============================================================================

/// Peak height of one bounce in pixels.
const BOUNCE_AMPLITUDE: f32 = 12.0;

/// Length of one bounce.
const BOUNCE_PERIOD_MS: u64 = 1000;

// =============================================================================
// Color Fade Constants
// =============================================================================

/// Fraction of the remaining distance covered per frame.
/// At 0.15 a full black-to-white fade takes about 20 frames.
const COLOR_LERP_SPEED: f32 = 0.15;

/// Manhattan distance at which a fade snaps to its target.
const COLOR_SNAP_THRESHOLD: i32 = 2;

// =============================================================================
// Parallax
// =============================================================================

/// Vertical translation of floating shape `index` for a scroll offset.
#[inline]
pub fn parallax_offset(
    scrolled: f32,
    index: usize,
) -> f32 {
    let speed = PARALLAX_BASE_SPEED + index as f32 * PARALLAX_SPEED_STEP;
    scrolled * speed
}

/// Rotation of every floating shape in degrees for a scroll offset.
#[inline]
pub fn parallax_rotation(scrolled: f32) -> f32 { scrolled * PARALLAX_ROTATION }

// =============================================================================
// Bounce
// =============================================================================

/// Upward offset of the gift icon `elapsed_ms` into the bounce.
///
/// Returns a non-positive pixel offset (screen y grows downward). Each bounce
/// is half a sine period, so the icon touches down between bounces.
#[inline]
pub fn bounce_offset(elapsed_ms: u64) -> i32 {
    let phase = (elapsed_ms % BOUNCE_PERIOD_MS) as f32 / BOUNCE_PERIOD_MS as f32;
    let height = (phase * PI).sin() * BOUNCE_AMPLITUDE;
    -(height as i32)
}

// =============================================================================
// Easing
// =============================================================================

/// Cubic ease-out on `t` clamped to 0..=1.
#[inline]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Slide-in distance for a card that starts `from_px` below its resting place.
#[inline]
pub fn slide_offset(
    progress: f32,
    from_px: f32,
) -> i32 {
    ((1.0 - progress.clamp(0.0, 1.0)) * from_px) as i32
}

/// Inset in pixels for a pop-in that starts at `start_scale` of full size.
///
/// A rectangle of `size` pixels drawn inset by this amount on each side looks
/// scaled by `start_scale` at progress 0 and full size at progress 1.
#[inline]
pub fn pop_inset(
    progress: f32,
    size: u32,
    start_scale: f32,
) -> u32 {
    let scale = start_scale + (1.0 - start_scale) * progress.clamp(0.0, 1.0);
    ((1.0 - scale) * size as f32 / 2.0) as u32
}

// =============================================================================
// Color Fade State
// =============================================================================

/// One color easing toward a target over successive frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorFade {
    current: Rgb565,
    target: Rgb565,
}

impl ColorFade {
    /// Fade resting at `color`.
    pub const fn new(color: Rgb565) -> Self {
        Self {
            current: color,
            target: color,
        }
    }

    /// Set a new target. Returns `true` if it differs from the previous one.
    pub fn set_target(
        &mut self,
        target: Rgb565,
    ) -> bool {
        if self.target == target {
            false
        } else {
            self.target = target;
            true
        }
    }

    #[inline]
    pub const fn current(&self) -> Rgb565 { self.current }

    #[inline]
    pub fn is_settled(&self) -> bool { self.current == self.target }

    /// Advance one frame. Returns `true` if the color changed.
    pub fn update(&mut self) -> bool {
        if self.is_settled() {
            return false;
        }
        let next = lerp_rgb565(self.current, self.target, COLOR_LERP_SPEED);
        self.current = if colors_close_enough(next, self.target) { self.target } else { next };
        true
    }
}

// =============================================================================
// Color Interpolation Helpers
// =============================================================================

/// Linear interpolation between two Rgb565 colors.
///
/// Integer math with 8-bit fixed point. When `(delta * t_fixed) >> 8`
/// truncates to zero the step is forced to ±1, so every call with `t > 0`
/// moves at least one unit or the colors are already equal.
pub fn lerp_rgb565(
    from: Rgb565,
    to: Rgb565,
    t: f32,
) -> Rgb565 {
    let (from_r, from_g, from_b) = channels(from);
    let (to_r, to_g, to_b) = channels(to);

    let t_fixed = (t.clamp(0.0, 1.0) * 256.0) as i32;

    let compute_step = |delta: i32| -> i32 {
        if delta == 0 || t_fixed == 0 {
            0
        } else {
            let step = (delta * t_fixed) >> 8;
            if step == 0 { delta.signum() } else { step }
        }
    };

    let r = (from_r + compute_step(to_r - from_r)).clamp(0, 31);
    let g = (from_g + compute_step(to_g - from_g)).clamp(0, 63);
    let b = (from_b + compute_step(to_b - from_b)).clamp(0, 31);

    Rgb565::new(r as u8, g as u8, b as u8)
}

/// Whether two colors are within the snap threshold (Manhattan distance).
pub fn colors_close_enough(
    a: Rgb565,
    b: Rgb565,
) -> bool {
    let (a_r, a_g, a_b) = channels(a);
    let (b_r, b_g, b_b) = channels(b);

    let diff = (a_r - b_r).abs() + (a_g - b_g).abs() + (a_b - b_b).abs();
    diff <= COLOR_SNAP_THRESHOLD
}

/// Raw 5-6-5 channels.
#[inline]
fn channels(color: Rgb565) -> (i32, i32, i32) {
    let raw = color.into_storage();
    (
        i32::from((raw >> 11) & 0x1F),
        i32::from((raw >> 5) & 0x3F),
        i32::from(raw & 0x1F),
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, ROSE, WHITE};

    // -------------------------------------------------------------------------
    // Parallax Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_parallax_speeds_increase_with_index() {
        assert_eq!(parallax_offset(100.0, 0), 50.0);
        assert!((parallax_offset(100.0, 1) - 60.0).abs() < 1e-4);
        assert!((parallax_offset(100.0, 3) - 80.0).abs() < 1e-4);
        assert_eq!(parallax_offset(0.0, 5), 0.0, "No scroll, no offset");
    }

    #[test]
    fn test_parallax_rotation() {
        assert!((parallax_rotation(450.0) - 45.0).abs() < 1e-4);
    }

    // -------------------------------------------------------------------------
    // Bounce Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_bounce_touches_down_between_bounces() {
        assert_eq!(bounce_offset(0), 0);
        assert_eq!(bounce_offset(1000), 0);
        assert_eq!(bounce_offset(2000), 0);
    }

    #[test]
    fn test_bounce_peaks_mid_period() {
        assert_eq!(bounce_offset(500), -(BOUNCE_AMPLITUDE as i32));
        assert_eq!(bounce_offset(1500), -(BOUNCE_AMPLITUDE as i32));
    }

    #[test]
    fn test_bounce_bounded() {
        for ms in (0..3000).step_by(7) {
            let offset = bounce_offset(ms);
            assert!(
                offset <= 0 && offset >= -(BOUNCE_AMPLITUDE as i32),
                "{ms}ms: offset {offset} out of range"
            );
        }
    }

    // -------------------------------------------------------------------------
    // Easing Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_ease_out_endpoints() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert_eq!(ease_out(-1.0), 0.0, "Clamped below");
        assert_eq!(ease_out(2.0), 1.0, "Clamped above");
    }

    #[test]
    fn test_ease_out_is_front_loaded() {
        assert!(ease_out(0.5) > 0.5);
    }

    #[test]
    fn test_slide_offset() {
        assert_eq!(slide_offset(0.0, 30.0), 30);
        assert_eq!(slide_offset(1.0, 30.0), 0);
    }

    #[test]
    fn test_pop_inset() {
        assert_eq!(pop_inset(0.0, 200, 0.9), 10, "90% scale leaves 5% per side");
        assert_eq!(pop_inset(1.0, 200, 0.9), 0);
    }

    // -------------------------------------------------------------------------
    // Color Interpolation Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_lerp_rgb565_same_color() {
        assert_eq!(lerp_rgb565(ROSE, ROSE, 0.5), ROSE, "Lerping a color to itself is a no-op");
    }

    #[test]
    fn test_lerp_rgb565_endpoints() {
        assert_eq!(lerp_rgb565(BLACK, WHITE, 0.0), BLACK, "At t=0, should return 'from' color");
        assert_eq!(lerp_rgb565(BLACK, WHITE, 1.0), WHITE, "At t=1, should return 'to' color");
    }

    #[test]
    fn test_lerp_rgb565_minimum_step() {
        let from = Rgb565::new(10, 10, 10);
        let to = Rgb565::new(11, 10, 10);
        assert_eq!(lerp_rgb565(from, to, 0.15), to, "Small deltas still move one unit");
    }

    #[test]
    fn test_colors_close_enough() {
        assert!(colors_close_enough(ROSE, ROSE));
        assert!(!colors_close_enough(BLACK, WHITE));
        assert!(colors_close_enough(Rgb565::new(15, 32, 15), Rgb565::new(15, 33, 15)));
        assert!(!colors_close_enough(Rgb565::new(15, 32, 15), Rgb565::new(16, 33, 16)));
    }

    // -------------------------------------------------------------------------
    // ColorFade Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_color_fade_converges() {
        let mut fade = ColorFade::new(BLACK);
        assert!(fade.set_target(WHITE));
        assert!(!fade.set_target(WHITE), "Same target is not a new fade");

        let mut frames = 0;
        while !fade.is_settled() && frames < 150 {
            fade.update();
            frames += 1;
        }
        assert_eq!(fade.current(), WHITE, "Fade should land exactly on target");
        assert!(frames < 150, "Should converge within 150 frames, took {frames}");
        assert!(!fade.update(), "Settled fade reports no change");
    }
}
