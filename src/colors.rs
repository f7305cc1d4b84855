//! Greeting card palette.
//!
//! RGB565 channels are 5-6-5 bits: red and blue 0-31, green 0-63.
//! Standard colors come from the `RgbColor` trait constants.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors
// =============================================================================

pub const BLACK: Rgb565 = Rgb565::BLACK;

pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Palette
// =============================================================================

/// Deep plum page background.
pub const BACKGROUND: Rgb565 = Rgb565::new(6, 4, 10);

/// Slightly lighter plum for cards and panels.
pub const SURFACE: Rgb565 = Rgb565::new(10, 10, 14);

/// Primary accent (buttons, headline).
pub const ROSE: Rgb565 = Rgb565::new(31, 24, 18);

/// Secondary accent (captions, footer).
pub const GOLD: Rgb565 = Rgb565::new(31, 50, 8);

/// Muted text (date line, hints).
pub const MUTED: Rgb565 = Rgb565::new(18, 36, 20);

/// Photo placeholder fill.
pub const PHOTO: Rgb565 = Rgb565::new(14, 26, 22);

/// Unlit music toggle.
pub const TOGGLE_OFF: Rgb565 = Rgb565::new(12, 24, 14);

/// Floating shape tints, cycled by index.
pub const SHAPE_TINTS: [Rgb565; 4] = [
    Rgb565::new(20, 12, 22),
    Rgb565::new(14, 20, 26),
    Rgb565::new(24, 22, 12),
    Rgb565::new(22, 14, 16),
];
