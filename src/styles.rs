//! Pre-computed text styles.
//!
//! `MonoTextStyle` and `TextStyle` constructors are const fn, so every fixed
//! style lives here as a `const` and renderers never rebuild them per frame.
//! Styles with a per-frame color (card and video fades) are built from
//! [`BODY_FONT`] instead.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::{BACKGROUND, GOLD, MUTED, ROSE, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text. Headline, buttons, captions.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Message blocks.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text. Message footer signature.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Body font (6x10). Message text and captions; wrapping assumes its 6px cell.
pub const BODY_FONT: &MonoFont = &FONT_6X10;

// =============================================================================
// Text Styles
// =============================================================================

pub const BODY_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

pub const MUTED_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, MUTED);

/// Button label on a rose fill.
pub const BUTTON_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, BACKGROUND);

/// Recipient name and section titles (10x20).
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

pub const HEADLINE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, ROSE);

/// Footer signature (`ProFont` 18pt).
pub const FOOTER_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, GOLD);
