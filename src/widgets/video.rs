//! Video panel with the play-button overlay.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle, Triangle};
use embedded_graphics::text::Text;

use super::primitives::{draw_panel, fade_color};
use crate::colors::{BLACK, GOLD, PHOTO, WHITE};
use crate::config::{CARD_MARGIN_X, CARD_WIDTH, VIDEO_SECTION_HEIGHT};
use crate::styles::{BODY_FONT, CENTERED};

/// Space above the video frame for the caption.
const CAPTION_HEIGHT: i32 = 20;

/// Play button diameter.
const PLAY_SIZE: u32 = 36;

/// Draw the video section with its top edge at screen y `top`.
///
/// `opacity` is the section's reveal progress. The play button is only drawn
/// while `button_visible`.
pub fn draw_video_panel<D>(
    display: &mut D,
    top: i32,
    caption: &str,
    opacity: f32,
    button_visible: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if opacity <= 0.0 {
        return;
    }

    let caption_style = MonoTextStyle::new(BODY_FONT, fade_color(GOLD, opacity));
    Text::with_text_style(
        caption,
        Point::new(CARD_MARGIN_X + CARD_WIDTH as i32 / 2, top + 12),
        caption_style,
        CENTERED,
    )
    .draw(display)
    .ok();

    let frame = Rectangle::new(
        Point::new(CARD_MARGIN_X, top + CAPTION_HEIGHT),
        Size::new(CARD_WIDTH, VIDEO_SECTION_HEIGHT - CAPTION_HEIGHT as u32),
    );
    draw_panel(display, frame, fade_color(BLACK, opacity));

    if !button_visible {
        // Playing: a still frame stands in for video content.
        draw_panel(display, frame.offset(-6), fade_color(PHOTO, opacity));
        return;
    }

    let center = frame.center();
    Circle::with_center(center, PLAY_SIZE)
        .into_styled(PrimitiveStyle::with_fill(fade_color(WHITE, opacity)))
        .draw(display)
        .ok();
    Triangle::new(
        center + Point::new(-5, -9),
        center + Point::new(-5, 9),
        center + Point::new(10, 0),
    )
    .into_styled(PrimitiveStyle::with_fill(fade_color(BLACK, opacity)))
    .draw(display)
    .ok();
}
