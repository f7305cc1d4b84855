//! Floating controls: the music toggle and the gift icon.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};

use crate::colors::{BACKGROUND, GOLD, ROSE};
use crate::config::SCREEN_WIDTH;

/// Music toggle diameter.
const TOGGLE_SIZE: u32 = 24;

/// Music toggle top-left (top-right corner of the display).
pub const TOGGLE_POS: Point = Point::new(SCREEN_WIDTH as i32 - TOGGLE_SIZE as i32 - 8, 8);

/// Gift icon box size.
const GIFT_SIZE: u32 = 22;

/// Draw the music toggle in `color` (faded between lit and unlit).
///
/// A lit toggle shows a note; an unlit one shows the note struck through.
pub fn draw_music_toggle<D>(
    display: &mut D,
    color: Rgb565,
    lit: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::new(TOGGLE_POS, TOGGLE_SIZE)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();

    // Eighth note: head, stem, flag.
    let center = TOGGLE_POS + Point::new(TOGGLE_SIZE as i32 / 2, TOGGLE_SIZE as i32 / 2);
    let note = PrimitiveStyle::with_fill(BACKGROUND);
    let stroke = PrimitiveStyle::with_stroke(BACKGROUND, 2);
    Circle::with_center(center + Point::new(-2, 4), 6)
        .into_styled(note)
        .draw(display)
        .ok();
    Line::new(center + Point::new(1, 4), center + Point::new(1, -6))
        .into_styled(stroke)
        .draw(display)
        .ok();
    Line::new(center + Point::new(1, -6), center + Point::new(5, -3))
        .into_styled(stroke)
        .draw(display)
        .ok();

    if !lit {
        Line::new(center + Point::new(-7, 7), center + Point::new(7, -7))
            .into_styled(stroke)
            .draw(display)
            .ok();
    }
}

/// Draw the gift icon centered at `center`, lifted by `bounce` pixels.
pub fn draw_gift<D>(
    display: &mut D,
    center: Point,
    bounce: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let center = center + Point::new(0, bounce);
    let half = GIFT_SIZE as i32 / 2;
    let body = Rectangle::new(center - Point::new(half, half - 4), Size::new(GIFT_SIZE, GIFT_SIZE - 4));
    body.into_styled(PrimitiveStyle::with_fill(ROSE))
        .draw(display)
        .ok();

    let ribbon = PrimitiveStyle::with_stroke(GOLD, 3);
    Line::new(center - Point::new(0, half - 4), center + Point::new(0, half))
        .into_styled(ribbon)
        .draw(display)
        .ok();
    Line::new(center - Point::new(half, -3), center + Point::new(half - 1, 3))
        .into_styled(ribbon)
        .draw(display)
        .ok();

    // Bow.
    for dx in [-4, 4] {
        Circle::with_center(center + Point::new(dx, -half + 2), 7)
            .into_styled(PrimitiveStyle::with_stroke(GOLD, 2))
            .draw(display)
            .ok();
    }
}
