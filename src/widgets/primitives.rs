//! Low-level drawing helpers shared by the screens.
//!
//! Opacity does not exist on an RGB565 panel. A "fading" element is drawn
//! in its color blended toward the background by [`fade_color`].

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::{Text, TextStyle};

use crate::animations::lerp_rgb565;
use crate::colors::BACKGROUND;
use crate::styles::CENTERED;

/// Corner radius of cards, panels and buttons.
pub const CORNER_RADIUS: u32 = 6;

/// `color` at `opacity` (0..=1) over the page background.
#[inline]
pub fn fade_color(
    color: Rgb565,
    opacity: f32,
) -> Rgb565 {
    lerp_rgb565(BACKGROUND, color, opacity)
}

/// Filled rounded rectangle.
pub fn draw_panel<D>(
    display: &mut D,
    area: Rectangle,
    fill: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    RoundedRectangle::with_equal_corners(area, Size::new_equal(CORNER_RADIUS))
        .into_styled(PrimitiveStyle::with_fill(fill))
        .draw(display)
        .ok();
}

/// Pill button with a centered label.
pub fn draw_button<D>(
    display: &mut D,
    center: Point,
    size: Size,
    label: &str,
    fill: Rgb565,
    text_style: MonoTextStyle<'_, Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let top_left = center - Point::new(size.width as i32 / 2, size.height as i32 / 2);
    RoundedRectangle::with_equal_corners(Rectangle::new(top_left, size), Size::new_equal(size.height / 2))
        .into_styled(PrimitiveStyle::with_fill(fill))
        .draw(display)
        .ok();
    let baseline = center + Point::new(0, text_style.font.character_size.height as i32 / 3);
    Text::with_text_style(label, baseline, text_style, CENTERED)
        .draw(display)
        .ok();
}

/// Draw `lines` top-down starting at baseline `origin`.
pub fn draw_lines<'a, D>(
    display: &mut D,
    lines: impl IntoIterator<Item = &'a str>,
    origin: Point,
    line_height: i32,
    style: MonoTextStyle<'_, Rgb565>,
    alignment: TextStyle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for (i, line) in lines.into_iter().enumerate() {
        let position = origin + Point::new(0, i as i32 * line_height);
        Text::with_text_style(line, position, style, alignment)
            .draw(display)
            .ok();
    }
}

/// Whether a content-space span intersects the display after scrolling.
#[inline]
pub fn on_screen(
    top: i32,
    height: u32,
    display_height: u32,
) -> bool {
    top + height as i32 > 0 && top < display_height as i32
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;
    use crate::colors::ROSE;

    #[test]
    fn test_fade_color_endpoints() {
        assert_eq!(fade_color(ROSE, 0.0), BACKGROUND, "Fully transparent is the background");
        assert_eq!(fade_color(ROSE, 1.0), ROSE);
    }

    #[test]
    fn test_on_screen() {
        assert!(on_screen(0, 10, 240));
        assert!(on_screen(-5, 10, 240), "Partially scrolled off the top");
        assert!(!on_screen(-10, 10, 240));
        assert!(!on_screen(240, 10, 240));
    }

    #[test]
    fn test_draw_panel_stays_in_bounds() {
        let mut display = MockDisplay::<Rgb565>::new();
        draw_panel(&mut display, Rectangle::new(Point::new(4, 4), Size::new(40, 20)), ROSE);
        assert_eq!(display.affected_area(), Rectangle::new(Point::new(4, 4), Size::new(40, 20)));
    }
}
