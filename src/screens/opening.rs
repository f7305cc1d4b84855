//! Opening screen: headline, recipient, date line, start button and gift.
//!
//! # Visual Layout
//!
//! ```text
//! ┌────────────────────────────────────┐
//! │                                (♪) │  Music toggle (floating)
//! │          Happy Birthday            │  ProFont 24, rose
//! │             Sahabatku              │  10x20, white
//! │  A little something, just for you  │  muted
//! │          15 Oktober 2026           │  muted
//! │                                    │
//! │             [ Open ]               │  Start button
//! │ [gift]                             │  Bounces after 3 clicks
//! └────────────────────────────────────┘
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;

use crate::app::GreetingApp;
use crate::colors::ROSE;
use crate::config::CENTER_X;
use crate::styles::{BUTTON_STYLE, CENTERED, HEADLINE_STYLE, MUTED_STYLE, TITLE_STYLE};
use crate::widgets::{draw_button, draw_gift};

// =============================================================================
// Layout Constants
// =============================================================================

const HEADLINE_Y: i32 = 66;
const RECIPIENT_Y: i32 = 98;
const SUBTITLE_Y: i32 = 124;
const DATE_Y: i32 = 142;

/// Start button center.
pub const START_CENTER: Point = Point::new(CENTER_X, 184);

/// Start button size.
pub const START_SIZE: Size = Size::new(96, 26);

const START_LABEL: &str = "Open";

/// Gift icon resting center.
pub const GIFT_CENTER: Point = Point::new(36, 206);

/// Gift icon hit box half-size.
const GIFT_HIT_HALF: i32 = 16;

/// Start button hit area.
pub fn start_area() -> Rectangle {
    Rectangle::with_center(START_CENTER, START_SIZE)
}

/// Gift icon hit area (at rest; the bounce is cosmetic).
pub fn gift_area() -> Rectangle {
    Rectangle::with_center(GIFT_CENTER, Size::new_equal(2 * GIFT_HIT_HALF as u32))
}

/// Draw the opening screen.
pub fn draw_opening<D>(
    display: &mut D,
    app: &GreetingApp,
    date_line: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let content = app.content();

    Text::with_text_style(&content.headline, Point::new(CENTER_X, HEADLINE_Y), HEADLINE_STYLE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(&content.recipient, Point::new(CENTER_X, RECIPIENT_Y), TITLE_STYLE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(&content.subtitle, Point::new(CENTER_X, SUBTITLE_Y), MUTED_STYLE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(date_line, Point::new(CENTER_X, DATE_Y), MUTED_STYLE, CENTERED)
        .draw(display)
        .ok();

    draw_button(display, START_CENTER, START_SIZE, START_LABEL, ROSE, BUTTON_STYLE);
    draw_gift(display, GIFT_CENTER, app.easter_egg().offset(app.now_ms()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

    #[test]
    fn test_hit_areas_on_screen_and_disjoint() {
        let screen = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        for area in [start_area(), gift_area()] {
            assert!(screen.contains(area.top_left), "{area:?} starts off screen");
            assert!(screen.contains(area.bottom_right().unwrap_or(area.top_left)));
        }
        assert!(start_area().intersection(&gift_area()).is_zero_sized(), "Start and gift overlap");
    }
}
