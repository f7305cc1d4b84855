//! Screen renderers and pointer hit-testing.
//!
//! # Screens
//!
//! 1. **Opening** ([`opening`]): Headline, recipient, date line, start button, gift
//! 2. **Gallery** ([`gallery`]): Photo cards, video panel, "read message" button
//! 3. **Message** ([`message`]): Typed blocks with cursor and footer signature
//!
//! Renderers only read [`GreetingApp`]; every state change goes through
//! [`GreetingApp::handle_input`]. [`hit_test`] maps a pointer click to the
//! input event for whatever control is under it on the active screen.

mod gallery;
mod message;
mod opening;

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

pub use gallery::draw_gallery;
pub use message::{cursor_visible, draw_message};
pub use opening::draw_opening;

use crate::app::{GreetingApp, InputEvent};
use crate::screen::Screen;
use crate::widgets::TOGGLE_POS;

/// Music toggle hit box.
const TOGGLE_HIT: Size = Size::new_equal(28);

/// Control under `point` on the active screen, if any.
///
/// The music toggle floats above every screen; everything else belongs to
/// the active one. Nothing is hit during a transition.
pub fn hit_test(
    app: &GreetingApp,
    point: Point,
) -> Option<InputEvent> {
    if Rectangle::new(TOGGLE_POS - Point::new(2, 2), TOGGLE_HIT).contains(point) {
        return Some(InputEvent::MusicToggleClicked);
    }

    match app.active()? {
        Screen::Opening if opening::start_area().contains(point) => Some(InputEvent::StartClicked),
        Screen::Opening if opening::gift_area().contains(point) => Some(InputEvent::GiftClicked),
        Screen::Gallery if gallery::message_button_area(app).contains(point) => Some(InputEvent::MessageClicked),
        Screen::Gallery if app.video().button_visible() && gallery::video_area(app).contains(point) => {
            Some(InputEvent::VideoPlayClicked)
        }
        _ => None,
    }
}
