//! Widget components shared by the screens.
//!
//! - [`primitives`]: Panels, buttons, multi-line text and background fades
//! - [`controls`]: Music toggle and gift icon
//! - [`shapes`]: Parallax floating shapes
//! - [`video`]: Video panel with play overlay
//!
//! Every widget is generic over `DrawTarget<Color = Rgb565>`, so the same
//! code draws to the simulator window and to a `MockDisplay` in tests.
//! Draw errors are ignored with `.ok()`.

mod controls;
mod primitives;
mod shapes;
mod video;

pub use controls::{TOGGLE_POS, draw_gift, draw_music_toggle};
pub use primitives::{draw_button, draw_lines, draw_panel, fade_color, on_screen};
pub use shapes::draw_floating_shapes;
pub use video::draw_video_panel;
