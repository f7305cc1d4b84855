//! Frame composition.
//!
//! Every frame is redrawn from scratch in this order:
//!
//! | Layer | Source |
//! |-------|--------|
//! | Background | [`BACKGROUND`] fill |
//! | Floating shapes | Parallax from the active screen's scroll |
//! | Active screen | [`crate::screens`] |
//! | Music toggle | Glow fades between lit and unlit |
//!
//! During a transition no screen is active, so only the background, the
//! shapes and the toggle are drawn.
//!
//! The one piece of state that lives outside [`GreetingApp`] is the toggle
//! glow: it eases per rendered frame, not per timer tick, so it belongs to
//! the renderer.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::animations::ColorFade;
use crate::app::GreetingApp;
use crate::colors::{BACKGROUND, ROSE, TOGGLE_OFF};
use crate::screen::Screen;
use crate::screens::{draw_gallery, draw_message, draw_opening};
use crate::widgets::{draw_floating_shapes, draw_music_toggle};

/// Per-frame renderer state.
#[derive(Clone, Copy, Debug)]
pub struct RenderState {
    toggle_glow: ColorFade,
}

impl RenderState {
    pub const fn new() -> Self {
        Self {
            toggle_glow: ColorFade::new(TOGGLE_OFF),
        }
    }

    /// Current toggle color.
    #[inline]
    pub const fn toggle_color(&self) -> Rgb565 { self.toggle_glow.current() }

    /// Point the glow at the music state and advance one frame.
    pub fn update(
        &mut self,
        lit: bool,
    ) {
        self.toggle_glow.set_target(if lit { ROSE } else { TOGGLE_OFF });
        self.toggle_glow.update();
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw one full frame for `app`.
pub fn draw_frame<D>(
    display: &mut D,
    app: &GreetingApp,
    state: &mut RenderState,
    date_line: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BACKGROUND).ok();
    draw_floating_shapes(display, app.parallax_scroll());

    match app.active() {
        Some(Screen::Opening) => draw_opening(display, app, date_line),
        Some(Screen::Gallery) => draw_gallery(display, app),
        Some(Screen::Message) => draw_message(display, app),
        None => {}
    }

    state.update(app.music().is_lit());
    draw_music_toggle(display, state.toggle_color(), app.music().is_lit());
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;
    use crate::app::InputEvent;
    use crate::config::GreetingConfig;
    use crate::error::PlaybackError;
    use crate::media::{AudioBackend, VideoBackend};

    struct Accept;

    impl AudioBackend for Accept {
        fn play(&mut self) -> Result<(), PlaybackError> { Ok(()) }

        fn pause(&mut self) {}
    }

    impl VideoBackend for Accept {
        fn play(&mut self) {}
    }

    fn full_display() -> MockDisplay<Rgb565> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        display
    }

    #[test]
    fn test_toggle_glow_fades_in() {
        let mut state = RenderState::new();
        assert_eq!(state.toggle_color(), TOGGLE_OFF);

        state.update(true);
        assert_ne!(state.toggle_color(), TOGGLE_OFF, "Glow should start moving");
        assert_ne!(state.toggle_color(), ROSE, "Glow should not jump");

        for _ in 0..100 {
            state.update(true);
        }
        assert_eq!(state.toggle_color(), ROSE, "Glow should settle on rose");
    }

    #[test]
    fn test_draw_every_screen() {
        let mut app = GreetingApp::new(GreetingConfig::default());
        let mut state = RenderState::new();
        let mut display = full_display();
        draw_frame(&mut display, &app, &mut state, "15 Oktober 2026");

        app.handle_input(InputEvent::StartClicked, 0, &mut Accept, &mut Accept);
        let mut display = full_display();
        draw_frame(&mut display, &app, &mut state, "");

        for now in (0..=2000).step_by(16) {
            app.advance(now);
        }
        let mut display = full_display();
        draw_frame(&mut display, &app, &mut state, "");

        app.handle_input(InputEvent::MessageClicked, 2000, &mut Accept, &mut Accept);
        for now in (2000..=6000).step_by(16) {
            app.advance(now);
        }
        let mut display = full_display();
        draw_frame(&mut display, &app, &mut state, "");
        assert_eq!(app.active(), Some(Screen::Message));
    }
}
