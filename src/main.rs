//! Desktop simulator for the greeting card.
//!
//! # Controls
//!
//! | Input | Action |
//! |-------|--------|
//! | Enter | Start (opening screen) |
//! | M | Read message (gallery) |
//! | S | Music toggle |
//! | V | Play video (gallery) |
//! | P | Video paused |
//! | G | Gift click (opening screen) |
//! | Mouse move into the window | Pointer enters the active screen |
//! | Mouse button | Touch start, then whatever control is under the pointer |
//! | Mouse wheel | Scroll the active screen |
//! | Escape / close | Quit |
//!
//! Audio and video are simulated: the backends only log. Pass
//! `--autoplay-blocked` to have the first `play()` rejected the way a
//! browser rejects autoplay without a user gesture, or `--no-audio` to run
//! as if there were no output device.

use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use chrono::Local;
use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use greeting_card::config::{DEFAULT_SCALE, FRAME_TIME, METRICS_LOG_INTERVAL, SCREEN_HEIGHT, SCREEN_WIDTH};
use greeting_card::date::format_long_date;
use greeting_card::media::{AudioBackend, VideoBackend};
use greeting_card::profiling::FrameMetrics;
use greeting_card::render::{RenderState, draw_frame};
use greeting_card::screens::hit_test;
use greeting_card::{Error, GreetingApp, GreetingConfig, InputEvent, PlaybackError, Screen};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Pixels scrolled per mouse wheel step.
const WHEEL_STEP_PX: f32 = 24.0;

#[derive(Parser, Debug)]
#[command(name = "greeting-sim", version, about = "Greeting card simulator")]
struct Args {
    /// Greeting config (TOML). Built-in content is used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Window scale factor.
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    scale: u32,

    /// Reject the first audio play, like a browser autoplay policy.
    #[arg(long)]
    autoplay_blocked: bool,

    /// Run with no audio output; every play reports the device unavailable.
    #[arg(long)]
    no_audio: bool,

    /// Log filter, e.g. `debug` or `greeting_card=trace`. `RUST_LOG` wins if set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

// =============================================================================
// Simulated Media
// =============================================================================

/// Audio backend that only logs, optionally refusing the first play.
struct SimAudio {
    available: bool,
    block_next: bool,
}

impl AudioBackend for SimAudio {
    fn play(&mut self) -> Result<(), PlaybackError> {
        if !self.available {
            return Err(PlaybackError::Unavailable);
        }
        if self.block_next {
            self.block_next = false;
            return Err(PlaybackError::Rejected {
                reason: "autoplay blocked".into(),
            });
        }
        debug!("audio playing");
        Ok(())
    }

    fn pause(&mut self) {
        debug!("audio paused");
    }
}

/// Video backend that only logs.
struct SimVideo;

impl VideoBackend for SimVideo {
    fn play(&mut self) {
        debug!("video playing");
    }
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Map a key to an input event. The video panel reports its own play/pause
/// events in a browser; here P stands in for the pause.
fn key_event(keycode: Keycode) -> Option<InputEvent> {
    match keycode {
        Keycode::Return => Some(InputEvent::StartClicked),
        Keycode::M => Some(InputEvent::MessageClicked),
        Keycode::S => Some(InputEvent::MusicToggleClicked),
        Keycode::V => Some(InputEvent::VideoPlayClicked),
        Keycode::P => Some(InputEvent::VideoPaused),
        Keycode::G => Some(InputEvent::GiftClicked),
        _ => None,
    }
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let config = GreetingConfig::load_or_default(args.config.as_deref())?;
    let date_line = format_long_date(Local::now().date_naive(), config.content.date_locale);

    let mut app = GreetingApp::new(config);
    let mut audio = SimAudio {
        available: !args.no_audio,
        block_next: args.autoplay_blocked,
    };
    let mut video = SimVideo;

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(args.scale.max(1)).build();
    let mut window = Window::new("Greeting Card", &output_settings);

    let mut render_state = RenderState::new();
    let mut metrics = FrameMetrics::new();
    let mut last_metrics_log = Instant::now();

    // Screen the pointer was last reported entering.
    let mut pointer_in: Option<Screen> = None;

    let start = Instant::now();
    info!(date = %date_line, "greeting card started");

    // First frame so the window has content before the first event poll.
    draw_frame(&mut display, &app, &mut render_state, &date_line);
    window.update(&display);

    loop {
        let frame_start = Instant::now();
        let now = start.elapsed().as_millis() as u64;

        // ======================================================================
        // Input
        // ======================================================================

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => return Ok(()),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    if keycode == Keycode::Escape {
                        return Ok(());
                    }
                    if let Some(input) = key_event(keycode) {
                        app.handle_input(input, now, &mut audio, &mut video);
                    }
                }
                SimulatorEvent::MouseMove { .. } => {
                    if let Some(screen) = app.active().filter(|screen| pointer_in != Some(*screen)) {
                        pointer_in = Some(screen);
                        app.handle_input(InputEvent::PointerEnter(screen), now, &mut audio, &mut video);
                    }
                }
                SimulatorEvent::MouseButtonDown { point, .. } => {
                    if let Some(screen) = app.active() {
                        app.handle_input(InputEvent::TouchStart(screen), now, &mut audio, &mut video);
                    }
                    if let Some(input) = hit_test(&app, point) {
                        app.handle_input(input, now, &mut audio, &mut video);
                    }
                }
                SimulatorEvent::MouseWheel { scroll_delta, .. } => {
                    app.scroll_by(-(scroll_delta.y as f32) * WHEEL_STEP_PX, now);
                    app.handle_input(InputEvent::Scrolled, now, &mut audio, &mut video);
                }
                _ => {}
            }
        }

        // ======================================================================
        // Update and Render
        // ======================================================================

        app.advance(now);
        draw_frame(&mut display, &app, &mut render_state, &date_line);
        let render_time = frame_start.elapsed();

        window.update(&display);

        // ======================================================================
        // Frame Timing and Profiling
        // ======================================================================

        let pre_sleep = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(pre_sleep) {
            thread::sleep(remaining);
        }
        let sleep_time = frame_start.elapsed().saturating_sub(pre_sleep);
        metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);

        if last_metrics_log.elapsed() >= METRICS_LOG_INTERVAL {
            last_metrics_log = Instant::now();
            debug!(
                fps = f64::from(metrics.fps()),
                avg_us = metrics.frame_time_avg_us(),
                min_us = metrics.frame_time_min_us,
                max_us = metrics.frame_time_max_us,
                frames = metrics.total_frames,
                uptime = %metrics.uptime_string(),
                "frame metrics"
            );
        }
    }
}
