//! Application configuration: compile-time layout constants and the
//! runtime greeting config.
//!
//! # Layout Constants
//!
//! Fixed positions are pre-computed as `const` so screen renderers never
//! redo the same arithmetic per frame, e.g. `CENTER_X` instead of
//! `SCREEN_WIDTH / 2` at every call site.
//!
//! # Greeting Config
//!
//! Everything a visitor sees (names, captions, message blocks) and every
//! animation timing can be overridden from a TOML file:
//!
//! ```toml
//! [content]
//! recipient = "Nadia"
//! blocks = ["Happy birthday!", "Another lap around the sun."]
//!
//! [timing]
//! char_interval_ms = 40
//! ```
//!
//! Missing sections and fields fall back to [`Content::default`] and
//! [`Timing::default`].

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::date::DateLocale;
use crate::error::Error;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Simulator window scale factor.
pub const DEFAULT_SCALE: u32 = 2;

/// Target frame time (~60 FPS).
pub const FRAME_TIME: Duration = Duration::from_millis(16);

/// How often frame metrics are logged.
pub const METRICS_LOG_INTERVAL: Duration = Duration::from_secs(5);

// =============================================================================
// Gallery Layout
// =============================================================================

/// Top margin above the first photo card.
pub const GALLERY_TOP: i32 = 36;

/// Horizontal margin on each side of a card.
pub const CARD_MARGIN_X: i32 = 40;

/// Card width (screen minus both margins).
pub const CARD_WIDTH: u32 = SCREEN_WIDTH - 2 * CARD_MARGIN_X as u32;

/// Card height including the caption strip.
pub const CARD_HEIGHT: u32 = 150;

/// Vertical gap between cards.
pub const CARD_GAP: i32 = 16;

/// Height of the video section below the cards.
pub const VIDEO_SECTION_HEIGHT: u32 = 170;

/// Height of the "read message" button area at the end of the gallery.
pub const GALLERY_FOOTER_HEIGHT: u32 = 60;

// =============================================================================
// Message Layout
// =============================================================================

/// Top of the message card in content coordinates.
pub const MESSAGE_TOP: i32 = 24;

/// Left edge of message text.
pub const MESSAGE_TEXT_X: i32 = 28;

/// Usable message text width in pixels.
pub const MESSAGE_TEXT_WIDTH: u32 = SCREEN_WIDTH - 2 * MESSAGE_TEXT_X as u32;

/// Line height for message text (`FONT_6X10` plus leading).
pub const MESSAGE_LINE_HEIGHT: u32 = 13;

/// Spacing between consecutive text blocks.
pub const MESSAGE_BLOCK_GAP: u32 = 10;

/// Space reserved below the last block for the footer.
pub const MESSAGE_FOOTER_HEIGHT: u32 = 48;

// =============================================================================
// Timing Defaults
// =============================================================================

/// Delay between deactivating one screen and activating the next.
pub const TRANSITION_DELAY_MS: u64 = 100;

/// Stagger between consecutive photo card reveals.
pub const CARD_STAGGER_MS: u64 = 200;

/// Typing speed: one character per tick.
pub const CHAR_INTERVAL_MS: u64 = 50;

/// Pause after a block completes before the next one starts.
pub const BLOCK_PAUSE_MS: u64 = 500;

/// Auto-scroll tick (~60 FPS).
pub const SCROLL_TICK_MS: u64 = 16;

/// Auto-scroll velocity in pixels per tick.
pub const SCROLL_SPEED: f32 = 0.5;

/// Scroll-follow triggers once the typed block is this close to the visible bottom.
pub const FOLLOW_TRIGGER_PX: f32 = 50.0;

/// Scroll-follow leaves this much room below the typed block.
pub const FOLLOW_HEADROOM_PX: f32 = 100.0;

/// Clicks on the gift icon needed to trigger the bounce.
pub const EASTER_EGG_CLICKS: u8 = 3;

/// Bounce animation length (3 bounces of 1s).
pub const EASTER_EGG_DURATION_MS: u64 = 3000;

/// Card fade/slide-in duration.
pub const CARD_FADE_MS: u64 = 600;

/// Message card pop-in duration.
pub const MESSAGE_POP_MS: u64 = 500;

// =============================================================================
// Runtime Config
// =============================================================================

/// Animation timings. Defaults match the constants above.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Timing {
    pub transition_delay_ms: u64,
    pub card_stagger_ms: u64,
    pub char_interval_ms: u64,
    pub block_pause_ms: u64,
    pub scroll_tick_ms: u64,
    pub scroll_speed: f32,
    pub follow_trigger_px: f32,
    pub follow_headroom_px: f32,
    pub easter_egg_clicks: u8,
    pub easter_egg_duration_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            transition_delay_ms: TRANSITION_DELAY_MS,
            card_stagger_ms: CARD_STAGGER_MS,
            char_interval_ms: CHAR_INTERVAL_MS,
            block_pause_ms: BLOCK_PAUSE_MS,
            scroll_tick_ms: SCROLL_TICK_MS,
            scroll_speed: SCROLL_SPEED,
            follow_trigger_px: FOLLOW_TRIGGER_PX,
            follow_headroom_px: FOLLOW_HEADROOM_PX,
            easter_egg_clicks: EASTER_EGG_CLICKS,
            easter_egg_duration_ms: EASTER_EGG_DURATION_MS,
        }
    }
}

/// Text shown on the three screens.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Content {
    /// Name on the opening screen.
    pub recipient: String,
    /// Opening screen headline.
    pub headline: String,
    /// Line under the headline.
    pub subtitle: String,
    /// One caption per photo card; the card count follows this list.
    pub captions: Vec<String>,
    /// Caption above the video panel.
    pub video_caption: String,
    /// Message blocks revealed by the typing effect, in order.
    pub blocks: Vec<String>,
    /// Signature shown once every block has been typed.
    pub footer: String,
    /// Locale for the date line on the opening screen.
    pub date_locale: DateLocale,
}

impl Default for Content {
    fn default() -> Self {
        Self {
            recipient: "Sahabatku".into(),
            headline: "Happy Birthday".into(),
            subtitle: "A little something, just for you".into(),
            captions: vec![
                "The first trip".into(),
                "That rainy afternoon".into(),
                "Cake disaster 2024".into(),
                "Still laughing".into(),
            ],
            video_caption: "A message from all of us".into(),
            blocks: vec![
                "Another year, another lap around the sun.".into(),
                "Thank you for every late-night talk, every bad joke and every good day.".into(),
                "May this year be kind to you, and may you keep being kind to it.".into(),
                "Happy birthday!".into(),
            ],
            footer: "With love, always".into(),
            date_locale: DateLocale::default(),
        }
    }
}

/// Complete runtime configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct GreetingConfig {
    pub content: Content,
    pub timing: Timing,
}

impl GreetingConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        toml::from_str(text).map_err(Error::ConfigParse)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(
            path = %path.display(),
            cards = config.content.captions.len(),
            blocks = config.content.blocks.len(),
            "loaded greeting config"
        );
        Ok(config)
    }

    /// Load `path` if given, otherwise use the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, Error> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
