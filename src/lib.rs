//! Interactive three-screen greeting card.
//!
//! A visitor moves through an opening screen, an auto-scrolling photo
//! gallery and a typed message, with background music, a video panel, a
//! parallax backdrop and a gift-box easter egg.
//!
//! The library has no clock and no window. [`app::GreetingApp`] owns every
//! piece of state and is driven by `advance(now_ms)` and `handle_input`; the
//! `greeting-sim` binary feeds it wall-clock time and SDL2 events and draws
//! it into an `embedded-graphics` simulator window at 320x240.
//!
//! # Modules
//!
//! - [`app`]: Screen controller, input handling, timer dispatch
//! - [`screen`]: The three screens and their order
//! - [`timers`]: Keyed timer registry (one live timer per kind)
//! - [`viewport`]: Scroll regions behind the [`viewport::ViewportMetrics`] trait
//! - [`autoscroll`]: Constant-velocity looping scroll
//! - [`typing`]: Block-by-block typing sequencer and scroll follow
//! - [`layout`]: Message word wrap and gallery geometry
//! - [`gallery`]: Card and video reveal bookkeeping
//! - [`media`]: Music player and video overlay over backend traits
//! - [`easter_egg`]: Gift click counter and bounce
//! - [`date`]: Long-form date line in Indonesian or English
//! - [`config`]: Layout constants and the TOML greeting config
//! - [`error`]: Error types
//! - [`animations`], [`colors`], [`styles`], [`widgets`], [`screens`], [`render`]:
//!   Drawing
//! - [`profiling`]: Frame timing statistics

// Crate-level lints
#![allow(clippy::cast_possible_truncation)] // f32->i32 and u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32/u64->f32 in scroll and layout math
#![allow(clippy::cast_possible_wrap)] // u32->i32 is fine for screen-sized values
#![allow(clippy::cast_sign_loss)] // f32->u32 where the value is clamped non-negative
#![allow(clippy::similar_names)]

pub mod animations;
pub mod app;
pub mod autoscroll;
pub mod colors;
pub mod config;
pub mod date;
pub mod easter_egg;
pub mod error;
pub mod gallery;
pub mod layout;
pub mod media;
pub mod profiling;
pub mod render;
pub mod screen;
pub mod screens;
pub mod styles;
pub mod timers;
pub mod typing;
pub mod viewport;
pub mod widgets;

pub use app::{GreetingApp, InputEvent};
pub use config::GreetingConfig;
pub use error::{Error, PlaybackError};
pub use screen::Screen;
