//! Error types.
//!
//! Only two things can fail: loading the config at startup, and asking the
//! audio backend to start playback. The second is never propagated; the
//! music player logs it and carries on.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Startup errors surfaced by the simulator binary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config")]
    ConfigParse(#[source] toml::de::Error),
}

/// Audio playback could not be started.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PlaybackError {
    /// The host refused playback, e.g. autoplay without a user gesture.
    #[error("playback rejected: {reason}")]
    Rejected { reason: String },

    /// No audio device or track is available.
    #[error("audio output unavailable")]
    Unavailable,
}
