//! Frame timing statistics for the simulator loop.
//!
//! # Usage
//!
//! ```ignore
//! let mut metrics = FrameMetrics::new();
//!
//! // In main loop:
//! let frame_start = Instant::now();
//! // ... advance + render ...
//! let render_time = frame_start.elapsed();
//! // ... sleep ...
//! metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
//! ```
//!
//! The loop logs a summary at `debug` level every
//! [`METRICS_LOG_INTERVAL`](crate::config::METRICS_LOG_INTERVAL).

use core::fmt::Write;
use std::time::{Duration, Instant};

use heapless::String;

/// Frame timing statistics, updated every frame.
#[derive(Debug)]
pub struct FrameMetrics {
    /// Total frame time (render + sleep + overhead)
    pub frame_time_us: u32,
    /// Time spent advancing state and drawing
    pub render_time_us: u32,
    /// Time spent sleeping (rate limiting)
    pub sleep_time_us: u32,

    pub frame_time_min_us: u32,
    pub frame_time_max_us: u32,
    frame_time_avg_us: f32,

    /// Total frames rendered since startup
    pub total_frames: u64,

    start_time: Instant,
}

impl FrameMetrics {
    /// Create new metrics, starting the uptime timer.
    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            sleep_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            start_time: Instant::now(),
        }
    }

    /// Exponential moving average alpha.
    const EMA_ALPHA: f32 = 0.1;

    /// Record timing for one frame.
    pub fn record_frame(
        &mut self,
        total_time: Duration,
        render_time: Duration,
        sleep_time: Duration,
    ) {
        let total_us = total_time.as_micros() as u32;

        self.frame_time_us = total_us;
        self.render_time_us = render_time.as_micros() as u32;
        self.sleep_time_us = sleep_time.as_micros() as u32;

        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        if self.total_frames == 0 {
            self.frame_time_avg_us = total_us as f32;
        } else {
            self.frame_time_avg_us =
                Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us);
        }

        self.total_frames += 1;
    }

    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 { self.frame_time_avg_us as u32 }

    /// Frames per second implied by the average frame time.
    pub fn fps(&self) -> f32 {
        if self.frame_time_avg_us <= 0.0 {
            0.0
        } else {
            1_000_000.0 / self.frame_time_avg_us
        }
    }

    #[inline]
    pub fn uptime(&self) -> Duration { self.start_time.elapsed() }

    /// Uptime as `HH:MM:SS`.
    pub fn uptime_string(&self) -> String<12> {
        format_hms(self.uptime().as_secs())
    }
}

impl Default for FrameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Format whole seconds as `HH:MM:SS`.
fn format_hms(secs: u64) -> String<12> {
    let mut s = String::new();
    write!(s, "{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60).ok();
    s
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(
        metrics: &mut FrameMetrics,
        total_us: u64,
    ) {
        metrics.record_frame(
            Duration::from_micros(total_us),
            Duration::from_micros(total_us / 2),
            Duration::from_micros(total_us / 2),
        );
    }

    #[test]
    fn test_new_metrics_are_empty() {
        let metrics = FrameMetrics::new();
        assert_eq!(metrics.total_frames, 0);
        assert_eq!(metrics.frame_time_min_us, u32::MAX);
        assert_eq!(metrics.frame_time_max_us, 0);
        assert!(metrics.fps().abs() < f32::EPSILON, "No frames means no FPS");
    }

    #[test]
    fn test_record_frame() {
        let mut metrics = FrameMetrics::new();
        frame(&mut metrics, 20_000);

        assert_eq!(metrics.total_frames, 1);
        assert_eq!(metrics.frame_time_us, 20_000);
        assert_eq!(metrics.render_time_us, 10_000);
        assert_eq!(metrics.sleep_time_us, 10_000);
        assert_eq!(metrics.frame_time_avg_us(), 20_000, "First frame seeds the average");
        assert!((metrics.fps() - 50.0).abs() < 0.01);
    }

    #[test]
    fn test_frame_min_max() {
        let mut metrics = FrameMetrics::new();
        frame(&mut metrics, 20_000);
        frame(&mut metrics, 15_000);
        frame(&mut metrics, 25_000);

        assert_eq!(metrics.frame_time_min_us, 15_000);
        assert_eq!(metrics.frame_time_max_us, 25_000);
    }

    #[test]
    fn test_average_moves_toward_new_frames() {
        let mut metrics = FrameMetrics::new();
        frame(&mut metrics, 16_000);
        frame(&mut metrics, 26_000);
        assert_eq!(metrics.frame_time_avg_us(), 17_000);
    }

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(0).as_str(), "00:00:00");
        assert_eq!(format_hms(3_725).as_str(), "01:02:05");
        assert_eq!(format_hms(99 * 3600).as_str(), "99:00:00");
    }
}
