//! Background music and the gallery video overlay.
//!
//! Both sit behind small backend traits so the simulator can stand in for
//! real audio/video output and tests can script rejections.
//!
//! A rejected `play()` is never an error for the caller: the player logs it
//! at warn level and keeps running, the same way a browser page swallows an
//! autoplay-policy rejection.

use tracing::{info, warn};

use crate::error::PlaybackError;

/// Audio output for the background track.
pub trait AudioBackend {
    /// Start or resume playback. May be refused by the host.
    fn play(&mut self) -> Result<(), PlaybackError>;

    /// Pause playback.
    fn pause(&mut self);
}

/// Video element in the gallery.
///
/// Pausing is done by the viewer on the element itself and comes back as
/// [`VideoOverlay::on_paused`].
pub trait VideoBackend {
    fn play(&mut self);
}

/// Background music state.
///
/// `playing` is what the page believes; `lit` is the toggle's visual state.
/// They can disagree after a rejected play from the toggle, see
/// [`MusicPlayer::toggle`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MusicPlayer {
    playing: bool,
    lit: bool,
}

impl MusicPlayer {
    pub const fn new() -> Self {
        Self {
            playing: false,
            lit: false,
        }
    }

    #[inline]
    pub const fn is_playing(&self) -> bool { self.playing }

    /// Whether the toggle control is shown as active.
    #[inline]
    pub const fn is_lit(&self) -> bool { self.lit }

    /// Start the track from the opening screen's start button.
    ///
    /// Only sets the state on success. A rejection is logged and leaves the
    /// player stopped.
    pub fn start_from_opening(
        &mut self,
        audio: &mut impl AudioBackend,
    ) {
        if self.playing {
            return;
        }
        match audio.play() {
            Ok(()) => {
                self.playing = true;
                self.lit = true;
                info!("music started");
            }
            Err(err) => warn!(%err, "music autoplay rejected"),
        }
    }

    /// Flip between playing and paused from the toggle control.
    ///
    /// `playing` flips whether or not the backend accepted the play request,
    /// so after a rejection the next toggle calls `pause` on a silent track.
    /// The light only turns on when play succeeds.
    pub fn toggle(
        &mut self,
        audio: &mut impl AudioBackend,
    ) {
        if self.playing {
            audio.pause();
            self.lit = false;
            info!("music paused");
        } else {
            match audio.play() {
                Ok(()) => {
                    self.lit = true;
                    info!("music resumed");
                }
                Err(err) => warn!(%err, "music play rejected"),
            }
        }
        self.playing = !self.playing;
    }

    /// Request playback. Returns whether the backend accepted it.
    pub fn play(
        &mut self,
        audio: &mut impl AudioBackend,
    ) -> bool {
        match audio.play() {
            Ok(()) => {
                self.playing = true;
                self.lit = true;
                true
            }
            Err(err) => {
                warn!(%err, "music play rejected");
                false
            }
        }
    }

    /// Pause unconditionally.
    pub fn pause(
        &mut self,
        audio: &mut impl AudioBackend,
    ) {
        audio.pause();
        self.playing = false;
        self.lit = false;
    }
}

/// Play-button overlay on the gallery video.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoOverlay {
    button_visible: bool,
}

impl Default for VideoOverlay {
    fn default() -> Self { Self::new() }
}

impl VideoOverlay {
    pub const fn new() -> Self { Self { button_visible: true } }

    #[inline]
    pub const fn button_visible(&self) -> bool { self.button_visible }

    /// The play button was clicked.
    pub fn play_clicked(
        &mut self,
        video: &mut impl VideoBackend,
    ) {
        video.play();
        self.button_visible = false;
        info!("video play clicked");
    }

    /// The video reported that it started playing.
    pub fn on_played(&mut self) { self.button_visible = false; }

    /// The video reported that it paused.
    pub fn on_paused(&mut self) { self.button_visible = true; }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Audio backend that rejects the first `reject` play calls.
    #[derive(Default)]
    struct ScriptedAudio {
        reject: usize,
        plays: usize,
        pauses: usize,
    }

    impl AudioBackend for ScriptedAudio {
        fn play(&mut self) -> Result<(), PlaybackError> {
            self.plays += 1;
            if self.reject > 0 {
                self.reject -= 1;
                return Err(PlaybackError::Rejected {
                    reason: "no user gesture".into(),
                });
            }
            Ok(())
        }

        fn pause(&mut self) { self.pauses += 1; }
    }

    #[derive(Default)]
    struct CountingVideo {
        plays: usize,
    }

    impl VideoBackend for CountingVideo {
        fn play(&mut self) { self.plays += 1; }
    }

    #[test]
    fn test_start_from_opening_success() {
        let mut audio = ScriptedAudio::default();
        let mut music = MusicPlayer::new();
        music.start_from_opening(&mut audio);
        assert!(music.is_playing());
        assert!(music.is_lit());

        music.start_from_opening(&mut audio);
        assert_eq!(audio.plays, 1, "Already playing, no second play request");
    }

    #[test]
    fn test_start_from_opening_rejected_stays_stopped() {
        let mut audio = ScriptedAudio {
            reject: 1,
            ..ScriptedAudio::default()
        };
        let mut music = MusicPlayer::new();
        music.start_from_opening(&mut audio);
        assert!(!music.is_playing(), "Rejected start must not set playing");
        assert!(!music.is_lit());
    }

    #[test]
    fn test_toggle_pauses_and_resumes() {
        let mut audio = ScriptedAudio::default();
        let mut music = MusicPlayer::new();
        music.start_from_opening(&mut audio);

        music.toggle(&mut audio);
        assert!(!music.is_playing());
        assert!(!music.is_lit());
        assert_eq!(audio.pauses, 1);

        music.toggle(&mut audio);
        assert!(music.is_playing());
        assert!(music.is_lit());
    }

    #[test]
    fn test_toggle_rejected_flips_flag_but_not_light() {
        let mut audio = ScriptedAudio {
            reject: 1,
            ..ScriptedAudio::default()
        };
        let mut music = MusicPlayer::new();

        music.toggle(&mut audio);
        assert!(music.is_playing(), "Flag flips even when play is rejected");
        assert!(!music.is_lit(), "Light stays off after a rejection");

        music.toggle(&mut audio);
        assert!(!music.is_playing());
        assert_eq!(audio.pauses, 1, "Second toggle pauses the silent track");
    }

    #[test]
    fn test_explicit_play_and_pause() {
        let mut audio = ScriptedAudio {
            reject: 1,
            ..ScriptedAudio::default()
        };
        let mut music = MusicPlayer::new();

        assert!(!music.play(&mut audio));
        assert!(!music.is_playing());
        assert!(music.play(&mut audio));
        assert!(music.is_playing() && music.is_lit());

        music.pause(&mut audio);
        assert!(!music.is_playing() && !music.is_lit());
    }

    /// Audio backend with no output device.
    struct MissingAudio;

    impl AudioBackend for MissingAudio {
        fn play(&mut self) -> Result<(), PlaybackError> { Err(PlaybackError::Unavailable) }

        fn pause(&mut self) {}
    }

    #[test]
    fn test_unavailable_output_never_lights() {
        let mut music = MusicPlayer::new();
        music.start_from_opening(&mut MissingAudio);
        assert!(!music.is_playing(), "No device, start must not set playing");

        music.toggle(&mut MissingAudio);
        assert!(music.is_playing(), "Toggle still flips the flag");
        assert!(!music.is_lit(), "Light stays off without a device");
        assert!(!music.play(&mut MissingAudio));
    }

    #[test]
    fn test_video_overlay() {
        let mut video = CountingVideo::default();
        let mut overlay = VideoOverlay::new();
        assert!(overlay.button_visible(), "Play button starts visible");

        overlay.play_clicked(&mut video);
        assert!(!overlay.button_visible());
        assert_eq!(video.plays, 1);

        overlay.on_paused();
        assert!(overlay.button_visible(), "Pause shows the button again");
        overlay.on_played();
        assert!(!overlay.button_visible());
    }
}
