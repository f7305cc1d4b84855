//! Photo card and video section reveal state.
//!
//! Cards become visible two ways: the staggered timer run when the gallery
//! is entered, and the visibility check run on every scroll. Whichever comes
//! first wins; later reveals are no-ops so the fade-in never restarts.

use tracing::debug;

use crate::animations::ease_out;

/// Fraction of an element's height that must be on screen to reveal it.
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// The reveal area ends this far above the bottom of the viewport.
pub const REVEAL_BOTTOM_INSET: f32 = 100.0;

/// Whether an element spanning `top..top + height` counts as visible in the
/// viewport `(view_top, view_bottom)`.
///
/// The viewport is shrunk by [`REVEAL_BOTTOM_INSET`] at the bottom and at
/// least [`REVEAL_THRESHOLD`] of the element has to fall inside it.
pub fn intersects(
    top: f32,
    height: f32,
    visible: (f32, f32),
) -> bool {
    if height <= 0.0 {
        return false;
    }
    let (view_top, view_bottom) = visible;
    let view_bottom = view_bottom - REVEAL_BOTTOM_INSET;
    let overlap = (top + height).min(view_bottom) - top.max(view_top);
    overlap > 0.0 && overlap / height >= REVEAL_THRESHOLD
}

/// Reveal times for the gallery's elements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryState {
    cards: Vec<Option<u64>>,
    video: Option<u64>,
}

impl GalleryState {
    /// Gallery with `card_count` hidden cards.
    pub fn new(card_count: usize) -> Self {
        Self {
            cards: vec![None; card_count],
            video: None,
        }
    }

    #[inline]
    pub fn card_count(&self) -> usize { self.cards.len() }

    /// When card `index` was revealed.
    #[inline]
    pub fn card_revealed_at(
        &self,
        index: usize,
    ) -> Option<u64> {
        self.cards.get(index).copied().flatten()
    }

    /// When the video section was revealed.
    #[inline]
    pub const fn video_revealed_at(&self) -> Option<u64> { self.video }

    /// Reveal card `index` at `now_ms`. Returns `true` on the first reveal.
    pub fn reveal_card(
        &mut self,
        index: usize,
        now_ms: u64,
    ) -> bool {
        match self.cards.get_mut(index) {
            Some(slot @ None) => {
                *slot = Some(now_ms);
                debug!(card = index, now_ms, "card revealed");
                true
            }
            _ => false,
        }
    }

    /// Reveal the video section at `now_ms`. Returns `true` on the first reveal.
    pub fn reveal_video(
        &mut self,
        now_ms: u64,
    ) -> bool {
        if self.video.is_some() {
            return false;
        }
        self.video = Some(now_ms);
        debug!(now_ms, "video section revealed");
        true
    }

    /// Hide everything again.
    pub fn reset(&mut self) {
        self.cards.iter_mut().for_each(|slot| *slot = None);
        self.video = None;
    }

    /// Fade-in progress (0..=1, eased) of card `index` at `now_ms`.
    pub fn card_progress(
        &self,
        index: usize,
        now_ms: u64,
        fade_ms: u64,
    ) -> f32 {
        self.card_revealed_at(index)
            .map_or(0.0, |at| fade_progress(at, now_ms, fade_ms))
    }

    /// Fade-in progress of the video section at `now_ms`.
    pub fn video_progress(
        &self,
        now_ms: u64,
        fade_ms: u64,
    ) -> f32 {
        self.video.map_or(0.0, |at| fade_progress(at, now_ms, fade_ms))
    }
}

/// Eased progress of a fade started at `start_ms`.
pub fn fade_progress(
    start_ms: u64,
    now_ms: u64,
    duration_ms: u64,
) -> f32 {
    if duration_ms == 0 {
        return 1.0;
    }
    let elapsed = now_ms.saturating_sub(start_ms).min(duration_ms);
    ease_out(elapsed as f32 / duration_ms as f32)
}

// =============================================================================
// Unit Tests
// =============================================================================
