//! Character-by-character reveal of the message blocks.
//!
//! The sequencer is a pure state machine. It never schedules anything
//! itself; each call returns a [`TypingStep`] telling the owner which timer
//! to start or cancel next.
//!
//! # Phases
//!
//! ```text
//!            start()
//!   Idle ───────────────┐
//!                       v
//!   ┌──────────── TypingChar ◄──────────────┐
//!   │  char tick:       │ char tick:        │ pause elapsed:
//!   │  reveal one char  │ prefix complete   │ index += 1
//!   └───────────────────┤                   │
//!                       v                   │
//!              PausedBetweenBlocks ─────────┘
//!                       │ (no blocks left)
//!                       v
//!                     Done  (footer shown once)
//! ```
//!
//! Completion is detected on the tick *after* the last character, matching a
//! per-tick "anything left?" check; a block of `n` chars therefore takes
//! `n + 1` ticks, and an empty block completes on its first tick.
//!
//! # Scroll Follow
//!
//! After every revealed character the owner asks [`follow_scroll_target`]
//! whether the typed block is close to (or past) the visible bottom and, if
//! so, smooth-scrolls to keep `headroom` pixels below it.

use tracing::debug;

use crate::layout::MessageLayout;
use crate::viewport::ViewportMetrics;

/// Lifecycle of one text block.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BlockState {
    #[default]
    Pending,
    Typing,
    Complete,
}

/// One block of message text and how much of it is visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextBlock {
    text: String,
    char_count: usize,
    revealed: usize,
    state: BlockState,
}

impl TextBlock {
    /// Pending block with nothing revealed.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let char_count = text.chars().count();
        Self {
            text,
            char_count,
            revealed: 0,
            state: BlockState::Pending,
        }
    }

    /// Full target text.
    #[inline]
    pub fn text(&self) -> &str { &self.text }

    /// Length of the full text in characters.
    #[inline]
    pub const fn char_count(&self) -> usize { self.char_count }

    /// Number of characters revealed so far.
    #[inline]
    pub const fn revealed(&self) -> usize { self.revealed }

    #[inline]
    pub const fn state(&self) -> BlockState { self.state }

    /// The visible prefix.
    pub fn revealed_text(&self) -> &str {
        let end = self
            .text
            .char_indices()
            .nth(self.revealed)
            .map_or(self.text.len(), |(idx, _)| idx);
        &self.text[..end]
    }

    fn reset(&mut self) {
        self.revealed = 0;
        self.state = BlockState::Pending;
    }

    /// Reveal one more character. Returns `false` when nothing is left.
    fn reveal_next(&mut self) -> bool {
        if self.revealed < self.char_count {
            self.revealed += 1;
            true
        } else {
            false
        }
    }
}

/// Where the sequencer is.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TypingPhase {
    /// Not started since the message screen was last entered.
    #[default]
    Idle,
    /// Char tick timer running for the current block.
    TypingChar,
    /// Current block complete; waiting out the pause.
    PausedBetweenBlocks,
    /// Every block complete, footer shown.
    Done,
}

/// What the owner must do after a sequencer call.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TypingStep {
    /// Block `block` started typing: start the char tick timer.
    StartCharTimer { block: usize },
    /// One character of `block` was revealed: re-check scroll follow.
    Revealed { block: usize },
    /// `block` finished: cancel the char timer, start the pause timer.
    BlockComplete { block: usize },
    /// Sequence finished: show the footer. Returned exactly once per run.
    ShowFooter,
    /// Nothing to do (stale tick or already done).
    Idle,
}

/// Sequential typing effect over a list of blocks.
#[derive(Clone, Debug, Default)]
pub struct TypingSequencer {
    blocks: Vec<TextBlock>,
    index: usize,
    phase: TypingPhase,
    footer_visible: bool,
}

impl TypingSequencer {
    /// Sequencer over `texts`, in order.
    pub fn new<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            blocks: texts.into_iter().map(TextBlock::new).collect(),
            index: 0,
            phase: TypingPhase::Idle,
            footer_visible: false,
        }
    }

    #[inline]
    pub fn blocks(&self) -> &[TextBlock] { &self.blocks }

    /// Index of the block currently typing or paused after.
    #[inline]
    pub const fn index(&self) -> usize { self.index }

    #[inline]
    pub const fn phase(&self) -> TypingPhase { self.phase }

    #[inline]
    pub const fn footer_visible(&self) -> bool { self.footer_visible }

    /// Reset every block, hide the footer and begin with block 0.
    pub fn start(&mut self) -> TypingStep {
        for block in &mut self.blocks {
            block.reset();
        }
        self.footer_visible = false;
        self.index = 0;
        self.phase = TypingPhase::Idle;
        debug!(blocks = self.blocks.len(), "typing started");
        self.type_next()
    }

    /// Begin the block at the current index, or finish.
    pub fn type_next(&mut self) -> TypingStep {
        let Some(block) = self.blocks.get_mut(self.index) else {
            if self.phase == TypingPhase::Done {
                return TypingStep::Idle;
            }
            self.phase = TypingPhase::Done;
            self.footer_visible = true;
            debug!("typing finished, footer shown");
            return TypingStep::ShowFooter;
        };

        block.state = BlockState::Typing;
        self.phase = TypingPhase::TypingChar;
        TypingStep::StartCharTimer { block: self.index }
    }

    /// Handle one char tick for the current block.
    pub fn on_char_tick(&mut self) -> TypingStep {
        if self.phase != TypingPhase::TypingChar {
            return TypingStep::Idle;
        }
        let Some(block) = self.blocks.get_mut(self.index) else {
            return TypingStep::Idle;
        };

        if block.reveal_next() {
            TypingStep::Revealed { block: self.index }
        } else {
            block.state = BlockState::Complete;
            self.phase = TypingPhase::PausedBetweenBlocks;
            debug!(block = self.index, "block complete");
            TypingStep::BlockComplete { block: self.index }
        }
    }

    /// Handle the end of the pause after a completed block.
    pub fn on_pause_elapsed(&mut self) -> TypingStep {
        if self.phase != TypingPhase::PausedBetweenBlocks {
            return TypingStep::Idle;
        }
        self.index += 1;
        self.type_next()
    }
}

/// Offset to smooth-scroll to so the typed block stays in view, if needed.
///
/// Triggers once `block_bottom` is within `trigger_px` of the visible bottom
/// (or below it) and targets `headroom_px` of space under the block.
pub fn follow_scroll_target(
    block_bottom: f32,
    viewport: &impl ViewportMetrics,
    trigger_px: f32,
    headroom_px: f32,
) -> Option<f32> {
    let visible_bottom = viewport.scroll_offset() + viewport.viewport_height();
    (block_bottom > visible_bottom - trigger_px).then(|| block_bottom - viewport.viewport_height() + headroom_px)
}

/// [`follow_scroll_target`] for block `index` as measured by `layout`.
pub fn follow_block_target(
    layout: &impl MessageLayout,
    blocks: &[TextBlock],
    index: usize,
    viewport: &impl ViewportMetrics,
    trigger_px: f32,
    headroom_px: f32,
) -> Option<f32> {
    follow_scroll_target(layout.block_bottom(blocks, index), viewport, trigger_px, headroom_px)
}

// =============================================================================
// Unit Tests
// =============================================================================
