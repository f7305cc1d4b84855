//! Content geometry for the scrollable screens.
//!
//! Positions are in *content* coordinates: y = 0 is the top of the scrollable
//! content, not the top of the display. Renderers subtract the scroll offset.
//!
//! Message text uses a monospace font, so wrapping is a pure function of the
//! character count and the logic here matches what the renderer draws
//! exactly. Both sides call [`wrap_text`].

use crate::config::{
    CARD_GAP, CARD_HEIGHT, GALLERY_FOOTER_HEIGHT, GALLERY_TOP, MESSAGE_BLOCK_GAP, MESSAGE_FOOTER_HEIGHT,
    MESSAGE_LINE_HEIGHT, MESSAGE_TEXT_WIDTH, MESSAGE_TOP, VIDEO_SECTION_HEIGHT,
};
use crate::typing::TextBlock;

/// Character cell width of the message font (`FONT_6X10`).
pub const MESSAGE_CHAR_WIDTH: u32 = 6;

/// Geometry of the message screen's text blocks.
pub trait MessageLayout {
    /// Bottom edge of block `index` as currently revealed.
    fn block_bottom(
        &self,
        blocks: &[TextBlock],
        index: usize,
    ) -> f32;

    /// Total content height including the footer area.
    fn content_height(
        &self,
        blocks: &[TextBlock],
    ) -> f32;
}

/// Monospace word-wrap layout.
///
/// Empty blocks take no height but still keep their gap, so a block's top
/// never moves once earlier blocks are complete.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WrapLayout {
    pub top: f32,
    pub max_chars: usize,
    pub line_height: f32,
    pub block_gap: f32,
    pub footer_height: f32,
}

impl Default for WrapLayout {
    fn default() -> Self {
        Self {
            top: MESSAGE_TOP as f32,
            max_chars: (MESSAGE_TEXT_WIDTH / MESSAGE_CHAR_WIDTH) as usize,
            line_height: MESSAGE_LINE_HEIGHT as f32,
            block_gap: MESSAGE_BLOCK_GAP as f32,
            footer_height: MESSAGE_FOOTER_HEIGHT as f32,
        }
    }
}

impl WrapLayout {
    /// Height of one block's revealed text.
    pub fn block_height(
        &self,
        block: &TextBlock,
    ) -> f32 {
        wrap_text(block.revealed_text(), self.max_chars).len() as f32 * self.line_height
    }

    /// Top edge of block `index`.
    pub fn block_top(
        &self,
        blocks: &[TextBlock],
        index: usize,
    ) -> f32 {
        blocks
            .iter()
            .take(index)
            .fold(self.top, |y, block| y + self.block_height(block) + self.block_gap)
    }
}

impl MessageLayout for WrapLayout {
    fn block_bottom(
        &self,
        blocks: &[TextBlock],
        index: usize,
    ) -> f32 {
        let height = blocks.get(index).map_or(0.0, |block| self.block_height(block));
        self.block_top(blocks, index) + height
    }

    fn content_height(
        &self,
        blocks: &[TextBlock],
    ) -> f32 {
        self.block_top(blocks, blocks.len()) + self.footer_height
    }
}

/// Greedy word wrap to at most `max_chars` characters per line.
///
/// Words longer than a line are hard-split. Leading and trailing spaces at
/// line breaks are dropped.
pub fn wrap_text(
    text: &str,
    max_chars: usize,
) -> Vec<&str> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut rest = text.trim_start();

    while !rest.is_empty() {
        let mut end = rest.len();
        let mut last_space = None;
        for (count, (idx, ch)) in rest.char_indices().enumerate() {
            if count == max_chars {
                end = idx;
                break;
            }
            if ch == ' ' {
                last_space = Some(idx);
            }
        }

        if end == rest.len() {
            lines.push(rest.trim_end());
            break;
        }

        // A space right at the cut means the whole line is words.
        let (line, next) = match (rest[end..].starts_with(' '), last_space) {
            (true, _) => (&rest[..end], &rest[end..]),
            (false, Some(space)) if space > 0 => (&rest[..space], &rest[space..]),
            _ => (&rest[..end], &rest[end..]),
        };
        lines.push(line.trim_end());
        rest = next.trim_start();
    }
    lines
}

// =============================================================================
// Gallery Layout
// =============================================================================

/// Top edge of photo card `index`.
#[inline]
pub const fn card_top(index: usize) -> i32 { GALLERY_TOP + index as i32 * (CARD_HEIGHT as i32 + CARD_GAP) }

/// Top edge of the video section below `card_count` cards.
#[inline]
pub const fn video_top(card_count: usize) -> i32 { card_top(card_count) }

/// Top edge of the "read message" button area.
#[inline]
pub const fn gallery_footer_top(card_count: usize) -> i32 { video_top(card_count) + VIDEO_SECTION_HEIGHT as i32 + CARD_GAP }

/// Total gallery content height.
#[inline]
pub fn gallery_content_height(card_count: usize) -> f32 {
    (gallery_footer_top(card_count) + GALLERY_FOOTER_HEIGHT as i32) as f32
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> WrapLayout {
        WrapLayout {
            top: 10.0,
            max_chars: 10,
            line_height: 12.0,
            block_gap: 5.0,
            footer_height: 40.0,
        }
    }

    /// Block with `n` chars revealed.
    fn revealed(
        text: &str,
        n: usize,
    ) -> TextBlock {
        let mut seq = crate::typing::TypingSequencer::new([text]);
        seq.start();
        for _ in 0..n {
            seq.on_char_tick();
        }
        seq.blocks()[0].clone()
    }

    #[test]
    fn test_wrap_short_line() {
        assert_eq!(wrap_text("hello", 10), vec!["hello"]);
        assert!(wrap_text("", 10).is_empty(), "Empty text has no lines");
    }

    #[test]
    fn test_wrap_breaks_at_spaces() {
        assert_eq!(wrap_text("the quick brown fox", 10), vec!["the quick", "brown fox"]);
    }

    #[test]
    fn test_wrap_space_at_cut() {
        assert_eq!(wrap_text("abc def", 3), vec!["abc", "def"]);
    }

    #[test]
    fn test_wrap_hard_splits_long_words() {
        assert_eq!(wrap_text("abcdefghijkl", 5), vec!["abcde", "fghij", "kl"]);
    }

    #[test]
    fn test_wrap_never_exceeds_width() {
        let text = "Thank you for every late-night talk, every bad joke and every good day.";
        for line in wrap_text(text, 17) {
            assert!(line.chars().count() <= 17, "Line too long: {line:?}");
        }
    }

    #[test]
    fn test_block_bottom_grows_with_reveal() {
        let layout = layout();
        let empty = [revealed("hello world", 0)];
        let one_line = [revealed("hello world", 5)];
        let two_lines = [revealed("hello world", 11)];

        assert_eq!(layout.block_bottom(&empty, 0), 10.0);
        assert_eq!(layout.block_bottom(&one_line, 0), 22.0);
        assert_eq!(layout.block_bottom(&two_lines, 0), 34.0);
    }

    #[test]
    fn test_block_top_stacks_previous_blocks() {
        let layout = layout();
        let blocks = [revealed("first", 5), revealed("second", 0)];
        assert_eq!(layout.block_top(&blocks, 1), 10.0 + 12.0 + 5.0);
        assert_eq!(layout.content_height(&blocks), 10.0 + 12.0 + 5.0 + 5.0 + 40.0);
    }

    #[test]
    fn test_gallery_layout_is_stacked() {
        assert_eq!(card_top(0), GALLERY_TOP);
        assert_eq!(card_top(1) - card_top(0), CARD_HEIGHT as i32 + CARD_GAP);
        assert!(gallery_content_height(4) > 240.0, "Four cards should overflow the display");
    }
}
