//! Message screen: the pop-in card, typed blocks, cursor and footer.
//!
//! Block positions come from the app's [`WrapLayout`](crate::layout::WrapLayout)
//! so the text drawn here wraps exactly where the scroll-follow logic
//! measured it.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::animations::pop_inset;
use crate::app::GreetingApp;
use crate::colors::{SURFACE, WHITE};
use crate::config::{MESSAGE_POP_MS, MESSAGE_TEXT_X, MESSAGE_TOP, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::gallery::fade_progress;
use crate::layout::{MESSAGE_CHAR_WIDTH, MessageLayout, wrap_text};
use crate::screen::Screen;
use crate::styles::{BODY_STYLE, FOOTER_STYLE, LEFT_ALIGNED, RIGHT_ALIGNED};
use crate::typing::BlockState;
use crate::viewport::ViewportMetrics;
use crate::widgets::{draw_lines, draw_panel, fade_color, on_screen};

/// Card padding around the text column.
const CARD_PADDING: i32 = 12;

/// Card starts at this fraction of its size.
const POP_START_SCALE: f32 = 0.9;

/// Cursor on/off half-period.
pub const CURSOR_BLINK_MS: u64 = 500;

/// Text baseline below a line's top edge (`FONT_6X10`).
const BASELINE: i32 = 8;

/// Footer baseline below the last block.
const FOOTER_BASELINE: i32 = 30;

/// Whether the typing cursor is lit at `now_ms`.
#[inline]
pub const fn cursor_visible(now_ms: u64) -> bool { (now_ms / CURSOR_BLINK_MS) % 2 == 0 }

/// Card rectangle in screen coordinates at pop progress `progress`.
fn card_rect(
    content_height: f32,
    scrolled: i32,
    progress: f32,
) -> Rectangle {
    let x = MESSAGE_TEXT_X - CARD_PADDING;
    let top = MESSAGE_TOP - CARD_PADDING;
    let width = SCREEN_WIDTH - 2 * x as u32;
    let height = (content_height as i32 - top - CARD_PADDING).max(0) as u32;
    let full = Rectangle::new(Point::new(x, top - scrolled), Size::new(width, height));
    let inset = pop_inset(progress, width.min(SCREEN_HEIGHT), POP_START_SCALE);
    full.offset(-(inset as i32))
}

/// Draw the message screen.
pub fn draw_message<D>(
    display: &mut D,
    app: &GreetingApp,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let now = app.now_ms();
    let region = app.region(Screen::Message);
    let scrolled = region.scroll_offset() as i32;
    let layout = app.layout();
    let blocks = app.typing().blocks();

    let progress = app
        .message_shown_at()
        .map_or(1.0, |at| fade_progress(at, now, MESSAGE_POP_MS));
    draw_panel(display, card_rect(region.content_height(), scrolled, progress), fade_color(SURFACE, progress));

    // Text waits for the card to finish popping in.
    if progress < 1.0 {
        return;
    }

    let line_height = layout.line_height as i32;
    for (index, block) in blocks.iter().enumerate() {
        let top = layout.block_top(blocks, index) as i32 - scrolled;
        let height = layout.block_height(block) as u32;
        if !on_screen(top, height.max(line_height as u32), SCREEN_HEIGHT) {
            continue;
        }

        let lines = wrap_text(block.revealed_text(), layout.max_chars);
        draw_lines(
            display,
            lines.iter().copied(),
            Point::new(MESSAGE_TEXT_X, top + BASELINE),
            line_height,
            BODY_STYLE,
            LEFT_ALIGNED,
        );

        if block.state() == BlockState::Typing && cursor_visible(now) {
            let last = lines.len().saturating_sub(1);
            let chars = lines.last().map_or(0, |line| line.chars().count());
            let cursor = Point::new(
                MESSAGE_TEXT_X + (chars as u32 * MESSAGE_CHAR_WIDTH) as i32,
                top + last as i32 * line_height,
            );
            Rectangle::new(cursor, Size::new(2, line_height as u32 - 3))
                .into_styled(PrimitiveStyle::with_fill(WHITE))
                .draw(display)
                .ok();
        }
    }

    if app.typing().footer_visible() {
        let y = layout.block_bottom(blocks, blocks.len()) as i32 - scrolled + FOOTER_BASELINE;
        Text::with_text_style(
            &app.content().footer,
            Point::new(SCREEN_WIDTH as i32 - MESSAGE_TEXT_X, y),
            FOOTER_STYLE,
            RIGHT_ALIGNED,
        )
        .draw(display)
        .ok();
    }
}
