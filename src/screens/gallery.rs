//! Gallery screen: photo cards, the video panel and the "read message" button.
//!
//! Everything is laid out in content coordinates by [`crate::layout`] and
//! shifted up by the region's scroll offset here. Cards fade and slide in
//! once revealed; unrevealed cards are not drawn at all.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;

use crate::animations::slide_offset;
use crate::app::GreetingApp;
use crate::colors::{GOLD, PHOTO, ROSE, SURFACE};
use crate::config::{CARD_FADE_MS, CARD_HEIGHT, CARD_MARGIN_X, CARD_WIDTH, CENTER_X, SCREEN_HEIGHT, VIDEO_SECTION_HEIGHT};
use crate::layout::{card_top, gallery_footer_top, video_top};
use crate::screen::Screen;
use crate::styles::{BODY_FONT, BUTTON_STYLE, CENTERED};
use crate::viewport::ViewportMetrics;
use crate::widgets::{draw_button, draw_panel, draw_video_panel, fade_color, on_screen};

/// Photo inset inside its card.
const PHOTO_INSET: i32 = 8;

/// Caption strip under the photo.
const CAPTION_STRIP: u32 = 28;

/// Cards start this far below their resting place.
const SLIDE_FROM_PX: f32 = 30.0;

/// Message button size.
pub const MESSAGE_BUTTON_SIZE: Size = Size::new(132, 26);

const MESSAGE_LABEL: &str = "Read message";

/// Message button center in content coordinates.
pub const fn message_button_center(card_count: usize) -> Point {
    Point::new(CENTER_X, gallery_footer_top(card_count) + 24)
}

/// Current scroll offset as whole pixels.
fn scroll_px(app: &GreetingApp) -> i32 {
    app.region(Screen::Gallery).scroll_offset() as i32
}

/// Message button hit area in screen coordinates.
pub fn message_button_area(app: &GreetingApp) -> Rectangle {
    let center = message_button_center(app.gallery().card_count()) - Point::new(0, scroll_px(app));
    Rectangle::with_center(center, MESSAGE_BUTTON_SIZE)
}

/// Video frame hit area in screen coordinates.
pub fn video_area(app: &GreetingApp) -> Rectangle {
    let top = video_top(app.gallery().card_count()) - scroll_px(app);
    Rectangle::new(Point::new(CARD_MARGIN_X, top), Size::new(CARD_WIDTH, VIDEO_SECTION_HEIGHT))
}

/// Draw one photo card at screen y `top`.
fn draw_card<D>(
    display: &mut D,
    top: i32,
    caption: &str,
    opacity: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let card = Rectangle::new(Point::new(CARD_MARGIN_X, top), Size::new(CARD_WIDTH, CARD_HEIGHT));
    draw_panel(display, card, fade_color(SURFACE, opacity));

    let photo = Rectangle::new(
        card.top_left + Point::new(PHOTO_INSET, PHOTO_INSET),
        Size::new(
            CARD_WIDTH - 2 * PHOTO_INSET as u32,
            CARD_HEIGHT - PHOTO_INSET as u32 - CAPTION_STRIP,
        ),
    );
    draw_panel(display, photo, fade_color(PHOTO, opacity));

    let style = MonoTextStyle::new(BODY_FONT, fade_color(GOLD, opacity));
    Text::with_text_style(
        caption,
        Point::new(CENTER_X, top + CARD_HEIGHT as i32 - 11),
        style,
        CENTERED,
    )
    .draw(display)
    .ok();
}

/// Draw the gallery screen.
pub fn draw_gallery<D>(
    display: &mut D,
    app: &GreetingApp,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let now = app.now_ms();
    let scrolled = scroll_px(app);
    let gallery = app.gallery();
    let captions = &app.content().captions;

    for index in 0..gallery.card_count() {
        let progress = gallery.card_progress(index, now, CARD_FADE_MS);
        if progress <= 0.0 {
            continue;
        }
        let top = card_top(index) - scrolled + slide_offset(progress, SLIDE_FROM_PX);
        if !on_screen(top, CARD_HEIGHT, SCREEN_HEIGHT) {
            continue;
        }
        let caption = captions.get(index).map_or("", String::as_str);
        draw_card(display, top, caption, progress);
    }

    let card_count = gallery.card_count();
    let top = video_top(card_count) - scrolled;
    if on_screen(top, VIDEO_SECTION_HEIGHT, SCREEN_HEIGHT) {
        draw_video_panel(
            display,
            top,
            &app.content().video_caption,
            gallery.video_progress(now, CARD_FADE_MS),
            app.video().button_visible(),
        );
    }

    let button = message_button_area(app);
    if on_screen(button.top_left.y, button.size.height, SCREEN_HEIGHT) {
        draw_button(display, button.center(), MESSAGE_BUTTON_SIZE, MESSAGE_LABEL, ROSE, BUTTON_STYLE);
    }
}
