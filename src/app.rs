//! Screen controller: the single owner of every piece of greeting state.
//!
//! `GreetingApp` ties the timer registry, the three scroll regions, the
//! auto-scroll driver, the typing sequencer, gallery reveal, media and the
//! easter egg together. Nothing in it reads a clock; the host feeds time in
//! through [`GreetingApp::advance`] and input through
//! [`GreetingApp::handle_input`].
//!
//! # Screen Transitions
//!
//! ```text
//! show_screen(target)          Transition timer fires (+100ms)
//!  ├─ cancel auto-scroll        ├─ activate target, reset its scroll
//!  ├─ deactivate current        ├─ Gallery: stagger card reveals, auto-scroll
//!  └─ schedule Transition       └─ Message: pop card in, auto-scroll, typing
//! ```
//!
//! No screen is active during the gap; input guarded on a screen is ignored
//! until the target activates.
//!
//! # Determinism
//!
//! Timer callbacks run at their *due* time, never at the poll time, and
//! everything they schedule is relative to that. A test stepping 1ms at a
//! time and a simulator stepping 16ms frames see identical sequences.

use tracing::{debug, info};

use crate::autoscroll::{AutoScroll, AutoScrollTick};
use crate::config::{CARD_HEIGHT, Content, GreetingConfig, SCREEN_HEIGHT, Timing, VIDEO_SECTION_HEIGHT};
use crate::easter_egg::EasterEgg;
use crate::gallery::{GalleryState, intersects};
use crate::layout::{MessageLayout, WrapLayout, card_top, gallery_content_height, video_top};
use crate::media::{AudioBackend, MusicPlayer, VideoBackend, VideoOverlay};
use crate::screen::Screen;
use crate::timers::{TimerKind, TimerRegistry};
use crate::typing::{TypingSequencer, TypingStep, follow_block_target};
use crate::viewport::{ScrollRegion, ViewportMetrics};

/// Largest number of photo cards (card reveal timers are keyed by `u8`).
pub const MAX_CARDS: usize = u8::MAX as usize;

/// User input, already mapped from the host's raw events.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputEvent {
    /// Start button on the opening screen.
    StartClicked,
    /// "Read message" button at the end of the gallery.
    MessageClicked,
    /// Floating music toggle.
    MusicToggleClicked,
    /// Play button over the gallery video.
    VideoPlayClicked,
    /// The video started playing.
    VideoPlayed,
    /// The video paused.
    VideoPaused,
    /// Pointer entered a screen.
    PointerEnter(Screen),
    /// Touch started on a screen.
    TouchStart(Screen),
    /// Gift icon on the opening screen.
    GiftClicked,
    /// The active screen's scroll offset changed.
    Scrolled,
}

/// Greeting state machine.
#[derive(Debug)]
pub struct GreetingApp {
    content: Content,
    timing: Timing,

    active: Option<Screen>,
    pending: Option<Screen>,
    activated_at: u64,
    regions: [ScrollRegion; 3],

    timers: TimerRegistry,
    autoscroll: Option<AutoScroll>,

    typing: TypingSequencer,
    layout: WrapLayout,
    message_shown_at: Option<u64>,

    gallery: GalleryState,
    music: MusicPlayer,
    video: VideoOverlay,
    easter_egg: EasterEgg,

    now_ms: u64,
}

impl GreetingApp {
    /// Opening screen active, no timers running.
    pub fn new(config: GreetingConfig) -> Self {
        let GreetingConfig { content, timing } = config;
        let card_count = content.captions.len().min(MAX_CARDS);
        let typing = TypingSequencer::new(content.blocks.iter().cloned());
        let layout = WrapLayout::default();
        let viewport = SCREEN_HEIGHT as f32;

        let regions = Screen::ALL.map(|screen| {
            let content_height = match screen {
                Screen::Opening => viewport,
                Screen::Gallery => gallery_content_height(card_count),
                Screen::Message => layout.content_height(typing.blocks()),
            };
            ScrollRegion::new(viewport, content_height)
        });

        Self {
            content,
            timing,
            active: Some(Screen::Opening),
            pending: None,
            activated_at: 0,
            regions,
            timers: TimerRegistry::new(),
            autoscroll: None,
            typing,
            layout,
            message_shown_at: None,
            gallery: GalleryState::new(card_count),
            music: MusicPlayer::new(),
            video: VideoOverlay::new(),
            easter_egg: EasterEgg::new(),
            now_ms: 0,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub const fn content(&self) -> &Content { &self.content }

    #[inline]
    pub const fn timing(&self) -> &Timing { &self.timing }

    /// Active screen, `None` during a transition.
    #[inline]
    pub const fn active(&self) -> Option<Screen> { self.active }

    /// Screen a running transition will activate.
    #[inline]
    pub const fn pending(&self) -> Option<Screen> { self.pending }

    /// When the active screen was activated.
    #[inline]
    pub const fn activated_at(&self) -> u64 { self.activated_at }

    #[inline]
    pub const fn region(
        &self,
        screen: Screen,
    ) -> &ScrollRegion {
        &self.regions[screen.index()]
    }

    #[inline]
    pub const fn timers(&self) -> &TimerRegistry { &self.timers }

    /// Whether auto-scroll is running.
    #[inline]
    pub fn is_auto_scrolling(&self) -> bool { self.timers.is_active(TimerKind::AutoScroll) }

    /// Screen the running auto-scroll belongs to.
    #[inline]
    pub fn auto_scroll_screen(&self) -> Option<Screen> { self.autoscroll.as_ref().map(AutoScroll::screen) }

    #[inline]
    pub const fn typing(&self) -> &TypingSequencer { &self.typing }

    #[inline]
    pub const fn layout(&self) -> &WrapLayout { &self.layout }

    /// When the message card was last shown.
    #[inline]
    pub const fn message_shown_at(&self) -> Option<u64> { self.message_shown_at }

    #[inline]
    pub const fn gallery(&self) -> &GalleryState { &self.gallery }

    #[inline]
    pub const fn music(&self) -> &MusicPlayer { &self.music }

    #[inline]
    pub const fn video(&self) -> &VideoOverlay { &self.video }

    #[inline]
    pub const fn easter_egg(&self) -> &EasterEgg { &self.easter_egg }

    /// Time of the last `advance`.
    #[inline]
    pub const fn now_ms(&self) -> u64 { self.now_ms }

    /// Scroll offset driving the parallax shapes.
    pub fn parallax_scroll(&self) -> f32 {
        self.active.map_or(0.0, |screen| self.region(screen).scroll_offset())
    }

    // =========================================================================
    // Screen Transitions
    // =========================================================================

    /// Leave the current screen and activate `target` after the transition delay.
    pub fn show_screen(
        &mut self,
        target: Screen,
        now_ms: u64,
    ) {
        self.stop_auto_scroll();
        if let Some(previous) = self.active.take() {
            debug!(from = previous.name(), "screen deactivated");
        }
        self.pending = Some(target);
        self.timers
            .start_timeout(TimerKind::Transition, self.timing.transition_delay_ms, now_ms);
        info!(to = target.name(), "screen transition started");
    }

    /// Follow the primary button on `from` to the screen after it.
    fn show_next(
        &mut self,
        from: Screen,
        now_ms: u64,
    ) {
        if let Some(target) = from.next() {
            self.show_screen(target, now_ms);
        }
    }

    fn activate(
        &mut self,
        target: Screen,
        at_ms: u64,
    ) {
        self.active = Some(target);
        self.activated_at = at_ms;
        self.regions[target.index()].reset();
        info!(screen = target.name(), at_ms, "screen activated");

        match target {
            Screen::Opening => {}
            Screen::Gallery => {
                self.reveal_cards_staggered(at_ms);
                self.start_auto_scroll(Screen::Gallery, at_ms);
                self.reveal_visible(at_ms);
            }
            Screen::Message => {
                self.message_shown_at = Some(at_ms);
                self.start_auto_scroll(Screen::Message, at_ms);
                let step = self.typing.start();
                self.sync_message_height();
                self.apply_typing_step(step, at_ms);
            }
        }
    }

    fn reveal_cards_staggered(
        &mut self,
        at_ms: u64,
    ) {
        self.gallery.reset();
        self.timers
            .cancel_where(|kind| matches!(kind, TimerKind::CardReveal(_)));
        for i in 0..self.gallery.card_count() {
            let Ok(index) = u8::try_from(i) else {
                break;
            };
            let delay = i as u64 * self.timing.card_stagger_ms;
            self.timers.start_timeout(TimerKind::CardReveal(index), delay, at_ms);
        }
    }

    // =========================================================================
    // Auto-Scroll
    // =========================================================================

    fn start_auto_scroll(
        &mut self,
        screen: Screen,
        at_ms: u64,
    ) {
        self.autoscroll = Some(AutoScroll::new(screen, self.timing.scroll_speed));
        self.timers
            .start_interval(TimerKind::AutoScroll, self.timing.scroll_tick_ms, at_ms);
        debug!(screen = screen.name(), "auto-scroll started");
    }

    fn stop_auto_scroll(&mut self) {
        if self.timers.cancel(TimerKind::AutoScroll) {
            debug!("auto-scroll stopped");
        }
        self.autoscroll = None;
    }

    fn tick_auto_scroll(
        &mut self,
        at_ms: u64,
    ) {
        let Some(scroll) = self.autoscroll.as_mut() else {
            self.timers.cancel(TimerKind::AutoScroll);
            return;
        };
        let screen = scroll.screen();
        match scroll.tick(self.active, &mut self.regions[screen.index()]) {
            AutoScrollTick::Stopped => self.stop_auto_scroll(),
            AutoScrollTick::Looped => debug!(screen = screen.name(), "auto-scroll looped"),
            AutoScrollTick::Advanced(_) => {
                if screen == Screen::Gallery {
                    self.reveal_visible(at_ms);
                }
            }
        }
    }

    // =========================================================================
    // Typing
    // =========================================================================

    fn apply_typing_step(
        &mut self,
        step: TypingStep,
        at_ms: u64,
    ) {
        match step {
            TypingStep::StartCharTimer { block } => {
                self.timers
                    .start_interval(TimerKind::TypingChar, self.timing.char_interval_ms, at_ms);
                debug!(block, "typing block");
            }
            TypingStep::Revealed { block } => {
                self.sync_message_height();
                let region = &mut self.regions[Screen::Message.index()];
                if let Some(target) = follow_block_target(
                    &self.layout,
                    self.typing.blocks(),
                    block,
                    region,
                    self.timing.follow_trigger_px,
                    self.timing.follow_headroom_px,
                ) {
                    region.smooth_scroll_to(target);
                }
            }
            TypingStep::BlockComplete { .. } => {
                self.timers.cancel(TimerKind::TypingChar);
                self.timers
                    .start_timeout(TimerKind::TypingPause, self.timing.block_pause_ms, at_ms);
            }
            TypingStep::ShowFooter => {
                self.timers.cancel(TimerKind::TypingChar);
                self.sync_message_height();
                info!(at_ms, "message complete");
            }
            TypingStep::Idle => {}
        }
    }

    fn sync_message_height(&mut self) {
        let height = self.layout.content_height(self.typing.blocks());
        self.regions[Screen::Message.index()].set_content_height(height);
    }

    // =========================================================================
    // Gallery Visibility
    // =========================================================================

    /// Reveal gallery elements that have scrolled into the reveal area.
    fn reveal_visible(
        &mut self,
        now_ms: u64,
    ) {
        if self.active != Some(Screen::Gallery) {
            return;
        }
        let visible = self.regions[Screen::Gallery.index()].visible_range();
        for i in 0..self.gallery.card_count() {
            if intersects(card_top(i) as f32, CARD_HEIGHT as f32, visible) {
                self.gallery.reveal_card(i, now_ms);
            }
        }
        let video = video_top(self.gallery.card_count()) as f32;
        if intersects(video, VIDEO_SECTION_HEIGHT as f32, visible) {
            self.gallery.reveal_video(now_ms);
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Apply one input event. Returns `false` if its guard rejected it.
    pub fn handle_input(
        &mut self,
        event: InputEvent,
        now_ms: u64,
        audio: &mut impl AudioBackend,
        video: &mut impl VideoBackend,
    ) -> bool {
        let active = self.active;
        let on = |screen: Screen| active == Some(screen);

        match event {
            InputEvent::StartClicked if on(Screen::Opening) => {
                self.show_next(Screen::Opening, now_ms);
                self.music.start_from_opening(audio);
            }
            InputEvent::MessageClicked if on(Screen::Gallery) => self.show_next(Screen::Gallery, now_ms),
            InputEvent::MusicToggleClicked => self.music.toggle(audio),
            InputEvent::VideoPlayClicked if on(Screen::Gallery) => self.video.play_clicked(video),
            InputEvent::VideoPlayed => self.video.on_played(),
            InputEvent::VideoPaused => self.video.on_paused(),
            InputEvent::PointerEnter(screen) | InputEvent::TouchStart(screen) if screen.is_scrollable() => {
                if self.timers.is_active(TimerKind::AutoScroll) {
                    info!(screen = screen.name(), "auto-scroll cancelled by interaction");
                }
                self.stop_auto_scroll();
            }
            InputEvent::GiftClicked if on(Screen::Opening) => {
                if self.easter_egg.click(now_ms, self.timing.easter_egg_clicks) {
                    self.timers
                        .start_timeout(TimerKind::EasterEgg, self.timing.easter_egg_duration_ms, now_ms);
                    info!("easter egg triggered");
                }
            }
            InputEvent::Scrolled => self.reveal_visible(now_ms),
            _ => {
                debug!(?event, active = ?self.active, "input ignored");
                return false;
            }
        }
        true
    }

    /// Scroll the active screen by `delta` pixels (wheel or drag).
    pub fn scroll_by(
        &mut self,
        delta: f32,
        now_ms: u64,
    ) {
        let Some(screen) = self.active.filter(|screen| screen.is_scrollable()) else {
            return;
        };
        let region = &mut self.regions[screen.index()];
        let offset = region.scroll_offset() + delta;
        region.set_scroll_offset(offset);
        self.reveal_visible(now_ms);
    }

    // =========================================================================
    // Time
    // =========================================================================

    /// Run every timer due by `now_ms`, then step smooth scrolling.
    pub fn advance(
        &mut self,
        now_ms: u64,
    ) {
        while let Some(fired) = self.timers.poll(now_ms) {
            self.dispatch(fired.kind, fired.at_ms);
        }

        let elapsed = now_ms.saturating_sub(self.now_ms);
        for region in &mut self.regions {
            region.step_smooth(elapsed);
        }
        self.now_ms = self.now_ms.max(now_ms);
    }

    fn dispatch(
        &mut self,
        kind: TimerKind,
        at_ms: u64,
    ) {
        match kind {
            TimerKind::Transition => {
                if let Some(target) = self.pending.take() {
                    self.activate(target, at_ms);
                }
            }
            TimerKind::AutoScroll => self.tick_auto_scroll(at_ms),
            TimerKind::TypingChar => {
                let step = self.typing.on_char_tick();
                self.apply_typing_step(step, at_ms);
            }
            TimerKind::TypingPause => {
                let step = self.typing.on_pause_elapsed();
                self.apply_typing_step(step, at_ms);
            }
            TimerKind::CardReveal(index) => {
                self.gallery.reveal_card(usize::from(index), at_ms);
            }
            TimerKind::EasterEgg => {
                self.easter_egg.finish();
                debug!("easter egg finished");
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
