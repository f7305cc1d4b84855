//! Timer registry: every delayed or repeating callback the greeting uses.
//!
//! Timers are keyed by [`TimerKind`]. Starting a timer always cancels the
//! live timer of the same kind first, so there is never more than one
//! auto-scroll tick, one typing tick or one pending transition.
//!
//! # Deterministic Stepping
//!
//! Nothing here reads a clock. The owner passes `now_ms` into [`TimerRegistry::poll`]
//! and gets back due timers one at a time, earliest first, each tagged with the
//! time it was *due* rather than the time it was polled. Handlers schedule
//! follow-up timers relative to that fire time, so stepping 1000ms in one call
//! produces exactly the same sequence as stepping it in 16ms frames.
//!
//! ```ignore
//! while let Some(fired) = timers.poll(now_ms) {
//!     dispatch(fired.kind, fired.at_ms);
//! }
//! ```

use tracing::{debug, trace};

/// What a timer drives. Also the replacement key.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum TimerKind {
    /// Delay between deactivating one screen and activating the next.
    Transition,
    /// Repeating auto-scroll tick.
    AutoScroll,
    /// Repeating per-character typing tick.
    TypingChar,
    /// Pause after a text block completes.
    TypingPause,
    /// Staggered reveal of one photo card.
    CardReveal(u8),
    /// End of the gift-icon bounce animation.
    EasterEgg,
}

/// A timer that came due.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Fired {
    pub kind: TimerKind,
    /// Scheduled fire time (may be earlier than the poll time).
    pub at_ms: u64,
}

#[derive(Clone, Copy, Debug)]
struct TimerEntry {
    kind: TimerKind,
    /// Start order, breaks ties between equal due times.
    seq: u32,
    due_ms: u64,
    /// `Some` for repeating timers.
    interval_ms: Option<u64>,
}

/// Registry of live timers.
#[derive(Debug, Default)]
pub struct TimerRegistry {
    entries: Vec<TimerEntry>,
    next_seq: u32,
}

impl TimerRegistry {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    /// Schedule a one-shot timer `delay_ms` after `now_ms`, replacing any live
    /// timer of the same kind.
    pub fn start_timeout(
        &mut self,
        kind: TimerKind,
        delay_ms: u64,
        now_ms: u64,
    ) {
        self.insert(kind, now_ms.saturating_add(delay_ms), None);
    }

    /// Schedule a repeating timer first firing `interval_ms` after `now_ms`,
    /// replacing any live timer of the same kind.
    ///
    /// A zero interval is treated as 1ms so a poll loop always terminates.
    pub fn start_interval(
        &mut self,
        kind: TimerKind,
        interval_ms: u64,
        now_ms: u64,
    ) {
        let interval_ms = interval_ms.max(1);
        self.insert(kind, now_ms.saturating_add(interval_ms), Some(interval_ms));
    }

    fn insert(
        &mut self,
        kind: TimerKind,
        due_ms: u64,
        interval_ms: Option<u64>,
    ) {
        if self.cancel(kind) {
            debug!(?kind, "replaced live timer");
        }
        self.entries.push(TimerEntry {
            kind,
            seq: self.next_seq,
            due_ms,
            interval_ms,
        });
        self.next_seq = self.next_seq.wrapping_add(1);
        trace!(?kind, due_ms, ?interval_ms, "timer started");
    }

    /// Cancel the live timer of `kind`. Returns `true` if one was live.
    pub fn cancel(
        &mut self,
        kind: TimerKind,
    ) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.kind != kind);
        before != self.entries.len()
    }

    /// Cancel every timer matching `predicate`.
    pub fn cancel_where(
        &mut self,
        mut predicate: impl FnMut(TimerKind) -> bool,
    ) {
        self.entries.retain(|entry| !predicate(entry.kind));
    }

    /// Whether a timer of `kind` is live.
    #[inline]
    pub fn is_active(
        &self,
        kind: TimerKind,
    ) -> bool {
        self.entries.iter().any(|entry| entry.kind == kind)
    }

    /// Number of live timers.
    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    /// Whether no timers are live.
    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Pop the earliest timer due at or before `now_ms`.
    ///
    /// Ties are broken by start order. Repeating timers are rescheduled one
    /// interval after their due time; one-shot timers are removed.
    pub fn poll(
        &mut self,
        now_ms: u64,
    ) -> Option<Fired> {
        let (idx, entry) = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due_ms <= now_ms)
            .min_by_key(|(_, entry)| (entry.due_ms, entry.seq))
            .map(|(idx, entry)| (idx, *entry))?;

        match entry.interval_ms {
            Some(interval) => self.entries[idx].due_ms = entry.due_ms.saturating_add(interval),
            None => {
                self.entries.remove(idx);
            }
        }

        trace!(kind = ?entry.kind, at_ms = entry.due_ms, "timer fired");
        Some(Fired {
            kind: entry.kind,
            at_ms: entry.due_ms,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(
        timers: &mut TimerRegistry,
        now_ms: u64,
    ) -> Vec<(TimerKind, u64)> {
        let mut out = Vec::new();
        while let Some(fired) = timers.poll(now_ms) {
            out.push((fired.kind, fired.at_ms));
        }
        out
    }

    #[test]
    fn test_registry_starts_empty() {
        let mut timers = TimerRegistry::new();
        assert!(timers.is_empty());
        assert!(timers.poll(u64::MAX).is_none());
    }

    #[test]
    fn test_timeout_fires_once() {
        let mut timers = TimerRegistry::new();
        timers.start_timeout(TimerKind::Transition, 100, 0);

        assert!(timers.poll(99).is_none(), "Should not fire before due");
        assert_eq!(drain(&mut timers, 100), vec![(TimerKind::Transition, 100)]);
        assert!(timers.is_empty(), "One-shot timer should be removed after firing");
        assert!(timers.poll(1000).is_none());
    }

    #[test]
    fn test_interval_repeats_at_due_times() {
        let mut timers = TimerRegistry::new();
        timers.start_interval(TimerKind::AutoScroll, 16, 0);

        let fired = drain(&mut timers, 50);
        assert_eq!(
            fired,
            vec![(TimerKind::AutoScroll, 16), (TimerKind::AutoScroll, 32), (TimerKind::AutoScroll, 48)],
            "Interval should catch up at its own cadence"
        );
        assert!(timers.is_active(TimerKind::AutoScroll), "Interval stays live");
        assert!(timers.poll(63).is_none());
        assert_eq!(drain(&mut timers, 64), vec![(TimerKind::AutoScroll, 64)]);
    }

    #[test]
    fn test_start_replaces_same_kind() {
        let mut timers = TimerRegistry::new();
        timers.start_interval(TimerKind::AutoScroll, 16, 0);
        timers.start_interval(TimerKind::AutoScroll, 16, 5);

        assert_eq!(timers.len(), 1, "Only one auto-scroll timer may be live");
        assert!(timers.poll(16).is_none(), "Replaced timer must not fire");
        assert_eq!(drain(&mut timers, 21), vec![(TimerKind::AutoScroll, 21)]);
    }

    #[test]
    fn test_different_kinds_coexist() {
        let mut timers = TimerRegistry::new();
        timers.start_interval(TimerKind::AutoScroll, 16, 0);
        timers.start_interval(TimerKind::TypingChar, 50, 0);
        timers.start_timeout(TimerKind::CardReveal(0), 0, 0);
        timers.start_timeout(TimerKind::CardReveal(1), 200, 0);
        assert_eq!(timers.len(), 4);
    }

    #[test]
    fn test_cancel() {
        let mut timers = TimerRegistry::new();
        timers.start_interval(TimerKind::AutoScroll, 16, 0);

        assert!(timers.cancel(TimerKind::AutoScroll));
        assert!(!timers.cancel(TimerKind::AutoScroll), "Second cancel is a no-op");
        assert!(timers.poll(1000).is_none());
    }

    #[test]
    fn test_cancel_where() {
        let mut timers = TimerRegistry::new();
        for i in 0..3 {
            timers.start_timeout(TimerKind::CardReveal(i), u64::from(i) * 200, 0);
        }
        timers.start_interval(TimerKind::AutoScroll, 16, 0);

        timers.cancel_where(|kind| matches!(kind, TimerKind::CardReveal(_)));
        assert_eq!(timers.len(), 1);
        assert!(timers.is_active(TimerKind::AutoScroll));
    }

    #[test]
    fn test_poll_orders_by_due_then_start_order() {
        let mut timers = TimerRegistry::new();
        timers.start_timeout(TimerKind::CardReveal(1), 200, 0);
        timers.start_timeout(TimerKind::CardReveal(0), 0, 0);
        timers.start_timeout(TimerKind::EasterEgg, 200, 0);

        assert_eq!(
            drain(&mut timers, 500),
            vec![
                (TimerKind::CardReveal(0), 0),
                (TimerKind::CardReveal(1), 200),
                (TimerKind::EasterEgg, 200),
            ]
        );
    }

    #[test]
    fn test_zero_interval_terminates() {
        let mut timers = TimerRegistry::new();
        timers.start_interval(TimerKind::TypingChar, 0, 0);
        assert_eq!(drain(&mut timers, 3).len(), 3, "Zero interval is clamped to 1ms");
    }
}
