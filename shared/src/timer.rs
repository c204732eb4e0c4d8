//! Tick-scoped expiry timers.
//!
//! A `TickTimer` is an immutable `(start_tick, end_tick)` pair used to gate
//! time-limited behavior (bump, backfire, hop, boost cooldown). Timers are
//! replaced wholesale, never mutated, so re-simulating a tick that created a
//! timer recreates it identically.
//!
//! A timer created for `s <= 0` seconds still spans its creation tick: it
//! reads as running on the tick it was created and expired from the next
//! tick on. Bump and backfire windows rely on this to suppress input for at
//! least one full tick.

use crate::tick::{Tick, TickClock};

/// A start/end tick pair, or the "not running" default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickTimer {
    start_tick: Tick,
    end_tick: Option<Tick>,
}

impl TickTimer {
    /// Starts a timer covering `seconds` from the current tick.
    ///
    /// The duration is rounded to whole ticks; non-positive durations yield
    /// a timer that ends on its creation tick.
    pub fn from_seconds(now: TickClock, seconds: f32) -> Self {
        Self {
            start_tick: now.tick,
            end_tick: Some(now.tick + now.seconds_to_ticks(seconds)),
        }
    }

    /// True once the current tick has moved past the end tick, and for
    /// timers that were never started. Querying a default timer is defined
    /// behavior, not a fault.
    #[inline]
    pub fn is_expired_or_not_running(&self, now: TickClock) -> bool {
        match self.end_tick {
            None => true,
            Some(end) => now.tick > end,
        }
    }

    /// True while the timer spans the current tick.
    #[inline]
    pub fn is_running(&self, now: TickClock) -> bool {
        !self.is_expired_or_not_running(now)
    }

    /// Seconds left on the timer, zero when expired or not running.
    #[inline]
    pub fn remaining_seconds(&self, now: TickClock) -> f32 {
        match self.end_tick {
            Some(end) if now.tick <= end => (end - now.tick) as f32 * now.delta_time,
            _ => 0.0,
        }
    }

    /// The tick this timer was started on. Meaningful only while running.
    #[inline]
    pub fn start_tick(&self) -> Tick {
        self.start_tick
    }

    /// The last tick the timer spans, if it was ever started.
    #[inline]
    pub fn end_tick(&self) -> Option<Tick> {
        self.end_tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock() -> TickClock {
        TickClock::new(0.02).unwrap()
    }

    #[test]
    fn default_timer_reads_as_not_running() {
        let t = TickTimer::default();
        assert!(t.is_expired_or_not_running(clock()));
        assert_eq!(t.remaining_seconds(clock()), 0.0);
        assert_eq!(t.end_tick(), None);
    }

    #[test]
    fn covers_creation_through_end_tick_then_expires() {
        // 0.4 s at dt=0.02 spans ticks 100..=120; tick 121 is the first
        // expired tick.
        let now = clock().at(100);
        let t = TickTimer::from_seconds(now, 0.4);
        assert_eq!(t.start_tick(), 100);
        assert_eq!(t.end_tick(), Some(120));

        for tick in 100..=120 {
            assert!(!t.is_expired_or_not_running(now.at(tick)), "tick {tick}");
        }
        assert!(t.is_expired_or_not_running(now.at(121)));
        assert!(t.is_expired_or_not_running(now.at(5000)));
    }

    #[test]
    fn zero_duration_is_active_for_exactly_one_tick() {
        let now = clock().at(7);
        for seconds in [0.0, -1.0, 0.004] {
            let t = TickTimer::from_seconds(now, seconds);
            assert_eq!(t.end_tick(), Some(7), "seconds {seconds}");
            assert!(t.is_running(now));
            assert!(t.is_expired_or_not_running(now.at(8)));
        }
    }

    #[test]
    fn remaining_seconds_counts_down_to_zero() {
        let now = clock().at(100);
        let t = TickTimer::from_seconds(now, 0.4);
        assert!((t.remaining_seconds(now) - 0.4).abs() < 1.0e-6);
        assert!((t.remaining_seconds(now.at(110)) - 0.2).abs() < 1.0e-6);
        assert_eq!(t.remaining_seconds(now.at(120)), 0.0);
        assert_eq!(t.remaining_seconds(now.at(121)), 0.0);
    }

    #[test]
    fn expiry_is_monotonic_in_tick() {
        let now = clock().at(30);
        let t = TickTimer::from_seconds(now, 1.0);
        let mut was_expired = false;
        for tick in 30..200 {
            let expired = t.is_expired_or_not_running(now.at(tick));
            assert!(!(was_expired && !expired), "expiry flapped at tick {tick}");
            was_expired = expired;
        }
        assert!(was_expired);
    }
}
