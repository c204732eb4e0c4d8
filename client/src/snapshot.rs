//! Per-observer render snapshot of the replicated kart record.
//!
//! A snapshot is the subset of the authoritative record the presentation
//! layer reacts to, captured once per render frame. Timer-gated windows
//! are resolved to booleans at the sampling tick, so an expiring timer
//! produces a visible false edge on the next sampled snapshot even though
//! the raw timer field itself never changes on expiry.

use shared::{KartState, TickClock};

/// Presentation-relevant fields, sampled at one render point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderSnapshot {
    pub boost_tier: i32,
    pub drift_tier: i32,
    pub spinout: bool,
    pub bumped: bool,
    pub backfiring: bool,
    pub hopping: bool,
}

impl RenderSnapshot {
    /// Samples the replicated record at the current tick. Read-only; the
    /// observer never writes back into the authoritative state.
    pub fn sample(state: &KartState, now: TickClock) -> Self {
        Self {
            boost_tier: state.boost_tier,
            drift_tier: state.drift_tier,
            spinout: state.is_spinout(),
            bumped: state.is_bumped(now),
            backfiring: state.is_backfiring(now),
            hopping: state.is_hopping(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{KartConfig, TickTimer};

    #[test]
    fn timer_windows_resolve_to_booleans_at_the_sample_tick() {
        let clock = TickClock::new(0.02).unwrap().at(100);
        let mut state = KartState::spawned(&KartConfig::default());
        state.bump = TickTimer::from_seconds(clock, 0.4);

        let during = RenderSnapshot::sample(&state, clock.at(110));
        assert!(during.bumped);

        // Same record, later sample point: the window has lapsed without
        // any field mutation.
        let after = RenderSnapshot::sample(&state, clock.at(121));
        assert!(!after.bumped);
    }

    #[test]
    fn tier_fields_pass_through_unchanged() {
        let clock = TickClock::new(0.02).unwrap().at(5);
        let mut state = KartState::spawned(&KartConfig::default());
        state.boost_tier = 2;
        state.drift_tier = 1;
        state.set_spinout(true);

        let snapshot = RenderSnapshot::sample(&state, clock);
        assert_eq!(snapshot.boost_tier, 2);
        assert_eq!(snapshot.drift_tier, 1);
        assert!(snapshot.spinout);
        assert!(!snapshot.hopping);
    }
}
