//! Duration-to-tier derivation for drift and boost ladders.
//!
//! A ladder is an ordered list of per-tier durations. Tier `i` is reached
//! once the elapsed time in the gated condition meets the sum of the first
//! `i` durations, so tier 0 is immediate and each later tier costs its
//! predecessor's duration on top. Elapsed time past the last gate clamps to
//! the last tier rather than indexing out of range.
//!
//! The gating condition itself (lever past the engage threshold, boost pad
//! contact) lives with the caller; resetting it to false clears the elapsed
//! tracking by dropping the recorded start tick.

/// Linear RGB tint associated with a drift tier.
pub type TierColor = [f32; 3];

/// One entry of the drift ladder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriftTierSpec {
    /// Spark/trail tint shown while the tier is held.
    pub color: TierColor,
    /// Seconds of continuous drifting this tier costs. Doubles as the boost
    /// payout duration when the drift is released.
    pub boost_duration: f32,
    /// Seconds into the drift at which this tier begins. Informational for
    /// presentation; the derivation below accumulates `boost_duration`.
    pub start_time: f32,
}

/// Precomputed ladder over per-tier durations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TierLadder {
    thresholds: Vec<f32>,
}

impl TierLadder {
    /// Builds a ladder from per-tier durations. Negative entries are treated
    /// as zero so a malformed table cannot make the ladder non-monotonic.
    pub fn new(thresholds: &[f32]) -> Self {
        Self {
            thresholds: thresholds.iter().map(|t| t.max(0.0)).collect(),
        }
    }

    /// Builds the drift ladder from tier specs, using each tier's
    /// `boost_duration` as its duration gate.
    pub fn from_drift_tiers(tiers: &[DriftTierSpec]) -> Self {
        Self {
            thresholds: tiers.iter().map(|t| t.boost_duration.max(0.0)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// Maps elapsed seconds in the gated condition to a tier index in
    /// `[0, len - 1]`.
    ///
    /// Pure and non-decreasing in `elapsed_seconds`. Degenerate inputs (an
    /// empty ladder, a negative elapsed) resolve to tier 0; this runs inside
    /// the tick loop where halting on bad data is not an option.
    #[inline]
    pub fn derive_tier(&self, elapsed_seconds: f32) -> usize {
        derive_tier_over(self.thresholds.iter().copied(), elapsed_seconds)
    }
}

/// Ladder walk over tier specs without building a [`TierLadder`] first.
/// The per-tick simulation step uses this directly against the config table.
#[inline]
pub fn derive_drift_tier(tiers: &[DriftTierSpec], elapsed_seconds: f32) -> usize {
    derive_tier_over(
        tiers.iter().map(|t| t.boost_duration.max(0.0)),
        elapsed_seconds,
    )
}

fn derive_tier_over(thresholds: impl Iterator<Item = f32>, elapsed_seconds: f32) -> usize {
    let mut tier = 0usize;
    let mut gate = 0.0f32;
    for (index, duration) in thresholds.enumerate() {
        if elapsed_seconds >= gate {
            tier = index;
        } else {
            break;
        }
        gate += duration;
    }
    tier
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder() -> TierLadder {
        TierLadder::new(&[0.5, 0.5, 1.0])
    }

    #[test]
    fn tiers_advance_at_cumulative_gates() {
        let l = ladder();
        // Gates fall at 0.0, 0.5 and 1.0 seconds.
        assert_eq!(l.derive_tier(0.0), 0);
        assert_eq!(l.derive_tier(0.49), 0);
        assert_eq!(l.derive_tier(0.5), 1);
        assert_eq!(l.derive_tier(0.99), 1);
        assert_eq!(l.derive_tier(1.0), 2);
        assert_eq!(l.derive_tier(1.99), 2);
    }

    #[test]
    fn elapsed_past_the_last_gate_clamps_to_the_last_tier() {
        let l = ladder();
        assert_eq!(l.derive_tier(2.0), 2);
        assert_eq!(l.derive_tier(1.0e9), 2);
    }

    #[test]
    fn derivation_is_non_decreasing_in_elapsed_time() {
        let l = ladder();
        let mut last = 0usize;
        let mut elapsed = 0.0f32;
        while elapsed < 5.0 {
            let tier = l.derive_tier(elapsed);
            assert!(tier >= last, "tier dropped at elapsed {elapsed}");
            assert!(tier < l.len());
            last = tier;
            elapsed += 0.02;
        }
    }

    #[test]
    fn degenerate_inputs_resolve_to_tier_zero() {
        assert_eq!(TierLadder::new(&[]).derive_tier(10.0), 0);
        assert_eq!(ladder().derive_tier(-1.0), 0);
        // Negative durations are clamped at construction, so the walk stays
        // monotonic.
        let l = TierLadder::new(&[-2.0, 0.5]);
        assert_eq!(l.derive_tier(0.0), 1);
    }

    #[test]
    fn drift_spec_walk_matches_prebuilt_ladder() {
        let tiers = [
            DriftTierSpec {
                color: [0.2, 0.5, 1.0],
                boost_duration: 0.5,
                start_time: 0.0,
            },
            DriftTierSpec {
                color: [1.0, 0.5, 0.1],
                boost_duration: 0.5,
                start_time: 0.5,
            },
            DriftTierSpec {
                color: [0.8, 0.2, 0.9],
                boost_duration: 1.0,
                start_time: 1.0,
            },
        ];
        let l = TierLadder::from_drift_tiers(&tiers);
        for elapsed in [0.0, 0.3, 0.5, 0.9, 1.0, 3.0] {
            assert_eq!(derive_drift_tier(&tiers, elapsed), l.derive_tier(elapsed));
        }
    }
}
