//! Snapshot diffing between render frames.
//!
//! # Model
//! Each tracked field lives in a tiny state machine: `Unseen` until the
//! first snapshot arrives, then `Observed(value)`. A later snapshot whose
//! value differs fires exactly one change event carrying the field identity
//! and the new value.
//!
//! # Guarantees
//! - No event for an unchanged field, no missed event for a changed one,
//!   per pair of consecutive sampled snapshots.
//! - Observation is render-rate bounded by design: a transition that
//!   appears and fully reverts between two samples is never seen, and one
//!   that is visible at the sample point is seen exactly once. This is not
//!   a delivery log of every simulated tick.

use crate::snapshot::RenderSnapshot;

/// Identity of one tracked field of the replicated record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KartField {
    BoostTier,
    DriftTier,
    Spinout,
    Bumped,
    Backfire,
    Hop,
}

/// One observed transition: the field plus its new value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KartTransition {
    BoostTier(i32),
    DriftTier(i32),
    Spinout(bool),
    Bumped(bool),
    Backfire(bool),
    Hop(bool),
}

impl KartTransition {
    pub fn field(&self) -> KartField {
        match self {
            KartTransition::BoostTier(_) => KartField::BoostTier,
            KartTransition::DriftTier(_) => KartField::DriftTier,
            KartTransition::Spinout(_) => KartField::Spinout,
            KartTransition::Bumped(_) => KartField::Bumped,
            KartTransition::Backfire(_) => KartField::Backfire,
            KartTransition::Hop(_) => KartField::Hop,
        }
    }
}

/// Diffs consecutive render snapshots for one kart.
#[derive(Debug, Default)]
pub struct ChangeDetector {
    last: Option<RenderSnapshot>,
}

impl ChangeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compares `current` against the previously observed snapshot and
    /// returns one transition per differing field. The first observation
    /// establishes the baseline and reports nothing.
    pub fn detect(&mut self, current: RenderSnapshot) -> Vec<KartTransition> {
        let mut transitions = Vec::new();
        if let Some(last) = self.last {
            if current.boost_tier != last.boost_tier {
                transitions.push(KartTransition::BoostTier(current.boost_tier));
            }
            if current.drift_tier != last.drift_tier {
                transitions.push(KartTransition::DriftTier(current.drift_tier));
            }
            if current.spinout != last.spinout {
                transitions.push(KartTransition::Spinout(current.spinout));
            }
            if current.bumped != last.bumped {
                transitions.push(KartTransition::Bumped(current.bumped));
            }
            if current.backfiring != last.backfiring {
                transitions.push(KartTransition::Backfire(current.backfiring));
            }
            if current.hopping != last.hopping {
                transitions.push(KartTransition::Hop(current.hopping));
            }
        }
        self.last = Some(current);
        transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neutral() -> RenderSnapshot {
        RenderSnapshot {
            boost_tier: 0,
            drift_tier: -1,
            spinout: false,
            bumped: false,
            backfiring: false,
            hopping: false,
        }
    }

    #[test]
    fn first_observation_reports_nothing() {
        let mut detector = ChangeDetector::new();
        assert!(detector.detect(neutral()).is_empty());
    }

    #[test]
    fn unchanged_snapshots_fire_nothing() {
        let mut detector = ChangeDetector::new();
        detector.detect(neutral());
        for _ in 0..10 {
            assert!(detector.detect(neutral()).is_empty());
        }
    }

    #[test]
    fn each_changed_field_fires_exactly_once() {
        let mut detector = ChangeDetector::new();
        detector.detect(neutral());

        let mut changed = neutral();
        changed.drift_tier = 0;
        changed.bumped = true;
        let transitions = detector.detect(changed);
        assert_eq!(transitions, vec![
            KartTransition::DriftTier(0),
            KartTransition::Bumped(true),
        ]);

        // Holding the same values fires nothing further.
        assert!(detector.detect(changed).is_empty());
    }

    #[test]
    fn event_count_equals_differing_adjacent_pairs() {
        // Sequence of sampled drift tiers, including a revert.
        let tiers = [-1, -1, 0, 0, 1, 1, 1, -1, -1, 0];
        let mut detector = ChangeDetector::new();
        let mut fired = 0usize;
        for tier in tiers {
            let mut snapshot = neutral();
            snapshot.drift_tier = tier;
            fired += detector
                .detect(snapshot)
                .iter()
                .filter(|t| t.field() == KartField::DriftTier)
                .count();
        }
        let expected = tiers.windows(2).filter(|w| w[0] != w[1]).count();
        assert_eq!(fired, expected);
    }

    #[test]
    fn transition_reverting_between_samples_is_coalesced_away() {
        // A one-tick bump that starts and lapses entirely between two
        // render samples never surfaces.
        let mut detector = ChangeDetector::new();
        detector.detect(neutral());
        assert!(detector.detect(neutral()).is_empty());

        // The same bump sampled mid-window surfaces exactly once each way.
        let mut bumped = neutral();
        bumped.bumped = true;
        assert_eq!(detector.detect(bumped), vec![KartTransition::Bumped(true)]);
        assert_eq!(detector.detect(neutral()), vec![KartTransition::Bumped(
            false
        )]);
    }
}
