//! The per-kart observer frontend: sample, diff, dispatch.
//!
//! Runs once per render frame, decoupled from the fixed simulation rate.
//! Zero, one or many simulation ticks may have elapsed since the last
//! call; whatever the sampled record shows is diffed against the previous
//! sample and dispatched.

use shared::{KartState, TickClock};

use crate::changes::ChangeDetector;
use crate::dispatcher::TransitionDispatcher;
use crate::snapshot::RenderSnapshot;

/// Owns the change-detection state and callbacks for one observed kart.
#[derive(Default)]
pub struct KartObserver {
    detector: ChangeDetector,
    pub dispatcher: TransitionDispatcher,
}

impl KartObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// One render-frame observation pass. Returns how many transitions
    /// fired.
    pub fn observe(&mut self, state: &KartState, now: TickClock) -> usize {
        let snapshot = RenderSnapshot::sample(state, now);
        let transitions = self.detector.detect(snapshot);
        for transition in &transitions {
            self.dispatcher.dispatch(transition);
        }
        transitions.len()
    }
}
