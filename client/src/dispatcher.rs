//! Static mapping from field transitions to presentation callbacks.
//!
//! Callbacks are resolved at registration time, one slot per field, and
//! invoked with the field's new value. Fields nobody registered for are
//! ignored; a transition is never an error.

use crate::changes::KartTransition;

type TierCallback = Box<dyn FnMut(i32)>;
type FlagCallback = Box<dyn FnMut(bool)>;

/// Holds the registered side-effect callbacks for one observed kart.
#[derive(Default)]
pub struct TransitionDispatcher {
    boost_tier: Option<TierCallback>,
    drift_tier: Option<TierCallback>,
    spinout: Option<FlagCallback>,
    bumped: Option<FlagCallback>,
    backfire: Option<FlagCallback>,
    hop: Option<FlagCallback>,
}

impl TransitionDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_boost_tier_changed(&mut self, callback: impl FnMut(i32) + 'static) {
        self.boost_tier = Some(Box::new(callback));
    }

    pub fn on_drift_tier_changed(&mut self, callback: impl FnMut(i32) + 'static) {
        self.drift_tier = Some(Box::new(callback));
    }

    pub fn on_spinout_changed(&mut self, callback: impl FnMut(bool) + 'static) {
        self.spinout = Some(Box::new(callback));
    }

    pub fn on_bumped_changed(&mut self, callback: impl FnMut(bool) + 'static) {
        self.bumped = Some(Box::new(callback));
    }

    pub fn on_backfire_changed(&mut self, callback: impl FnMut(bool) + 'static) {
        self.backfire = Some(Box::new(callback));
    }

    pub fn on_hop_changed(&mut self, callback: impl FnMut(bool) + 'static) {
        self.hop = Some(Box::new(callback));
    }

    /// Invokes the registered callback for one transition, if any.
    pub fn dispatch(&mut self, transition: &KartTransition) {
        log::trace!("kart transition: {transition:?}");
        match *transition {
            KartTransition::BoostTier(tier) => invoke_tier(&mut self.boost_tier, tier),
            KartTransition::DriftTier(tier) => invoke_tier(&mut self.drift_tier, tier),
            KartTransition::Spinout(value) => invoke_flag(&mut self.spinout, value),
            KartTransition::Bumped(value) => invoke_flag(&mut self.bumped, value),
            KartTransition::Backfire(value) => invoke_flag(&mut self.backfire, value),
            KartTransition::Hop(value) => invoke_flag(&mut self.hop, value),
        }
    }
}

fn invoke_tier(slot: &mut Option<TierCallback>, value: i32) {
    if let Some(callback) = slot {
        callback(value);
    }
}

fn invoke_flag(slot: &mut Option<FlagCallback>, value: bool) {
    if let Some(callback) = slot {
        callback(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn registered_callback_receives_the_new_value() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut dispatcher = TransitionDispatcher::new();
        dispatcher.on_drift_tier_changed(move |tier| sink.borrow_mut().push(tier));

        dispatcher.dispatch(&KartTransition::DriftTier(0));
        dispatcher.dispatch(&KartTransition::DriftTier(1));
        dispatcher.dispatch(&KartTransition::DriftTier(-1));

        assert_eq!(*seen.borrow(), vec![0, 1, -1]);
    }

    #[test]
    fn unregistered_fields_are_ignored() {
        let mut dispatcher = TransitionDispatcher::new();
        // No callbacks registered at all; dispatch must be a quiet no-op.
        dispatcher.dispatch(&KartTransition::BoostTier(1));
        dispatcher.dispatch(&KartTransition::Hop(true));
    }

    #[test]
    fn re_registration_replaces_the_previous_callback() {
        let first_hits = Rc::new(RefCell::new(0));
        let second_hits = Rc::new(RefCell::new(0));

        let mut dispatcher = TransitionDispatcher::new();
        let counter = Rc::clone(&first_hits);
        dispatcher.on_bumped_changed(move |_| *counter.borrow_mut() += 1);
        let counter = Rc::clone(&second_hits);
        dispatcher.on_bumped_changed(move |_| *counter.borrow_mut() += 1);

        dispatcher.dispatch(&KartTransition::Bumped(true));
        assert_eq!(*first_hits.borrow(), 0);
        assert_eq!(*second_hits.borrow(), 1);
    }
}
