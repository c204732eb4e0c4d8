//! The authoritative session: kart registry, fixed tick loop, replication.
//!
//! One `Session` owns every kart's authoritative record and is the only
//! writer. Each `advance()` call runs exactly one tick: karts step in
//! ascending id order (deterministic), and every stepped record is handed
//! to the replication sink as a whole, so observers never see a partial
//! tick. Inputs persist between ticks until overwritten; a kart whose
//! input collaborator went silent keeps its last command, and a kart that
//! never received input runs neutral.

use std::collections::BTreeMap;

use shared::{GroundQuery, KartConfig, KartId, KartInput, KartState, Tick, TickClock, Vec3};

use crate::contact::{self, Impulse};
use crate::step::{self, BodyCommand, BodyPose};

/// Receives every kart's record once per tick, after that kart's step.
///
/// Implementations forward to the network transport. Delivery details are
/// out of scope here; the contract is only that each call carries a
/// complete record for one tick.
pub trait ReplicationSink {
    fn publish(&mut self, id: KartId, tick: Tick, state: &KartState);
}

/// Sink for sessions without observers, e.g. headless tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoReplication;

impl ReplicationSink for NoReplication {
    fn publish(&mut self, _id: KartId, _tick: Tick, _state: &KartState) {}
}

struct Kart {
    state: KartState,
    input: KartInput,
    pose: BodyPose,
}

/// Authoritative simulation session for a set of karts.
pub struct Session {
    clock: TickClock,
    cfg: KartConfig,
    karts: BTreeMap<KartId, Kart>,
    next_id: KartId,
}

impl Session {
    /// Validates the tuning and the fixed delta time before the loop runs;
    /// these are the only fatal conditions in the simulation.
    pub fn new(cfg: KartConfig, delta_time: f32) -> Result<Self, &'static str> {
        cfg.validate()?;
        let clock = TickClock::new(delta_time)?;
        Ok(Self {
            clock,
            cfg,
            karts: BTreeMap::new(),
            next_id: 1,
        })
    }

    pub fn clock(&self) -> TickClock {
        self.clock
    }

    pub fn config(&self) -> &KartConfig {
        &self.cfg
    }

    /// Spawns a kart at the given body translation and returns its id.
    pub fn spawn_kart(&mut self, translation: Vec3) -> KartId {
        let id = self.next_id;
        self.next_id += 1;
        self.karts.insert(id, Kart {
            state: KartState::spawned(&self.cfg),
            input: KartInput::default(),
            pose: BodyPose::new(translation),
        });
        log::info!("spawned kart {id} at tick {}", self.clock.tick);
        id
    }

    /// Removes a kart. Returns false if the id was unknown.
    pub fn despawn_kart(&mut self, id: KartId) -> bool {
        let removed = self.karts.remove(&id).is_some();
        if removed {
            log::info!("despawned kart {id} at tick {}", self.clock.tick);
        } else {
            log::warn!("despawn for unknown kart {id}");
        }
        removed
    }

    /// Read access to a kart's authoritative record.
    pub fn kart(&self, id: KartId) -> Option<&KartState> {
        self.karts.get(&id).map(|k| &k.state)
    }

    /// Latest input from the kart's input collaborator. Missing karts are
    /// logged and skipped; a stale or absent device simply leaves the
    /// previous (or neutral) input in place.
    pub fn set_input(&mut self, id: KartId, input: KartInput) {
        match self.karts.get_mut(&id) {
            Some(kart) => kart.input = input,
            None => log::error!("input for unknown kart {id}"),
        }
    }

    /// Body pose reported by the physics collaborator for the coming tick.
    pub fn sync_body(&mut self, id: KartId, translation: Vec3) {
        match self.karts.get_mut(&id) {
            Some(kart) => kart.pose = BodyPose::new(translation),
            None => log::error!("body sync for unknown kart {id}"),
        }
    }

    /// Opens or closes the race gate for every kart.
    pub fn set_race_active(&mut self, active: bool) {
        for kart in self.karts.values_mut() {
            kart.state.set_race_active(active);
        }
    }

    /// Boost-pad trigger for one kart. Returns whether it took effect.
    pub fn trigger_boost(&mut self, id: KartId) -> bool {
        let clock = self.clock;
        let cfg = &self.cfg;
        match self.karts.get_mut(&id) {
            Some(kart) => step::trigger_boost(&mut kart.state, clock, cfg),
            None => {
                log::error!("boost trigger for unknown kart {id}");
                false
            }
        }
    }

    pub fn trigger_hop(&mut self, id: KartId, seconds: f32) {
        let clock = self.clock;
        if let Some(kart) = self.karts.get_mut(&id) {
            step::trigger_hop(&mut kart.state, clock, seconds);
        }
    }

    pub fn trigger_backfire(&mut self, id: KartId, seconds: f32) {
        let clock = self.clock;
        if let Some(kart) = self.karts.get_mut(&id) {
            step::trigger_backfire(&mut kart.state, clock, seconds);
        }
    }

    pub fn set_spinout(&mut self, id: KartId, spinout: bool) {
        if let Some(kart) = self.karts.get_mut(&id) {
            kart.state.set_spinout(spinout);
        }
    }

    /// Kart-to-kart contact reported by the physics collaborator.
    pub fn report_kart_contact(&mut self, id: KartId, other: KartId) {
        let clock = self.clock;
        let Some(other_speed) = self.karts.get(&other).map(|k| k.state.applied_speed) else {
            log::error!("contact with unknown kart {other}");
            return;
        };
        if let Some(kart) = self.karts.get_mut(&id) {
            contact::kart_contact(&mut kart.state, clock, other_speed);
        }
    }

    /// Wall contact reported by the physics collaborator. The returned
    /// impulse, if any, is for the collaborator to apply.
    pub fn report_wall_contact(
        &mut self,
        id: KartId,
        contact_point: Vec3,
        contact_normal: Vec3,
        forward_speed: f32,
    ) -> Option<Impulse> {
        let clock = self.clock;
        let cfg = &self.cfg;
        let kart = self.karts.get_mut(&id)?;
        contact::wall_contact(
            &mut kart.state,
            clock,
            cfg,
            contact_point,
            contact_normal,
            forward_speed,
        )
    }

    /// Runs one tick for every kart and publishes the results.
    ///
    /// Returns the body command per kart for the physics collaborator.
    pub fn advance<W: GroundQuery, S: ReplicationSink>(
        &mut self,
        track: &W,
        sink: &mut S,
    ) -> Vec<(KartId, BodyCommand)> {
        self.clock.advance();
        let clock = self.clock;

        let mut commands = Vec::with_capacity(self.karts.len());
        for (id, kart) in self.karts.iter_mut() {
            let command =
                step::simulate_tick(&mut kart.state, clock, kart.input, kart.pose, track, &self.cfg);
            sink.publish(*id, clock.tick, &kart.state);
            commands.push((*id, command));
        }
        commands
    }
}
