//! The authoritative per-tick kart step.
//!
//! # Ordering
//! Within one tick the state mutates in a fixed order so later stages read
//! consistent earlier results:
//! ground contact -> movement -> boost -> drift -> steer -> tire yaw.
//!
//! # Re-simulation
//! `simulate_tick` is a pure function of `(state at tick start, tick,
//! inputs, body pose)`. Reconciliation may run the same tick index any
//! number of times; identical inputs produce an identical record and body
//! command. Nothing here reads wall-clock time or unseeded randomness.

use shared::{
    GROUND_CAST_SHRINK, GROUND_PROBE_DISTANCE, GroundQuery, KART_COLLIDER_RADIUS, KartConfig,
    KartFlag, KartInput, KartState, TickClock, TickTimer, Vec3, derive_drift_tier,
    forward_from_heading, integrate_heading, step_applied_speed, step_steer,
};

/// Body transform sampled from the physics collaborator at tick start.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BodyPose {
    /// World-space center of the kart's collision sphere.
    pub translation: Vec3,
}

impl BodyPose {
    pub fn new(translation: Vec3) -> Self {
        Self { translation }
    }
}

/// Velocity command handed to the physics collaborator after the step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyCommand {
    /// Authoritative linear velocity for this tick.
    pub linear_velocity: Vec3,
    /// When set, the body's angular velocity is also zeroed. Raised while
    /// the drivability gate is closed to block physics drift.
    pub force_stop: bool,
}

impl BodyCommand {
    fn moving(linear_velocity: Vec3) -> Self {
        Self {
            linear_velocity,
            force_stop: false,
        }
    }

    fn stopped() -> Self {
        Self {
            linear_velocity: Vec3::zeros(),
            force_stop: true,
        }
    }
}

/// Runs one simulation tick for one kart.
pub fn simulate_tick(
    state: &mut KartState,
    now: TickClock,
    input: KartInput,
    pose: BodyPose,
    track: &impl GroundQuery,
    cfg: &KartConfig,
) -> BodyCommand {
    let input = input.clamped();
    let dt = now.delta_time;

    // Ground contact. Resistance is intentionally left at its last value on
    // a miss so a brief loss of contact does not pop the offroad state.
    let cast_radius = (KART_COLLIDER_RADIUS - GROUND_CAST_SHRINK).max(0.01);
    match track.cast_ground(pose.translation, cast_radius, GROUND_PROBE_DISTANCE) {
        Some(contact) => {
            state.flags.insert(KartFlag::Grounded);
            state.ground_resistance = contact.friction;
        }
        None => {
            state.flags.remove(KartFlag::Grounded);
        }
    }

    // Movement. A closed drivability gate zeroes the applied speed and
    // commands a full stop; the velocity is computed from the heading as it
    // stood at tick start.
    let command = if state.can_drive(now) {
        state.applied_speed =
            step_applied_speed(state.applied_speed, input.throttle, state.max_speed, cfg, dt);
        BodyCommand::moving(forward_from_heading(state.heading) * state.applied_speed)
    } else {
        state.applied_speed = 0.0;
        BodyCommand::stopped()
    };

    // Boost expiry and the speed cap derived from it.
    if let Some(end) = state.boost_window.end_tick() {
        if now.tick > end {
            state.boost_window = TickTimer::default();
            state.boost_tier = 0;
        }
    }
    state.max_speed = if state.is_boosting() {
        cfg.max_speed_boosting
    } else {
        cfg.max_speed_normal
    };

    // Drift tier derivation, gated on the engage threshold.
    if input.drift.abs() >= cfg.drift_input_remap[0] {
        let start = *state.drift_start_tick.get_or_insert(now.tick);
        state.drift_tier = derive_drift_tier(&cfg.drift_tiers, now.elapsed_since(start)) as i32;
        state.flags.set(KartFlag::DriftingLeft, input.drift < 0.0);
        state.flags.set(KartFlag::DriftingRight, input.drift > 0.0);
    } else {
        state.drift_tier = shared::DRIFT_TIER_NONE;
        state.drift_start_tick = None;
        state.flags.remove(KartFlag::DriftingLeft);
        state.flags.remove(KartFlag::DriftingRight);
    }

    // Steering: smoothed approach, then heading integration. The hop
    // window swaps in the hop steer strength while it runs.
    state.steer_amount = input.steer;
    state.steer = step_steer(state.steer, state.steer_amount, cfg, dt);
    let steer_strength = if state.is_hopping(now) {
        cfg.hop_steer_strength
    } else {
        cfg.max_steer_strength
    };
    state.heading = integrate_heading(state.heading, state.steer, steer_strength, dt);

    // Tire yaw tracks the raw steer target for wheel presentation,
    // decoupled from the smoothed body steer.
    state.tire_yaw = state.steer_amount * cfg.max_steer_strength;

    command
}

/// Opens a boost window, e.g. from boost-pad contact. Gated by the boost
/// cooldown; returns whether the trigger took effect.
pub fn trigger_boost(state: &mut KartState, now: TickClock, cfg: &KartConfig) -> bool {
    if !state.boost_cooldown.is_expired_or_not_running(now) {
        return false;
    }
    state.boost_tier = state.boost_tier.saturating_add(1);
    state.boost_window = TickTimer::from_seconds(now, cfg.boost_duration);
    state.boost_cooldown = TickTimer::from_seconds(now, cfg.boost_cooldown);
    true
}

/// Starts a hop window. Steering strength switches for its duration.
pub fn trigger_hop(state: &mut KartState, now: TickClock, seconds: f32) {
    state.hop = TickTimer::from_seconds(now, seconds);
}

/// Starts a backfire window, suppressing input for its duration.
pub fn trigger_backfire(state: &mut KartState, now: TickClock, seconds: f32) {
    state.backfire = TickTimer::from_seconds(now, seconds);
}
