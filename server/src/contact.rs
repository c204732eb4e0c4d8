//! Collision reactions reported by the physics collaborator.
//!
//! Contacts arrive as (normal, impacting speed) pairs. The rules here only
//! decide bump windows and impulse commands; resolving the impulse is the
//! physics collaborator's job. A contact reported while a bump window is
//! already running is ignored so repeated contact callbacks cannot extend
//! the window every tick.

use shared::{KartConfig, KartState, TickClock, TickTimer, Vec3, forward_from_heading};

/// Bump window after losing a kart-to-kart shove (seconds).
const KART_BUMP_SECONDS: f32 = 0.4;

/// Base bump window for a wall hit, scaled by impact alignment (seconds).
const WALL_BUMP_SECONDS: f32 = 0.8;

/// Floor on the impact alignment factor so even grazing wall hits push
/// back a little.
const WALL_DOT_FLOOR: f32 = 0.25;

/// Velocity-change impulse for the physics collaborator to apply.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Impulse {
    /// World-space application point.
    pub point: Vec3,
    /// Velocity change, in meters per second.
    pub velocity_change: Vec3,
}

/// Contact with another kart. The slower kart gets bumped.
pub fn kart_contact(state: &mut KartState, now: TickClock, other_applied_speed: f32) {
    if state.is_bumped(now) {
        return;
    }
    if state.applied_speed < other_applied_speed {
        state.bump = TickTimer::from_seconds(now, KART_BUMP_SECONDS);
    }
}

/// Contact with a wall.
///
/// Only hits above the configured `speed_to_drift` react: the kart is
/// knocked back along the contact normal proportionally to how squarely it
/// hit, and a bump window scaled by the same factor suppresses input.
/// `forward_speed` is the physics-reported speed along the body's forward
/// axis at impact.
pub fn wall_contact(
    state: &mut KartState,
    now: TickClock,
    cfg: &KartConfig,
    contact_point: Vec3,
    contact_normal: Vec3,
    forward_speed: f32,
) -> Option<Impulse> {
    if state.is_bumped(now) {
        return None;
    }
    if forward_speed <= cfg.speed_to_drift {
        return None;
    }

    let forward = forward_from_heading(state.heading);
    let dot = contact_normal.dot(&forward).abs().max(WALL_DOT_FLOOR);
    state.bump = TickTimer::from_seconds(now, WALL_BUMP_SECONDS * dot);

    Some(Impulse {
        point: contact_point,
        velocity_change: contact_normal * (state.applied_speed * dot),
    })
}
