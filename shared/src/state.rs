//! The replicated kart record.
//!
//! # Model
//! - One `KartState` per kart, mutated exclusively by the authoritative
//!   simulation step for that kart, read-shared by everyone else.
//! - Mutations within one tick are published as a whole record, so an
//!   observer never sees a partially-updated tick.
//! - Every field is a plain value derivable from `(previous state, tick,
//!   inputs)`; re-simulating a tick reproduces the record exactly.
//!
//! Derived accessors (`is_boosting`, `is_bumped`, `is_offroad`, ...) take
//! the clock where the answer depends on the current tick. They are the
//! vocabulary the presentation layer's change detection is built on.

use crate::config::KartConfig;
use crate::constants::OFFROAD_RESISTANCE;
use crate::flags::{KartFlag, KartFlags};
use crate::tick::{Tick, TickClock};
use crate::timer::TickTimer;

/// Stable identifier for one kart within a session.
pub type KartId = u64;

/// Sentinel drift tier meaning "not drifting".
pub const DRIFT_TIER_NONE: i32 = -1;

/// Authoritative per-kart simulation state.
#[derive(Clone, Debug, PartialEq)]
pub struct KartState {
    /// Speed currently applied along the forward axis (m/s, negative in
    /// reverse).
    pub applied_speed: f32,
    /// Current speed cap, maintained by the boost step.
    pub max_speed: f32,
    /// Raw steering target from input, in [-1, 1]. Replicated for wheel
    /// visuals.
    pub steer_amount: f32,
    /// Smoothed steer actually applied to the heading.
    pub steer: f32,
    /// Wheel yaw shown by the presentation layer (radians).
    pub tire_yaw: f32,
    /// Authoritative heading about +Y (radians).
    pub heading: f32,
    /// Dynamic friction of the last ground contact. Intentionally kept when
    /// contact is lost so a brief airborne moment does not pop the offroad
    /// state.
    pub ground_resistance: f32,
    /// Packed status booleans (grounded, spinout, drift direction, race
    /// gate).
    pub flags: KartFlags,
    /// Current boost tier; 0 means no boost.
    pub boost_tier: i32,
    /// Window during which the active boost holds. Not running when
    /// `boost_tier` is 0.
    pub boost_window: TickTimer,
    /// Cooldown gating the next boost trigger.
    pub boost_cooldown: TickTimer,
    /// Current drift tier; [`DRIFT_TIER_NONE`] when not drifting.
    pub drift_tier: i32,
    /// Tick the current drift engagement started on. Cleared on release so
    /// the next drift climbs the ladder from zero.
    pub drift_start_tick: Option<Tick>,
    /// Input-suppression window after a collision bump.
    pub bump: TickTimer,
    /// Input-suppression window while backfiring.
    pub backfire: TickTimer,
    /// Hop window; steering strength switches while it runs.
    pub hop: TickTimer,
}

impl KartState {
    /// State of a freshly spawned kart: normal speed cap, no tiers, all
    /// timers stopped, race gate closed until the session opens it.
    pub fn spawned(cfg: &KartConfig) -> Self {
        Self {
            applied_speed: 0.0,
            max_speed: cfg.max_speed_normal,
            steer_amount: 0.0,
            steer: 0.0,
            tire_yaw: 0.0,
            heading: 0.0,
            ground_resistance: 0.0,
            flags: KartFlags::default(),
            boost_tier: 0,
            boost_window: TickTimer::default(),
            boost_cooldown: TickTimer::default(),
            drift_tier: DRIFT_TIER_NONE,
            drift_start_tick: None,
            bump: TickTimer::default(),
            backfire: TickTimer::default(),
            hop: TickTimer::default(),
        }
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.flags.has(KartFlag::Grounded)
    }

    /// Offroad means grounded on a high-resistance surface.
    #[inline]
    pub fn is_offroad(&self) -> bool {
        self.is_grounded() && self.ground_resistance >= OFFROAD_RESISTANCE
    }

    #[inline]
    pub fn is_spinout(&self) -> bool {
        self.flags.has(KartFlag::Spinout)
    }

    #[inline]
    pub fn set_spinout(&mut self, spinout: bool) {
        self.flags.set(KartFlag::Spinout, spinout);
    }

    /// Whether the session has opened the race for this kart.
    #[inline]
    pub fn race_active(&self) -> bool {
        self.flags.has(KartFlag::RaceActive)
    }

    #[inline]
    pub fn set_race_active(&mut self, active: bool) {
        self.flags.set(KartFlag::RaceActive, active);
    }

    #[inline]
    pub fn is_boosting(&self) -> bool {
        self.boost_tier != 0
    }

    #[inline]
    pub fn is_drifting_left(&self) -> bool {
        self.flags.has(KartFlag::DriftingLeft)
    }

    #[inline]
    pub fn is_drifting_right(&self) -> bool {
        self.flags.has(KartFlag::DriftingRight)
    }

    #[inline]
    pub fn is_drifting(&self) -> bool {
        self.is_drifting_left() || self.is_drifting_right()
    }

    #[inline]
    pub fn is_bumped(&self, now: TickClock) -> bool {
        self.bump.is_running(now)
    }

    #[inline]
    pub fn is_backfiring(&self, now: TickClock) -> bool {
        self.backfire.is_running(now)
    }

    #[inline]
    pub fn is_hopping(&self, now: TickClock) -> bool {
        self.hop.is_running(now)
    }

    /// The composed drivability gate: the race gate is open and no
    /// suppression window is running.
    #[inline]
    pub fn can_drive(&self, now: TickClock) -> bool {
        self.race_active()
            && !self.is_bumped(now)
            && !self.is_backfiring(now)
            && !self.is_spinout()
    }

    /// Seconds of continuous drifting so far, zero when not drifting.
    #[inline]
    pub fn drift_time(&self, now: TickClock) -> f32 {
        match self.drift_start_tick {
            Some(start) if self.drift_tier != DRIFT_TIER_NONE => now.elapsed_since(start),
            _ => 0.0,
        }
    }

    /// Seconds left on the active boost window, zero when not boosting.
    #[inline]
    pub fn boost_time(&self, now: TickClock) -> f32 {
        self.boost_window.remaining_seconds(now)
    }
}
