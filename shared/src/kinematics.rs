//! Per-tick motion math: bounded approaches for speed and steer, heading
//! integration, forward-axis derivation.
//!
//! Every function here is a pure function of its arguments. The
//! authoritative step composes them in a fixed order; re-running a tick
//! with the same inputs reproduces the same outputs bit for bit.

use crate::config::KartConfig;
use crate::constants::THROTTLE_DEADZONE;
use crate::ground::Vec3;

/// Moves `current` toward `target` by at most `max_delta`, landing exactly
/// on the target once within range. A non-positive `max_delta` holds the
/// current value rather than stepping away from the target.
#[inline]
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta.max(0.0) {
        return target;
    }
    current + delta.signum() * max_delta.max(0.0)
}

/// Target speed selected by the signed throttle.
///
/// Forward drives toward `max_speed` (the boost step keeps that field
/// current), reverse toward `-reverse_speed`, a released pedal toward zero.
#[inline]
pub fn target_speed(throttle: f32, max_speed: f32, reverse_speed: f32) -> f32 {
    if throttle > THROTTLE_DEADZONE {
        max_speed
    } else if throttle < -THROTTLE_DEADZONE {
        -reverse_speed
    } else {
        0.0
    }
}

/// One tick of applied-speed integration.
///
/// The approach rate is `acceleration` while the pedal is engaged in either
/// direction and `deceleration` while coasting, both scaled by the fixed
/// delta time.
#[inline]
pub fn step_applied_speed(
    applied_speed: f32,
    throttle: f32,
    max_speed: f32,
    cfg: &KartConfig,
    delta_time: f32,
) -> f32 {
    let target = target_speed(throttle, max_speed, cfg.reverse_speed);
    let rate = if throttle.abs() > THROTTLE_DEADZONE {
        cfg.acceleration
    } else {
        cfg.deceleration
    };
    move_towards(applied_speed, target, rate * delta_time)
}

/// One tick of smoothed-steer integration toward the raw steer target.
///
/// Steering into a harder turn uses `steer_acceleration`; relaxing back
/// toward center uses `steer_deceleration`.
#[inline]
pub fn step_steer(steer: f32, steer_target: f32, cfg: &KartConfig, delta_time: f32) -> f32 {
    let rate = if steer_target.abs() >= steer.abs() {
        cfg.steer_acceleration
    } else {
        cfg.steer_deceleration
    };
    move_towards(steer, steer_target, rate * delta_time)
}

/// Integrates the heading by the smoothed steer at the given strength.
#[inline]
pub fn integrate_heading(heading: f32, steer: f32, steer_strength: f32, delta_time: f32) -> f32 {
    heading + steer * steer_strength * delta_time
}

/// World-space forward axis for a heading about +Y. Heading zero faces +Z.
#[inline]
pub fn forward_from_heading(heading: f32) -> Vec3 {
    Vec3::new(heading.sin(), 0.0, heading.cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_towards_clamps_and_lands_exactly() {
        assert_eq!(move_towards(0.0, 10.0, 3.0), 3.0);
        assert_eq!(move_towards(9.0, 10.0, 3.0), 10.0);
        assert_eq!(move_towards(10.0, 10.0, 3.0), 10.0);
        assert_eq!(move_towards(0.0, -10.0, 3.0), -3.0);
        // A degenerate rate holds position instead of stepping away.
        assert_eq!(move_towards(5.0, 10.0, -1.0), 5.0);
    }

    #[test]
    fn throttle_sign_selects_the_target() {
        assert_eq!(target_speed(1.0, 20.0, 8.0), 20.0);
        assert_eq!(target_speed(-1.0, 20.0, 8.0), -8.0);
        assert_eq!(target_speed(0.0, 20.0, 8.0), 0.0);
        // Inside the deadzone reads as released.
        assert_eq!(target_speed(5.0e-4, 20.0, 8.0), 0.0);
    }

    #[test]
    fn coasting_uses_the_deceleration_rate() {
        let cfg = KartConfig {
            acceleration: 10.0,
            deceleration: 40.0,
            ..KartConfig::default()
        };
        let accel = step_applied_speed(0.0, 1.0, 20.0, &cfg, 0.02);
        assert!((accel - 0.2).abs() < 1.0e-6);
        let coast = step_applied_speed(10.0, 0.0, 20.0, &cfg, 0.02);
        assert!((coast - 9.2).abs() < 1.0e-6);
    }

    #[test]
    fn steer_approach_reaches_target_in_bounded_steps() {
        let cfg = KartConfig {
            steer_acceleration: 3.5,
            steer_deceleration: 3.5,
            ..KartConfig::default()
        };
        // 3.5/s at 50 Hz is 0.07 per tick, so full lock takes about 15
        // ticks from center.
        let mut steer = 0.0;
        let mut ticks = 0;
        while steer != 1.0 {
            steer = step_steer(steer, 1.0, &cfg, 0.02);
            ticks += 1;
            assert!(ticks < 32, "steer never reached full lock");
        }
        assert_eq!(ticks, 15);
    }

    #[test]
    fn forward_axis_matches_heading() {
        let f = forward_from_heading(0.0);
        assert!((f - Vec3::new(0.0, 0.0, 1.0)).norm() < 1.0e-6);
        let f = forward_from_heading(std::f32::consts::FRAC_PI_2);
        assert!((f - Vec3::new(1.0, 0.0, 0.0)).norm() < 1.0e-6);
    }

    #[test]
    fn integration_is_reproducible() {
        let cfg = KartConfig::default();
        let a = step_applied_speed(3.25, 1.0, 20.0, &cfg, 0.02);
        let b = step_applied_speed(3.25, 1.0, 20.0, &cfg, 0.02);
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
