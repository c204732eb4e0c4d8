//! Presentation math for the kart body and cockpit controls.
//!
//! Nothing here feeds back into the simulation; these helpers shape what
//! the player sees between authoritative ticks. Rates are bounded so a
//! dropped frame cannot teleport the visuals.

use shared::{GROUND_ALIGN_RATE, Quat, Vec3};

/// Rotates the visual body a bounded step toward the ground contact
/// normal. A miss frame simply calls this with the last known normal.
pub fn align_to_ground_normal(body: Quat, ground_normal: Vec3, delta_time: f32) -> Quat {
    let current_up = body * Vec3::y();
    let target = match Quat::rotation_between(&current_up, &ground_normal) {
        Some(delta) => delta * body,
        // Antiparallel or degenerate normal; hold the current pose rather
        // than flipping through an arbitrary axis.
        None => return body,
    };
    let t = (GROUND_ALIGN_RATE * delta_time).clamp(0.0, 1.0);
    body.try_slerp(&target, t, 1.0e-6).unwrap_or(target)
}

/// Wheel-turn rotation from the replicated tire yaw (radians about +Y).
pub fn tire_yaw_rotation(tire_yaw: f32) -> Quat {
    Quat::from_axis_angle(&Vec3::y_axis(), tire_yaw)
}

/// Normalizes a steering-wheel angle within `[min_angle, max_angle]` to a
/// steer signal in [-1, 1]. A degenerate range reads as centered.
pub fn steer_from_wheel(angle: f32, min_angle: f32, max_angle: f32) -> f32 {
    let span = max_angle - min_angle;
    if !span.is_finite() || span <= 0.0 {
        return 0.0;
    }
    let normalized = ((angle - min_angle) / span).clamp(0.0, 1.0);
    normalized * 2.0 - 1.0
}

/// Exponential-style approach of the visual body yaw toward the drift
/// direction, driven by the configured lerp factor.
pub fn drift_yaw_smooth(current: f32, target: f32, lerp_factor: f32, delta_time: f32) -> f32 {
    let t = (lerp_factor * delta_time).clamp(0.0, 1.0);
    current + (target - current) * t
}
