//! Per-kart tuning surface.
//!
//! One struct enumerating every tunable of the vehicle simulation. Values
//! are validated once at session start; inside the tick loop the config is
//! read-only and never a source of errors.

use crate::tier::DriftTierSpec;

/// Tuning values for one kart archetype.
///
/// Angles are radians, speeds meters per second, durations seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct KartConfig {
    /// Top speed without an active boost.
    pub max_speed_normal: f32,
    /// Top speed while a boost window is open.
    pub max_speed_boosting: f32,
    /// Top speed in reverse (stored positive, applied negative).
    pub reverse_speed: f32,
    /// Applied-speed approach rate while the throttle is engaged (m/s^2).
    pub acceleration: f32,
    /// Applied-speed approach rate while coasting (m/s^2).
    pub deceleration: f32,
    /// Heading change per second at full steer (radians/s).
    pub max_steer_strength: f32,
    /// Smoothed-steer approach rate while steering toward a harder turn
    /// (units of normalized steer per second).
    pub steer_acceleration: f32,
    /// Smoothed-steer approach rate while relaxing back toward center.
    pub steer_deceleration: f32,
    /// `[0]` is the drift-engage threshold on the normalized drift signal;
    /// `[1]` is an unused scale kept for data compatibility.
    pub drift_input_remap: [f32; 2],
    /// Heading change per second at full steer while the hop timer runs.
    pub hop_steer_strength: f32,
    /// Minimum physics-reported forward speed for a wall hit to bump.
    pub speed_to_drift: f32,
    /// Presentation smoothing factor for the drifting body yaw.
    pub drift_rotation_lerp_factor: f32,
    /// Seconds a triggered boost window stays open.
    pub boost_duration: f32,
    /// Seconds after a boost trigger before another may fire.
    pub boost_cooldown: f32,
    /// Drift tier table, in ascending order.
    pub drift_tiers: Vec<DriftTierSpec>,
}

impl Default for KartConfig {
    fn default() -> Self {
        Self {
            max_speed_normal: 20.0,
            max_speed_boosting: 30.0,
            reverse_speed: 8.0,
            acceleration: 15.0,
            deceleration: 20.0,
            max_steer_strength: 35.0f32.to_radians(),
            steer_acceleration: 3.5,
            steer_deceleration: 3.5,
            drift_input_remap: [0.5, 1.0],
            hop_steer_strength: 55.0f32.to_radians(),
            speed_to_drift: 10.0,
            drift_rotation_lerp_factor: 10.0,
            boost_duration: 3.0,
            boost_cooldown: 5.0,
            drift_tiers: vec![
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
            ],
        }
    }
}

impl KartConfig {
    /// Boundary check run once before the tick loop starts.
    ///
    /// Rejects values the loop itself could not recover from. Everything
    /// the loop can clamp (an empty tier table, oversized inputs) is
    /// deliberately allowed through.
    pub fn validate(&self) -> Result<(), &'static str> {
        let rates = [
            self.max_speed_normal,
            self.max_speed_boosting,
            self.reverse_speed,
            self.acceleration,
            self.deceleration,
            self.max_steer_strength,
            self.steer_acceleration,
            self.steer_deceleration,
            self.hop_steer_strength,
            self.speed_to_drift,
            self.drift_rotation_lerp_factor,
            self.boost_duration,
            self.boost_cooldown,
        ];
        if rates.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err("kart tuning values must be finite and non-negative");
        }
        if !self.drift_input_remap[0].is_finite() || self.drift_input_remap[0] <= 0.0 {
            return Err("drift engage threshold must be finite and > 0");
        }
        if self
            .drift_tiers
            .iter()
            .any(|t| !t.boost_duration.is_finite())
        {
            return Err("drift tier durations must be finite");
        }
        Ok(())
    }
}
