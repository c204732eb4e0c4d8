/*!
Fixed engine tolerances for the kart simulation.

These are the non-tunable constants of the tick loop: probe distances,
thresholds and presentation rates that hold for every kart regardless of its
[`KartConfig`](crate::config::KartConfig). Per-kart tuning lives in the
config struct; anything here is part of the simulation contract itself.

Notes
- Distances are in meters, durations in seconds, angles in radians.
- The tick loop never halts on bad data, so thresholds are chosen as
  practical world-space values rather than machine epsilons.
*/

/// Radius of the kart's spherical collision volume (meters).
pub const KART_COLLIDER_RADIUS: f32 = 0.35;

/// Amount the collider radius is shrunk by for the downward ground cast
/// (meters). Keeps the cast from grazing walls the body itself clears.
pub const GROUND_CAST_SHRINK: f32 = 0.1;

/// Maximum downward cast distance when probing for ground (meters).
/// Short enough that briefly leaving a ramp reads as airborne.
pub const GROUND_PROBE_DISTANCE: f32 = 0.3;

/// Surfaces at or above this dynamic friction count as offroad.
pub const OFFROAD_RESISTANCE: f32 = 0.2;

/// Throttle magnitudes below this are treated as a released pedal.
pub const THROTTLE_DEADZONE: f32 = 1.0e-3;

/// Rate at which the visual body rotates toward the ground contact normal
/// (fraction per second, applied as a bounded slerp by the presentation
/// layer).
pub const GROUND_ALIGN_RATE: f32 = 7.5;

/// Default fixed step duration in seconds (50 Hz).
pub const DEFAULT_DELTA_TIME: f32 = 0.02;
