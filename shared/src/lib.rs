pub mod config;
pub mod constants;
pub mod flags;
pub mod ground;
pub mod input;
pub mod kinematics;
pub mod state;
pub mod tick;
pub mod tier;
pub mod timer;

pub use config::KartConfig;
pub use constants::{
    DEFAULT_DELTA_TIME, GROUND_ALIGN_RATE, GROUND_CAST_SHRINK, GROUND_PROBE_DISTANCE,
    KART_COLLIDER_RADIUS, OFFROAD_RESISTANCE, THROTTLE_DEADZONE,
};
pub use flags::{KartFlag, KartFlags, StatusFlags};
pub use ground::{GroundContact, GroundQuery, Quat, TrackShape, TrackSurface, TrackWorld, Vec3};
pub use input::KartInput;
pub use kinematics::{forward_from_heading, integrate_heading, move_towards, step_applied_speed,
    step_steer, target_speed};
pub use state::{DRIFT_TIER_NONE, KartId, KartState};
pub use tick::{Tick, TickClock};
pub use tier::{DriftTierSpec, TierColor, TierLadder, derive_drift_tier};
pub use timer::TickTimer;
