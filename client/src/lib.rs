pub mod changes;
pub mod dispatcher;
pub mod observer;
pub mod snapshot;
pub mod visual;

pub use changes::{ChangeDetector, KartField, KartTransition};
pub use dispatcher::TransitionDispatcher;
pub use observer::KartObserver;
pub use snapshot::RenderSnapshot;
pub use visual::{align_to_ground_normal, drift_yaw_smooth, steer_from_wheel, tire_yaw_rotation};
