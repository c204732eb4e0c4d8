pub mod contact;
pub mod session;
pub mod step;

pub use contact::{Impulse, kart_contact, wall_contact};
pub use session::{NoReplication, ReplicationSink, Session};
pub use step::{
    BodyCommand, BodyPose, simulate_tick, trigger_backfire, trigger_boost, trigger_hop,
};
