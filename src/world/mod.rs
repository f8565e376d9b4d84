pub mod config;
pub mod physics_world;
pub mod resolution;

pub use config::WorldConfig;
pub use physics_world::{BodySnapshot, ListenerId, PhysicsWorld, SnapshotGeometry, SELECTION_TOLERANCE};
