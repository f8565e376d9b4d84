pub mod rigid_body;

pub use rigid_body::{BodyDebugInfo, BodyId, ForceKind, RigidBody};
