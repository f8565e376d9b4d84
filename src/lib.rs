//! A small 2D rigid-body engine: circles and convex polygons, explicit Euler
//! integration, separating-axis collision detection and sequential-impulse
//! contact response.
//!
//! Coordinates follow screen conventions (y grows downward).

pub mod collision;
pub mod common;
pub mod error;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

pub use collision::{Aabb, CollisionInfo};
pub use common::{Material, MaterialProperties};
pub use error::{PhysicsError, PhysicsResult};
pub use math::vec2::Vec2;
pub use objects::rigid_body::{BodyDebugInfo, BodyId, ForceKind, RigidBody};
pub use shapes::{Circle, Geometry, Polygon, Shape, ShapeKind, ShapeOptions};
pub use world::{BodySnapshot, ListenerId, PhysicsWorld, SnapshotGeometry, WorldConfig, SELECTION_TOLERANCE};
