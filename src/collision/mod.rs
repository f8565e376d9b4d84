pub mod aabb;
pub mod detection;
pub mod info;

pub use aabb::Aabb;
pub use detection::check_collision;
pub use info::CollisionInfo;
