use crate::collision::aabb::Aabb;
use crate::error::{PhysicsError, PhysicsResult};
use crate::math::geometry;
use crate::math::vec2::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> PhysicsResult<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(PhysicsError::InvalidRadius { radius });
        }
        Ok(Self { radius })
    }

    pub fn area(&self) -> f64 {
        geometry::circle_area(self.radius)
    }

    /// Solid disc about its center: `½·m·r²`.
    pub fn inertia(&self, mass: f64) -> f64 {
        0.5 * mass * self.radius * self.radius
    }

    pub fn local_aabb(&self) -> Aabb {
        Aabb::new(Vec2::ZERO, Vec2::new(self.radius, self.radius))
    }
}
