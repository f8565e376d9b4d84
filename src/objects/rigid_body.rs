use std::fmt;

use crate::collision::aabb::Aabb;
use crate::common::Material;
use crate::integration::integrator::clamp_angular_velocity;
use crate::math::vec2::Vec2;
use crate::shapes::{Geometry, Shape, ShapeKind};

/// Identifier handed out by the world, in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u64);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How [`RigidBody::add_force`] applies its vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForceKind {
    /// Accumulated and turned into acceleration during the next integration.
    #[default]
    Force,
    /// Changes linear velocity immediately by `force * inverse mass`.
    Impulse,
}

/// Values the debug overlay shows for a selected body.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyDebugInfo {
    pub id: BodyId,
    pub position: Vec2,
    pub linear_velocity: Vec2,
    pub angular_velocity: f64,
    pub mass: f64,
    pub restitution: f64,
    pub static_friction: f64,
    pub dynamic_friction: f64,
    pub material: Material,
    pub volume: f64,
}

/// Simulation state bound to one [`Shape`].
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    pub(crate) id: BodyId,
    pub(crate) shape: Shape,
    /// World position of the shape's centroid.
    pub(crate) position: Vec2,
    pub(crate) last_position: Vec2,
    pub(crate) linear_velocity: Vec2,
    pub(crate) angular_velocity: f64,
    /// World-space force accumulated for the current step.
    pub(crate) force: Vec2,
}

impl RigidBody {
    pub fn new(id: BodyId, shape: Shape, position: Vec2) -> Self {
        Self {
            id,
            shape,
            position,
            last_position: position,
            linear_velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            force: Vec2::ZERO,
        }
    }

    /// Applies `force` at the world point `at_point`.
    ///
    /// A point away from the body's position also produces torque
    /// `(at_point - position) × force`.
    pub fn add_force(&mut self, force: Vec2, at_point: Vec2, kind: ForceKind) {
        match kind {
            ForceKind::Force => self.force += force,
            ForceKind::Impulse => self.linear_velocity += force * self.inv_mass(),
        }

        if at_point == self.position {
            return;
        }
        let radius = at_point - self.position;
        self.add_torque(radius.cross(force));
    }

    /// Changes angular velocity by `torque * inverse inertia`, then clamps it.
    pub fn add_torque(&mut self, torque: f64) {
        self.set_angular_velocity(self.angular_velocity + torque * self.inv_inertia());
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn shape_mut(&mut self) -> &mut Shape {
        &mut self.shape
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Moves the body without touching its velocity. This is the only way a
    /// static body changes position.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn last_position(&self) -> Vec2 {
        self.last_position
    }

    pub fn linear_velocity(&self) -> Vec2 {
        self.linear_velocity
    }

    pub fn set_linear_velocity(&mut self, velocity: Vec2) {
        self.linear_velocity = velocity;
    }

    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    /// Sets angular velocity, clamped to the engine limits.
    pub fn set_angular_velocity(&mut self, angular_velocity: f64) {
        self.angular_velocity = clamp_angular_velocity(angular_velocity);
    }

    pub fn force(&self) -> Vec2 {
        self.force
    }

    pub fn angle(&self) -> f64 {
        self.shape.angle()
    }

    pub fn is_static(&self) -> bool {
        self.shape.is_static()
    }

    pub fn material(&self) -> Material {
        self.shape.material()
    }

    pub fn mass(&self) -> f64 {
        self.shape.mass()
    }

    pub fn inv_mass(&self) -> f64 {
        self.shape.inv_mass()
    }

    pub fn inertia(&self) -> f64 {
        self.shape.inertia()
    }

    pub fn inv_inertia(&self) -> f64 {
        self.shape.inv_inertia()
    }

    pub fn volume(&self) -> f64 {
        self.shape.volume()
    }

    pub fn restitution(&self) -> f64 {
        self.shape.restitution()
    }

    pub fn static_friction(&self) -> f64 {
        self.shape.static_friction()
    }

    pub fn dynamic_friction(&self) -> f64 {
        self.shape.dynamic_friction()
    }

    /// Polygon vertices in world space; empty for circles.
    pub fn world_vertices(&self) -> Vec<Vec2> {
        match self.shape.geometry() {
            Geometry::Polygon(polygon) => polygon.world_vertices(self.position),
            Geometry::Circle(_) => Vec::new(),
        }
    }

    pub fn world_aabb(&self) -> Aabb {
        self.shape.aabb().translated(self.position)
    }

    pub fn debug_info(&self) -> BodyDebugInfo {
        BodyDebugInfo {
            id: self.id,
            position: self.position,
            linear_velocity: self.linear_velocity,
            angular_velocity: self.angular_velocity,
            mass: self.mass(),
            restitution: self.restitution(),
            static_friction: self.static_friction(),
            dynamic_friction: self.dynamic_friction(),
            material: self.material(),
            volume: self.volume(),
        }
    }
}
