pub mod circle;
pub mod polygon;

pub use circle::Circle;
pub use polygon::Polygon;

use tracing::warn;

use crate::collision::aabb::Aabb;
use crate::common::limits::{DEPTH, MAX_INERTIA, MAX_MASS, MIN_INERTIA, MIN_MASS};
use crate::common::Material;
use crate::error::PhysicsResult;
use crate::integration::integrator::wrap_angle;
use crate::math::vec2::Vec2;

/// The geometric part of a shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Circle(Circle),
    Polygon(Polygon),
}

/// Which [`Geometry`] variant a shape carries. Collision dispatch is keyed on
/// pairs of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Polygon,
}

/// Construction flags shared by every shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeOptions {
    /// Static shapes get zero mass and never move on their own.
    pub is_static: bool,
    pub material: Material,
    /// Whether world gravity acts on the body.
    pub gravity: bool,
}

impl Default for ShapeOptions {
    fn default() -> Self {
        Self {
            is_static: false,
            material: Material::Solid,
            gravity: true,
        }
    }
}

impl ShapeOptions {
    pub fn fixed() -> Self {
        Self {
            is_static: true,
            ..Self::default()
        }
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_gravity(mut self, gravity: bool) -> Self {
        self.gravity = gravity;
        self
    }
}

/// Geometry plus the physical properties derived from it and its material.
///
/// Everything except the rotation angle (and the polygon vertices that follow
/// it) is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    geometry: Geometry,
    material: Material,
    density: f64,
    angle: f64,
    volume: f64,
    mass: f64,
    inv_mass: f64,
    inertia: f64,
    inv_inertia: f64,
    restitution: f64,
    static_friction: f64,
    dynamic_friction: f64,
    gravity: bool,
    aabb: Aabb,
}

impl Shape {
    pub fn circle(radius: f64, options: ShapeOptions) -> PhysicsResult<Self> {
        let circle = Circle::new(radius).inspect_err(|err| warn!(%err, "rejected circle shape"))?;
        Ok(Self::build(Geometry::Circle(circle), options))
    }

    /// Builds a polygon shape. The vertices are re-expressed relative to
    /// their centroid, so the caller's coordinate frame is not preserved.
    pub fn polygon(vertices: Vec<Vec2>, options: ShapeOptions) -> PhysicsResult<Self> {
        let polygon = Polygon::new(vertices).inspect_err(|err| warn!(%err, "rejected polygon shape"))?;
        Ok(Self::build(Geometry::Polygon(polygon), options))
    }

    /// Axis-aligned rectangle centered on its own origin.
    pub fn rectangle(width: f64, height: f64, options: ShapeOptions) -> PhysicsResult<Self> {
        let (hw, hh) = (width * 0.5, height * 0.5);
        Self::polygon(
            vec![
                Vec2::new(-hw, -hh),
                Vec2::new(hw, -hh),
                Vec2::new(hw, hh),
                Vec2::new(-hw, hh),
            ],
            options,
        )
    }

    fn build(mut geometry: Geometry, options: ShapeOptions) -> Self {
        let props = options.material.properties();

        let volume = match &geometry {
            Geometry::Circle(circle) => circle.area(),
            Geometry::Polygon(polygon) => polygon.area(),
        };

        let mut aabb = match &geometry {
            Geometry::Circle(circle) => circle.local_aabb(),
            Geometry::Polygon(polygon) => polygon.local_aabb(),
        };

        if let Geometry::Polygon(polygon) = &mut geometry {
            let centroid = polygon.recenter();
            aabb = aabb.translated(-centroid);
        }

        let mass = if options.is_static {
            0.0
        } else {
            (volume * props.density * DEPTH).clamp(MIN_MASS, MAX_MASS)
        };

        let inertia = match &geometry {
            Geometry::Circle(circle) => circle.inertia(mass),
            Geometry::Polygon(polygon) => polygon.inertia(mass),
        }
        .clamp(MIN_INERTIA, MAX_INERTIA);

        Self {
            geometry,
            material: options.material,
            density: props.density,
            angle: 0.0,
            volume,
            mass,
            inv_mass: inverse(mass),
            inertia,
            inv_inertia: inverse(inertia),
            restitution: props.restitution,
            static_friction: props.static_friction,
            dynamic_friction: props.dynamic_friction,
            gravity: options.gravity,
            aabb,
        }
    }

    /// Advances the angle by `delta`, wrapped into `[0, 2π)`. Polygon vertices
    /// turn by `-delta`, matching the screen-space sense of the angle.
    pub fn rotate(&mut self, delta: f64) {
        self.angle = wrap_angle(self.angle + delta);
        if let Geometry::Polygon(polygon) = &mut self.geometry {
            polygon.rotate_vertices(-delta);
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self.geometry {
            Geometry::Circle(_) => ShapeKind::Circle,
            Geometry::Polygon(_) => ShapeKind::Polygon,
        }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match &self.geometry {
            Geometry::Circle(circle) => Some(circle),
            Geometry::Polygon(_) => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&Polygon> {
        match &self.geometry {
            Geometry::Polygon(polygon) => Some(polygon),
            Geometry::Circle(_) => None,
        }
    }

    pub fn is_static(&self) -> bool {
        self.mass == 0.0
    }

    pub fn material(&self) -> Material {
        self.material
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn inv_mass(&self) -> f64 {
        self.inv_mass
    }

    pub fn inertia(&self) -> f64 {
        self.inertia
    }

    pub fn inv_inertia(&self) -> f64 {
        self.inv_inertia
    }

    pub fn restitution(&self) -> f64 {
        self.restitution
    }

    pub fn set_restitution(&mut self, restitution: f64) {
        self.restitution = restitution.clamp(0.0, 1.0);
    }

    pub fn static_friction(&self) -> f64 {
        self.static_friction
    }

    pub fn set_static_friction(&mut self, friction: f64) {
        self.static_friction = friction.max(0.0);
    }

    pub fn dynamic_friction(&self) -> f64 {
        self.dynamic_friction
    }

    pub fn set_dynamic_friction(&mut self, friction: f64) {
        self.dynamic_friction = friction.max(0.0);
    }

    pub fn affected_by_gravity(&self) -> bool {
        self.gravity
    }

    pub fn set_affected_by_gravity(&mut self, gravity: bool) {
        self.gravity = gravity;
    }

    /// Bounding box in body-local space, as computed at construction.
    pub fn aabb(&self) -> Aabb {
        self.aabb
    }
}

fn inverse(value: f64) -> f64 {
    if value > 0.0 {
        1.0 / value
    } else {
        0.0
    }
}
