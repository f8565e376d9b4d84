use std::fmt;

use tracing::{debug, trace};

use crate::collision::detection::check_collision;
use crate::collision::info::CollisionInfo;
use crate::error::{PhysicsError, PhysicsResult};
use crate::integration::integrator;
use crate::math::vec2::Vec2;
use crate::objects::rigid_body::{BodyDebugInfo, BodyId, ForceKind, RigidBody};
use crate::shapes::{Geometry, Shape, ShapeKind};

use super::config::WorldConfig;
use super::resolution;

/// Half-size of the box [`PhysicsWorld::body_at`] is usually called with.
pub const SELECTION_TOLERANCE: f64 = 10.0;

/// Handle returned by [`PhysicsWorld::add_collision_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type CollisionListener = Box<dyn FnMut(&CollisionInfo, &RigidBody, &RigidBody)>;

/// Drawable geometry of one body, in world space.
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotGeometry {
    Circle { radius: f64 },
    Polygon { vertices: Vec<Vec2> },
}

/// What a renderer needs to draw one body.
#[derive(Debug, Clone, PartialEq)]
pub struct BodySnapshot {
    pub id: BodyId,
    pub position: Vec2,
    pub angle: f64,
    pub kind: ShapeKind,
    pub geometry: SnapshotGeometry,
}

/// Owns every body and advances them together.
///
/// Bodies keep their insertion order. That order decides which body of a
/// colliding pair is resolved as `A`, so it affects the numeric outcome.
pub struct PhysicsWorld {
    bodies: Vec<RigidBody>,
    config: WorldConfig,
    /// Gravity the world was created with, restored by `reset_gravity`.
    initial_gravity: Vec2,
    next_body_id: u64,
    listeners: Vec<(ListenerId, CollisionListener)>,
    next_listener_id: u64,
}

impl PhysicsWorld {
    pub fn new() -> Self {
        Self::with_config(WorldConfig::default())
    }

    pub fn with_config(config: WorldConfig) -> Self {
        Self {
            bodies: Vec::new(),
            initial_gravity: config.gravity,
            config,
            next_body_id: 0,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Adds a body at `position` and returns its id.
    pub fn add_body(&mut self, shape: Shape, position: Vec2) -> BodyId {
        let id = BodyId(self.next_body_id);
        self.next_body_id += 1;

        debug!(
            %id,
            kind = ?shape.kind(),
            material = ?shape.material(),
            is_static = shape.is_static(),
            mass = shape.mass(),
            "added body"
        );
        self.bodies.push(RigidBody::new(id, shape, position));
        id
    }

    /// Removes every body. Ids are not reused.
    pub fn clear(&mut self) {
        debug!(count = self.bodies.len(), "cleared world");
        self.bodies.clear();
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// All bodies in insertion order.
    pub fn bodies(&self) -> impl Iterator<Item = &RigidBody> {
        self.bodies.iter()
    }

    fn index_of(&self, id: BodyId) -> Option<usize> {
        // Ids are handed out in increasing order and never reordered.
        self.bodies.binary_search_by_key(&id, |b| b.id()).ok()
    }

    pub fn body(&self, id: BodyId) -> Option<&RigidBody> {
        self.index_of(id).map(|i| &self.bodies[i])
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut RigidBody> {
        self.index_of(id).map(move |i| &mut self.bodies[i])
    }

    fn require_mut(&mut self, id: BodyId) -> PhysicsResult<&mut RigidBody> {
        self.body_mut(id).ok_or(PhysicsError::BodyNotFound { id })
    }

    /// Moves a body without changing its velocity.
    pub fn set_position(&mut self, id: BodyId, position: Vec2) -> PhysicsResult<()> {
        self.require_mut(id)?.set_position(position);
        Ok(())
    }

    /// Applies an impulse through the body's center.
    pub fn apply_impulse(&mut self, id: BodyId, impulse: Vec2) -> PhysicsResult<()> {
        let body = self.require_mut(id)?;
        let position = body.position();
        body.add_force(impulse, position, ForceKind::Impulse);
        Ok(())
    }

    pub fn debug_info(&self, id: BodyId) -> PhysicsResult<BodyDebugInfo> {
        self.body(id)
            .map(RigidBody::debug_info)
            .ok_or(PhysicsError::BodyNotFound { id })
    }

    pub fn gravity(&self) -> Vec2 {
        self.config.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vec2) {
        debug!(?gravity, "gravity changed");
        self.config.gravity = gravity;
    }

    /// Adds `delta` to the current gravity.
    pub fn nudge_gravity(&mut self, delta: Vec2) {
        self.set_gravity(self.config.gravity + delta);
    }

    /// Restores the gravity the world was created with.
    pub fn reset_gravity(&mut self) {
        self.set_gravity(self.initial_gravity);
    }

    /// First dynamic body, in insertion order, whose position is strictly
    /// within `tolerance` of `point` on both axes.
    pub fn body_at(&self, point: Vec2, tolerance: f64) -> Option<BodyId> {
        self.bodies
            .iter()
            .filter(|b| !b.is_static())
            .find(|b| {
                let offset = b.position() - point;
                offset.x.abs() < tolerance && offset.y.abs() < tolerance
            })
            .map(RigidBody::id)
    }

    /// Current drawable state of every body.
    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.bodies
            .iter()
            .map(|body| BodySnapshot {
                id: body.id(),
                position: body.position(),
                angle: body.angle(),
                kind: body.kind(),
                geometry: match body.shape().geometry() {
                    Geometry::Circle(circle) => SnapshotGeometry::Circle { radius: circle.radius },
                    Geometry::Polygon(_) => SnapshotGeometry::Polygon {
                        vertices: body.world_vertices(),
                    },
                },
            })
            .collect()
    }

    /// Registers a callback run for every detected collision, before it is
    /// resolved.
    pub fn add_collision_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&CollisionInfo, &RigidBody, &RigidBody) + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if the listener was not registered.
    pub fn remove_collision_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Advances the simulation by `dt`.
    ///
    /// Gravity is applied to every dynamic body first. Then every ordered
    /// pair with a dynamic first body is tested and resolved. Last, each
    /// dynamic body integrates.
    pub fn step(&mut self, dt: f64) {
        let gravity = self.config.gravity;
        for body in self.bodies.iter_mut() {
            if body.is_static() || !body.shape().affected_by_gravity() {
                continue;
            }
            let position = body.position();
            body.add_force(gravity * body.mass(), position, ForceKind::Impulse);
        }

        for i in 0..self.bodies.len() {
            if self.bodies[i].is_static() {
                continue;
            }
            for j in 0..self.bodies.len() {
                if i == j {
                    continue;
                }
                let Some(info) = check_collision(&self.bodies[i], &self.bodies[j]) else {
                    continue;
                };

                trace!(
                    a = %self.bodies[i].id(),
                    b = %self.bodies[j].id(),
                    normal = ?info.normal,
                    overlap = ?info.overlap,
                    contacts = info.contact_points.len(),
                    "collision"
                );

                for (_, listener) in self.listeners.iter_mut() {
                    listener(&info, &self.bodies[i], &self.bodies[j]);
                }

                let material = self.bodies[j].material();
                let (a, b) = pair_mut(&mut self.bodies, i, j);
                resolution::resolve(material, a, b, &info);
            }
        }

        for body in self.bodies.iter_mut() {
            integrator::integrate(body, dt, &self.config);
        }
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PhysicsWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhysicsWorld")
            .field("bodies", &self.bodies)
            .field("config", &self.config)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

/// Two distinct bodies borrowed mutably, in the order asked for.
fn pair_mut(bodies: &mut [RigidBody], i: usize, j: usize) -> (&mut RigidBody, &mut RigidBody) {
    debug_assert_ne!(i, j);
    if i < j {
        let (left, right) = bodies.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = bodies.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}
