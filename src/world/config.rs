#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::math::vec2::Vec2;

/// Tunables for a [`PhysicsWorld`](super::PhysicsWorld).
///
/// Coordinates are screen-like: y grows downward, so the default gravity
/// pulls toward larger y.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig {
    /// Velocity change added to every gravity-affected body each step.
    pub gravity: Vec2,
    /// Linear velocity multiplier applied once per step.
    pub linear_damping: f64,
    /// Angular velocity multiplier applied once per step.
    pub angular_damping: f64,
    /// Fraction of `angular_velocity * dt` actually turned into rotation.
    pub spin_scale: f64,
}

impl WorldConfig {
    pub const DEFAULT_GRAVITY: Vec2 = Vec2::new(0.0, 20.0);
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: Self::DEFAULT_GRAVITY,
            linear_damping: 0.99,
            angular_damping: 0.995,
            spin_scale: 0.2,
        }
    }
}
