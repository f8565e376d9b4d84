//! Bounds the engine clamps physical quantities to.

/// Largest tangential (friction) impulse that is still applied.
pub const MAX_FORCE: f64 = 1000.0;

pub const MAX_MASS: f64 = 100.0;
pub const MIN_MASS: f64 = 0.001;

pub const MAX_INERTIA: f64 = 900_000_000.0;
pub const MIN_INERTIA: f64 = 0.0;

/// Angular speeds are clamped to this magnitude.
pub const MAX_ANGULAR_VELOCITY: f64 = 5.0;
/// Angular speeds below this magnitude snap to rest.
pub const MIN_ANGULAR_VELOCITY: f64 = 1.0;

/// Shapes are flat, so mass is `area * density * DEPTH`.
pub const DEPTH: f64 = 0.000_000_2;
