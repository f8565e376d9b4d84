//! Errors reported at the engine boundary.
//!
//! Numeric trouble inside a step (coincident centers, out-of-range mass or
//! spin) is absorbed by fallbacks and clamps and never shows up here.

use thiserror::Error;

use crate::objects::rigid_body::BodyId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("polygon vertex {index} repeats the next one, leaving a zero-length edge")]
    DuplicateVertex { index: usize },

    #[error("polygon is not convex")]
    NotConvex,

    #[error("circle radius must be positive and finite, got {radius}")]
    InvalidRadius { radius: f64 },

    #[error("polygon vertex {index} is not finite")]
    NonFiniteVertex { index: usize },

    #[error("no body with id {id}")]
    BodyNotFound { id: BodyId },
}

pub type PhysicsResult<T> = Result<T, PhysicsError>;
