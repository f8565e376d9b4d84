use crate::math::vec2::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box stored as a center and half extents.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Aabb {
    /// Half extents are taken by magnitude, so a box can't be inside out.
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents: Vec2::new(half_extents.x.abs(), half_extents.y.abs()),
        }
    }

    /// Smallest box around `points`, or `None` for an empty slice.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let first = *points.first()?;
        let mut min = first;
        let mut max = first;
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Self::new((min + max) * 0.5, (max - min) * 0.5))
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents
    }

    pub fn width(&self) -> f64 {
        self.half_extents.x * 2.0
    }

    pub fn height(&self) -> f64 {
        self.half_extents.y * 2.0
    }

    /// The same box moved by `offset`; used to place a body-local box in the world.
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            center: self.center + offset,
            half_extents: self.half_extents,
        }
    }

    /// Strict overlap test; boxes that only share an edge don't overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let d = self.center - other.center;
        d.x.abs() < self.half_extents.x + other.half_extents.x
            && d.y.abs() < self.half_extents.y + other.half_extents.y
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        let d = point - self.center;
        d.x.abs() <= self.half_extents.x && d.y.abs() <= self.half_extents.y
    }
}
