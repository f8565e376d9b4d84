use crate::math::vec2::Vec2;

/// Result of a positive narrow-phase test between two bodies.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CollisionInfo {
    /// Unit collision normal. Resolution flips it if needed so it points
    /// from body B toward body A.
    pub normal: Vec2,
    /// The normal scaled by the penetration depth.
    pub overlap: Vec2,
    /// World-space points where impulses are applied.
    pub contact_points: Vec<Vec2>,
    /// Raw edge crossings found while testing two polygons.
    pub intersection_points: Vec<Vec2>,
}

impl CollisionInfo {
    pub fn new(normal: Vec2, overlap: Vec2, contact_points: Vec<Vec2>) -> Self {
        Self {
            normal,
            overlap,
            contact_points,
            intersection_points: Vec::new(),
        }
    }

    pub fn depth(&self) -> f64 {
        self.overlap.magnitude()
    }

    /// Reverses the normal and the overlap vector.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.overlap = -self.overlap;
    }
}
