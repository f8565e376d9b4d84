use crate::collision::aabb::Aabb;
use crate::error::{PhysicsError, PhysicsResult};
use crate::math::geometry;
use crate::math::vec2::Vec2;

/// A convex polygon in body-local space.
///
/// Vertices are kept with positive signed area (counter-clockwise in a y-up
/// frame), so [`Polygon::edge_normal`] points out of the polygon. Once part of
/// a [`Shape`](super::Shape) the vertices are relative to the centroid.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    /// Validates the vertex list and fixes its winding.
    ///
    /// Input must be convex with no repeated consecutive vertices, since every
    /// edge doubles as a separating axis. Collinear vertices are allowed.
    pub fn new(mut vertices: Vec<Vec2>) -> PhysicsResult<Self> {
        let n = vertices.len();
        if n < 3 {
            return Err(PhysicsError::TooFewVertices { count: n });
        }
        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(PhysicsError::NonFiniteVertex { index });
        }
        if let Some(index) = (0..n).find(|&i| vertices[i] == vertices[(i + 1) % n]) {
            return Err(PhysicsError::DuplicateVertex { index });
        }
        if geometry::polygon_signed_area(&vertices) < 0.0 {
            vertices.reverse();
        }
        if !is_convex(&vertices) {
            return Err(PhysicsError::NotConvex);
        }
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertex(&self, index: usize) -> Vec2 {
        self.vertices[index % self.vertices.len()]
    }

    /// Edge `index` as `(start, end)`, wrapping around to the first vertex.
    pub fn edge(&self, index: usize) -> (Vec2, Vec2) {
        (self.vertex(index), self.vertex(index + 1))
    }

    /// Unit outward normal of edge `index`.
    pub fn edge_normal(&self, index: usize) -> Vec2 {
        let (start, end) = self.edge(index);
        (end - start).right_perpendicular().normalize()
    }

    pub fn area(&self) -> f64 {
        geometry::polygon_area(&self.vertices)
    }

    pub fn centroid(&self) -> Vec2 {
        geometry::polygon_centroid(&self.vertices)
    }

    pub fn inertia(&self, mass: f64) -> f64 {
        geometry::polygon_inertia(&self.vertices, mass)
    }

    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points(&self.vertices).unwrap_or_default()
    }

    /// Moves the centroid to the local origin and returns the old centroid.
    pub(crate) fn recenter(&mut self) -> Vec2 {
        let centroid = self.centroid();
        for v in &mut self.vertices {
            *v -= centroid;
        }
        centroid
    }

    pub(crate) fn rotate_vertices(&mut self, angle: f64) {
        for v in &mut self.vertices {
            *v = v.rotate(angle);
        }
    }

    /// Vertices translated to a world position.
    pub fn world_vertices(&self, position: Vec2) -> Vec<Vec2> {
        self.vertices.iter().map(|&v| v + position).collect()
    }
}

/// Every turn of a counter-clockwise vertex list goes left or straight.
fn is_convex(vertices: &[Vec2]) -> bool {
    const TOLERANCE: f64 = 1e-9;
    let n = vertices.len();
    (0..n).all(|i| {
        let incoming = vertices[(i + 1) % n] - vertices[i];
        let outgoing = vertices[(i + 2) % n] - vertices[(i + 1) % n];
        incoming.cross(outgoing) >= -TOLERANCE * incoming.magnitude() * outgoing.magnitude()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-9;

    fn offset_square(offset: Vec2) -> Vec<Vec2> {
        vec![
            offset + Vec2::new(0.0, 0.0),
            offset + Vec2::new(1.0, 0.0),
            offset + Vec2::new(1.0, 1.0),
            offset + Vec2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_polygon_new() {
        let polygon = Polygon::new(offset_square(Vec2::ZERO)).unwrap();
        assert_eq!(polygon.vertex_count(), 4);
        assert!((polygon.area() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_polygon_too_few_vertices() {
        let result = Polygon::new(vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)]);
        assert_eq!(result, Err(PhysicsError::TooFewVertices { count: 2 }));
        assert!(Polygon::new(Vec::new()).is_err());
    }

    #[test]
    fn test_polygon_rejects_non_finite_vertex() {
        let result = Polygon::new(vec![Vec2::ZERO, Vec2::new(f64::NAN, 1.0), Vec2::UNIT_Y]);
        assert_eq!(result, Err(PhysicsError::NonFiniteVertex { index: 1 }));
    }

    #[test]
    fn test_polygon_rejects_repeated_vertex() {
        let repeated = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(20.0, 0.0),
            Vec2::new(20.0, 0.0),
            Vec2::new(20.0, 20.0),
            Vec2::new(0.0, 20.0),
        ];
        assert_eq!(Polygon::new(repeated), Err(PhysicsError::DuplicateVertex { index: 1 }));

        // The closing edge counts too.
        let mut closed = offset_square(Vec2::ZERO);
        closed.push(Vec2::new(0.0, 0.0));
        assert_eq!(Polygon::new(closed), Err(PhysicsError::DuplicateVertex { index: 4 }));
    }

    #[test]
    fn test_polygon_rejects_concave_input() {
        let arrow = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 2.0),
            Vec2::new(0.0, 4.0),
            Vec2::new(1.0, 2.0),
        ];
        assert_eq!(Polygon::new(arrow.clone()), Err(PhysicsError::NotConvex));

        let mut clockwise = arrow;
        clockwise.reverse();
        assert_eq!(Polygon::new(clockwise), Err(PhysicsError::NotConvex));
    }

    #[test]
    fn test_polygon_accepts_collinear_vertices() {
        let polygon = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(0.0, 2.0),
        ])
        .unwrap();
        assert_eq!(polygon.vertex_count(), 5);
        for i in 0..polygon.vertex_count() {
            assert!((polygon.edge_normal(i).magnitude() - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_polygon_clockwise_input_is_rewound() {
        let mut clockwise = offset_square(Vec2::ZERO);
        clockwise.reverse();
        let polygon = Polygon::new(clockwise).unwrap();
        assert!(geometry::polygon_signed_area(polygon.vertices()) > 0.0);
    }

    #[test]
    fn test_polygon_edge_normals_point_outward() {
        let polygon = Polygon::new(offset_square(Vec2::new(-0.5, -0.5))).unwrap();
        for i in 0..polygon.vertex_count() {
            let (start, end) = polygon.edge(i);
            let midpoint = (start + end) * 0.5;
            let normal = polygon.edge_normal(i);
            assert!((normal.magnitude() - 1.0).abs() < EPSILON);
            // Square is centered on the origin, so outward means away from it.
            assert!(normal.dot(midpoint) > 0.0, "edge {i} normal {normal:?}");
        }
    }

    #[test]
    fn test_polygon_edge_wraps() {
        let polygon = Polygon::new(offset_square(Vec2::ZERO)).unwrap();
        let (start, end) = polygon.edge(3);
        assert_eq!(start, Vec2::new(0.0, 1.0));
        assert_eq!(end, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_polygon_recenter() {
        let offset = Vec2::new(10.0, -5.0);
        let mut polygon = Polygon::new(offset_square(offset)).unwrap();
        let old = polygon.recenter();
        assert!((old.x - 10.5).abs() < EPSILON);
        assert!((old.y + 4.5).abs() < EPSILON);

        let c = polygon.centroid();
        assert!(c.x.abs() < EPSILON);
        assert!(c.y.abs() < EPSILON);
        assert!((polygon.area() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_polygon_local_aabb() {
        let polygon = Polygon::new(offset_square(Vec2::new(2.0, 3.0))).unwrap();
        let aabb = polygon.local_aabb();
        assert_eq!(aabb.center, Vec2::new(2.5, 3.5));
        assert_eq!(aabb.half_extents, Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_polygon_world_vertices() {
        let polygon = Polygon::new(offset_square(Vec2::ZERO)).unwrap();
        let world = polygon.world_vertices(Vec2::new(5.0, 5.0));
        assert_eq!(world[0], Vec2::new(5.0, 5.0));
        assert_eq!(world[2], Vec2::new(6.0, 6.0));
    }
}
