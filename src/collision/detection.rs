use crate::collision::info::CollisionInfo;
use crate::math::geometry::segment_intersection;
use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;
use crate::shapes::{Circle, Geometry, Polygon};

/// Runs the narrow-phase test for the pair's shape kinds.
///
/// The returned normal may point either way along the contact axis;
/// resolution orients it from `b` toward `a`.
pub fn check_collision(a: &RigidBody, b: &RigidBody) -> Option<CollisionInfo> {
    match (a.shape().geometry(), b.shape().geometry()) {
        (Geometry::Circle(circle_a), Geometry::Circle(circle_b)) => check_circle_circle(
            a.position(),
            a.last_position(),
            circle_a,
            b.position(),
            circle_b,
        ),
        (Geometry::Polygon(polygon_a), Geometry::Polygon(polygon_b)) => {
            check_polygon_polygon(a.position(), polygon_a, b.position(), polygon_b)
        }
        (Geometry::Polygon(polygon), Geometry::Circle(circle)) => {
            check_polygon_circle(a.position(), polygon, b.position(), circle)
        }
        (Geometry::Circle(circle), Geometry::Polygon(polygon)) => {
            check_circle_polygon(a.position(), circle, b.position(), polygon)
        }
    }
}

/// Circle against circle. Touching circles do not collide.
///
/// When the centers coincide the normal falls back to the direction from
/// `a`'s previous position to `b`, or the x axis, and no contact point is
/// reported.
pub fn check_circle_circle(
    pos_a: Vec2,
    last_pos_a: Vec2,
    circle_a: &Circle,
    pos_b: Vec2,
    circle_b: &Circle,
) -> Option<CollisionInfo> {
    let distance = pos_a - pos_b;
    let radii = circle_a.radius + circle_b.radius;

    if distance.magnitude_squared() >= radii * radii {
        return None;
    }

    if distance.is_zero() {
        let fallback = last_pos_a - pos_b;
        let normal = if fallback.is_zero() {
            Vec2::UNIT_X
        } else {
            fallback.normalize()
        };
        return Some(CollisionInfo::new(normal, normal * radii, Vec::new()));
    }

    let depth = radii - distance.magnitude();
    let normal = distance.normalize();
    let contact = pos_b + normal * circle_b.radius;
    Some(CollisionInfo::new(normal, normal * depth, vec![contact]))
}

/// Extent of a polygon projected onto an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Projection {
    min: f64,
    max: f64,
}

impl Projection {
    fn of(position: Vec2, vertices: &[Vec2], axis: Vec2) -> Self {
        vertices.iter().fold(
            Self {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            },
            |p, &v| {
                let d = (position + v).dot(axis);
                Self {
                    min: p.min.min(d),
                    max: p.max.max(d),
                }
            },
        )
    }

    /// Penetration along the axis, or `None` for disjoint intervals.
    /// Touching intervals overlap by zero.
    fn overlap(&self, other: &Projection) -> Option<f64> {
        if self.max < other.min || other.max < self.min {
            return None;
        }
        if self.max < other.max {
            Some((self.max - other.min).abs())
        } else {
            Some((other.max - self.min).abs())
        }
    }
}

/// Working state while testing the edges of one polygon against the other.
struct SatPass<'a> {
    position: Vec2,
    polygon: &'a Polygon,
    other_position: Vec2,
    other: &'a Polygon,
}

impl SatPass<'_> {
    /// Tests every edge normal of `polygon`. Updates the shallowest axis and
    /// filters `inside` down to the points behind every edge. Returns `false`
    /// on the first separating axis.
    fn run(&self, best: &mut (Vec2, f64), inside: &mut Vec<Vec2>) -> bool {
        for i in 0..self.polygon.vertex_count() {
            let axis = self.polygon.edge_normal(i);
            let own = Projection::of(self.position, self.polygon.vertices(), axis);
            let theirs = Projection::of(self.other_position, self.other.vertices(), axis);

            let Some(amount) = own.overlap(&theirs) else {
                return false;
            };
            if amount < best.1 {
                *best = (axis, amount);
            }

            let origin = self.position + self.polygon.vertex(i);
            if i == 0 {
                inside.extend(
                    self.other
                        .world_vertices(self.other_position)
                        .into_iter()
                        .filter(|&v| (v - origin).dot(axis) < 0.0),
                );
            } else {
                inside.retain(|&v| (v - origin).dot(axis) <= 0.0);
            }
        }
        true
    }
}

/// Separating-axis test between two convex polygons.
///
/// The normal is the edge normal with the least penetration. Contacts are the
/// vertices of each polygon found inside the other, followed by the points
/// where their edges cross.
pub fn check_polygon_polygon(
    pos_a: Vec2,
    polygon_a: &Polygon,
    pos_b: Vec2,
    polygon_b: &Polygon,
) -> Option<CollisionInfo> {
    let mut best = (Vec2::ZERO, f64::INFINITY);
    let mut inside_a = Vec::new();
    let mut inside_b = Vec::new();

    let a_edges = SatPass {
        position: pos_a,
        polygon: polygon_a,
        other_position: pos_b,
        other: polygon_b,
    };
    if !a_edges.run(&mut best, &mut inside_a) {
        return None;
    }

    let b_edges = SatPass {
        position: pos_b,
        polygon: polygon_b,
        other_position: pos_a,
        other: polygon_a,
    };
    if !b_edges.run(&mut best, &mut inside_b) {
        return None;
    }

    let mut intersections = Vec::new();
    for i in 0..polygon_a.vertex_count() {
        let (a_start, a_end) = polygon_a.edge(i);
        for j in 0..polygon_b.vertex_count() {
            let (b_start, b_end) = polygon_b.edge(j);
            if let Some(point) =
                segment_intersection(pos_b + b_start, pos_b + b_end, pos_a + a_start, pos_a + a_end)
            {
                intersections.push(point);
            }
        }
    }

    let (normal, depth) = best;
    let mut contact_points = inside_a;
    contact_points.extend(inside_b);
    contact_points.extend(intersections.iter().copied());

    Some(CollisionInfo {
        normal,
        overlap: normal * depth,
        contact_points,
        intersection_points: intersections,
    })
}

/// Polygon against circle, walking the polygon's edges in order.
///
/// The first edge or vertex region within the radius decides the contact.
/// A center behind every edge is treated as a circle swallowed by the
/// polygon and reported against the first vertex.
pub fn check_polygon_circle(
    polygon_pos: Vec2,
    polygon: &Polygon,
    circle_pos: Vec2,
    circle: &Circle,
) -> Option<CollisionInfo> {
    let radius = circle.radius;
    let radius_sq = radius * radius;
    let count = polygon.vertex_count();
    let mut inside = true;

    for i in 0..count {
        let (start, end) = polygon.edge(i);
        let to_circle = circle_pos - (polygon_pos + start);
        let edge = end - start;
        let edge_len_sq = edge.magnitude_squared();
        let direction = edge.normalize();
        let along = to_circle.dot(direction);

        if along > 0.0 {
            if along * along < edge_len_sq {
                let offset = to_circle - direction * along;
                if offset.magnitude_squared() < radius_sq {
                    let normal = (-offset).normalize();
                    let contact = circle_pos + normal * radius;
                    let overlap = normal * (radius - offset.magnitude());
                    return Some(CollisionInfo::new(normal, overlap, vec![contact]));
                }
            }
        } else if to_circle.magnitude_squared() < radius_sq {
            let normal = (-to_circle).normalize();
            let overlap = normal * (radius - to_circle.magnitude());
            return Some(CollisionInfo::new(normal, overlap, vec![polygon_pos + start]));
        }

        if to_circle.dot(direction.right_perpendicular()) > 0.0 {
            inside = false;
        } else if i == count - 1 {
            if !inside {
                return None;
            }
            let normal = to_circle.normalize();
            let overlap = normal * (to_circle.magnitude() + radius);
            let contact = polygon_pos + polygon.vertex(0);
            return Some(CollisionInfo::new(normal, overlap, vec![contact]));
        }
    }
    None
}

/// Circle against polygon: the polygon-circle test with the roles swapped.
pub fn check_circle_polygon(
    circle_pos: Vec2,
    circle: &Circle,
    polygon_pos: Vec2,
    polygon: &Polygon,
) -> Option<CollisionInfo> {
    check_polygon_circle(polygon_pos, polygon, circle_pos, circle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::rigid_body::BodyId;
    use crate::shapes::{Shape, ShapeOptions};
    use std::f64::consts::SQRT_2;
    const EPSILON: f64 = 1e-9;

    fn circle(radius: f64) -> Circle {
        Circle::new(radius).unwrap()
    }

    fn square(half: f64) -> Polygon {
        Polygon::new(vec![
            Vec2::new(-half, -half),
            Vec2::new(half, -half),
            Vec2::new(half, half),
            Vec2::new(-half, half),
        ])
        .unwrap()
    }

    fn triangle() -> Polygon {
        Polygon::new(vec![Vec2::new(-4.0, -3.0), Vec2::new(5.0, -2.0), Vec2::new(0.0, 6.0)]).unwrap()
    }

    fn assert_vec_eq(actual: Vec2, expected: Vec2) {
        assert!(
            (actual.x - expected.x).abs() < EPSILON && (actual.y - expected.y).abs() < EPSILON,
            "expected {expected:?}, got {actual:?}"
        );
    }

    fn contains_approx(points: &[Vec2], expected: Vec2) -> bool {
        points.iter().any(|p| (*p - expected).magnitude() < EPSILON)
    }

    #[test]
    fn test_overlapping_circles() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(15.0, 0.0);
        let info = check_circle_circle(a, a, &circle(10.0), b, &circle(10.0)).unwrap();

        assert_vec_eq(info.normal, Vec2::new(-1.0, 0.0));
        assert!((info.depth() - 5.0).abs() < EPSILON);
        assert_vec_eq(info.overlap, Vec2::new(-5.0, 0.0));
        assert_eq!(info.contact_points.len(), 1);
        assert_vec_eq(info.contact_points[0], Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_separated_circles() {
        let a = Vec2::ZERO;
        let b = Vec2::new(25.0, 0.0);
        assert!(check_circle_circle(a, a, &circle(10.0), b, &circle(10.0)).is_none());
    }

    #[test]
    fn test_touching_circles_do_not_collide() {
        let a = Vec2::ZERO;
        let b = Vec2::new(20.0, 0.0);
        assert!(check_circle_circle(a, a, &circle(10.0), b, &circle(10.0)).is_none());

        let b = Vec2::new(19.999, 0.0);
        assert!(check_circle_circle(a, a, &circle(10.0), b, &circle(10.0)).is_some());
    }

    #[test]
    fn test_coincident_circles_use_previous_position() {
        let info = check_circle_circle(
            Vec2::ZERO,
            Vec2::new(0.0, -3.0),
            &circle(4.0),
            Vec2::ZERO,
            &circle(6.0),
        )
        .unwrap();
        assert_vec_eq(info.normal, Vec2::new(0.0, -1.0));
        assert_vec_eq(info.overlap, Vec2::new(0.0, -10.0));
        assert!(info.contact_points.is_empty());
    }

    #[test]
    fn test_coincident_circles_without_history_use_x_axis() {
        let p = Vec2::new(7.0, 7.0);
        let info = check_circle_circle(p, p, &circle(1.0), p, &circle(1.0)).unwrap();
        assert_eq!(info.normal, Vec2::UNIT_X);
        assert_vec_eq(info.overlap, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_polygon_polygon_overlap() {
        let info = check_polygon_polygon(Vec2::ZERO, &square(5.0), Vec2::new(8.0, 2.0), &square(5.0)).unwrap();

        assert_vec_eq(info.normal, Vec2::new(1.0, 0.0));
        assert!((info.depth() - 2.0).abs() < EPSILON);

        // One corner of each square lies inside the other.
        assert!(contains_approx(&info.contact_points, Vec2::new(3.0, -3.0)));
        assert!(contains_approx(&info.contact_points, Vec2::new(5.0, 5.0)));

        assert_eq!(info.intersection_points.len(), 2);
        assert!(contains_approx(&info.intersection_points, Vec2::new(5.0, -3.0)));
        assert!(contains_approx(&info.intersection_points, Vec2::new(3.0, 5.0)));
        assert_eq!(info.contact_points.len(), 4);
    }

    #[test]
    fn test_polygon_polygon_separated() {
        assert!(check_polygon_polygon(Vec2::ZERO, &square(5.0), Vec2::new(11.0, 0.0), &square(5.0)).is_none());
        // Diagonal gap: the boxes overlap on neither axis.
        assert!(check_polygon_polygon(Vec2::ZERO, &square(5.0), Vec2::new(10.5, 10.5), &square(5.0)).is_none());
    }

    #[test]
    fn test_polygon_polygon_touching_counts_as_contact() {
        let info = check_polygon_polygon(Vec2::ZERO, &square(5.0), Vec2::new(10.0, 0.0), &square(5.0)).unwrap();
        assert!(info.depth() < EPSILON);
    }

    #[test]
    fn test_sat_normal_is_a_tested_edge_normal() {
        let a = triangle();
        let b = square(3.0);
        let mut normals: Vec<Vec2> = (0..a.vertex_count()).map(|i| a.edge_normal(i)).collect();
        normals.extend((0..b.vertex_count()).map(|i| b.edge_normal(i)));

        for (x, y) in [(0.0, 0.0), (4.0, 1.0), (-5.0, 2.0), (2.0, 7.0), (1.0, -5.5), (7.5, 0.0)] {
            let pos_b = Vec2::new(x, y);
            let result = check_polygon_polygon(Vec2::ZERO, &a, pos_b, &b);

            // Brute-force axis check: separated iff some edge normal splits them.
            let separated = normals.iter().any(|&axis| {
                let pa = Projection::of(Vec2::ZERO, a.vertices(), axis);
                let pb = Projection::of(pos_b, b.vertices(), axis);
                pa.max < pb.min || pb.max < pa.min
            });
            assert_eq!(result.is_none(), separated, "offset ({x}, {y})");

            if let Some(info) = result {
                assert!(contains_approx(&normals, info.normal), "offset ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_polygon_circle_edge_region() {
        let info = check_polygon_circle(Vec2::ZERO, &square(5.0), Vec2::new(0.0, -6.0), &circle(2.0)).unwrap();
        assert_vec_eq(info.normal, Vec2::new(0.0, 1.0));
        assert_vec_eq(info.overlap, Vec2::new(0.0, 1.0));
        assert_vec_eq(info.contact_points[0], Vec2::new(0.0, -4.0));
    }

    #[test]
    fn test_polygon_circle_vertex_region() {
        let info = check_polygon_circle(Vec2::ZERO, &square(5.0), Vec2::new(-6.0, -6.0), &circle(2.0)).unwrap();
        let n = Vec2::new(1.0, 1.0) * (1.0 / SQRT_2);
        assert_vec_eq(info.normal, n);
        assert!((info.depth() - (2.0 - SQRT_2)).abs() < EPSILON);
        assert_vec_eq(info.contact_points[0], Vec2::new(-5.0, -5.0));
    }

    #[test]
    fn test_circle_inside_polygon() {
        let info = check_polygon_circle(Vec2::ZERO, &square(5.0), Vec2::new(1.0, 1.0), &circle(2.0)).unwrap();
        let to_circle = Vec2::new(6.0, -4.0);
        assert_vec_eq(info.normal, to_circle.normalize());
        assert!((info.depth() - (to_circle.magnitude() + 2.0)).abs() < EPSILON);
        assert_vec_eq(info.contact_points[0], Vec2::new(-5.0, -5.0));
    }

    #[test]
    fn test_polygon_circle_separated() {
        assert!(check_polygon_circle(Vec2::ZERO, &square(5.0), Vec2::new(0.0, -10.0), &circle(2.0)).is_none());
        assert!(check_polygon_circle(Vec2::ZERO, &square(5.0), Vec2::new(8.0, 8.0), &circle(2.0)).is_none());
    }

    #[test]
    fn test_circle_polygon_redirects() {
        let direct = check_polygon_circle(Vec2::ZERO, &square(5.0), Vec2::new(0.0, -6.0), &circle(2.0));
        let swapped = check_circle_polygon(Vec2::new(0.0, -6.0), &circle(2.0), Vec2::ZERO, &square(5.0));
        assert_eq!(direct, swapped);
    }

    #[test]
    fn test_dispatch_by_shape_kinds() {
        let options = ShapeOptions::default();
        let ball = RigidBody::new(BodyId(0), Shape::circle(2.0, options).unwrap(), Vec2::new(0.0, -6.0));
        let block = RigidBody::new(BodyId(1), Shape::rectangle(10.0, 10.0, options).unwrap(), Vec2::ZERO);
        let other_ball = RigidBody::new(BodyId(2), Shape::circle(3.0, options).unwrap(), Vec2::new(4.0, -6.0));

        assert!(check_collision(&ball, &block).is_some());
        assert!(check_collision(&block, &ball).is_some());
        assert!(check_collision(&ball, &other_ball).is_some());
        assert!(check_collision(&block, &block.clone()).is_some());

        let far = RigidBody::new(BodyId(3), Shape::circle(1.0, options).unwrap(), Vec2::new(100.0, 100.0));
        assert!(check_collision(&far, &block).is_none());
        assert!(check_collision(&far, &ball).is_none());
    }
}
