//! Pure geometric helpers shared by shape construction and collision detection.

use std::f64::consts::PI;

use super::vec2::Vec2;

/// Areas below this magnitude are treated as degenerate.
const DEGENERATE_AREA: f64 = 1e-10;

/// Scalar cross product of two vectors.
pub fn cross(a: Vec2, b: Vec2) -> f64 {
    a.cross(b)
}

/// Intersection point of segments `start1..end1` and `start2..end2`.
///
/// Endpoints count as intersecting. Parallel (and collinear) segments never
/// intersect.
pub fn segment_intersection(start1: Vec2, end1: Vec2, start2: Vec2, end2: Vec2) -> Option<Vec2> {
    let d1 = end1 - start1;
    let d2 = end2 - start2;
    let denominator = d1.cross(d2);
    if denominator.abs() < 1e-10 {
        return None;
    }

    let offset = start1 - start2;
    let r = d2.cross(offset) / denominator;
    let s = d1.cross(offset) / denominator;

    if !(0.0..=1.0).contains(&r) || !(0.0..=1.0).contains(&s) {
        return None;
    }
    Some(start1 + d1 * r)
}

/// Shoelace signed area. Positive when the vertices wind counter-clockwise
/// in a y-up frame.
pub fn polygon_signed_area(vertices: &[Vec2]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice_area = 0.0;
    for i in 0..n {
        twice_area += vertices[i].cross(vertices[(i + 1) % n]);
    }
    twice_area * 0.5
}

pub fn polygon_area(vertices: &[Vec2]) -> f64 {
    polygon_signed_area(vertices).abs()
}

/// Area-weighted centroid.
///
/// Falls back to the plain vertex average when the polygon has (almost) no
/// area, e.g. collinear vertices.
pub fn polygon_centroid(vertices: &[Vec2]) -> Vec2 {
    let n = vertices.len();
    if n == 0 {
        return Vec2::ZERO;
    }

    let signed_area = polygon_signed_area(vertices);
    if signed_area.abs() < DEGENERATE_AREA {
        let mut sum = Vec2::ZERO;
        for v in vertices {
            sum += *v;
        }
        return sum / n as f64;
    }

    let mut centroid = Vec2::ZERO;
    for i in 0..n {
        let v1 = vertices[i];
        let v2 = vertices[(i + 1) % n];
        centroid += (v1 + v2) * v1.cross(v2);
    }
    centroid / (6.0 * signed_area)
}

/// Moment of inertia of a centroid-relative polygon of the given mass.
///
/// Each edge `(v_i, v_j)` contributes `(n_j·v_i)(v_i·v_i + v_i·n_j + n_j·n_j)`
/// where `n_j` is `v_j` normalized; the sum is divided by `6·Σ(n_j·v_i)`.
/// When that denominator vanishes (every vertex orthogonal to its successor,
/// as for a centered square) the result is 0.
pub fn polygon_inertia(vertices: &[Vec2], mass: f64) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for i in 0..n {
        let v1 = vertices[i];
        let v2 = vertices[(i + 1) % n].normalize();

        let a = v2.dot(v1);
        let b = v1.dot(v1) + v1.dot(v2) + v2.dot(v2);

        numerator += a * b;
        denominator += a;
    }

    let denominator = 6.0 * denominator;
    if denominator.abs() < 1e-12 {
        return 0.0;
    }
    (mass * numerator / denominator).abs()
}

pub fn circle_area(radius: f64) -> f64 {
    PI * radius * radius
}
