//! Primitive geometric queries shared by the pairwise collision tests
//!
//! Everything here works on world-space points and plain vertex slices so the
//! same routines serve polygons, rectangle corners and capsule segments.

use crate::foundation::math::{utils, Vec2};

/// Sine of the angle between two segments below which they are treated as parallel
pub const PARALLEL_EPSILON: f32 = f32::EPSILON;

/// Closest point to `p` on the segment `a`-`b`
///
/// Projects `p` onto the infinite line through `a` and `b`, clamps the
/// projection parameter to `[0, 1]` and returns the clamped point. A
/// zero-length segment returns `a`.
pub fn closest_point_on_segment(a: Vec2, b: Vec2, p: Vec2) -> Vec2 {
    let ab = b - a;
    let length_squared = ab.dot(&ab);
    if length_squared == 0.0 {
        return a;
    }

    let t = utils::clamp((p - a).dot(&ab) / length_squared, 0.0, 1.0);
    a + ab * t
}

/// Closest point to `point` on the boundary of a polygon
///
/// Considers every vertex and the closest point of every edge (including the
/// closing edge from the last vertex back to the first), so the result is the
/// true nearest boundary point rather than the nearest vertex. A point inside
/// the polygon still yields a boundary point. An empty slice returns `point`.
pub fn closest_point_on_polygon(point: Vec2, vertices: &[Vec2]) -> Vec2 {
    let Some(&first) = vertices.first() else {
        return point;
    };

    let mut closest = first;
    let mut min_distance = (point - first).norm_squared();

    for &vertex in &vertices[1..] {
        let distance = (point - vertex).norm_squared();
        if distance < min_distance {
            min_distance = distance;
            closest = vertex;
        }
    }

    for (a, b) in edges(vertices) {
        let on_edge = closest_point_on_segment(a, b, point);
        let distance = (point - on_edge).norm_squared();
        if distance < min_distance {
            min_distance = distance;
            closest = on_edge;
        }
    }

    closest
}

/// Even-odd ray casting point containment test
pub fn point_in_polygon(point: Vec2, vertices: &[Vec2]) -> bool {
    let mut inside = false;
    let count = vertices.len();
    if count < 3 {
        return false;
    }

    let mut j = count - 1;
    for i in 0..count {
        let vi = vertices[i];
        let vj = vertices[j];
        if (vi.y > point.y) != (vj.y > point.y)
            && point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Parametric segment intersection test
///
/// Solves `a + t(b - a) = c + u(d - c)`. Parallel segments (including
/// collinear overlapping ones) never intersect. Shared endpoints do, since the
/// parameter range `[0, 1]` is inclusive. The parallel cutoff scales with both
/// segment lengths, so tiny crossing segments still intersect.
pub fn segments_intersect(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> bool {
    let ab = b - a;
    let cd = d - c;
    let denominator = utils::cross(ab, cd);
    if denominator.abs() <= PARALLEL_EPSILON * ab.norm() * cd.norm() {
        return false;
    }

    let ac = c - a;
    let t = utils::cross(ac, cd) / denominator;
    let u = utils::cross(ac, ab) / denominator;
    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}

/// Minimum distance between segments `a`-`b` and `c`-`d`
pub fn segment_segment_distance(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> f32 {
    if segments_intersect(a, b, c, d) {
        return 0.0;
    }

    // Without a crossing, the minimum is reached at one of the four endpoints
    [
        (a - closest_point_on_segment(c, d, a)).norm(),
        (b - closest_point_on_segment(c, d, b)).norm(),
        (c - closest_point_on_segment(a, b, c)).norm(),
        (d - closest_point_on_segment(a, b, d)).norm(),
    ]
    .into_iter()
    .fold(f32::INFINITY, f32::min)
}

/// Whether a segment touches a polygon region
///
/// True when the segment crosses any polygon edge or its start point lies
/// inside the polygon (a segment fully inside crosses no edge).
pub fn segment_hits_polygon(start: Vec2, end: Vec2, vertices: &[Vec2]) -> bool {
    edges(vertices).any(|(a, b)| segments_intersect(start, end, a, b))
        || point_in_polygon(start, vertices)
}

/// Minimum distance between a segment and a polygon region
///
/// Zero when the segment crosses the boundary or lies inside the polygon,
/// otherwise the smallest segment-to-edge distance.
pub fn segment_polygon_distance(start: Vec2, end: Vec2, vertices: &[Vec2]) -> f32 {
    if segment_hits_polygon(start, end, vertices) {
        return 0.0;
    }

    edges(vertices)
        .map(|(a, b)| segment_segment_distance(start, end, a, b))
        .fold(f32::INFINITY, f32::min)
}

/// Corners of an axis-aligned rectangle, counter-clockwise from the minimum corner
pub fn rectangle_corners(center: Vec2, size: Vec2) -> [Vec2; 4] {
    let half = size * 0.5;
    [
        center + Vec2::new(-half.x, -half.y),
        center + Vec2::new(half.x, -half.y),
        center + Vec2::new(half.x, half.y),
        center + Vec2::new(-half.x, half.y),
    ]
}

/// Iterate the closed edge loop of a polygon as `(start, end)` pairs
pub fn edges(vertices: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    let count = vertices.len();
    (0..count).map(move |i| (vertices[i], vertices[(i + 1) % count]))
}
