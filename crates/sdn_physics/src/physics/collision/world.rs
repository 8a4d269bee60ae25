//! World-space shape views and the pairwise collision matrix
//!
//! A [`Collider`](super::Collider) stores its shape in local terms; collision
//! tests run on a temporary [`WorldSpaceShape`] built from it. The dispatch in
//! [`WorldSpaceShape::intersects`] covers all 15 unordered kind pairs, each
//! mirrored pair sharing one test with its arguments swapped.

use std::cell::Ref;

use super::bounds::Aabb;
use super::primitives::{
    closest_point_on_polygon, closest_point_on_segment, rectangle_corners, segment_hits_polygon,
    segment_polygon_distance, segment_segment_distance, segments_intersect,
};
use super::sat::sat_overlap;
use crate::foundation::math::{utils, Vec2};

/// World-space circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center point
    pub center: Vec2,
    /// Radius
    pub radius: f32,
}

/// World-space axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Center point
    pub center: Vec2,
    /// Full width and height
    pub size: Vec2,
}

impl Rect {
    /// Minimum corner
    pub fn min(&self) -> Vec2 {
        self.center - self.size * 0.5
    }

    /// Maximum corner
    pub fn max(&self) -> Vec2 {
        self.center + self.size * 0.5
    }

    /// The four corners as a vertex loop
    pub fn corners(&self) -> [Vec2; 4] {
        rectangle_corners(self.center, self.size)
    }
}

/// World-space line segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// First endpoint
    pub start: Vec2,
    /// Second endpoint
    pub end: Vec2,
}

/// World-space capsule: a segment swept by a radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capsule {
    /// Core segment
    pub segment: Segment,
    /// Sweep radius (half the thickness)
    pub radius: f32,
}

impl Capsule {
    /// Capsule whose segment runs `length` along +X from `start`
    pub fn horizontal(start: Vec2, length: f32, radius: f32) -> Self {
        Self {
            segment: Segment {
                start,
                end: start + Vec2::new(length, 0.0),
            },
            radius,
        }
    }
}

/// World-space collision shape (temporary, for testing only)
#[derive(Debug)]
pub enum WorldSpaceShape<'a> {
    /// World-space circle
    Circle(Circle),
    /// World-space rectangle
    Rectangle(Rect),
    /// Borrowed absolute polygon vertices
    Polygon(Ref<'a, [Vec2]>),
    /// World-space capsule
    Capsule(Capsule),
    /// World-space line segment
    Line(Segment),
}

impl<'a> WorldSpaceShape<'a> {
    /// Test if this shape intersects with another shape
    pub fn intersects(&self, other: &WorldSpaceShape<'a>) -> bool {
        match (self, other) {
            (Self::Circle(a), Self::Circle(b)) => circle_circle(a, b),
            (Self::Rectangle(a), Self::Rectangle(b)) => rectangle_rectangle(a, b),
            (Self::Polygon(a), Self::Polygon(b)) => polygon_polygon(a, b),
            (Self::Capsule(a), Self::Capsule(b)) => capsule_capsule(a, b),
            (Self::Line(a), Self::Line(b)) => line_line(a, b),

            (Self::Circle(circle), Self::Rectangle(rect))
            | (Self::Rectangle(rect), Self::Circle(circle)) => circle_rectangle(circle, rect),

            (Self::Circle(circle), Self::Polygon(polygon))
            | (Self::Polygon(polygon), Self::Circle(circle)) => circle_polygon(circle, polygon),

            (Self::Circle(circle), Self::Capsule(capsule))
            | (Self::Capsule(capsule), Self::Circle(circle)) => circle_capsule(circle, capsule),

            (Self::Circle(circle), Self::Line(line))
            | (Self::Line(line), Self::Circle(circle)) => circle_line(circle, line),

            (Self::Rectangle(rect), Self::Polygon(polygon))
            | (Self::Polygon(polygon), Self::Rectangle(rect)) => rectangle_polygon(rect, polygon),

            (Self::Rectangle(rect), Self::Capsule(capsule))
            | (Self::Capsule(capsule), Self::Rectangle(rect)) => rectangle_capsule(rect, capsule),

            (Self::Rectangle(rect), Self::Line(line))
            | (Self::Line(line), Self::Rectangle(rect)) => rectangle_line(rect, line),

            (Self::Polygon(polygon), Self::Capsule(capsule))
            | (Self::Capsule(capsule), Self::Polygon(polygon)) => polygon_capsule(polygon, capsule),

            (Self::Polygon(polygon), Self::Line(line))
            | (Self::Line(line), Self::Polygon(polygon)) => polygon_line(polygon, line),

            (Self::Capsule(capsule), Self::Line(line))
            | (Self::Line(line), Self::Capsule(capsule)) => capsule_line(capsule, line),
        }
    }

    /// Get the world-space bounding box
    pub fn bounds(&self) -> Aabb {
        match self {
            Self::Circle(circle) => {
                Aabb::from_center_extents(circle.center, Vec2::new(circle.radius, circle.radius))
            }
            Self::Rectangle(rect) => Aabb::new(rect.min(), rect.max()),
            Self::Polygon(vertices) => {
                // Polygons always carry at least three vertices
                Aabb::from_points(vertices)
                    .unwrap_or_else(|| Aabb::new(Vec2::zeros(), Vec2::zeros()))
            }
            Self::Capsule(capsule) => segment_bounds(&capsule.segment).expanded(capsule.radius),
            Self::Line(line) => segment_bounds(line),
        }
    }
}

fn segment_bounds(segment: &Segment) -> Aabb {
    Aabb::new(
        utils::min_components(segment.start, segment.end),
        utils::max_components(segment.start, segment.end),
    )
}

/// Strict distance test shared by every radius-based pair
fn within(a: Vec2, b: Vec2, limit: f32) -> bool {
    (a - b).norm() < limit
}

fn circle_circle(a: &Circle, b: &Circle) -> bool {
    within(a.center, b.center, a.radius + b.radius)
}

fn rectangle_rectangle(a: &Rect, b: &Rect) -> bool {
    let (a_min, a_max) = (a.min(), a.max());
    let (b_min, b_max) = (b.min(), b.max());
    a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
}

fn circle_rectangle(circle: &Circle, rect: &Rect) -> bool {
    let (min, max) = (rect.min(), rect.max());
    let closest = Vec2::new(
        utils::clamp(circle.center.x, min.x, max.x),
        utils::clamp(circle.center.y, min.y, max.y),
    );
    within(circle.center, closest, circle.radius)
}

fn circle_polygon(circle: &Circle, polygon: &[Vec2]) -> bool {
    let closest = closest_point_on_polygon(circle.center, polygon);
    within(circle.center, closest, circle.radius)
}

fn rectangle_polygon(rect: &Rect, polygon: &[Vec2]) -> bool {
    sat_overlap(&rect.corners(), polygon)
}

fn polygon_polygon(a: &[Vec2], b: &[Vec2]) -> bool {
    sat_overlap(a, b)
}

fn circle_capsule(circle: &Circle, capsule: &Capsule) -> bool {
    let Segment { start, end } = capsule.segment;
    let closest = closest_point_on_segment(start, end, circle.center);
    within(circle.center, closest, circle.radius + capsule.radius)
}

fn rectangle_capsule(rect: &Rect, capsule: &Capsule) -> bool {
    polygon_capsule(&rect.corners(), capsule)
}

fn polygon_capsule(polygon: &[Vec2], capsule: &Capsule) -> bool {
    let Segment { start, end } = capsule.segment;
    segment_polygon_distance(start, end, polygon) < capsule.radius
}

fn capsule_capsule(a: &Capsule, b: &Capsule) -> bool {
    let distance =
        segment_segment_distance(a.segment.start, a.segment.end, b.segment.start, b.segment.end);
    distance < a.radius + b.radius
}

fn circle_line(circle: &Circle, line: &Segment) -> bool {
    let closest = closest_point_on_segment(line.start, line.end, circle.center);
    within(circle.center, closest, circle.radius)
}

fn rectangle_line(rect: &Rect, line: &Segment) -> bool {
    segment_hits_polygon(line.start, line.end, &rect.corners())
}

fn polygon_line(polygon: &[Vec2], line: &Segment) -> bool {
    segment_hits_polygon(line.start, line.end, polygon)
}

fn capsule_line(capsule: &Capsule, line: &Segment) -> bool {
    let distance =
        segment_segment_distance(capsule.segment.start, capsule.segment.end, line.start, line.end);
    distance < capsule.radius
}

fn line_line(a: &Segment, b: &Segment) -> bool {
    segments_intersect(a.start, a.end, b.start, b.end)
}
