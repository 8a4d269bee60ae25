//! Collider shapes: construction, repositioning and the collision entry point
//!
//! Shapes are stored in local terms (a position plus shape parameters) and
//! expanded to world space on demand. Only polygons cache derived world-space
//! geometry; every other kind derives it inline at query time.

use std::cell::{Cell, Ref, RefCell};

use thiserror::Error;

use super::bounds::Aabb;
use super::world::{Capsule, Circle, Rect, Segment, WorldSpaceShape};
use crate::foundation::math::Vec2;

/// Minimum vertex count of a polygon collider
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Collider construction errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColliderError {
    /// Circle radius is zero, negative or NaN
    #[error("Circle radius must be positive, got {0}")]
    NonPositiveRadius(f32),

    /// Rectangle width or height is zero, negative or NaN
    #[error("Rectangle dimensions must be positive, got {width}x{height}")]
    NonPositiveSize {
        /// Requested width
        width: f32,
        /// Requested height
        height: f32,
    },

    /// Polygon has fewer than three vertices
    #[error("Polygon must have at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    /// Capsule length or thickness is zero, negative or NaN
    #[error("Capsule dimensions must be positive, got length {length} and thickness {thickness}")]
    NonPositiveCapsule {
        /// Requested segment length
        length: f32,
        /// Requested thickness
        thickness: f32,
    },

    /// Line start and end are the same point
    #[error("Line endpoints must be different, both are ({x}, {y})")]
    DegenerateLine {
        /// Shared x coordinate
        x: f32,
        /// Shared y coordinate
        y: f32,
    },
}

/// The five collider shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Center and radius
    Circle,
    /// Axis-aligned box around a center
    Rectangle,
    /// Vertex loop relative to an origin
    Polygon,
    /// Horizontal segment swept by a radius
    Capsule,
    /// Thin segment between two points
    Line,
}

/// Strictly positive; NaN fails the comparison
fn is_positive(value: f32) -> bool {
    value > 0.0
}

/// Shape parameters (local space)
#[derive(Debug, Clone)]
enum Shape {
    Circle { radius: f32 },
    Rectangle { size: Vec2 },
    Polygon(PolygonGeometry),
    Capsule { length: f32, thickness: f32 },
    Line { end: Vec2 },
}

/// Polygon vertices plus the lazily refreshed world-space copy
#[derive(Debug, Clone)]
struct PolygonGeometry {
    vertices: Vec<Vec2>,
    absolute: RefCell<Vec<Vec2>>,
    dirty: Cell<bool>,
}

impl PolygonGeometry {
    fn new(position: Vec2, vertices: Vec<Vec2>) -> Self {
        let absolute = vertices.iter().map(|vertex| position + vertex).collect();
        Self {
            vertices,
            absolute: RefCell::new(absolute),
            dirty: Cell::new(false),
        }
    }

    fn invalidate(&self) {
        self.dirty.set(true);
    }

    /// Recompute the absolute vertices if the position changed since the last refresh
    fn refresh(&self, position: Vec2) {
        if !self.dirty.get() {
            return;
        }

        let mut absolute = self.absolute.borrow_mut();
        for (world, local) in absolute.iter_mut().zip(&self.vertices) {
            *world = position + local;
        }
        self.dirty.set(false);
        log::trace!(
            "refreshed {} polygon vertices at ({}, {})",
            absolute.len(),
            position.x,
            position.y
        );
    }

    fn absolute(&self, position: Vec2) -> Ref<'_, [Vec2]> {
        self.refresh(position);
        Ref::map(self.absolute.borrow(), Vec::as_slice)
    }
}

/// A 2D collision shape with a fixed kind and a mutable position
///
/// The meaning of `position` depends on the kind: the center of a circle or
/// rectangle, the origin of a polygon's vertices, and the start point of a
/// capsule or line.
///
/// Capsules always extend along +X from their start point; they cannot be
/// rotated.
///
/// Polygon colliders refresh their cached world-space vertices through
/// interior mutability, so a `Collider` is `Send` but not `Sync`.
#[derive(Debug, Clone)]
pub struct Collider {
    position: Vec2,
    shape: Shape,
}

impl Collider {
    /// Create a circle collider
    pub fn circle(position: Vec2, radius: f32) -> Result<Self, ColliderError> {
        if !is_positive(radius) {
            return Err(ColliderError::NonPositiveRadius(radius));
        }

        Ok(Self {
            position,
            shape: Shape::Circle { radius },
        })
    }

    /// Create an axis-aligned rectangle collider centered on `position`
    pub fn rectangle(position: Vec2, size: Vec2) -> Result<Self, ColliderError> {
        if !(is_positive(size.x) && is_positive(size.y)) {
            return Err(ColliderError::NonPositiveSize {
                width: size.x,
                height: size.y,
            });
        }

        Ok(Self {
            position,
            shape: Shape::Rectangle { size },
        })
    }

    /// Create a polygon collider from vertices relative to `position`
    ///
    /// Any vertex order is accepted. Overlap tests against rectangles and
    /// other polygons assume the polygon is convex. A polygon whose vertices
    /// all lie on one line has a single edge normal, so against other
    /// polygons and rectangles it only separates across that line and reports
    /// overlap with anything projecting onto the same stretch of it.
    pub fn polygon(position: Vec2, vertices: impl Into<Vec<Vec2>>) -> Result<Self, ColliderError> {
        let vertices = vertices.into();
        if vertices.len() < MIN_POLYGON_VERTICES {
            return Err(ColliderError::TooFewVertices(vertices.len()));
        }

        Ok(Self {
            position,
            shape: Shape::Polygon(PolygonGeometry::new(position, vertices)),
        })
    }

    /// Create a capsule collider starting at `position` and extending `length` along +X
    pub fn capsule(position: Vec2, length: f32, thickness: f32) -> Result<Self, ColliderError> {
        if !(is_positive(length) && is_positive(thickness)) {
            return Err(ColliderError::NonPositiveCapsule { length, thickness });
        }

        Ok(Self {
            position,
            shape: Shape::Capsule { length, thickness },
        })
    }

    /// Create a line collider between two distinct points
    pub fn line(start: Vec2, end: Vec2) -> Result<Self, ColliderError> {
        if start == end {
            return Err(ColliderError::DegenerateLine {
                x: start.x,
                y: start.y,
            });
        }

        Ok(Self {
            position: start,
            shape: Shape::Line { end },
        })
    }

    /// Shape kind, fixed at construction
    pub fn kind(&self) -> ShapeKind {
        match self.shape {
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Capsule { .. } => ShapeKind::Capsule,
            Shape::Line { .. } => ShapeKind::Line,
        }
    }

    /// Center, polygon origin, or start point depending on the kind
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Circle radius, or half the thickness of a capsule; zero for other kinds
    pub fn radius(&self) -> f32 {
        match self.shape {
            Shape::Circle { radius } => radius,
            Shape::Capsule { thickness, .. } => thickness / 2.0,
            _ => 0.0,
        }
    }

    /// Rectangle size, or `(length, thickness)` of a capsule; zero for other kinds
    pub fn size(&self) -> Vec2 {
        match self.shape {
            Shape::Rectangle { size } => size,
            Shape::Capsule { length, thickness } => Vec2::new(length, thickness),
            _ => Vec2::zeros(),
        }
    }

    /// Polygon vertices relative to the position
    pub fn vertices(&self) -> Option<&[Vec2]> {
        match &self.shape {
            Shape::Polygon(polygon) => Some(&polygon.vertices),
            _ => None,
        }
    }

    /// Polygon vertices in world space, refreshed first if the collider moved
    ///
    /// The returned guard must be dropped before the collider is moved again.
    pub fn absolute_vertices(&self) -> Option<Ref<'_, [Vec2]>> {
        match &self.shape {
            Shape::Polygon(polygon) => Some(polygon.absolute(self.position)),
            _ => None,
        }
    }

    /// End point of a line collider
    pub fn end_point(&self) -> Option<Vec2> {
        match self.shape {
            Shape::Line { end } => Some(end),
            _ => None,
        }
    }

    /// Move the collider
    ///
    /// Does nothing when the position is unchanged. Polygon world-space
    /// vertices are marked stale and recomputed on the next query. For a line
    /// only the start point moves; see [`Collider::translate`] to move both
    /// endpoints.
    pub fn set_position(&mut self, position: Vec2) {
        if self.position == position {
            return;
        }

        self.position = position;
        if let Shape::Polygon(polygon) = &self.shape {
            polygon.invalidate();
        }
    }

    /// Move the whole shape by `delta`, including a line's end point
    pub fn translate(&mut self, delta: Vec2) {
        if let Shape::Line { end } = &mut self.shape {
            *end += delta;
        }
        self.set_position(self.position + delta);
    }

    /// World-space axis-aligned bounding box
    pub fn bounds(&self) -> Aabb {
        self.to_world_space().bounds()
    }

    /// Test whether this collider overlaps another
    ///
    /// Accepts `&Collider` or `Option<&Collider>`; a missing collider never
    /// collides. The test is symmetric and touching shapes only count as
    /// colliding for the polygon overlap test.
    pub fn collides_with<'a>(&self, other: impl Into<Option<&'a Collider>>) -> bool {
        let Some(other) = other.into() else {
            return false;
        };

        self.refresh_cached_geometry();
        other.refresh_cached_geometry();

        self.to_world_space().intersects(&other.to_world_space())
    }

    fn refresh_cached_geometry(&self) {
        if let Shape::Polygon(polygon) = &self.shape {
            polygon.refresh(self.position);
        }
    }

    /// Expand the stored shape to a temporary world-space shape
    pub fn to_world_space(&self) -> WorldSpaceShape<'_> {
        match &self.shape {
            Shape::Circle { radius } => WorldSpaceShape::Circle(Circle {
                center: self.position,
                radius: *radius,
            }),
            Shape::Rectangle { size } => WorldSpaceShape::Rectangle(Rect {
                center: self.position,
                size: *size,
            }),
            Shape::Polygon(polygon) => WorldSpaceShape::Polygon(polygon.absolute(self.position)),
            Shape::Capsule { length, thickness } => {
                let capsule = Capsule::horizontal(self.position, *length, thickness / 2.0);
                WorldSpaceShape::Capsule(capsule)
            }
            Shape::Line { end } => WorldSpaceShape::Line(Segment {
                start: self.position,
                end: *end,
            }),
        }
    }
}
