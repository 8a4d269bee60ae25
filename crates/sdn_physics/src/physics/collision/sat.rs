//! Separating Axis Theorem overlap test for vertex loops
//!
//! Two convex polygons are disjoint iff some edge normal of either polygon
//! separates their projections. Non-convex input is accepted but may report
//! false positives.

use super::primitives::edges;
use crate::foundation::math::{utils, Vec2};

/// Squared distance under which two unit axes count as the same axis
pub const AXIS_DEDUP_EPSILON: f32 = 1e-4;

/// Axes kept inline before the buffer spills to the heap
const INLINE_AXES: usize = 16;

/// Caller-owned scratch storage for candidate separating axes
///
/// Holds up to 16 axes without allocating; larger polygon pairs spill into a
/// heap vector. Reusing one buffer across calls keeps even the spill
/// allocation-free after warm-up.
#[derive(Debug, Clone)]
pub struct AxisBuffer {
    inline: [Vec2; INLINE_AXES],
    len: usize,
    spill: Vec<Vec2>,
}

impl Default for AxisBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl AxisBuffer {
    /// Create an empty axis buffer
    pub fn new() -> Self {
        Self {
            inline: [Vec2::zeros(); INLINE_AXES],
            len: 0,
            spill: Vec::new(),
        }
    }

    /// Remove all axes, keeping any spill capacity
    pub fn clear(&mut self) {
        self.len = 0;
        self.spill.clear();
    }

    /// Number of axes collected
    pub fn len(&self) -> usize {
        self.len + self.spill.len()
    }

    /// Whether no axes have been collected
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the collected axes
    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.inline[..self.len].iter().chain(self.spill.iter())
    }

    /// Add an axis unless it (or its negation) is already present
    ///
    /// Returns whether the axis was added.
    pub fn push_unique(&mut self, axis: Vec2) -> bool {
        let duplicate = self.iter().any(|existing| {
            (existing - axis).norm_squared() < AXIS_DEDUP_EPSILON
                || (existing + axis).norm_squared() < AXIS_DEDUP_EPSILON
        });
        if duplicate {
            return false;
        }

        if self.len < INLINE_AXES {
            self.inline[self.len] = axis;
            self.len += 1;
        } else {
            self.spill.push(axis);
        }
        true
    }

    /// Add the unit edge normals of a closed vertex loop
    ///
    /// Zero-length edges have no normal and contribute nothing.
    pub fn add_edge_normals(&mut self, vertices: &[Vec2]) {
        for (a, b) in edges(vertices) {
            if let Some(normal) = utils::perp(b - a).try_normalize(f32::EPSILON) {
                self.push_unique(normal);
            }
        }
    }
}

/// Whether two vertex loops overlap, using a fresh stack-local axis buffer
pub fn sat_overlap(vertices1: &[Vec2], vertices2: &[Vec2]) -> bool {
    let mut axes = AxisBuffer::new();
    sat_overlap_with(&mut axes, vertices1, vertices2)
}

/// Whether two vertex loops overlap, reusing the caller's axis buffer
///
/// The buffer is cleared and rebuilt on every call. Projections that touch
/// at a single value count as overlapping.
pub fn sat_overlap_with(axes: &mut AxisBuffer, vertices1: &[Vec2], vertices2: &[Vec2]) -> bool {
    axes.clear();
    axes.add_edge_normals(vertices1);
    axes.add_edge_normals(vertices2);

    for axis in axes.iter() {
        let (min1, max1) = project(vertices1, axis);
        let (min2, max2) = project(vertices2, axis);
        if min1 > max2 || min2 > max1 {
            log::trace!("separating axis found: ({}, {})", axis.x, axis.y);
            return false;
        }
    }

    true
}

/// Project vertices onto an axis, returning the `(min, max)` interval
fn project(vertices: &[Vec2], axis: &Vec2) -> (f32, f32) {
    vertices.iter().fold((f32::MAX, f32::MIN), |(min, max), vertex| {
        let dot = vertex.dot(axis);
        (min.min(dot), max.max(dot))
    })
}
