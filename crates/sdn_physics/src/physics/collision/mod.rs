//! Narrow-phase 2D collision detection
//!
//! Exact pairwise overlap tests between five shape kinds. There is no
//! broad phase; callers decide which pairs to test.
//!
//! # Architecture
//!
//! - **Local storage**: a [`Collider`] keeps its position and shape parameters
//! - **On-demand expansion**: tests run on a temporary [`WorldSpaceShape`]
//! - **Lazy caching**: polygons keep world-space vertices and refresh them only
//!   after a move
//!
//! # Module Organization
//!
//! - [`shape`] - Collider construction, repositioning and accessors
//! - [`world`] - World-space views and the 15-pair dispatch matrix
//! - [`primitives`] - Shared point/segment/polygon queries
//! - [`sat`] - Separating axis overlap test with caller-local axis storage
//! - [`bounds`] - Axis-aligned bounding boxes

pub mod bounds;
pub mod primitives;
pub mod sat;
pub mod shape;
pub mod world;

// Re-export commonly used types
pub use bounds::Aabb;
pub use sat::{sat_overlap, sat_overlap_with, AxisBuffer};
pub use shape::{Collider, ColliderError, ShapeKind};
pub use world::WorldSpaceShape;
