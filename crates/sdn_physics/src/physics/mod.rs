//! Physics module for 2D collision detection
//!
//! Provides shape colliders with exact pairwise overlap tests and a small
//! owning container for scenes that probe and drag colliders.

pub mod collider_set;
pub mod collision;

#[cfg(test)]
mod tests;

pub use collider_set::{ColliderKey, ColliderSet, CollisionPair, SceneError};
pub use collision::{Aabb, Collider, ColliderError, ShapeKind};
