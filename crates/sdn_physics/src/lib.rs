//! # SDN Physics
//!
//! 2D narrow-phase collision detection for the SDN game framework.
//!
//! ## Features
//!
//! - **Five shape kinds**: circles, axis-aligned rectangles, polygons, capsules and lines
//! - **Single entry point**: one symmetric [`Collider::collides_with`] call for every shape pair
//! - **Separating axis test**: generic convex polygon overlap with axis de-duplication
//! - **Lazy geometry caching**: polygon world-space vertices recomputed only after a move
//! - **Scene descriptions**: collider layouts loadable from TOML or RON files
//!
//! ## Quick Start
//!
//! ```rust
//! use sdn_physics::prelude::*;
//!
//! fn main() -> Result<(), ColliderError> {
//!     let circle = Collider::circle(Vec2::new(100.0, 100.0), 20.0)?;
//!     let mut crate_box = Collider::rectangle(Vec2::new(200.0, 100.0), Vec2::new(10.0, 10.0))?;
//!
//!     assert!(!circle.collides_with(&crate_box));
//!
//!     crate_box.set_position(Vec2::new(100.0, 100.0));
//!     assert!(circle.collides_with(&crate_box));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod foundation;
pub mod physics;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, NamedShape, SceneConfig, ShapeDesc},
        foundation::math::Vec2,
        physics::{
            Aabb, Collider, ColliderError, ColliderKey, ColliderSet, SceneError, ShapeKind,
        },
    };
}
