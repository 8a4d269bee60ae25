//! Cross-module collision tests
//!
//! Exercise colliders through the public entry points only: factories,
//! repositioning and `collides_with`.

mod collision_matrix;
