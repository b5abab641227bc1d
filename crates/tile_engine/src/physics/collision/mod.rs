//! Collision detection primitives and shapes
//!
//! # Architecture
//!
//! - **Model Space Storage**: Collision shapes stored as offsets from the body anchor
//! - **On-Demand Transformation**: Shapes moved to world space after every position change
//! - **Pure Tests**: Overlap queries never mutate their inputs
//!
//! # Module Organization
//!
//! - [`primitives`] - The [`Aabb`] box and the overlap tests
//! - [`shape`] - Single and multi-box body shapes

pub mod primitives;
pub mod shape;

// Re-export commonly used types
pub use primitives::{Aabb, overlaps, overlaps_any};
pub use shape::{CollisionShape, DOT_ROWS};
