//! Math utilities and types
//!
//! 2D world space: x grows right, y grows down, units are pixels.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// Extension helpers for [`Vec2`]
pub trait Vec2Ext {
    /// True when both components are exactly zero
    fn is_zero_exact(&self) -> bool;
}

impl Vec2Ext for Vec2 {
    #[allow(clippy::float_cmp)]
    fn is_zero_exact(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}
