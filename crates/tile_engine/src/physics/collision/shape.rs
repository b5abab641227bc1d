//! High-level collision shape abstractions
//!
//! Shapes store their boxes in model space (offsets from the body anchor)
//! and are transformed to world space on demand whenever the anchor moves.

use crate::foundation::math::Vec2;
use super::primitives::Aabb;

/// Row widths and heights of the multi-box dot, top to bottom
///
/// Eleven progressively wider then narrower rows approximating a 20x20
/// circular sprite.
pub const DOT_ROWS: [(f32, f32); 11] = [
    (6.0, 1.0),
    (10.0, 1.0),
    (14.0, 1.0),
    (16.0, 2.0),
    (18.0, 2.0),
    (20.0, 6.0),
    (18.0, 2.0),
    (16.0, 2.0),
    (14.0, 1.0),
    (10.0, 1.0),
    (6.0, 1.0),
];

/// Collision shape types (stored in MODEL SPACE)
#[derive(Debug, Clone, PartialEq)]
pub enum CollisionShape {
    /// A single box anchored at the body position
    Single {
        /// Box width
        w: f32,
        /// Box height
        h: f32,
    },
    /// A fixed, ordered set of boxes with offsets relative to the anchor
    Multi(Vec<Aabb>),
}

impl CollisionShape {
    /// Single box shape of the given size
    pub fn single(w: f32, h: f32) -> Self {
        assert!(w >= 0.0 && h >= 0.0, "shape extent must be non-negative, got {w}x{h}");
        Self::Single { w, h }
    }

    /// Multi-box shape from model-space boxes
    ///
    /// # Panics
    /// Panics if `boxes` is empty.
    pub fn multi(boxes: Vec<Aabb>) -> Self {
        assert!(!boxes.is_empty(), "multi-box shape needs at least one box");
        Self::Multi(boxes)
    }

    /// Build a stacked shape from `(width, height)` rows
    ///
    /// Each row is centered horizontally inside `total_width` and placed
    /// directly below the previous one.
    pub fn stacked_rows(total_width: f32, rows: &[(f32, f32)]) -> Self {
        let mut offset_y = 0.0;
        let boxes = rows
            .iter()
            .map(|&(w, h)| {
                let b = Aabb::new((total_width - w) / 2.0, offset_y, w, h);
                offset_y += h;
                b
            })
            .collect();
        Self::multi(boxes)
    }

    /// The 11-row dot silhouette
    pub fn dot() -> Self {
        Self::stacked_rows(20.0, &DOT_ROWS)
    }

    /// Number of boxes this shape produces
    pub fn box_count(&self) -> usize {
        match self {
            Self::Single { .. } => 1,
            Self::Multi(boxes) => boxes.len(),
        }
    }

    /// Model-space extent enclosing every box of the shape
    pub fn local_extent(&self) -> Aabb {
        match self {
            Self::Single { w, h } => Aabb::new(0.0, 0.0, *w, *h),
            Self::Multi(boxes) => boxes
                .iter()
                .copied()
                .reduce(|acc, b| acc.union(&b))
                .unwrap_or_default(),
        }
    }

    /// Write the world-space boxes for `anchor` into `out`
    ///
    /// `out` is cleared first so callers can reuse one buffer per body.
    pub fn to_world_space(&self, anchor: Vec2, out: &mut Vec<Aabb>) {
        out.clear();
        match self {
            Self::Single { w, h } => out.push(Aabb::new(anchor.x, anchor.y, *w, *h)),
            Self::Multi(boxes) => {
                out.extend(boxes.iter().map(|b| b.translated(anchor.x, anchor.y)));
            }
        }
    }
}
