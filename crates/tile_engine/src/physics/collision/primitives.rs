//! Primitive collision shapes and intersection algorithms
//!
//! Provides the axis-aligned box used everywhere in the engine together with
//! the two overlap tests every collision query reduces to.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{Point2, Vec2};

/// An axis-aligned bounding box in world units
///
/// `x`/`y` is the top-left corner, `w`/`h` the extent. Extents are never
/// negative; a box with zero width or height is degenerate and overlaps
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Aabb {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width (>= 0)
    pub w: f32,
    /// Height (>= 0)
    pub h: f32,
}

impl Aabb {
    /// Creates a new box
    ///
    /// # Panics
    /// Panics if `w` or `h` is negative or NaN.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        assert!(w >= 0.0 && h >= 0.0, "Aabb extent must be non-negative, got {w}x{h}");
        Self { x, y, w, h }
    }

    /// Creates a box from its top-left corner and a size vector
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    /// Left edge x coordinate
    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Right edge x coordinate
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Top edge y coordinate
    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Bottom edge y coordinate
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center point
    pub fn center(&self) -> Point2 {
        Point2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// True for zero-area boxes
    pub fn is_degenerate(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Same box moved by `(dx, dy)`
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self { x: self.x + dx, y: self.y + dy, ..*self }
    }

    /// Same box with its top-left corner at `(x, y)`
    pub fn at(&self, x: f32, y: f32) -> Self {
        Self { x, y, ..*self }
    }

    /// True if `other` lies inside this box; shared edges count as inside
    pub fn contains_box(&self, other: &Aabb) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }

    /// Smallest box enclosing both boxes
    pub fn union(&self, other: &Aabb) -> Aabb {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Aabb::new(left, top, right - left, bottom - top)
    }

    /// Check if this box overlaps another, see [`overlaps`]
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        overlaps(self, other)
    }
}

/// Returns true iff the interiors of `a` and `b` intersect.
///
/// All four comparisons are strict: boxes that only share an edge do not
/// overlap, which lets bodies rest flush against walls. Degenerate boxes fail
/// at least one comparison and so never overlap.
#[inline]
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.bottom() > b.top()
        && b.bottom() > a.top()
        && a.right() > b.left()
        && b.right() > a.left()
        && !a.is_degenerate()
        && !b.is_degenerate()
}

/// Returns true iff any box of `set_a` overlaps any box of `set_b`.
///
/// Plain cross product scan; stops at the first overlapping pair.
pub fn overlaps_any(set_a: &[Aabb], set_b: &[Aabb]) -> bool {
    set_a
        .iter()
        .any(|a| set_b.iter().any(|b| overlaps(a, b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxes() -> Vec<Aabb> {
        vec![
            Aabb::new(0.0, 0.0, 10.0, 10.0),
            Aabb::new(10.0, 0.0, 10.0, 10.0),
            Aabb::new(5.0, 5.0, 10.0, 10.0),
            Aabb::new(0.0, 0.0, 0.0, 10.0),
            Aabb::new(-5.0, -5.0, 30.0, 30.0),
            Aabb::new(2.0, 2.0, 1.0, 1.0),
            Aabb::new(0.0, 10.0, 10.0, 10.0),
            Aabb::new(9.5, 9.5, 0.5, 0.5),
        ]
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let all = boxes();
        for a in &all {
            for b in &all {
                assert_eq!(overlaps(a, b), overlaps(b, a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &Aabb::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!overlaps(&a, &Aabb::new(0.0, 10.0, 10.0, 10.0)));
        assert!(!overlaps(&a, &Aabb::new(-10.0, 0.0, 10.0, 10.0)));
        // Corner contact only
        assert!(!overlaps(&a, &Aabb::new(10.0, 10.0, 5.0, 5.0)));
    }

    #[test]
    fn test_penetrating_boxes_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(overlaps(&a, &Aabb::new(5.0, 5.0, 10.0, 10.0)));
        // Containment counts
        assert!(overlaps(&a, &Aabb::new(2.0, 2.0, 1.0, 1.0)));
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_zero_area_never_overlaps() {
        let line = Aabb::new(0.0, 0.0, 0.0, 10.0);
        assert!(!overlaps(&line, &Aabb::new(0.0, 0.0, 10.0, 10.0)));
        let inside = Aabb::new(5.0, 5.0, 0.0, 0.0);
        assert!(!overlaps(&Aabb::new(0.0, 0.0, 10.0, 10.0), &inside));
        assert!(!overlaps(&inside, &inside));
    }

    #[test]
    fn test_overlaps_any_matches_naive_scan() {
        let all = boxes();
        for split in 0..all.len() {
            for width in 0..=all.len() - split {
                let set_a = &all[..split];
                let set_b = &all[split..split + width];
                let mut naive = false;
                for a in set_a {
                    for b in set_b {
                        if overlaps(a, b) {
                            naive = true;
                        }
                    }
                }
                assert_eq!(overlaps_any(set_a, set_b), naive);
                assert_eq!(overlaps_any(set_b, set_a), naive);
            }
        }
    }

    #[test]
    fn test_overlaps_any_empty_sets() {
        let a = [Aabb::new(0.0, 0.0, 10.0, 10.0)];
        assert!(!overlaps_any(&a, &[]));
        assert!(!overlaps_any(&[], &a));
    }

    #[test]
    fn test_contains_and_union() {
        let level = Aabb::new(0.0, 0.0, 100.0, 50.0);
        assert!(level.contains_box(&Aabb::new(80.0, 30.0, 20.0, 20.0)));
        assert!(!level.contains_box(&Aabb::new(81.0, 30.0, 20.0, 20.0)));
        assert!(!level.contains_box(&Aabb::new(-0.5, 0.0, 20.0, 20.0)));

        let u = Aabb::new(0.0, 0.0, 6.0, 1.0).union(&Aabb::new(-7.0, 1.0, 20.0, 6.0));
        assert_eq!(u, Aabb::new(-7.0, 0.0, 20.0, 7.0));
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn test_negative_extent_panics() {
        let _ = Aabb::new(0.0, 0.0, -1.0, 4.0);
    }
}
