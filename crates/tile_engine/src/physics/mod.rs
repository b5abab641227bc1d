//! Physics module for collision detection and box motion
//!
//! Provides the overlap primitives, body shapes, and the per-axis motion
//! resolver. Collision response is binary: a move along an axis is either
//! allowed or reverted.

pub mod collision;
pub mod body;

pub use collision::{Aabb, CollisionShape, overlaps, overlaps_any};
pub use body::MovingBody;

/// Anything a moving body can be blocked by
///
/// Implemented for tile grids, single boxes, box sets, other bodies, and
/// pairs of obstacles so one step can test against several environments.
pub trait Obstacle {
    /// True if any of `colliders` is blocked
    fn blocks(&self, colliders: &[Aabb]) -> bool;
}

impl Obstacle for Aabb {
    fn blocks(&self, colliders: &[Aabb]) -> bool {
        colliders.iter().any(|c| overlaps(c, self))
    }
}

impl Obstacle for [Aabb] {
    fn blocks(&self, colliders: &[Aabb]) -> bool {
        overlaps_any(colliders, self)
    }
}

impl Obstacle for Vec<Aabb> {
    fn blocks(&self, colliders: &[Aabb]) -> bool {
        overlaps_any(colliders, self)
    }
}

impl<T: Obstacle + ?Sized> Obstacle for &T {
    fn blocks(&self, colliders: &[Aabb]) -> bool {
        (**self).blocks(colliders)
    }
}

impl<A: Obstacle, B: Obstacle> Obstacle for (A, B) {
    fn blocks(&self, colliders: &[Aabb]) -> bool {
        self.0.blocks(colliders) || self.1.blocks(colliders)
    }
}

/// No obstacles at all; only bounds limit motion
#[derive(Debug, Clone, Copy, Default)]
pub struct Open;

impl Obstacle for Open {
    fn blocks(&self, _colliders: &[Aabb]) -> bool {
        false
    }
}
