//! Moving bodies and per-axis motion resolution
//!
//! Each step moves a body along X, tests, and reverts the X move if it left
//! the bounds or hit an obstacle; then does the same for Y starting from the
//! resolved X. Resolving the axes separately lets a diagonal move slide along
//! a wall instead of stopping dead. It can also let a body clip a corner in
//! rare configurations, which is the expected behavior.

use crate::config::DotConfig;
use crate::foundation::math::{Vec2, Vec2Ext};
use crate::input::InputEvent;
use super::collision::{overlaps_any, Aabb, CollisionShape};
use super::Obstacle;

/// Which axes were reverted during a step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepResult {
    /// The X move was reverted
    pub blocked_x: bool,
    /// The Y move was reverted
    pub blocked_y: bool,
}

#[derive(Debug, Clone, Copy)]
enum Axis {
    X,
    Y,
}

/// A box-shaped body with kinematic state
///
/// The world-space colliders are cached and rebuilt after every position
/// change, reverts included.
#[derive(Debug, Clone)]
pub struct MovingBody {
    position: Vec2,
    velocity: Vec2,
    /// Velocity change per directional key edge
    speed: f32,
    shape: CollisionShape,
    /// Model-space extent of the whole shape
    extent: Aabb,
    colliders: Vec<Aabb>,
}

impl MovingBody {
    /// Create a body at rest
    pub fn new(position: Vec2, shape: CollisionShape, speed: f32) -> Self {
        let extent = shape.local_extent();
        let mut body = Self {
            position,
            velocity: Vec2::zeros(),
            speed,
            colliders: Vec::with_capacity(shape.box_count()),
            shape,
            extent,
        };
        body.shift_colliders();
        body
    }

    /// The 20x20 single-box dot moving 10 units per key
    pub fn dot(x: f32, y: f32) -> Self {
        Self::from_config(&DotConfig::default(), x, y)
    }

    /// The 11-box circular dot moving 10 units per key
    pub fn multi_box_dot(x: f32, y: f32) -> Self {
        Self::new(Vec2::new(x, y), CollisionShape::dot(), DotConfig::default().velocity)
    }

    /// Build a dot from configuration
    pub fn from_config(config: &DotConfig, x: f32, y: f32) -> Self {
        let shape = if config.multi_box {
            CollisionShape::stacked_rows(config.width, &config.rows)
        } else {
            CollisionShape::single(config.width, config.height)
        };
        Self::new(Vec2::new(x, y), shape, config.velocity)
    }

    /// Anchor (top-left) position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Current velocity in units per step
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Velocity change per key edge
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Collision shape in model space
    pub fn shape(&self) -> &CollisionShape {
        &self.shape
    }

    /// World-space colliders at the current position
    pub fn colliders(&self) -> &[Aabb] {
        &self.colliders
    }

    /// World-space box enclosing the whole shape
    pub fn extent(&self) -> Aabb {
        self.extent.translated(self.position.x, self.position.y)
    }

    /// Teleport the body; overlaps at the new spot are not corrected
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.shift_colliders();
    }

    /// Overwrite the velocity
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Apply a directional key edge
    ///
    /// A press adds `speed` along the direction and a release subtracts it.
    /// Velocity is accumulated, not set, so unmatched presses leave residual
    /// velocity behind.
    pub fn handle_input(&mut self, event: InputEvent) {
        let delta = event.direction.unit() * self.speed;
        if event.pressed {
            self.velocity += delta;
        } else {
            self.velocity -= delta;
        }
    }

    /// Advance one simulation step
    ///
    /// The shape extent must stay inside `bounds` (touching the edge is
    /// fine) and no collider may be blocked by `obstacles`.
    pub fn step<O: Obstacle + ?Sized>(&mut self, bounds: &Aabb, obstacles: &O) -> StepResult {
        if self.velocity.is_zero_exact() {
            return StepResult::default();
        }
        StepResult {
            blocked_x: !self.try_axis(Axis::X, bounds, obstacles),
            blocked_y: !self.try_axis(Axis::Y, bounds, obstacles),
        }
    }

    /// Move along one axis, reverting on collision; returns false if reverted
    fn try_axis<O: Obstacle + ?Sized>(&mut self, axis: Axis, bounds: &Aabb, obstacles: &O) -> bool {
        let previous = self.position;
        match axis {
            Axis::X => self.position.x += self.velocity.x,
            Axis::Y => self.position.y += self.velocity.y,
        }
        self.shift_colliders();

        if !bounds.contains_box(&self.extent()) || obstacles.blocks(&self.colliders) {
            log::trace!(
                "{axis:?} move from ({}, {}) to ({}, {}) reverted",
                previous.x,
                previous.y,
                self.position.x,
                self.position.y
            );
            self.position = previous;
            self.shift_colliders();
            return false;
        }
        true
    }

    fn shift_colliders(&mut self) {
        self.shape.to_world_space(self.position, &mut self.colliders);
    }
}

impl Obstacle for MovingBody {
    fn blocks(&self, colliders: &[Aabb]) -> bool {
        overlaps_any(colliders, &self.colliders)
    }
}
