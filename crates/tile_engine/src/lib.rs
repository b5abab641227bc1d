//! # Tile Engine
//!
//! Axis-aligned box collision, tile maps and box-shaped bodies for small
//! top-down sprite games.
//!
//! ## Features
//!
//! - **Collision**: strict AABB overlap tests for single boxes and box sets
//! - **Tile maps**: text maps loaded into a static grid with solid-tile queries
//! - **Motion**: per-axis step resolution that slides along walls
//! - **Rendering hand-off**: cameras and draw commands for an external renderer
//!
//! ## Quick Start
//!
//! ```rust
//! use tile_engine::prelude::*;
//!
//! let config = LevelConfig {
//!     layout: TileLayout::with_size(160, 160, 80, 80),
//!     ..LevelConfig::default()
//! };
//! let mut level = Level::load(&config, "0 3\n0 0\n")?;
//! let dot = level.spawn(MovingBody::dot(0.0, 0.0));
//!
//! if let Some(body) = level.body_mut(dot) {
//!     body.handle_input(InputEvent::press(Direction::Down));
//! }
//! level.step();
//! assert_eq!(level.body(dot).map(|b| b.position().y), Some(10.0));
//! # Ok::<(), MapError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod physics;
pub mod input;
pub mod tiles;
pub mod render;
pub mod particles;
pub mod level;

pub use level::Level;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Level,
        config::{Config, ConfigError, DotConfig, LevelConfig},
        foundation::{
            collections::BodyKey,
            math::Vec2,
        },
        physics::{
            body::StepResult,
            collision::{overlaps, overlaps_any, Aabb, CollisionShape},
            MovingBody, Obstacle, Open,
        },
        input::{Direction, InputEvent, KeyCode},
        tiles::{MapError, Tile, TileGrid, TileLayout, TileType},
        render::{Camera, DrawCommand, SpriteAnimation, TileSheet},
        particles::{ParticleEmitter, ParticleSheet},
    };
}
