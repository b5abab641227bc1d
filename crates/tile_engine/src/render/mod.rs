//! Draw descriptions for an external renderer
//!
//! Nothing here talks to a graphics API. The engine hands the host a list of
//! [`DrawCommand`]s (which part of a sprite sheet goes where on screen) and
//! the host draws them with whatever backend it owns.

pub mod camera;
pub mod sprite;

pub use camera::Camera;
pub use sprite::{SpriteAnimation, TileSheet};

use crate::physics::collision::Aabb;
use crate::physics::MovingBody;
use crate::tiles::TileGrid;

/// One textured quad: copy `source` from the sheet into `destination`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    /// Region of the sprite sheet
    pub source: Aabb,
    /// Screen-space target box
    pub destination: Aabb,
}

/// Draw commands for every tile the camera sees, in row-major order
pub fn tile_draws(grid: &TileGrid, sheet: &TileSheet, camera: &Camera) -> Vec<DrawCommand> {
    grid.visible_tiles(&camera.viewport())
        .filter_map(|tile| {
            let source = sheet.clip(tile.tile_type)?;
            Some(DrawCommand {
                source,
                destination: camera.to_screen(&tile.aabb),
            })
        })
        .collect()
}

/// Draw command for a body's whole extent
pub fn body_draw(body: &MovingBody, clip: Aabb, camera: &Camera) -> DrawCommand {
    DrawCommand {
        source: clip,
        destination: camera.to_screen(&body.extent()),
    }
}

/// One command per collider, for debug overlays of multi-box shapes
pub fn collider_draws(body: &MovingBody, clip: Aabb, camera: &Camera) -> Vec<DrawCommand> {
    body.colliders()
        .iter()
        .map(|c| DrawCommand {
            source: clip,
            destination: camera.to_screen(c),
        })
        .collect()
}
