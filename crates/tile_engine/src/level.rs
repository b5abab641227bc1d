//! A tiled level and the bodies moving through it

use crate::config::LevelConfig;
use crate::foundation::collections::{BodyKey, BodyMap};
use crate::physics::collision::Aabb;
use crate::physics::MovingBody;
use crate::render::Camera;
use crate::tiles::{MapError, TileGrid, TileLayout};

/// Tile grid plus the bodies living in it
///
/// Each step resolves every body against the solid tiles, the level bounds
/// and the other bodies' colliders as they were before that body moved.
#[derive(Debug, Clone)]
pub struct Level {
    grid: TileGrid,
    bodies: BodyMap<MovingBody>,
}

impl Level {
    /// Level over an already loaded grid
    pub fn new(grid: TileGrid) -> Self {
        Self { grid, bodies: BodyMap::with_key() }
    }

    /// Parse `source` with the layout from `config`
    pub fn load(config: &LevelConfig, source: &str) -> Result<Self, MapError> {
        let grid = TileGrid::load(source, &config.layout)?;
        Ok(Self::new(grid))
    }

    /// Read the map named by `config` from disk
    pub fn load_from_config(config: &LevelConfig) -> Result<Self, MapError> {
        let grid = TileGrid::load_from_file(&config.map, &config.layout)?;
        Ok(Self::new(grid))
    }

    /// Static tiles
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Tile geometry
    pub fn layout(&self) -> &TileLayout {
        self.grid.layout()
    }

    /// Level rectangle bodies must stay inside
    pub fn bounds(&self) -> Aabb {
        self.grid.bounds()
    }

    /// Add a body; it is not checked against anything until it moves
    pub fn spawn(&mut self, body: MovingBody) -> BodyKey {
        let key = self.bodies.insert(body);
        log::debug!("Spawned body {key:?}");
        key
    }

    /// Remove a body, returning it if it was present
    pub fn despawn(&mut self, key: BodyKey) -> Option<MovingBody> {
        self.bodies.remove(key)
    }

    /// Body behind `key`
    pub fn body(&self, key: BodyKey) -> Option<&MovingBody> {
        self.bodies.get(key)
    }

    /// Mutable body behind `key`, for input and teleports
    pub fn body_mut(&mut self, key: BodyKey) -> Option<&mut MovingBody> {
        self.bodies.get_mut(key)
    }

    /// Number of live bodies
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Advance every body by one step
    pub fn step(&mut self) {
        let bounds = self.grid.bounds();
        let keys: Vec<BodyKey> = self.bodies.keys().collect();
        let mut others = Vec::new();

        for key in keys {
            others.clear();
            for (other_key, other) in &self.bodies {
                if other_key != key {
                    others.extend_from_slice(other.colliders());
                }
            }
            if let Some(body) = self.bodies.get_mut(key) {
                body.step(&bounds, &(&self.grid, others.as_slice()));
            }
        }
    }

    /// Camera of the given screen size following `key`
    pub fn camera_for(&self, key: BodyKey, screen_width: f32, screen_height: f32) -> Option<Camera> {
        let body = self.bodies.get(key)?;
        Some(Camera::follow(&body.extent(), &self.bounds(), screen_width, screen_height))
    }
}
