//! Level and dot configuration
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```toml
//! screen_width = 640
//! map = "assets/lazy.map"
//!
//! [layout]
//! tile_width = 80
//!
//! [dot]
//! multi_box = true
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::physics::collision::DOT_ROWS;
use crate::tiles::TileLayout;
use super::{Config, ConfigError};

/// Player dot settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotConfig {
    /// Dot width
    pub width: f32,
    /// Dot height
    pub height: f32,
    /// Velocity change per key press
    pub velocity: f32,
    /// Use the stacked-rows shape instead of one box
    pub multi_box: bool,
    /// `(width, height)` rows of the multi-box shape, top to bottom
    pub rows: Vec<(f32, f32)>,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            width: 20.0,
            height: 20.0,
            velocity: 10.0,
            multi_box: false,
            rows: DOT_ROWS.to_vec(),
        }
    }
}

/// Everything needed to set up a tiled level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Viewport width
    pub screen_width: u32,
    /// Viewport height
    pub screen_height: u32,
    /// Map file, relative to the working directory
    pub map: PathBuf,
    /// Level and tile geometry
    pub layout: TileLayout,
    /// Player dot
    pub dot: DotConfig,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            screen_width: 640,
            screen_height: 480,
            map: PathBuf::from("assets/lazy.map"),
            layout: TileLayout::default(),
            dot: DotConfig::default(),
        }
    }
}

impl Config for LevelConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.layout.validate()?;
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::Invalid("screen size must be non-zero".to_string()));
        }
        if !(self.dot.width > 0.0 && self.dot.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "dot size {}x{} must be positive",
                self.dot.width, self.dot.height
            )));
        }
        if self.dot.multi_box {
            if self.dot.rows.is_empty() {
                return Err(ConfigError::Invalid("multi-box dot needs rows".to_string()));
            }
            if self.dot.rows.iter().any(|&(w, h)| !(w >= 0.0 && h >= 0.0) || w > self.dot.width) {
                return Err(ConfigError::Invalid(
                    "dot rows must be non-negative and no wider than the dot".to_string(),
                ));
            }
            let stacked: f32 = self.dot.rows.iter().map(|&(_, h)| h).sum();
            if (stacked - self.dot.height).abs() > f32::EPSILON * self.dot.height.max(1.0) {
                return Err(ConfigError::Invalid(format!(
                    "dot rows stack to {stacked} but the dot is {} tall",
                    self.dot.height
                )));
            }
        }
        Ok(())
    }
}
