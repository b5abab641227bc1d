//! Level geometry and tile type policy

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::physics::collision::Aabb;

/// Sprite index of a tile; also decides solidity
pub type TileType = u16;

/// Plain red floor
pub const TILE_RED: TileType = 0;
/// Plain green floor
pub const TILE_GREEN: TileType = 1;
/// Plain blue floor
pub const TILE_BLUE: TileType = 2;
/// Wall center
pub const TILE_CENTER: TileType = 3;
/// Wall top edge
pub const TILE_TOP: TileType = 4;
/// Wall top-right corner
pub const TILE_TOP_RIGHT: TileType = 5;
/// Wall right edge
pub const TILE_RIGHT: TileType = 6;
/// Wall bottom-right corner
pub const TILE_BOTTOM_RIGHT: TileType = 7;
/// Wall bottom edge
pub const TILE_BOTTOM: TileType = 8;
/// Wall bottom-left corner
pub const TILE_BOTTOM_LEFT: TileType = 9;
/// Wall left edge
pub const TILE_LEFT: TileType = 10;
/// Wall top-left corner
pub const TILE_TOP_LEFT: TileType = 11;

/// Number of distinct tile sprites on the default sheet
pub const TOTAL_TILE_SPRITES: u16 = 12;

/// Default solidity policy: wall center, edges and corners block
pub fn is_solid_default(tile_type: TileType) -> bool {
    (TILE_CENTER..=TILE_TOP_LEFT).contains(&tile_type)
}

/// Dimensions of a level and its uniform tile grid
///
/// `solid_first..=solid_last` is the contiguous range of blocking tile
/// types. It is policy, not something derived from the sprite sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileLayout {
    /// Level width in world units
    pub level_width: u32,
    /// Level height in world units
    pub level_height: u32,
    /// Tile width in world units
    pub tile_width: u32,
    /// Tile height in world units
    pub tile_height: u32,
    /// Valid tile types are `0..total_sprites`
    pub total_sprites: u16,
    /// First blocking tile type
    pub solid_first: TileType,
    /// Last blocking tile type (inclusive)
    pub solid_last: TileType,
}

impl Default for TileLayout {
    fn default() -> Self {
        Self {
            level_width: 1280,
            level_height: 960,
            tile_width: 80,
            tile_height: 80,
            total_sprites: TOTAL_TILE_SPRITES,
            solid_first: TILE_CENTER,
            solid_last: TILE_TOP_LEFT,
        }
    }
}

impl TileLayout {
    /// Layout with the default sprite policy and custom dimensions
    pub fn with_size(level_width: u32, level_height: u32, tile_width: u32, tile_height: u32) -> Self {
        Self {
            level_width,
            level_height,
            tile_width,
            tile_height,
            ..Self::default()
        }
    }

    /// Tiles per row; zero for a zero tile width
    pub fn columns(&self) -> usize {
        self.level_width.checked_div(self.tile_width).unwrap_or(0) as usize
    }

    /// Tiles per column; zero for a zero tile height
    pub fn rows(&self) -> usize {
        self.level_height.checked_div(self.tile_height).unwrap_or(0) as usize
    }

    /// Number of values a map must provide
    pub fn total_tiles(&self) -> usize {
        self.columns() * self.rows()
    }

    /// Whole level as a box
    pub fn bounds(&self) -> Aabb {
        Aabb::new(0.0, 0.0, self.level_width as f32, self.level_height as f32)
    }

    /// True if `tile_type` is a sprite on the sheet
    pub fn is_valid_type(&self, tile_type: i64) -> bool {
        (0..i64::from(self.total_sprites)).contains(&tile_type)
    }

    /// True if `tile_type` blocks motion
    pub fn is_solid(&self, tile_type: TileType) -> bool {
        (self.solid_first..=self.solid_last).contains(&tile_type)
    }

    /// Reject layouts that cannot tile the level exactly
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_width == 0 || self.tile_height == 0 {
            return Err(ConfigError::Invalid("tile size must be non-zero".to_string()));
        }
        if self.level_width % self.tile_width != 0 || self.level_height % self.tile_height != 0 {
            return Err(ConfigError::Invalid(format!(
                "level {}x{} is not a whole number of {}x{} tiles",
                self.level_width, self.level_height, self.tile_width, self.tile_height
            )));
        }
        if self.total_tiles() == 0 {
            return Err(ConfigError::Invalid("level has no tiles".to_string()));
        }
        if self.total_sprites == 0 {
            return Err(ConfigError::Invalid("total_sprites must be non-zero".to_string()));
        }
        if self.solid_first > self.solid_last || self.solid_last >= self.total_sprites {
            return Err(ConfigError::Invalid(format!(
                "solid range {}..={} must lie inside 0..{}",
                self.solid_first, self.solid_last, self.total_sprites
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_matches_tiling_level() {
        let layout = TileLayout::default();
        assert_eq!(layout.columns(), 16);
        assert_eq!(layout.rows(), 12);
        assert_eq!(layout.total_tiles(), 192);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_solid_range_is_center_through_top_left() {
        let layout = TileLayout::default();
        for t in 0..TOTAL_TILE_SPRITES {
            assert_eq!(layout.is_solid(t), is_solid_default(t));
        }
        assert!(!is_solid_default(TILE_RED));
        assert!(!is_solid_default(TILE_BLUE));
        assert!(is_solid_default(TILE_CENTER));
        assert!(is_solid_default(TILE_TOP_LEFT));
        assert!(!is_solid_default(TOTAL_TILE_SPRITES));
    }

    #[test]
    fn test_validate_rejects_uneven_levels() {
        assert!(TileLayout::with_size(100, 80, 30, 80).validate().is_err());
        assert!(TileLayout::with_size(100, 80, 0, 80).validate().is_err());
        let mut layout = TileLayout::default();
        layout.solid_last = TOTAL_TILE_SPRITES;
        assert!(layout.validate().is_err());
    }
}
