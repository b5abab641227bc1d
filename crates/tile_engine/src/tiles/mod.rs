//! Static tile maps
//!
//! A [`TileGrid`] is loaded once from a text map and then only queried:
//! for blocking collisions while bodies move and for the tiles a camera sees.
//!
//! # Map format
//!
//! Whitespace separated integers, one per tile, row-major. Rows wrap after
//! [`TileLayout::columns`] values and exactly [`TileLayout::total_tiles`]
//! values are consumed. There is no header and no comment syntax.

use std::num::IntErrorKind;
use std::ops::Range;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::ConfigError;
use crate::physics::collision::{overlaps, Aabb};
use crate::physics::Obstacle;

pub mod layout;

pub use layout::{is_solid_default, TileLayout, TileType};
pub use layout::{
    TILE_BLUE, TILE_BOTTOM, TILE_BOTTOM_LEFT, TILE_BOTTOM_RIGHT, TILE_CENTER, TILE_GREEN,
    TILE_LEFT, TILE_RED, TILE_RIGHT, TILE_TOP, TILE_TOP_LEFT, TILE_TOP_RIGHT, TOTAL_TILE_SPRITES,
};

/// Errors raised while loading a map
#[derive(Error, Debug)]
pub enum MapError {
    /// The map ran out of values before every tile was placed
    #[error("map truncated: expected {expected} tiles, found {found}")]
    Truncated {
        /// Tiles the layout needs
        expected: usize,
        /// Values actually present
        found: usize,
    },

    /// A value is outside `0..total_sprites`
    #[error("invalid tile type {value} at tile {index}")]
    InvalidTileType {
        /// Row-major tile index
        index: usize,
        /// Offending value
        value: i64,
    },

    /// A token is not an integer
    #[error("malformed value {token:?} at tile {index}")]
    Malformed {
        /// Row-major tile index
        index: usize,
        /// Offending token
        token: String,
    },

    /// The layout cannot tile the level exactly
    #[error("invalid layout: {0}")]
    Layout(#[from] ConfigError),

    /// The map file could not be read
    #[error("failed to read map {path}: {source}")]
    Io {
        /// Map file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

/// One cell of the level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    /// World-space box of the cell
    pub aabb: Aabb,
    /// Sprite index
    pub tile_type: TileType,
}

/// Every tile of a level, row-major
///
/// Tiles never move after loading; the grid is safe to share for reads.
#[derive(Debug, Clone)]
pub struct TileGrid {
    layout: TileLayout,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Parse a map for `layout`
    ///
    /// The layout is validated first. Values past the required count are
    /// ignored. On error nothing is returned; there are no partially loaded
    /// grids.
    pub fn load(source: &str, layout: &TileLayout) -> Result<Self, MapError> {
        layout.validate()?;
        let expected = layout.total_tiles();
        let columns = layout.columns();
        let (tw, th) = (layout.tile_width as f32, layout.tile_height as f32);

        let mut tokens = source.split_whitespace();
        let mut tiles = Vec::with_capacity(expected);

        for index in 0..expected {
            let token = tokens.next().ok_or(MapError::Truncated { expected, found: index })?;
            let value = parse_value(index, token)?;
            if !layout.is_valid_type(value) {
                return Err(MapError::InvalidTileType { index, value });
            }

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let tile_type = value as TileType;
            let (col, row) = (index % columns, index / columns);
            tiles.push(Tile {
                aabb: Aabb::new(col as f32 * tw, row as f32 * th, tw, th),
                tile_type,
            });
        }

        let trailing = tokens.count();
        if trailing > 0 {
            log::debug!("Ignoring {trailing} values after the last tile");
        }

        log::info!(
            "Loaded {} tiles ({}x{})",
            tiles.len(),
            columns,
            layout.rows()
        );
        Ok(Self { layout: layout.clone(), tiles })
    }

    /// Read and parse a map file
    pub fn load_from_file(path: impl AsRef<Path>, layout: &TileLayout) -> Result<Self, MapError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load(&source, layout)
    }

    /// Layout the grid was loaded with
    pub fn layout(&self) -> &TileLayout {
        &self.layout
    }

    /// All tiles, row-major
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a loaded grid
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles per row
    pub fn columns(&self) -> usize {
        self.layout.columns()
    }

    /// Tiles per column
    pub fn rows(&self) -> usize {
        self.layout.rows()
    }

    /// Level bounds
    pub fn bounds(&self) -> Aabb {
        self.layout.bounds()
    }

    /// True if `tile_type` blocks motion under this grid's policy
    pub fn is_solid(&self, tile_type: TileType) -> bool {
        self.layout.is_solid(tile_type)
    }

    /// Tile covering world position `(x, y)`
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn tile_at(&self, x: f32, y: f32) -> Option<&Tile> {
        if !(0.0..self.layout.level_width as f32).contains(&x)
            || !(0.0..self.layout.level_height as f32).contains(&y)
        {
            return None;
        }
        let col = (x / self.layout.tile_width as f32) as usize;
        let row = (y / self.layout.tile_height as f32) as usize;
        self.tiles.get(row * self.columns() + col)
    }

    /// True if `aabb` overlaps any solid tile
    ///
    /// Only the cells under the box are tested.
    pub fn collides_solid(&self, aabb: &Aabb) -> bool {
        if aabb.is_degenerate() {
            return false;
        }
        let Some((cols, rows)) = self.cell_range(aabb) else {
            return false;
        };
        let columns = self.columns();
        rows.flat_map(|row| cols.clone().map(move |col| row * columns + col))
            .map(|index| &self.tiles[index])
            .any(|tile| self.is_solid(tile.tile_type) && overlaps(&tile.aabb, aabb))
    }

    /// Tiles overlapping the camera viewport, for render culling
    pub fn visible_tiles(&self, camera: &Aabb) -> impl Iterator<Item = &Tile> + Clone + '_ {
        let camera = *camera;
        self.tiles.iter().filter(move |tile| overlaps(&tile.aabb, &camera))
    }

    /// Column and row ranges of cells that may overlap `aabb`
    ///
    /// Widened by one cell on each side so float division can never drop a
    /// candidate; the exact test happens afterwards.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn cell_range(&self, aabb: &Aabb) -> Option<(Range<usize>, Range<usize>)> {
        if self.tiles.is_empty() {
            return None;
        }
        let tw = self.layout.tile_width as f32;
        let th = self.layout.tile_height as f32;
        let last_col = (self.columns() - 1) as f32;
        let last_row = (self.rows() - 1) as f32;

        let first_c = ((aabb.left() / tw).floor() - 1.0).max(0.0);
        let last_c = (aabb.right() / tw).ceil().min(last_col);
        let first_r = ((aabb.top() / th).floor() - 1.0).max(0.0);
        let last_r = (aabb.bottom() / th).ceil().min(last_row);

        if last_c < first_c || last_r < first_r {
            return None;
        }
        Some((
            first_c as usize..last_c as usize + 1,
            first_r as usize..last_r as usize + 1,
        ))
    }
}

/// Parse one map value; integers beyond `i64` saturate to its limits
fn parse_value(index: usize, token: &str) -> Result<i64, MapError> {
    token.parse::<i64>().or_else(|e| match e.kind() {
        IntErrorKind::PosOverflow => Ok(i64::MAX),
        IntErrorKind::NegOverflow => Ok(i64::MIN),
        _ => Err(MapError::Malformed { index, token: token.to_string() }),
    })
}

impl Obstacle for TileGrid {
    fn blocks(&self, colliders: &[Aabb]) -> bool {
        colliders.iter().any(|c| self.collides_solid(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_layout() -> TileLayout {
        // 4x3 tiles of 10x10
        TileLayout::with_size(40, 30, 10, 10)
    }

    const SMALL_MAP: &str = "0 0 0 3\n0 4 0 3\n11 0 0 3\n";

    #[test]
    fn test_load_places_tiles_row_major() {
        let grid = TileGrid::load(SMALL_MAP, &small_layout()).unwrap();
        assert_eq!(grid.len(), 12);
        assert_eq!(grid.tiles()[3].aabb, Aabb::new(30.0, 0.0, 10.0, 10.0));
        assert_eq!(grid.tiles()[5].tile_type, TILE_TOP);
        assert_eq!(grid.tiles()[8].aabb, Aabb::new(0.0, 20.0, 10.0, 10.0));
        assert_eq!(grid.tiles()[8].tile_type, TILE_TOP_LEFT);
    }

    #[test]
    fn test_default_level_tile_count() {
        let layout = TileLayout::default();
        let map = vec!["0"; layout.total_tiles()].join(" ");
        let grid = TileGrid::load(&map, &layout).unwrap();
        assert_eq!(grid.len(), 16 * 12);
        assert_eq!(grid.columns() * grid.rows(), grid.len());
    }

    #[test]
    fn test_tiles_cover_level_exactly_once() {
        let grid = TileGrid::load(SMALL_MAP, &small_layout()).unwrap();
        for y in 0..30 {
            for x in 0..40 {
                let p = Aabb::new(x as f32 + 0.25, y as f32 + 0.25, 0.5, 0.5);
                let covering = grid.tiles().iter().filter(|t| t.aabb.overlaps(&p)).count();
                assert_eq!(covering, 1, "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_truncated_map_fails() {
        let layout = small_layout();
        let map = vec!["0"; layout.total_tiles() - 1].join(" ");
        match TileGrid::load(&map, &layout) {
            Err(MapError::Truncated { expected, found }) => {
                assert_eq!(expected, 12);
                assert_eq!(found, 11);
            }
            other => panic!("expected Truncated, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_type_fails() {
        let layout = small_layout();
        let mut values = vec!["0".to_string(); layout.total_tiles()];
        values[7] = TOTAL_TILE_SPRITES.to_string();
        let err = TileGrid::load(&values.join(" "), &layout).unwrap_err();
        assert!(matches!(err, MapError::InvalidTileType { index: 7, value: 12 }));

        values[7] = "-1".to_string();
        let err = TileGrid::load(&values.join(" "), &layout).unwrap_err();
        assert!(matches!(err, MapError::InvalidTileType { index: 7, value: -1 }));
    }

    #[test]
    fn test_huge_values_are_invalid_types_not_malformed() {
        let layout = TileLayout::with_size(20, 10, 10, 10);
        let err = TileGrid::load("0 99999999999999999999", &layout).unwrap_err();
        assert!(matches!(err, MapError::InvalidTileType { index: 1, value: i64::MAX }));

        let err = TileGrid::load("-99999999999999999999 0", &layout).unwrap_err();
        assert!(matches!(err, MapError::InvalidTileType { index: 0, value: i64::MIN }));
    }

    #[test]
    fn test_layout_that_does_not_tile_the_level_is_rejected() {
        let layout = TileLayout::with_size(100, 100, 30, 30);
        let map = vec!["0"; 9].join(" ");
        let err = TileGrid::load(&map, &layout).unwrap_err();
        assert!(matches!(err, MapError::Layout(ConfigError::Invalid(_))));

        let err = TileGrid::load("0", &TileLayout::with_size(100, 100, 0, 30)).unwrap_err();
        assert!(matches!(err, MapError::Layout(_)));
    }

    #[test]
    fn test_grid_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TileGrid>();
        assert_send_sync::<Tile>();
    }

    #[test]
    fn test_malformed_token_fails() {
        let err = TileGrid::load("0 0 x 0", &small_layout()).unwrap_err();
        assert!(matches!(err, MapError::Malformed { index: 2, .. }));
    }

    #[test]
    fn test_trailing_values_are_ignored() {
        let map = format!("{SMALL_MAP} 5 5 5");
        assert_eq!(TileGrid::load(&map, &small_layout()).unwrap().len(), 12);
    }

    #[test]
    fn test_collides_solid_matches_full_scan() {
        let grid = TileGrid::load(SMALL_MAP, &small_layout()).unwrap();
        let mut probes = Vec::new();
        for y in -4..34 {
            for x in -4..44 {
                probes.push(Aabb::new(x as f32 * 1.0, y as f32 * 1.0, 7.5, 10.0));
                probes.push(Aabb::new(x as f32 - 0.5, y as f32, 10.0, 0.5));
            }
        }
        probes.push(Aabb::new(-100.0, -100.0, 500.0, 500.0));
        for probe in &probes {
            let scan = grid
                .tiles()
                .iter()
                .any(|t| grid.is_solid(t.tile_type) && t.aabb.overlaps(probe));
            assert_eq!(grid.collides_solid(probe), scan, "{probe:?}");
        }
    }

    #[test]
    fn test_flush_against_wall_is_not_a_collision() {
        let grid = TileGrid::load(SMALL_MAP, &small_layout()).unwrap();
        // Column 3 is solid from x = 30
        assert!(!grid.collides_solid(&Aabb::new(20.0, 0.0, 10.0, 10.0)));
        assert!(grid.collides_solid(&Aabb::new(20.5, 0.0, 10.0, 10.0)));
        assert!(!grid.collides_solid(&Aabb::new(25.0, 5.0, 0.0, 0.0)));
    }

    #[test]
    fn test_visible_tiles_is_restartable() {
        let grid = TileGrid::load(SMALL_MAP, &small_layout()).unwrap();
        let camera = Aabb::new(5.0, 5.0, 10.0, 10.0);
        let visible = grid.visible_tiles(&camera);
        let first: Vec<_> = visible.clone().map(|t| t.aabb).collect();
        let second: Vec<_> = visible.map(|t| t.aabb).collect();
        assert_eq!(first.len(), 4);
        assert_eq!(first, second);

        let edge = Aabb::new(10.0, 10.0, 10.0, 10.0);
        assert_eq!(grid.visible_tiles(&edge).count(), 1);
        assert_eq!(grid.visible_tiles(&Aabb::new(100.0, 0.0, 5.0, 5.0)).count(), 0);
    }

    #[test]
    fn test_tile_at() {
        let grid = TileGrid::load(SMALL_MAP, &small_layout()).unwrap();
        assert_eq!(grid.tile_at(35.0, 25.0).map(|t| t.tile_type), Some(TILE_CENTER));
        assert_eq!(grid.tile_at(15.0, 15.0).map(|t| t.tile_type), Some(TILE_TOP));
        assert!(grid.tile_at(40.0, 0.0).is_none());
        assert!(grid.tile_at(-0.1, 0.0).is_none());
    }
}
