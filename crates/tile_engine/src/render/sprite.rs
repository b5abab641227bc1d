//! Sprite sheet clips and frame animation

use crate::physics::collision::Aabb;
use crate::tiles::{
    TileType, TILE_BLUE, TILE_BOTTOM, TILE_BOTTOM_LEFT, TILE_BOTTOM_RIGHT, TILE_CENTER,
    TILE_GREEN, TILE_LEFT, TILE_RED, TILE_RIGHT, TILE_TOP, TILE_TOP_LEFT, TILE_TOP_RIGHT,
    TOTAL_TILE_SPRITES,
};

/// Source regions of the tile sprites, indexed by tile type
#[derive(Debug, Clone, PartialEq)]
pub struct TileSheet {
    clips: Vec<Aabb>,
}

impl TileSheet {
    /// Sheet with explicit clips; `clips[t]` is the region of tile type `t`
    pub fn new(clips: Vec<Aabb>) -> Self {
        Self { clips }
    }

    /// Source region for `tile_type`, if the sheet has one
    pub fn clip(&self, tile_type: TileType) -> Option<Aabb> {
        self.clips.get(usize::from(tile_type)).copied()
    }

    /// Number of clips
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    /// True if the sheet has no clips
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

impl Default for TileSheet {
    /// The 4x3 sheet of 80x80 tiles: floor colors in the first column,
    /// wall pieces laid out like the wall they form in the other three.
    fn default() -> Self {
        const S: f32 = 80.0;
        let placement: [(TileType, f32, f32); TOTAL_TILE_SPRITES as usize] = [
            (TILE_RED, 0.0, 0.0),
            (TILE_GREEN, 0.0, 1.0),
            (TILE_BLUE, 0.0, 2.0),
            (TILE_TOP_LEFT, 1.0, 0.0),
            (TILE_LEFT, 1.0, 1.0),
            (TILE_BOTTOM_LEFT, 1.0, 2.0),
            (TILE_TOP, 2.0, 0.0),
            (TILE_CENTER, 2.0, 1.0),
            (TILE_BOTTOM, 2.0, 2.0),
            (TILE_TOP_RIGHT, 3.0, 0.0),
            (TILE_RIGHT, 3.0, 1.0),
            (TILE_BOTTOM_RIGHT, 3.0, 2.0),
        ];

        let mut clips = vec![Aabb::default(); placement.len()];
        for (tile_type, col, row) in placement {
            clips[usize::from(tile_type)] = Aabb::new(col * S, row * S, S, S);
        }
        Self { clips }
    }
}

/// Frame-stepped sprite animation
///
/// Each clip is shown for `ticks_per_frame` calls to [`advance`](Self::advance);
/// after the last clip the animation starts over.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteAnimation {
    clips: Vec<Aabb>,
    ticks_per_frame: u32,
    tick: u32,
}

impl SpriteAnimation {
    /// Animation over `clips`
    ///
    /// # Panics
    /// Panics if `clips` is empty or `ticks_per_frame` is zero.
    pub fn new(clips: Vec<Aabb>, ticks_per_frame: u32) -> Self {
        assert!(!clips.is_empty(), "animation needs at least one clip");
        assert!(ticks_per_frame > 0, "ticks_per_frame must be non-zero");
        Self { clips, ticks_per_frame, tick: 0 }
    }

    /// `frames` clips of `w`x`h` laid out left to right from the sheet origin
    pub fn strip(frames: u32, w: f32, h: f32, ticks_per_frame: u32) -> Self {
        let clips = (0..frames)
            .map(|i| Aabb::new(i as f32 * w, 0.0, w, h))
            .collect();
        Self::new(clips, ticks_per_frame)
    }

    /// Four-frame walking figure, 64x205 per frame, four ticks per frame
    pub fn walking() -> Self {
        Self::strip(4, 64.0, 205.0, 4)
    }

    /// Index of the clip currently shown
    pub fn frame(&self) -> usize {
        (self.tick / self.ticks_per_frame) as usize
    }

    /// Clip currently shown
    pub fn current_clip(&self) -> Aabb {
        self.clips[self.frame()]
    }

    /// Move one tick forward, wrapping after the last frame
    pub fn advance(&mut self) {
        self.tick += 1;
        if self.frame() >= self.clips.len() {
            self.tick = 0;
        }
    }

    /// Destination centered in a `screen_width`x`screen_height` screen
    pub fn centered_destination(&self, screen_width: f32, screen_height: f32) -> Aabb {
        let clip = self.current_clip();
        Aabb::new(
            (screen_width - clip.w) / 2.0,
            (screen_height - clip.h) / 2.0,
            clip.w,
            clip.h,
        )
    }
}
