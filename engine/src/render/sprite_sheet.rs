//! Sprite Sheet Layout
//!
//! Describes a uniform grid of sprites packed into one atlas image.
//! Sprites are numbered row-major starting at 0.

use serde::{Deserialize, Serialize};

/// Pixel and UV placement of one sprite inside the atlas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteRegion {
    /// Top-left pixel (x, y)
    pub pixel_origin: [u32; 2],
    /// Size in pixels (width, height)
    pub pixel_size: [u32; 2],
    /// Normalized top-left UV
    pub uv_min: [f32; 2],
    /// Normalized bottom-right UV
    pub uv_max: [f32; 2],
}

/// Uniform sprite atlas layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteSheet {
    pub rows: u32,
    pub columns: u32,
    pub sprite_width: u32,
    pub sprite_height: u32,
}

impl Default for SpriteSheet {
    /// The terrain tileset: base soil tile, five blend tiles and one spare.
    fn default() -> Self {
        Self {
            rows: 1,
            columns: 7,
            sprite_width: 16,
            sprite_height: 16,
        }
    }
}

impl SpriteSheet {
    pub fn sprite_count(&self) -> u32 {
        self.rows * self.columns
    }

    pub fn contains(&self, index: u32) -> bool {
        index < self.sprite_count()
    }

    /// Atlas size in pixels.
    pub fn image_size(&self) -> [u32; 2] {
        [self.columns * self.sprite_width, self.rows * self.sprite_height]
    }

    /// Locate a sprite in the atlas.
    pub fn region(&self, index: u32) -> Option<SpriteRegion> {
        if !self.contains(index) {
            return None;
        }
        let col = index % self.columns;
        let row = index / self.columns;
        let [image_w, image_h] = self.image_size();
        let pixel_origin = [col * self.sprite_width, row * self.sprite_height];
        let pixel_size = [self.sprite_width, self.sprite_height];

        Some(SpriteRegion {
            pixel_origin,
            pixel_size,
            uv_min: [
                pixel_origin[0] as f32 / image_w as f32,
                pixel_origin[1] as f32 / image_h as f32,
            ],
            uv_max: [
                (pixel_origin[0] + pixel_size[0]) as f32 / image_w as f32,
                (pixel_origin[1] + pixel_size[1]) as f32 / image_h as f32,
            ],
        })
    }
}
