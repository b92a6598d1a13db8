//! Tile Renderer Boundary
//!
//! The terrain layers never draw anything themselves. They describe each
//! cell's visual through this trait, and a backend (GPU batch, text preview,
//! test recorder) turns that into pixels.

use glam::IVec2;

/// Which tile layer a draw call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Base terrain tiles
    World,
    /// Blend overlay, offset half a cell
    Mesh,
}

impl RenderLayer {
    /// Draw order; higher draws on top.
    pub fn z(&self) -> u32 {
        match self {
            RenderLayer::World => 0,
            RenderLayer::Mesh => 1,
        }
    }
}

/// Per-cell drawing surface for tile layers.
pub trait TileRenderer {
    /// Remove whatever is currently shown in a cell.
    fn clear_cell(&mut self, layer: RenderLayer, coord: IVec2);

    /// Show a sprite from the atlas in a cell, rotated about the cell center.
    fn attach_sprite(&mut self, layer: RenderLayer, coord: IVec2, sprite: u8, rotation: f32);
}
