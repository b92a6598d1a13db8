//! Text Preview Renderer
//!
//! Draws the mesh layer as a grid of quadrant block characters, one per
//! mesh cell, so terrain edits can be inspected in a terminal.

use std::f32::consts::FRAC_PI_2;

use glam::IVec2;

use crate::render::{RenderLayer, TileRenderer};
use crate::world::GridConfig;

/// Character shown for an empty mesh cell.
pub const EMPTY_GLYPH: char = ' ';

/// Quadrant glyph for a blend sprite at a clockwise quarter-turn count.
pub fn blend_glyph(sprite: u8, quarter_turns: u8) -> char {
    match (sprite, quarter_turns % 4) {
        // Single grass corner: BR, BL, TL, TR
        (1, 0) => '▗',
        (1, 1) => '▖',
        (1, 2) => '▘',
        (1, _) => '▝',
        // Grass edge: right, bottom, left, top
        (2, 0) => '▐',
        (2, 1) => '▄',
        (2, 2) => '▌',
        (2, _) => '▀',
        // Grass diagonal: TR/BL, TL/BR
        (3, 0 | 2) => '▞',
        (3, _) => '▚',
        // Soil corner: TL, TR, BR, BL
        (4, 0) => '▟',
        (4, 1) => '▙',
        (4, 2) => '▛',
        (4, _) => '▜',
        (5, _) => '█',
        _ => '?',
    }
}

/// Convert a rotation in radians to clockwise quarter turns in 0..4.
fn quarter_turns(rotation: f32) -> u8 {
    ((rotation / FRAC_PI_2).round() as i32).rem_euclid(4) as u8
}

/// Terminal backend for the mesh layer. World-layer draws are ignored.
#[derive(Debug, Clone)]
pub struct TextPreview {
    columns: usize,
    rows: usize,
    glyphs: Vec<char>,
}

impl TextPreview {
    /// Size the preview to the mesh grid.
    pub fn new(mesh_grid: &GridConfig) -> Self {
        let columns = mesh_grid.columns as usize;
        let rows = mesh_grid.rows as usize;
        Self {
            columns,
            rows,
            glyphs: vec![EMPTY_GLYPH; columns * rows],
        }
    }

    fn index(&self, coord: IVec2) -> Option<usize> {
        let in_bounds = coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.columns
            && (coord.y as usize) < self.rows;
        in_bounds.then(|| coord.y as usize * self.columns + coord.x as usize)
    }

    /// Glyph currently shown at a mesh cell.
    pub fn glyph(&self, coord: IVec2) -> Option<char> {
        self.index(coord).map(|i| self.glyphs[i])
    }

    /// Whole layer as text, one line per mesh row.
    pub fn render(&self) -> String {
        self.glyphs
            .chunks(self.columns.max(1))
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TileRenderer for TextPreview {
    fn clear_cell(&mut self, layer: RenderLayer, coord: IVec2) {
        if layer != RenderLayer::Mesh {
            return;
        }
        if let Some(i) = self.index(coord) {
            self.glyphs[i] = EMPTY_GLYPH;
        }
    }

    fn attach_sprite(&mut self, layer: RenderLayer, coord: IVec2, sprite: u8, rotation: f32) {
        if layer != RenderLayer::Mesh {
            return;
        }
        if let Some(i) = self.index(coord) {
            self.glyphs[i] = blend_glyph(sprite, quarter_turns(rotation));
        }
    }
}
