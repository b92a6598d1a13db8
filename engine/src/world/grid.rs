//! Grid Configuration Module
//!
//! Geometry of a fixed-size rectangular tile grid laid out in world space.
//!
//! ## Coordinates
//! - World space: 1 unit = 1 pixel at zoom 1.0, x grows right, y grows down
//! - Cell coordinates: `IVec2` column/row, (0,0) is the top-left cell
//! - Storage order is row-major: `index = y * columns + x`

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Default number of columns/rows in the terrain layer.
pub const DEFAULT_GRID_CELLS: u32 = 25;

/// Default tile edge length in world units.
pub const DEFAULT_TILE_SIZE: f32 = 16.0;

/// Placement and dimensions of a tile grid.
///
/// A grid never changes size once a map has been allocated from it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of cells along X
    pub columns: u32,
    /// Number of cells along Y
    pub rows: u32,
    /// Cell width in world units
    pub tile_width: f32,
    /// Cell height in world units
    pub tile_height: f32,
    /// World position of the top-left corner of cell (0,0)
    pub origin: Vec2,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_GRID_CELLS,
            rows: DEFAULT_GRID_CELLS,
            tile_width: DEFAULT_TILE_SIZE,
            tile_height: DEFAULT_TILE_SIZE,
            origin: Vec2::ZERO,
        }
    }
}

impl GridConfig {
    /// Create a grid anchored at the world origin.
    pub fn new(columns: u32, rows: u32, tile_width: f32, tile_height: f32) -> Self {
        Self {
            columns,
            rows,
            tile_width,
            tile_height,
            origin: Vec2::ZERO,
        }
    }

    /// Same grid moved to a new origin.
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Size of one cell as a vector.
    #[inline]
    pub fn tile_size(&self) -> Vec2 {
        Vec2::new(self.tile_width, self.tile_height)
    }

    /// The overlay grid whose cell corners sit on this grid's cell centers.
    ///
    /// One extra row and column, shifted by half a cell on both axes.
    /// Dimensions saturate at `u32::MAX`.
    pub fn dual(&self) -> GridConfig {
        Self {
            columns: self.columns.saturating_add(1),
            rows: self.rows.saturating_add(1),
            tile_width: self.tile_width,
            tile_height: self.tile_height,
            origin: self.origin - self.tile_size() * 0.5,
        }
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Check whether a cell coordinate lies inside the grid.
    #[inline]
    pub fn contains(&self, coord: IVec2) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.columns
            && (coord.y as u32) < self.rows
    }

    /// Row-major storage index of an in-bounds cell.
    pub fn index_of(&self, coord: IVec2) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        Some(coord.y as usize * self.columns as usize + coord.x as usize)
    }

    /// Cell coordinate for a row-major storage index.
    pub fn coord_of(&self, index: usize) -> IVec2 {
        let columns = self.columns.max(1) as usize;
        IVec2::new((index % columns) as i32, (index / columns) as i32)
    }

    /// World position of a cell's top-left corner.
    pub fn cell_origin(&self, coord: IVec2) -> Vec2 {
        self.origin + coord.as_vec2() * self.tile_size()
    }

    /// World position of a cell's geometric center.
    pub fn cell_center(&self, coord: IVec2) -> Vec2 {
        self.cell_origin(coord) + self.tile_size() * 0.5
    }

    /// Convert a world position to the cell coordinate containing it.
    ///
    /// Floors per axis, so the result may be negative or past the last
    /// column/row. Use [`GridConfig::cell_at`] for a bounds-checked lookup.
    pub fn world_to_cell(&self, pos: Vec2) -> IVec2 {
        let local = (pos - self.origin) / self.tile_size();
        IVec2::new(local.x.floor() as i32, local.y.floor() as i32)
    }

    /// Cell under a world position, if it lies inside the grid.
    pub fn cell_at(&self, pos: Vec2) -> Option<IVec2> {
        let coord = self.world_to_cell(pos);
        self.contains(coord).then_some(coord)
    }

    /// World-space size of the whole grid.
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.columns as f32, self.rows as f32) * self.tile_size()
    }

    /// World position of the grid's center point.
    pub fn center(&self) -> Vec2 {
        self.origin + self.extent() * 0.5
    }
}
