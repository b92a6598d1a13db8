//! World Module
//!
//! Grid geometry and the dense tile container the terrain layers are stored in.
//!
//! ## Default World
//! The default world is 25 x 25 tiles of 16 x 16 units, anchored at the origin.

pub mod grid;
pub mod tile_map;

pub use grid::{DEFAULT_GRID_CELLS, DEFAULT_TILE_SIZE, GridConfig};
pub use tile_map::{Tile, TileMap};
