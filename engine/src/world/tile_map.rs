//! Tile Map Container
//!
//! Dense, fixed-size grid of typed tiles. Every tile carries its own
//! coordinate plus a strongly-typed payload, so layers built on top of it
//! never look anything up by string key.

use glam::{IVec2, Vec2};

use super::grid::GridConfig;

/// A single cell of a [`TileMap`].
#[derive(Debug, Clone, PartialEq)]
pub struct Tile<T> {
    /// Cell coordinate in the owning map
    pub coord: IVec2,
    /// Per-cell payload
    pub data: T,
}

/// Row-major tile storage allocated once from a [`GridConfig`].
#[derive(Debug, Clone)]
pub struct TileMap<T> {
    config: GridConfig,
    tiles: Vec<Tile<T>>,
}

impl<T> TileMap<T> {
    /// Allocate every cell of the grid, building each payload from its coordinate.
    pub fn new(config: GridConfig, mut init: impl FnMut(IVec2) -> T) -> Self {
        let tiles = (0..config.cell_count())
            .map(|index| {
                let coord = config.coord_of(index);
                Tile {
                    coord,
                    data: init(coord),
                }
            })
            .collect();
        Self { config, tiles }
    }

    /// Geometry this map was allocated from.
    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn columns(&self) -> u32 {
        self.config.columns
    }

    pub fn rows(&self) -> u32 {
        self.config.rows
    }

    /// Number of tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at a cell coordinate.
    pub fn get(&self, coord: IVec2) -> Option<&Tile<T>> {
        self.config.index_of(coord).map(|i| &self.tiles[i])
    }

    /// Mutable tile at a cell coordinate.
    pub fn get_mut(&mut self, coord: IVec2) -> Option<&mut Tile<T>> {
        self.config.index_of(coord).map(move |i| &mut self.tiles[i])
    }

    /// Tile containing a world position.
    pub fn tile_at(&self, pos: Vec2) -> Option<&Tile<T>> {
        self.config.cell_at(pos).and_then(|coord| self.get(coord))
    }

    /// World position of a cell's center.
    pub fn center(&self, coord: IVec2) -> Vec2 {
        self.config.cell_center(coord)
    }

    /// World position of a cell's top-left corner.
    pub fn origin_of(&self, coord: IVec2) -> Vec2 {
        self.config.cell_origin(coord)
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile<T>> {
        self.tiles.iter()
    }

    /// All tiles in row-major order, mutably.
    pub fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile<T>> {
        self.tiles.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocates_every_cell_in_row_major_order() {
        let map = TileMap::new(GridConfig::new(3, 2, 16.0, 16.0), |c| c.x + c.y * 10);

        assert_eq!(map.len(), 6);
        let coords: Vec<IVec2> = map.tiles().map(|t| t.coord).collect();
        assert_eq!(coords[0], IVec2::new(0, 0));
        assert_eq!(coords[2], IVec2::new(2, 0));
        assert_eq!(coords[3], IVec2::new(0, 1));
        assert_eq!(map.get(IVec2::new(2, 1)).map(|t| t.data), Some(12));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let mut map = TileMap::new(GridConfig::new(2, 2, 16.0, 16.0), |_| 0u8);

        assert!(map.get(IVec2::new(2, 0)).is_none());
        assert!(map.get(IVec2::new(0, -1)).is_none());
        assert!(map.get_mut(IVec2::new(5, 5)).is_none());
    }

    #[test]
    fn test_tile_at_position() {
        let map = TileMap::new(GridConfig::new(2, 2, 16.0, 16.0), |_| ());

        assert_eq!(map.tile_at(Vec2::new(17.0, 3.0)).map(|t| t.coord), Some(IVec2::new(1, 0)));
        assert!(map.tile_at(Vec2::new(33.0, 3.0)).is_none());
    }

    #[test]
    fn test_get_mut_writes_through() {
        let mut map = TileMap::new(GridConfig::new(2, 2, 16.0, 16.0), |_| false);
        if let Some(tile) = map.get_mut(IVec2::new(1, 1)) {
            tile.data = true;
        }
        assert_eq!(map.tiles().filter(|t| t.data).count(), 1);
    }
}
