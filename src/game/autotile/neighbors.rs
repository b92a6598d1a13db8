//! Neighbor Resolution
//!
//! Binds every mesh cell to the world cells whose centers sit exactly on
//! its four corners. The grids never move or resize, so this runs once
//! when the layers become ready and the result is cached on each mesh cell.

use glam::{IVec2, Vec2};

use super::blend::{Corner, CornerStates};
use super::mesh::MeshCell;
use super::terrain::WorldCell;
use crate::world::TileMap;

/// World cells under a mesh cell's corners, as coordinates into the world map.
/// `None` means no world cell is centered on that corner (outer border).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorldNeighbors {
    pub tl: Option<IVec2>,
    pub tr: Option<IVec2>,
    pub bl: Option<IVec2>,
    pub br: Option<IVec2>,
}

impl WorldNeighbors {
    pub fn get(&self, corner: Corner) -> Option<IVec2> {
        match corner {
            Corner::TopLeft => self.tl,
            Corner::TopRight => self.tr,
            Corner::BottomLeft => self.bl,
            Corner::BottomRight => self.br,
        }
    }

    /// Number of corners backed by a world cell.
    pub fn present(&self) -> usize {
        Corner::ALL.iter().filter(|&&c| self.get(c).is_some()).count()
    }

    /// Read the current terrain under each corner.
    pub fn snapshot(&self, world: &TileMap<WorldCell>) -> CornerStates {
        let state = |coord: Option<IVec2>| coord.and_then(|c| world.get(c)).map(|t| t.data.state);
        CornerStates::new(state(self.tl), state(self.tr), state(self.bl), state(self.br))
    }
}

/// The world cell centered exactly on `point`, if any.
///
/// The containing cell is the only candidate whose center can equal the
/// point, so it is looked up directly and then compared for exact equality.
fn world_cell_centered_at(world: &TileMap<WorldCell>, point: Vec2) -> Option<IVec2> {
    let tile = world.tile_at(point)?;
    (world.center(tile.coord) == point).then_some(tile.coord)
}

/// Find the world neighbors of a mesh cell whose top-left corner is `mesh_origin`.
///
/// Corners are the mesh origin offset by zero or one world tile on each axis.
pub fn resolve_world_neighbors(mesh_origin: Vec2, world: &TileMap<WorldCell>) -> WorldNeighbors {
    let size = world.config().tile_size();
    let corner = |dx: f32, dy: f32| {
        world_cell_centered_at(world, mesh_origin + Vec2::new(dx * size.x, dy * size.y))
    };

    WorldNeighbors {
        tl: corner(0.0, 0.0),
        tr: corner(1.0, 0.0),
        bl: corner(0.0, 1.0),
        br: corner(1.0, 1.0),
    }
}

/// Bind every mesh cell to its world neighbors. Returns how many mesh
/// cells ended up with all four corners backed.
pub fn resolve_all(mesh: &mut TileMap<MeshCell>, world: &TileMap<WorldCell>) -> usize {
    let mesh_grid = *mesh.config();
    let mut interior = 0;
    for tile in mesh.tiles_mut() {
        tile.data.neighbors = resolve_world_neighbors(mesh_grid.cell_origin(tile.coord), world);
        if tile.data.neighbors.present() == 4 {
            interior += 1;
        }
    }
    interior
}
