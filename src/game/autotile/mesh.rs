//! Mesh Layer
//!
//! The overlay cells drawn on top of the world layer, the pass that
//! re-derives their blend tiles, and the passes that push both layers to a
//! [`TileRenderer`].

use super::blend::{BlendTile, Rotation, classify};
use super::neighbors::WorldNeighbors;
use super::terrain::WorldCell;
use crate::render::{RenderLayer, TileRenderer};
use crate::world::TileMap;

/// Atlas index of the plain tile drawn under every world cell.
pub const BASE_TILE_SPRITE: u8 = 0;

/// Payload of a mesh-layer tile.
///
/// `tile` is derived state: always the classification of the current
/// terrain under `neighbors`, rewritten by [`update_mesh_map`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeshCell {
    /// World cells under this cell's corners, bound once at setup
    pub neighbors: WorldNeighbors,
    /// Blend tile to draw, `None` when the neighborhood has no grass
    pub tile: Option<BlendTile>,
}

impl MeshCell {
    /// Atlas index of the blend sprite, if any.
    pub fn sprite_index(&self) -> Option<u8> {
        self.tile.map(|t| t.sprite.index())
    }

    /// Rotation of the blend sprite; meaningless when there is no sprite.
    pub fn rotation(&self) -> Option<Rotation> {
        self.tile.map(|t| t.rotation)
    }
}

/// Result of one [`update_mesh_map`] pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeshUpdateStats {
    /// Mesh cells visited
    pub scanned: usize,
    /// Mesh cells that now show a blend sprite
    pub blended: usize,
    /// Mesh cells whose tile differs from before the pass
    pub changed: usize,
}

/// Re-classify every mesh cell from the current world terrain.
///
/// Full rescan, no dirty tracking: the grids are small.
pub fn update_mesh_map(
    mesh: &mut TileMap<MeshCell>,
    world: &TileMap<WorldCell>,
) -> MeshUpdateStats {
    let mut stats = MeshUpdateStats::default();
    for tile in mesh.tiles_mut() {
        let cell = &mut tile.data;
        let next = classify(&cell.neighbors.snapshot(world));
        if next != cell.tile {
            stats.changed += 1;
        }
        cell.tile = next;
        stats.scanned += 1;
        if next.is_some() {
            stats.blended += 1;
        }
    }
    stats
}

/// Redraw every mesh cell: clear it, then attach its blend sprite if it has one.
pub fn redraw_mesh_map(mesh: &TileMap<MeshCell>, renderer: &mut impl TileRenderer) {
    for tile in mesh.tiles() {
        renderer.clear_cell(RenderLayer::Mesh, tile.coord);
        if let Some(blend) = tile.data.tile {
            renderer.attach_sprite(
                RenderLayer::Mesh,
                tile.coord,
                blend.sprite.index(),
                blend.rotation.radians(),
            );
        }
    }
}

/// Draw the base tile under every world cell.
pub fn redraw_world_map(world: &TileMap<WorldCell>, renderer: &mut impl TileRenderer) {
    for tile in world.tiles() {
        renderer.clear_cell(RenderLayer::World, tile.coord);
        renderer.attach_sprite(RenderLayer::World, tile.coord, BASE_TILE_SPRITE, 0.0);
    }
}
