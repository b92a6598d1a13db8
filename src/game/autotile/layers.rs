//! Terrain Layers
//!
//! Session state for one editable terrain: the world layer, the mesh overlay
//! derived from it, and the readiness handshake with the grid container.
//! Nothing here is global; independent sessions can coexist.

use glam::IVec2;
use tracing::{debug, info};

use super::mesh::{MeshCell, MeshUpdateStats, redraw_mesh_map, redraw_world_map, update_mesh_map};
use super::neighbors::resolve_all;
use super::terrain::{TerrainState, WorldCell};
use crate::game::config::AutotileConfig;
use crate::render::{SpriteSheet, TileRenderer};
use crate::world::{GridConfig, TileMap};

/// World layer plus its derived mesh overlay.
#[derive(Debug, Clone)]
pub struct TerrainLayers {
    world: TileMap<WorldCell>,
    mesh: TileMap<MeshCell>,
    sprites: SpriteSheet,
    ready: bool,
    update_passes: u64,
}

impl TerrainLayers {
    /// Allocate both layers. Neighbors are not bound until [`Self::on_grid_ready`].
    pub fn new(config: &AutotileConfig) -> Self {
        Self::with_grid(config.world, config.sprites)
    }

    /// Allocate both layers from a world grid; the mesh grid is its dual.
    pub fn with_grid(world_grid: GridConfig, sprites: SpriteSheet) -> Self {
        Self {
            world: TileMap::new(world_grid, |_| WorldCell::default()),
            mesh: TileMap::new(world_grid.dual(), |_| MeshCell::default()),
            sprites,
            ready: false,
            update_passes: 0,
        }
    }

    /// Grid container signal: cells exist and may be bound and drawn.
    ///
    /// Resets the world to soil, draws the base tiles, binds every mesh cell
    /// to its world neighbors and runs the first update/redraw. Topology is
    /// fixed afterwards, so later calls are ignored and return `false`.
    pub fn on_grid_ready(&mut self, renderer: &mut impl TileRenderer) -> bool {
        if self.ready {
            debug!("grid ready signal repeated; neighbors already bound");
            return false;
        }

        for tile in self.world.tiles_mut() {
            tile.data.state = TerrainState::Soil;
        }
        redraw_world_map(&self.world, renderer);

        let interior = resolve_all(&mut self.mesh, &self.world);
        self.ready = true;
        self.refresh(renderer);

        info!(
            world_cells = self.world.len(),
            mesh_cells = self.mesh.len(),
            interior,
            "terrain layers ready"
        );
        true
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Write a world cell's terrain. Does not touch the mesh; call
    /// [`Self::refresh`] afterwards. Returns `false` for out-of-bounds cells.
    pub fn set_cell_state(&mut self, coord: IVec2, state: TerrainState) -> bool {
        match self.world.get_mut(coord) {
            Some(tile) => {
                tile.data.state = state;
                true
            }
            None => false,
        }
    }

    /// Re-derive the mesh layer and redraw it.
    pub fn refresh(&mut self, renderer: &mut impl TileRenderer) -> MeshUpdateStats {
        let stats = update_mesh_map(&mut self.mesh, &self.world);
        redraw_mesh_map(&self.mesh, renderer);
        self.update_passes += 1;
        debug!(
            pass = self.update_passes,
            blended = stats.blended,
            changed = stats.changed,
            "mesh layer refreshed"
        );
        stats
    }

    /// Terrain at a world cell.
    pub fn state_at(&self, coord: IVec2) -> Option<TerrainState> {
        self.world.get(coord).map(|t| t.data.state)
    }

    /// Mesh cell at a mesh coordinate.
    pub fn mesh_cell(&self, coord: IVec2) -> Option<&MeshCell> {
        self.mesh.get(coord).map(|t| &t.data)
    }

    pub fn world(&self) -> &TileMap<WorldCell> {
        &self.world
    }

    pub fn mesh(&self) -> &TileMap<MeshCell> {
        &self.mesh
    }

    pub fn sprites(&self) -> &SpriteSheet {
        &self.sprites
    }

    /// Number of mesh update passes run so far.
    pub fn update_passes(&self) -> u64 {
        self.update_passes
    }

    /// Number of world cells currently holding grass.
    pub fn grass_cells(&self) -> usize {
        self.world.tiles().filter(|t| t.data.state.is_grass()).count()
    }
}
