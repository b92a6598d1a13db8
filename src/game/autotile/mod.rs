//! Autotile Module
//!
//! Dual-grid terrain blending. The world layer holds soil/grass per cell;
//! the mesh layer sits half a cell up-left with one extra row and column,
//! so each mesh cell's corners land on four world cell centers and its
//! blend sprite is derived from those four states.
//!
//! Data flow: pointer event -> [`TerrainPainter`] -> world write ->
//! mesh update (via cached [`WorldNeighbors`]) -> renderer.

pub mod blend;
pub mod layers;
pub mod mesh;
pub mod neighbors;
pub mod painter;
pub mod terrain;

pub use blend::{BlendSprite, BlendTile, Corner, CornerStates, Rotation, classify};
pub use layers::TerrainLayers;
pub use mesh::{
    BASE_TILE_SPRITE, MeshCell, MeshUpdateStats, redraw_mesh_map, redraw_world_map, update_mesh_map,
};
pub use neighbors::{WorldNeighbors, resolve_all, resolve_world_neighbors};
pub use painter::{PaintOutcome, TerrainPainter, paint_state};
pub use terrain::{TerrainState, WorldCell};
