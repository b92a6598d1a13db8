//! Sprite Instance Batching
//!
//! GPU-compatible instance data for drawing tile layers with a single
//! instanced quad. [`SpriteBatch`] is a [`TileRenderer`] that keeps at most
//! one sprite per (layer, cell) and hands the result out as raw bytes.

use std::collections::BTreeMap;

use glam::IVec2;
use static_assertions::const_assert_eq;

use super::tile_renderer::{RenderLayer, TileRenderer};
use crate::world::GridConfig;

/// GPU instance data for a single tile sprite.
///
/// Layout (32 bytes total, 16-byte aligned for GPU compatibility):
/// - position: vec2<f32> (8 bytes) - Cell center in world space
/// - rotation: f32 (4 bytes) - Radians, clockwise on screen
/// - sprite:   u32 (4 bytes) - Atlas index
/// - layer_z:  u32 (4 bytes) - Draw order of the owning layer
/// - _pad:     3 x u32 (12 bytes)
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub position: [f32; 2],
    pub rotation: f32,
    pub sprite: u32,
    pub layer_z: u32,
    pub _pad: [u32; 3],
}

const_assert_eq!(std::mem::size_of::<SpriteInstance>(), 32);

impl SpriteInstance {
    pub fn new(position: [f32; 2], rotation: f32, sprite: u32, layer_z: u32) -> Self {
        Self {
            position,
            rotation,
            sprite,
            layer_z,
            _pad: [0; 3],
        }
    }
}

/// Collects the current sprite of every drawn cell across both tile layers.
#[derive(Debug, Clone)]
pub struct SpriteBatch {
    world_grid: GridConfig,
    mesh_grid: GridConfig,
    // Keyed (layer, row, column) so iteration is layer-major then row-major.
    cells: BTreeMap<(RenderLayer, i32, i32), SpriteInstance>,
}

impl SpriteBatch {
    pub fn new(world_grid: GridConfig, mesh_grid: GridConfig) -> Self {
        Self {
            world_grid,
            mesh_grid,
            cells: BTreeMap::new(),
        }
    }

    fn grid(&self, layer: RenderLayer) -> &GridConfig {
        match layer {
            RenderLayer::World => &self.world_grid,
            RenderLayer::Mesh => &self.mesh_grid,
        }
    }

    /// Number of cells currently showing a sprite.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of sprites on one layer.
    pub fn layer_len(&self, layer: RenderLayer) -> usize {
        self.cells.keys().filter(|(l, _, _)| *l == layer).count()
    }

    /// Sprite currently shown in a cell.
    pub fn get(&self, layer: RenderLayer, coord: IVec2) -> Option<&SpriteInstance> {
        self.cells.get(&(layer, coord.y, coord.x))
    }

    /// All instances ordered for drawing (world layer first).
    pub fn instances(&self) -> Vec<SpriteInstance> {
        self.cells.values().copied().collect()
    }

    /// Instance data ready for a vertex buffer upload.
    pub fn as_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.instances()).to_vec()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

impl TileRenderer for SpriteBatch {
    fn clear_cell(&mut self, layer: RenderLayer, coord: IVec2) {
        self.cells.remove(&(layer, coord.y, coord.x));
    }

    fn attach_sprite(&mut self, layer: RenderLayer, coord: IVec2, sprite: u8, rotation: f32) {
        let center = self.grid(layer).cell_center(coord);
        let instance = SpriteInstance::new(center.to_array(), rotation, sprite as u32, layer.z());
        self.cells.insert((layer, coord.y, coord.x), instance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> SpriteBatch {
        let world = GridConfig::new(2, 2, 16.0, 16.0);
        SpriteBatch::new(world, world.dual())
    }

    #[test]
    fn test_attach_positions_at_cell_center() {
        let mut batch = batch();
        batch.attach_sprite(RenderLayer::Mesh, IVec2::new(1, 1), 1, 0.0);

        let instance = batch.get(RenderLayer::Mesh, IVec2::new(1, 1)).unwrap();
        assert_eq!(instance.position, [16.0, 16.0]);
        assert_eq!(instance.sprite, 1);
        assert_eq!(instance.layer_z, 1);
    }

    #[test]
    fn test_attach_replaces_previous_sprite() {
        let mut batch = batch();
        batch.attach_sprite(RenderLayer::World, IVec2::ZERO, 0, 0.0);
        batch.attach_sprite(RenderLayer::World, IVec2::ZERO, 3, 1.0);

        assert_eq!(batch.len(), 1);
        assert_eq!(batch.get(RenderLayer::World, IVec2::ZERO).unwrap().sprite, 3);
    }

    #[test]
    fn test_clear_cell_removes_sprite() {
        let mut batch = batch();
        batch.attach_sprite(RenderLayer::Mesh, IVec2::ZERO, 5, 0.0);
        batch.clear_cell(RenderLayer::Mesh, IVec2::ZERO);
        assert!(batch.is_empty());
    }

    #[test]
    fn test_world_layer_draws_first() {
        let mut batch = batch();
        batch.attach_sprite(RenderLayer::Mesh, IVec2::ZERO, 5, 0.0);
        batch.attach_sprite(RenderLayer::World, IVec2::new(1, 1), 0, 0.0);

        let instances = batch.instances();
        assert_eq!(instances[0].layer_z, 0);
        assert_eq!(instances[1].layer_z, 1);
        assert_eq!(batch.as_bytes().len(), 64);
    }
}
