//! Autotile Tests - Layers, Painter and Rendering End to End
//!
//! Drives terrain sessions through the public API the way a window shell
//! does: grid ready signal, pointer events, renderer output.

use glam::{IVec2, Vec2};
use terrain_autotile_engine::game::autotile::{
    BlendSprite, PaintOutcome, Rotation, TerrainLayers, TerrainPainter, TerrainState,
};
use terrain_autotile_engine::game::config::AutotileConfig;
use terrain_autotile_engine::input::{PointerButton, PointerEvent};
use terrain_autotile_engine::render::{RenderLayer, SpriteBatch, SpriteSheet, TileRenderer};
use terrain_autotile_engine::rendering::TextPreview;
use terrain_autotile_engine::world::GridConfig;

/// Counts renderer traffic so redraw passes can be observed from outside.
#[derive(Default)]
struct CountingRenderer {
    clears: usize,
    attaches: usize,
}

impl TileRenderer for CountingRenderer {
    fn clear_cell(&mut self, _layer: RenderLayer, _coord: IVec2) {
        self.clears += 1;
    }

    fn attach_sprite(&mut self, _layer: RenderLayer, _coord: IVec2, _sprite: u8, _rotation: f32) {
        self.attaches += 1;
    }
}

fn session(columns: u32, rows: u32) -> (TerrainLayers, SpriteBatch) {
    let grid = GridConfig::new(columns, rows, 16.0, 16.0);
    let mut layers = TerrainLayers::with_grid(grid, SpriteSheet::default());
    let mut batch = SpriteBatch::new(*layers.world().config(), *layers.mesh().config());
    layers.on_grid_ready(&mut batch);
    (layers, batch)
}

/// World position of a world cell's center.
fn cell_pos(layers: &TerrainLayers, x: i32, y: i32) -> Vec2 {
    layers.world().center(IVec2::new(x, y))
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_single_grass_cell_in_two_by_two_world() {
    let (mut layers, mut batch) = session(2, 2);
    let mut painter = TerrainPainter::new();

    let at = cell_pos(&layers, 0, 0);
    let press = PointerEvent::down(PointerButton::Left, at);
    painter.handle_event(press, &mut layers, &mut batch);

    // The mesh cell whose bottom-right corner is world (0,0) is mesh (0,0)
    let cell = layers.mesh_cell(IVec2::ZERO).unwrap();
    assert_eq!(cell.sprite_index(), Some(1));
    assert_eq!(cell.rotation(), Some(Rotation::Deg0));

    // Mesh cells with no corner on world (0,0) stay empty
    for tile in layers.mesh().tiles() {
        let n = tile.data.neighbors;
        let touches = [n.tl, n.tr, n.bl, n.br].contains(&Some(IVec2::ZERO));
        if !touches {
            assert_eq!(tile.data.sprite_index(), None, "mesh {:?}", tile.coord);
        }
    }
    assert_eq!(layers.mesh().tiles().filter(|t| t.data.tile.is_some()).count(), 4);
}

#[test]
fn test_top_edge_pair_shares_mesh_cell() {
    let (mut layers, mut batch) = session(2, 2);
    layers.set_cell_state(IVec2::new(0, 0), TerrainState::Grass);
    layers.set_cell_state(IVec2::new(1, 0), TerrainState::Grass);
    layers.refresh(&mut batch);

    // Mesh (1,1) has world (0,0) at TL and (1,0) at TR
    let cell = layers.mesh_cell(IVec2::ONE).unwrap();
    assert_eq!(cell.neighbors.tl, Some(IVec2::new(0, 0)));
    assert_eq!(cell.neighbors.tr, Some(IVec2::new(1, 0)));
    assert_eq!(cell.sprite_index(), Some(2));
    assert_eq!(cell.rotation(), Some(Rotation::NegDeg90));
    assert_eq!(cell.rotation().map(|r| r.degrees()), Some(-90));
}

#[test]
fn test_only_cells_touching_grass_are_blended() {
    let (mut layers, mut batch) = session(5, 5);
    layers.set_cell_state(IVec2::new(2, 2), TerrainState::Grass);
    let stats = layers.refresh(&mut batch);

    assert_eq!(stats.blended, 4);
    let blended: Vec<IVec2> = layers
        .mesh()
        .tiles()
        .filter(|t| t.data.tile.is_some())
        .map(|t| t.coord)
        .collect();
    assert_eq!(
        blended,
        vec![IVec2::new(2, 2), IVec2::new(3, 2), IVec2::new(2, 3), IVec2::new(3, 3)]
    );
}

#[test]
fn test_grass_block_interior_is_full() {
    let (mut layers, mut batch) = session(4, 4);
    let mut painter = TerrainPainter::new();

    // Drag across a 2x2 block, row by row
    let path = [(1, 1), (2, 1), (2, 2), (1, 2)];
    let start = cell_pos(&layers, path[0].0, path[0].1);
    let press = PointerEvent::down(PointerButton::Left, start);
    painter.handle_event(press, &mut layers, &mut batch);
    for &(x, y) in &path[1..] {
        let pos = cell_pos(&layers, x, y);
        painter.handle_event(PointerEvent::moved(pos), &mut layers, &mut batch);
    }
    let release = PointerEvent::up(PointerButton::Left, start);
    painter.handle_event(release, &mut layers, &mut batch);

    let center = layers.mesh_cell(IVec2::new(2, 2)).unwrap().tile.unwrap();
    assert_eq!(center.sprite, BlendSprite::Full);
    let corner = layers.mesh_cell(IVec2::new(1, 1)).unwrap().tile.unwrap();
    assert_eq!(corner.sprite, BlendSprite::Corner);
    assert_eq!(corner.rotation, Rotation::Deg0);
    let edge = layers.mesh_cell(IVec2::new(2, 1)).unwrap().tile.unwrap();
    assert_eq!(edge.sprite, BlendSprite::Edge);
    assert_eq!(edge.rotation, Rotation::Deg90);
}

#[test]
fn test_diagonal_and_inner_corner() {
    let (mut layers, mut batch) = session(2, 2);
    layers.set_cell_state(IVec2::new(0, 0), TerrainState::Grass);
    layers.set_cell_state(IVec2::new(1, 1), TerrainState::Grass);
    layers.refresh(&mut batch);
    let tile = layers.mesh_cell(IVec2::ONE).unwrap().tile.unwrap();
    assert_eq!((tile.sprite, tile.rotation), (BlendSprite::Diagonal, Rotation::Deg90));

    layers.set_cell_state(IVec2::new(1, 0), TerrainState::Grass);
    layers.refresh(&mut batch);
    let tile = layers.mesh_cell(IVec2::ONE).unwrap().tile.unwrap();
    // Only bottom-left is soil
    assert_eq!((tile.sprite, tile.rotation), (BlendSprite::InnerCorner, Rotation::NegDeg90));
}

// ============================================================================
// Painter debounce
// ============================================================================

#[test]
fn test_drag_runs_one_update_per_new_cell() {
    let (mut layers, mut batch) = session(6, 1);
    let mut painter = TerrainPainter::new();
    let before = layers.update_passes();

    let press = PointerEvent::down(PointerButton::Left, Vec2::new(1.0, 8.0));
    painter.handle_event(press, &mut layers, &mut batch);
    // Sweep right in 4-unit steps: 24 moves across 6 cells
    let mut painted = 1;
    for step in 1..24 {
        let pos = Vec2::new(1.0 + step as f32 * 4.0, 8.0);
        if let PaintOutcome::Painted(..) =
            painter.handle_event(PointerEvent::moved(pos), &mut layers, &mut batch)
        {
            painted += 1;
        }
    }

    assert_eq!(painted, 6);
    assert_eq!(layers.update_passes(), before + 6);
    assert_eq!(layers.grass_cells(), 6);
}

#[test]
fn test_revisiting_cell_in_same_gesture_is_debounced() {
    let (mut layers, _) = session(3, 3);
    let mut renderer = CountingRenderer::default();
    let mut painter = TerrainPainter::new();
    let at = cell_pos(&layers, 1, 1);

    let press = PointerEvent::down(PointerButton::Left, at);
    painter.handle_event(press, &mut layers, &mut renderer);
    let after_first = (renderer.clears, layers.update_passes());
    // One full mesh pass: every cell cleared, four blend sprites attached
    assert_eq!(renderer.clears, 16);
    assert_eq!(renderer.attaches, 4);

    let jitter = PointerEvent::moved(at + Vec2::new(3.0, -2.0));
    painter.handle_event(jitter, &mut layers, &mut renderer);
    painter.handle_event(PointerEvent::moved(at), &mut layers, &mut renderer);

    assert_eq!((renderer.clears, layers.update_passes()), after_first);
}

#[test]
fn test_erase_with_secondary_button() {
    let (mut layers, mut batch) = session(3, 3);
    let mut painter = TerrainPainter::new();
    let at = cell_pos(&layers, 1, 1);

    let press = PointerEvent::down(PointerButton::Left, at);
    painter.handle_event(press, &mut layers, &mut batch);
    let release = PointerEvent::up(PointerButton::Left, at);
    painter.handle_event(release, &mut layers, &mut batch);
    assert_eq!(batch.layer_len(RenderLayer::Mesh), 4);

    let erase = PointerEvent::down(PointerButton::Right, at);
    let out = painter.handle_event(erase, &mut layers, &mut batch);
    assert_eq!(out, PaintOutcome::Painted(IVec2::ONE, TerrainState::Soil));
    assert_eq!(batch.layer_len(RenderLayer::Mesh), 0);
    // Base tiles are untouched by mesh redraws
    assert_eq!(batch.layer_len(RenderLayer::World), 9);
}

// ============================================================================
// Configuration and preview
// ============================================================================

#[test]
fn test_default_config_session() {
    let config = AutotileConfig::default();
    let mut layers = TerrainLayers::new(&config);
    let mut batch = SpriteBatch::new(*layers.world().config(), *layers.mesh().config());
    layers.on_grid_ready(&mut batch);

    assert_eq!(layers.world().len(), 25 * 25);
    assert_eq!(layers.mesh().len(), 26 * 26);
    assert_eq!(layers.mesh().config().origin, Vec2::new(-8.0, -8.0));

    // Screen center lands on the grid center through the camera
    let world_pos = config.camera.screen_to_world(Vec2::new(400.0, 300.0));
    assert_eq!(layers.world().config().cell_at(world_pos), Some(IVec2::new(12, 12)));
}

#[test]
fn test_text_preview_shows_single_blob() {
    let (mut layers, _) = session(1, 1);
    let mut preview = TextPreview::new(layers.mesh().config());
    layers.set_cell_state(IVec2::ZERO, TerrainState::Grass);
    layers.refresh(&mut preview);

    assert_eq!(preview.render(), "▗▖\n▝▘");
}
