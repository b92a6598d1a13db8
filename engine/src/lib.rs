//! Terrain Autotile Engine
//!
//! A two-layer tile system: an editable world layer holding soil/grass per
//! cell, and a mesh overlay offset by half a cell whose blend sprites
//! smooth the boundary between the two (dual-grid marching squares).
//!
//! # Modules
//!
//! - [`world`] - Grid geometry and the dense tile container
//! - [`input`] - Platform-agnostic pointer events
//! - [`camera`] - Screen/world mapping for the 2D view
//! - [`render`] - Sprite atlas layout, the tile renderer trait, instance batches
//! - [`game`] - Terrain layers, blend classification and the painter
//!
//! # Example
//!
//! ```ignore
//! use terrain_autotile_engine::game::autotile::{TerrainLayers, TerrainPainter};
//! use terrain_autotile_engine::game::config::AutotileConfig;
//! use terrain_autotile_engine::input::{PointerButton, PointerEvent};
//! use terrain_autotile_engine::render::SpriteBatch;
//!
//! let config = AutotileConfig::default();
//! let mut layers = TerrainLayers::new(&config);
//! let mut batch = SpriteBatch::new(*layers.world().config(), *layers.mesh().config());
//!
//! // Grid container finished allocating: bind neighbors and draw once
//! layers.on_grid_ready(&mut batch);
//!
//! let mut painter = TerrainPainter::new();
//! let press = PointerEvent::down(PointerButton::Left, Vec2::new(8.0, 8.0));
//! painter.handle_event(press, &mut layers, &mut batch);
//! ```

pub mod camera;
pub mod input;
pub mod render;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Text preview backend (located in src/rendering/ directory)
#[path = "../../src/rendering/mod.rs"]
pub mod rendering;

pub use camera::Camera2d;
pub use input::{PointerButton, PointerEvent};
pub use render::{RenderLayer, SpriteBatch, SpriteSheet, TileRenderer};
pub use world::{GridConfig, Tile, TileMap};
