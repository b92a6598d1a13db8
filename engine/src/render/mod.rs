//! Render Module
//!
//! Backend-neutral pieces of tile rendering:
//! - [`sprite_sheet`] - atlas layout and sprite regions
//! - [`tile_renderer`] - the per-cell drawing trait layers talk to
//! - [`instancing`] - GPU instance batches built from draw calls

pub mod instancing;
pub mod sprite_sheet;
pub mod tile_renderer;

pub use instancing::{SpriteBatch, SpriteInstance};
pub use sprite_sheet::{SpriteRegion, SpriteSheet};
pub use tile_renderer::{RenderLayer, TileRenderer};
