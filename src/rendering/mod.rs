//! Rendering Backends
//!
//! [`TileRenderer`](crate::render::TileRenderer) implementations that live
//! outside the engine core.

pub mod text_preview;

pub use text_preview::{TextPreview, blend_glyph};
