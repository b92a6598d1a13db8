//! Game Module
//!
//! Terrain editing built on top of the engine: the autotile layers and
//! their configuration.

pub mod autotile;
pub mod config;

pub use autotile::{PaintOutcome, TerrainLayers, TerrainPainter, TerrainState};
pub use config::{AutotileConfig, ConfigError};
