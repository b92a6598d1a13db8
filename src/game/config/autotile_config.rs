//! Autotile Configuration
//!
//! Grid, tileset, camera and window parameters for a terrain session.
//! Loaded from JSON; every field is optional and falls back to the defaults
//! below, so `{}` is a valid config.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::camera::Camera2d;
use crate::game::autotile::BlendSprite;
use crate::render::SpriteSheet;
use crate::world::GridConfig;

/// Largest accepted grid side, in world cells.
pub const MAX_GRID_SIDE: u32 = 4096;

/// Errors raised while loading a config file.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON deserialization error.
    JsonError(serde_json::Error),
    /// Parsed but unusable values.
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::JsonError(e) => write!(f, "JSON error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::JsonError(e)
    }
}

/// Window shell settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Terrain Painter".to_string(),
        }
    }
}

/// Complete session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutotileConfig {
    /// World layer geometry; the mesh layer is derived from it
    pub world: GridConfig,
    /// Tileset layout
    pub sprites: SpriteSheet,
    /// View onto the world. When the section is missing from a config file
    /// the camera is centered on the configured world and sized to the window.
    pub camera: Camera2d,
    pub window: WindowConfig,
}

impl Default for AutotileConfig {
    fn default() -> Self {
        let world = GridConfig::default();
        let window = WindowConfig::default();
        Self {
            world,
            sprites: SpriteSheet::default(),
            camera: framing_camera(&world, &window),
            window,
        }
    }
}

/// Centered on the grid, slightly zoomed in.
fn framing_camera(world: &GridConfig, window: &WindowConfig) -> Camera2d {
    Camera2d::new(
        world.center(),
        1.2,
        Vec2::new(window.width as f32, window.height as f32),
    )
}

impl AutotileConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let has_camera = value.get("camera").is_some();
        let mut config: Self = serde_json::from_value(value)?;
        if !has_camera {
            config.camera = framing_camera(&config.world, &config.window);
        }
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the layers cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.world;
        if w.columns == 0 || w.rows == 0 {
            return Err(ConfigError::Invalid(format!(
                "world grid must have at least one cell, got {}x{}",
                w.columns, w.rows
            )));
        }
        if w.columns > MAX_GRID_SIDE || w.rows > MAX_GRID_SIDE {
            return Err(ConfigError::Invalid(format!(
                "world grid is limited to {MAX_GRID_SIDE} cells per side, got {}x{}",
                w.columns, w.rows
            )));
        }
        if !(w.tile_width > 0.0 && w.tile_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "tile size must be positive, got {}x{}",
                w.tile_width, w.tile_height
            )));
        }
        let needed = BlendSprite::Full.index() as u32 + 1;
        if self.sprites.sprite_count() < needed {
            return Err(ConfigError::Invalid(format!(
                "tileset holds {} sprites, blend tiles need {needed}",
                self.sprites.sprite_count()
            )));
        }
        if !(self.camera.zoom > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "camera zoom must be positive, got {}",
                self.camera.zoom
            )));
        }
        Ok(())
    }
}
