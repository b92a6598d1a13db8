//! Orthographic 2D Camera
//!
//! Maps window pixels to world positions for a top-down tile view.
//! The camera position is the world point shown at the viewport center.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 2D camera with uniform zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera2d {
    /// World position at the center of the viewport
    pub position: Vec2,
    /// Screen pixels per world unit
    pub zoom: f32,
    /// Viewport size in pixels
    pub viewport: Vec2,
}

impl Default for Camera2d {
    fn default() -> Self {
        Self {
            position: Vec2::new(200.0, 200.0),
            zoom: 1.2,
            viewport: Vec2::new(800.0, 600.0),
        }
    }
}

impl Camera2d {
    pub fn new(position: Vec2, zoom: f32, viewport: Vec2) -> Self {
        Self {
            position,
            zoom,
            viewport,
        }
    }

    /// Update the viewport after a window resize. Zero-sized viewports are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.viewport = Vec2::new(width as f32, height as f32);
        }
    }

    /// Convert a pixel position (origin top-left, y down) to world space.
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        self.position + (screen - self.viewport * 0.5) / self.zoom
    }

    /// Convert a world position to pixel coordinates.
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.position) * self.zoom + self.viewport * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_center_maps_to_position() {
        let camera = Camera2d::default();
        assert_eq!(camera.screen_to_world(Vec2::new(400.0, 300.0)), Vec2::new(200.0, 200.0));
    }

    #[test]
    fn test_zoom_scales_offsets() {
        let camera = Camera2d::new(Vec2::ZERO, 2.0, Vec2::new(100.0, 100.0));
        assert_eq!(camera.screen_to_world(Vec2::new(100.0, 50.0)), Vec2::new(25.0, 0.0));
        assert_eq!(camera.world_to_screen(Vec2::new(25.0, 0.0)), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_resize_ignores_zero() {
        let mut camera = Camera2d::default();
        camera.resize(0, 720);
        assert_eq!(camera.viewport, Vec2::new(800.0, 600.0));
        camera.resize(1280, 720);
        assert_eq!(camera.viewport, Vec2::new(1280.0, 720.0));
    }
}
