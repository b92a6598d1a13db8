//! Terrain Painter - Interactive autotile editor shell
//!
//! Opens a window and turns pointer input into terrain edits. The window
//! itself only captures input; after every painted cell the GPU instance
//! batch is rebuilt and a text preview of the blend layer is printed.
//!
//! Run with: `cargo run --bin terrain_painter [config.json]`
//!
//! Controls:
//! - Left mouse drag: Paint grass
//! - Right mouse drag: Paint soil
//! - ESC: Exit

use std::path::Path;
use std::sync::Arc;

use glam::{IVec2, Vec2};
use tracing::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use terrain_autotile_engine::game::autotile::{PaintOutcome, TerrainLayers, TerrainPainter};
use terrain_autotile_engine::game::config::AutotileConfig;
use terrain_autotile_engine::input::{PointerButton, PointerEvent};
use terrain_autotile_engine::render::{RenderLayer, SpriteBatch, TileRenderer};
use terrain_autotile_engine::rendering::TextPreview;
use terrain_autotile_engine::Camera2d;

// ============================================================================
// DRAW SURFACES
// ============================================================================

/// Fans every draw call out to the instance batch and the terminal preview.
struct Surfaces {
    batch: SpriteBatch,
    preview: TextPreview,
}

impl TileRenderer for Surfaces {
    fn clear_cell(&mut self, layer: RenderLayer, coord: IVec2) {
        self.batch.clear_cell(layer, coord);
        self.preview.clear_cell(layer, coord);
    }

    fn attach_sprite(&mut self, layer: RenderLayer, coord: IVec2, sprite: u8, rotation: f32) {
        self.batch.attach_sprite(layer, coord, sprite, rotation);
        self.preview.attach_sprite(layer, coord, sprite, rotation);
    }
}

// ============================================================================
// APPLICATION
// ============================================================================

struct TerrainPainterApp {
    window: Option<Arc<Window>>,
    config: AutotileConfig,
    camera: Camera2d,
    layers: TerrainLayers,
    painter: TerrainPainter,
    surfaces: Surfaces,
    /// Last cursor position in world space
    cursor_world: Vec2,
}

impl TerrainPainterApp {
    fn new(config: AutotileConfig) -> Self {
        let layers = TerrainLayers::new(&config);
        let surfaces = Surfaces {
            batch: SpriteBatch::new(*layers.world().config(), *layers.mesh().config()),
            preview: TextPreview::new(layers.mesh().config()),
        };
        Self {
            window: None,
            camera: config.camera,
            config,
            layers,
            painter: TerrainPainter::new(),
            surfaces,
            cursor_world: Vec2::ZERO,
        }
    }

    fn handle_pointer(&mut self, event: PointerEvent) {
        let outcome = self.painter.handle_event(event, &mut self.layers, &mut self.surfaces);
        if let PaintOutcome::Painted(coord, state) = outcome {
            info!(x = coord.x, y = coord.y, %state, "cell painted");
            self.present();
        }
    }

    /// Publish the current frame: batch bytes for upload, preview to stdout.
    fn present(&self) {
        let bytes = self.surfaces.batch.as_bytes();
        println!("{}", self.surfaces.preview.render());
        println!(
            "grass cells: {}  sprites: {}  instance bytes: {}",
            self.layers.grass_cells(),
            self.surfaces.batch.len(),
            bytes.len()
        );
        if let Some(window) = &self.window {
            window.set_title(&format!(
                "{} - {} grass",
                self.config.window.title,
                self.layers.grass_cells()
            ));
        }
    }
}

impl ApplicationHandler for TerrainPainterApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_inner_size(PhysicalSize::new(window_config.width, window_config.height));
        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                self.camera.resize(size.width, size.height);
                self.window = Some(Arc::new(window));
            }
            Err(err) => {
                error!(%err, "failed to create window");
                event_loop.exit();
                return;
            }
        }

        // Cells exist now: bind neighbors and draw the first frame
        if self.layers.on_grid_ready(&mut self.surfaces) {
            self.present();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput { event, .. } => {
                if event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                    && event.state == ElementState::Pressed
                {
                    event_loop.exit();
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                let button = PointerButton::from(button);
                let event = match state {
                    ElementState::Pressed => PointerEvent::down(button, self.cursor_world),
                    ElementState::Released => PointerEvent::up(button, self.cursor_world),
                };
                self.handle_pointer(event);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let screen = Vec2::new(position.x as f32, position.y as f32);
                self.cursor_world = self.camera.screen_to_world(screen);
                self.handle_pointer(PointerEvent::moved(self.cursor_world));
            }

            WindowEvent::CursorLeft { .. } => self.painter.end_gesture(),

            WindowEvent::Resized(new_size) => {
                self.camera.resize(new_size.width, new_size.height);
            }

            _ => {}
        }
    }
}

// ============================================================================
// MAIN
// ============================================================================

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn load_config() -> AutotileConfig {
    let Some(path) = std::env::args().nth(1) else {
        return AutotileConfig::default();
    };
    match AutotileConfig::load(Path::new(&path)) {
        Ok(config) => {
            info!(%path, "loaded config");
            config
        }
        Err(err) => {
            warn!(%path, %err, "falling back to default config");
            AutotileConfig::default()
        }
    }
}

fn main() {
    init_tracing();
    let config = load_config();

    println!("===========================================");
    println!("   Terrain Painter");
    println!("===========================================");
    println!();
    println!("Controls:");
    println!("  Left mouse drag: Paint grass");
    println!("  Right mouse drag: Paint soil");
    println!("  ESC: Exit");
    println!();

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(err) => {
            error!(%err, "failed to create event loop");
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Wait);
    let mut app = TerrainPainterApp::new(config);
    if let Err(err) = event_loop.run_app(&mut app) {
        error!(%err, "event loop terminated with error");
        std::process::exit(1);
    }
}
