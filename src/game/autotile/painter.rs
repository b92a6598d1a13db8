//! Terrain Painter - Click-and-drag terrain editing
//!
//! Hold the left button to paint grass, the right button to paint soil.
//! A drag gesture only writes when the pointer enters a new world cell, so
//! jitter inside one cell never re-runs the mesh update.

use glam::{IVec2, Vec2};
use tracing::debug;

use super::layers::TerrainLayers;
use super::terrain::TerrainState;
use crate::input::{PointerButton, PointerEvent};
use crate::render::TileRenderer;

/// What handling a pointer event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintOutcome {
    /// A world cell was written and the mesh refreshed
    Painted(IVec2, TerrainState),
    /// Event was accepted but nothing needed writing
    Unchanged,
    /// Event was not for the painter (unknown button, no gesture, layers not ready)
    Ignored,
}

/// Terrain written by a paint button.
pub fn paint_state(button: PointerButton) -> Option<TerrainState> {
    match button {
        PointerButton::Left => Some(TerrainState::Grass),
        PointerButton::Right => Some(TerrainState::Soil),
        PointerButton::Middle | PointerButton::Other(_) => None,
    }
}

/// Drag gesture tracker that turns pointer events into world-cell edits.
#[derive(Debug, Clone, Default)]
pub struct TerrainPainter {
    /// Button driving the current gesture
    active_button: Option<PointerButton>,
    /// Last world cell written during the current gesture
    last_cell: Option<IVec2>,
}

impl TerrainPainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Is a drag gesture in progress?
    pub fn is_dragging(&self) -> bool {
        self.active_button.is_some()
    }

    pub fn active_button(&self) -> Option<PointerButton> {
        self.active_button
    }

    pub fn last_cell(&self) -> Option<IVec2> {
        self.last_cell
    }

    /// Feed one pointer event.
    pub fn handle_event(
        &mut self,
        event: PointerEvent,
        layers: &mut TerrainLayers,
        renderer: &mut impl TileRenderer,
    ) -> PaintOutcome {
        match event {
            PointerEvent::Down { button, position } => {
                if !button.is_paint_button() {
                    debug!(?button, "ignoring press of non-paint button");
                    return PaintOutcome::Ignored;
                }
                if !layers.is_ready() {
                    debug!(?button, "press before grid ready");
                    return PaintOutcome::Ignored;
                }
                // A new press always starts a fresh gesture
                self.active_button = Some(button);
                self.last_cell = None;
                self.paint_at(position, layers, renderer)
            }
            PointerEvent::Move { position } => {
                if !self.is_dragging() {
                    return PaintOutcome::Ignored;
                }
                self.paint_at(position, layers, renderer)
            }
            PointerEvent::Up { .. } => {
                let was_dragging = self.is_dragging();
                self.end_gesture();
                if was_dragging {
                    PaintOutcome::Unchanged
                } else {
                    PaintOutcome::Ignored
                }
            }
        }
    }

    /// Abandon the current gesture (e.g. pointer left the window).
    pub fn end_gesture(&mut self) {
        self.active_button = None;
        self.last_cell = None;
    }

    fn paint_at(
        &mut self,
        position: Vec2,
        layers: &mut TerrainLayers,
        renderer: &mut impl TileRenderer,
    ) -> PaintOutcome {
        if !layers.is_ready() {
            debug!("pointer event before grid ready");
            return PaintOutcome::Ignored;
        }
        let Some(state) = self.active_button.and_then(paint_state) else {
            return PaintOutcome::Ignored;
        };
        let Some(coord) = layers.world().config().cell_at(position) else {
            return PaintOutcome::Unchanged;
        };
        if self.last_cell == Some(coord) {
            return PaintOutcome::Unchanged;
        }

        layers.set_cell_state(coord, state);
        self.last_cell = Some(coord);
        layers.refresh(renderer);
        debug!(x = coord.x, y = coord.y, %state, "painted world cell");
        PaintOutcome::Painted(coord, state)
    }
}
