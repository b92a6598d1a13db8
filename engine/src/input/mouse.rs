//! Pointer Input Module
//!
//! Pointer buttons and press/move/release events in world space.
//! Decoupled from winit; a `From` conversion is provided for window shells.

use glam::Vec2;

/// Pointer button identifiers, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
    /// Additional mouse buttons (back, forward, etc.)
    Other(u16),
}

impl PointerButton {
    /// Only the primary and secondary buttons edit terrain.
    pub fn is_paint_button(&self) -> bool {
        matches!(self, PointerButton::Left | PointerButton::Right)
    }
}

impl From<winit::event::MouseButton> for PointerButton {
    fn from(button: winit::event::MouseButton) -> Self {
        use winit::event::MouseButton;
        match button {
            MouseButton::Left => PointerButton::Left,
            MouseButton::Right => PointerButton::Right,
            MouseButton::Middle => PointerButton::Middle,
            MouseButton::Back => PointerButton::Other(3),
            MouseButton::Forward => PointerButton::Other(4),
            MouseButton::Other(id) => PointerButton::Other(id),
        }
    }
}

/// A single pointer event with its position already mapped to world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button pressed
    Down { button: PointerButton, position: Vec2 },
    /// Pointer moved (with or without a button held)
    Move { position: Vec2 },
    /// Button released
    Up { button: PointerButton, position: Vec2 },
}

impl PointerEvent {
    pub fn down(button: PointerButton, position: Vec2) -> Self {
        Self::Down { button, position }
    }

    pub fn moved(position: Vec2) -> Self {
        Self::Move { position }
    }

    pub fn up(button: PointerButton, position: Vec2) -> Self {
        Self::Up { button, position }
    }

    /// World position carried by the event.
    pub fn position(&self) -> Vec2 {
        match *self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position, .. } => position,
        }
    }
}
