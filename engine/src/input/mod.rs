//! Input Module
//!
//! Platform-agnostic pointer input. This module is decoupled from any
//! specific windowing system so the terrain painter can be driven from
//! tests as easily as from a window.
//!
//! # Example
//!
//! ```rust,ignore
//! use terrain_autotile_engine::input::{PointerButton, PointerEvent};
//!
//! let press = PointerEvent::down(PointerButton::Left, Vec2::new(8.0, 8.0));
//! painter.handle_event(press, &mut layers, &mut renderer);
//! ```

pub mod mouse;

pub use mouse::{PointerButton, PointerEvent};
