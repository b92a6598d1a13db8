//! Camera Module
//!
//! Screen/world coordinate mapping for the top-down tile view.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod view_2d;

pub use view_2d::Camera2d;
