//! Config Module
//!
//! Centralized configuration for terrain sessions.

pub mod autotile_config;

pub use autotile_config::{AutotileConfig, ConfigError, WindowConfig};
