//! # Core Module
//!
//! Shared configuration types used by the placement engine, the scene and
//! the demo application.

pub mod config;

// Re-export commonly used config types
pub use config::{
    PlacementConfig,
    LoggingConfig,
    SceneConfig,
};
pub use crate::config::{Config, ConfigError};
