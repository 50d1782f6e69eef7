//! # Unified Configuration
//!
//! Configuration for placement search, logging and scripted scene setup.
//!
//! ## Configuration Categories
//!
//! - **Placement Config**: Sampling range, shift step, separation margin,
//!   retry budget and fallback offset used by the placement engine
//! - **Logging Config**: Default log filter for the application
//! - **Scene Config**: Top-level document combining the above with the
//!   groups of primitives to add

use serde::{Serialize, Deserialize};

use crate::config::{Config, ConfigError};
use crate::scene::GroupRequest;

/// Half-extent of the cube candidates are sampled from
pub const DEFAULT_HALF_EXTENT: f32 = 100.0;

/// Distance a colliding candidate is moved along each axis per retry
pub const DEFAULT_SHIFT_STEP: f32 = 50.0;

/// Clearance required between two objects on top of their radii
pub const DEFAULT_SEPARATION_MARGIN: f32 = 100.0;

/// Shift attempts allowed after the initial candidate
pub const DEFAULT_MAX_RETRIES: u32 = 100;

/// Largest retry budget accepted by [`PlacementConfig::validate`]
pub const MAX_RETRY_LIMIT: u32 = 1_000_000;

/// Offset added to the occupied region's maxima by the fallback
pub const DEFAULT_FALLBACK_OFFSET: f32 = 150.0;

/// # Placement Configuration
///
/// Tuning for the randomized placement search. The defaults reproduce the
/// reference layout behaviour; every field may be overridden from a file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Candidates are sampled uniformly from `[-half_extent, half_extent]` per axis
    pub half_extent: f32,
    /// Per-axis shift applied to a colliding candidate
    pub shift_step: f32,
    /// Extra distance required between two objects beyond their radii
    pub separation_margin: f32,
    /// Maximum number of shift attempts before falling back
    pub max_retries: u32,
    /// Offset past the per-axis maxima used by the fallback position
    pub fallback_offset: f32,
}

impl PlacementConfig {
    /// Create a placement configuration with default values
    pub fn new() -> Self {
        Self {
            half_extent: DEFAULT_HALF_EXTENT,
            shift_step: DEFAULT_SHIFT_STEP,
            separation_margin: DEFAULT_SEPARATION_MARGIN,
            max_retries: DEFAULT_MAX_RETRIES,
            fallback_offset: DEFAULT_FALLBACK_OFFSET,
        }
    }

    /// Set the sampling half-extent
    pub fn with_half_extent(mut self, half_extent: f32) -> Self {
        self.half_extent = half_extent;
        self
    }

    /// Set the per-axis shift step
    pub fn with_shift_step(mut self, shift_step: f32) -> Self {
        self.shift_step = shift_step;
        self
    }

    /// Set the separation margin
    pub fn with_separation_margin(mut self, margin: f32) -> Self {
        self.separation_margin = margin;
        self
    }

    /// Set the retry budget
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the fallback offset
    pub fn with_fallback_offset(mut self, offset: f32) -> Self {
        self.fallback_offset = offset;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("half_extent", self.half_extent),
            ("shift_step", self.shift_step),
            ("separation_margin", self.separation_margin),
            ("fallback_offset", self.fallback_offset),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }

        if self.half_extent == 0.0 {
            return Err(ConfigError::Invalid("half_extent must be greater than zero".to_string()));
        }

        if self.shift_step == 0.0 {
            return Err(ConfigError::Invalid("shift_step must be greater than zero".to_string()));
        }

        if self.max_retries > MAX_RETRY_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "max_retries must not exceed {MAX_RETRY_LIMIT}, got {}",
                self.max_retries
            )));
        }

        Ok(())
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for PlacementConfig {}

/// # Logging Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `env_logger` filter, overridden by `RUST_LOG`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// # Scene Configuration
///
/// Top-level document loaded by the demo application: how to log, how to
/// place, and which groups of primitives to add in order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Logging setup
    pub logging: LoggingConfig,
    /// Placement engine tuning
    pub placement: PlacementConfig,
    /// Groups of primitives added one after another
    pub groups: Vec<GroupRequest>,
    /// Index of the object to highlight once all groups are placed
    pub select: Option<usize>,
}

impl SceneConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.placement.validate()?;
        for (i, group) in self.groups.iter().enumerate() {
            group
                .validate()
                .map_err(|e| ConfigError::Invalid(format!("group {i}: {e}")))?;
        }
        Ok(())
    }
}

impl Config for SceneConfig {}
