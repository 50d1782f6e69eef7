//! # Scene Placement
//!
//! Collision-aware placement of primitive objects in a 3D scene.
//!
//! ## Features
//!
//! - **Randomized Placement**: Random candidates with bounded shift retries
//! - **Deterministic Fallback**: Guaranteed termination past the occupied region
//! - **Injectable Randomness**: Any `rand` generator or a scripted test source
//! - **Scene Management**: Batched insertion, selection and listing
//! - **File Configuration**: TOML and RON scene scripts
//!
//! ## Quick Start
//!
//! ```rust
//! use scene_placement::prelude::*;
//!
//! let mut engine = DefaultPlacementEngine::seeded(PlacementConfig::default(), 7)
//!     .expect("default placement config is valid");
//! let mut scene = Scene::new();
//!
//! scene.add_group(&GroupRequest::cubes(10.0, 3), &mut engine)?;
//! scene.add_group(&GroupRequest::pyramids(5.0, 12.0, 2), &mut engine)?;
//! scene.select(0)?;
//!
//! for row in scene.listing() {
//!     println!("{row}");
//! }
//! # Ok::<(), SceneError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod core;
pub mod config;
pub mod foundation;
pub mod physics;
pub mod placement;
pub mod scene;

#[cfg(test)]
mod tests;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        core::config::{LoggingConfig, PlacementConfig, SceneConfig},
        foundation::math::Vec3,
        physics::BoundingSphere,
        placement::{
            DefaultPlacementEngine, Placeable, Placement, PlacementEngine, PlacementOutcome,
            RandomSource, RngSource,
        },
        scene::{GroupRequest, ObjectSummary, PrimitiveKind, PrimitiveShape, Scene, SceneError, SceneObject},
    };
}
