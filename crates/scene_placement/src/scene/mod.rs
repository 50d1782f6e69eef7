//! Scene of placed primitives
//!
//! Holds the ordered collection of objects the user has added, keeps track
//! of which one is highlighted, and runs new objects through the placement
//! engine as they are added.
//!
//! ## Key Components
//!
//! - [`PrimitiveShape`] - Cube or pyramid with its dimensions
//! - [`SceneObject`] - A shape plus its placed position and highlight state
//! - [`Scene`] - Ordered collection with batch insertion and selection

pub mod primitive;
pub mod scene_object;
pub mod scene_manager;

pub use primitive::{GroupRequest, PrimitiveKind, PrimitiveShape};
pub use scene_object::SceneObject;
pub use scene_manager::{ObjectSummary, Scene};

use thiserror::Error;

/// Scene-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// A size, radius or height was negative or not a number
    #[error("Invalid {name}: {value} (must be a finite non-negative number)")]
    InvalidDimension {
        /// Which dimension was rejected
        name: &'static str,
        /// The rejected value
        value: f32,
    },

    /// Index does not refer to an object in the scene
    #[error("No object at index {index} (scene has {len})")]
    NoSuchObject {
        /// Requested index
        index: usize,
        /// Number of objects in the scene
        len: usize,
    },

    /// Unrecognised primitive name
    #[error("Unknown primitive kind: {0}")]
    UnknownKind(String),
}
