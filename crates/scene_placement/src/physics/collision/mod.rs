//! Collision primitives
//!
//! # Key Types
//!
//! - [`BoundingSphere`] - Center and radius of a placed object, with a
//!   margin-aware separation test

pub mod primitives;

// Re-export commonly used types
pub use primitives::BoundingSphere;
