//! Physics module for separation testing
//!
//! Placement only needs a static overlap test between bounding spheres;
//! there is no simulation or collision response.

pub mod collision;

pub use collision::BoundingSphere;
