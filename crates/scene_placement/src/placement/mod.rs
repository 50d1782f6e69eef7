//! Placement of new objects among already placed ones
//!
//! A new object is dropped at a random spot near the origin, nudged around
//! while it is too close to anything already in the scene, and parked past
//! the occupied region if the retry budget runs out.
//!
//! # Key Types
//!
//! - [`PlacementEngine`] - Runs the search for one object at a time
//! - [`RandomSource`] - Injected randomness; [`RngSource`] adapts any [`rand::Rng`]
//! - [`Placeable`] - What the engine needs to know about an object
//! - [`Placement`] - Where an object ended up and how

mod engine;
mod random;

pub use engine::{Placeable, Placement, PlacementEngine, PlacementOutcome, DefaultPlacementEngine};
pub use random::{RandomSource, RngSource};
