//! Primitive collision shapes and separation tests
//!
//! Objects are approximated by spheres whose radius is the object's
//! effective radius. Two objects are considered separated when their centers
//! are at least the sum of the radii plus a margin apart.

use crate::foundation::math::{distance, Vec3};

/// A bounding sphere for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// The center position of the sphere in world space
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: f32,
}

impl BoundingSphere {
    /// Creates a new bounding sphere with the given center and radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Distance between the two centers
    pub fn center_distance(&self, other: &BoundingSphere) -> f32 {
        distance(&self.center, &other.center)
    }

    /// Minimum center distance that keeps the spheres `margin` apart
    pub fn required_distance(&self, other: &BoundingSphere, margin: f32) -> f32 {
        self.radius + other.radius + margin
    }

    /// Check whether the spheres come closer than `margin` to each other
    ///
    /// Exactly touching the required distance counts as separated.
    pub fn collides_with(&self, other: &BoundingSphere, margin: f32) -> bool {
        self.center_distance(other) < self.required_distance(other, margin)
    }
}
