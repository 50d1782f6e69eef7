//! Math utilities and types
//!
//! Provides the vector types and distance helpers used by collision
//! testing and placement.

pub use nalgebra::Vector3;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Euclidean distance between two positions
pub fn distance(a: &Vec3, b: &Vec3) -> f32 {
    (a - b).magnitude()
}

/// Component-wise maximum over a set of positions
///
/// Each axis is reduced independently, so the result may combine
/// coordinates from different positions. Returns `None` for an empty set.
pub fn component_max<'a, I>(positions: I) -> Option<Vec3>
where
    I: IntoIterator<Item = &'a Vec3>,
{
    positions
        .into_iter()
        .fold(None, |acc: Option<Vec3>, p| match acc {
            Some(max) => Some(max.sup(p)),
            None => Some(*p),
        })
}

/// Math utility functions
pub mod utils {
    /// Round a coordinate to the nearest whole world unit for display
    pub fn round_to_unit(value: f32) -> f32 {
        let rounded = value.round();
        // Avoid printing "-0"
        if rounded == 0.0 { 0.0 } else { rounded }
    }
}
