//! Primitive shapes that can be added to a scene
//!
//! Shapes differ only in how their effective radius is derived; geometry and
//! materials are left to whatever renders the scene.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::SceneError;

/// Kinds of primitive offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    /// Axis-aligned cube
    #[default]
    Cube,
    /// Square-based pyramid
    Pyramid,
}

impl PrimitiveKind {
    /// Lowercase display name
    pub fn name(self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Pyramid => "pyramid",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrimitiveKind {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cube" => Ok(Self::Cube),
            "pyramid" => Ok(Self::Pyramid),
            other => Err(SceneError::UnknownKind(other.to_string())),
        }
    }
}

/// A primitive with its dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimitiveShape {
    /// Cube with the given edge length
    Cube {
        /// Edge length
        size: f32,
    },
    /// Pyramid with the given base half-width and apex height
    Pyramid {
        /// Half-width of the square base
        radius: f32,
        /// Height of the apex above the base
        height: f32,
    },
}

fn check_dimension(name: &'static str, value: f32) -> Result<f32, SceneError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SceneError::InvalidDimension { name, value })
    }
}

impl PrimitiveShape {
    /// Cube with edge length `size`
    pub fn cube(size: f32) -> Result<Self, SceneError> {
        Ok(Self::Cube {
            size: check_dimension("size", size)?,
        })
    }

    /// Pyramid with base half-width `radius` and apex `height`
    pub fn pyramid(radius: f32, height: f32) -> Result<Self, SceneError> {
        Ok(Self::Pyramid {
            radius: check_dimension("radius", radius)?,
            height: check_dimension("height", height)?,
        })
    }

    /// Which kind of primitive this is
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Cube { .. } => PrimitiveKind::Cube,
            Self::Pyramid { .. } => PrimitiveKind::Pyramid,
        }
    }

    /// Radius used when keeping objects apart
    ///
    /// The edge length for a cube, the larger of base radius and height for
    /// a pyramid.
    pub fn effective_radius(&self) -> f32 {
        match *self {
            Self::Cube { size } => size,
            Self::Pyramid { radius, height } => radius.max(height),
        }
    }
}

/// A request to add `count` identical primitives
///
/// Mirrors the "add primitive" form: a kind, a size, a height that only
/// pyramids use, and how many to add.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupRequest {
    /// Kind of primitive
    pub kind: PrimitiveKind,
    /// Cube edge length or pyramid base radius
    pub size: f32,
    /// Pyramid height, ignored for cubes
    pub height: f32,
    /// Number of primitives to add
    pub count: usize,
}

impl Default for GroupRequest {
    fn default() -> Self {
        Self {
            kind: PrimitiveKind::Cube,
            size: 1.0,
            height: 2.0,
            count: 1,
        }
    }
}

impl GroupRequest {
    /// Request `count` cubes of edge length `size`
    pub fn cubes(size: f32, count: usize) -> Self {
        Self {
            kind: PrimitiveKind::Cube,
            size,
            count,
            ..Default::default()
        }
    }

    /// Request `count` pyramids
    pub fn pyramids(radius: f32, height: f32, count: usize) -> Self {
        Self {
            kind: PrimitiveKind::Pyramid,
            size: radius,
            height,
            count,
        }
    }

    /// Shape every member of the group will have
    pub fn shape(&self) -> Result<PrimitiveShape, SceneError> {
        match self.kind {
            PrimitiveKind::Cube => PrimitiveShape::cube(self.size),
            PrimitiveKind::Pyramid => PrimitiveShape::pyramid(self.size, self.height),
        }
    }

    /// Check the request's dimensions
    pub fn validate(&self) -> Result<(), SceneError> {
        self.shape().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_radius_is_edge_length() {
        let cube = PrimitiveShape::cube(12.0).unwrap();
        assert_eq!(cube.effective_radius(), 12.0);
        assert_eq!(cube.kind(), PrimitiveKind::Cube);
    }

    #[test]
    fn test_pyramid_radius_is_larger_dimension() {
        assert_eq!(PrimitiveShape::pyramid(4.0, 9.0).unwrap().effective_radius(), 9.0);
        assert_eq!(PrimitiveShape::pyramid(15.0, 2.0).unwrap().effective_radius(), 15.0);
        assert_eq!(PrimitiveShape::pyramid(4.0, 9.0).unwrap().kind(), PrimitiveKind::Pyramid);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            PrimitiveShape::cube(-1.0),
            Err(SceneError::InvalidDimension { name: "size", value: -1.0 })
        );
        assert!(PrimitiveShape::pyramid(1.0, f32::INFINITY).is_err());
        assert!(matches!(
            PrimitiveShape::pyramid(f32::NAN, 1.0),
            Err(SceneError::InvalidDimension { name: "radius", .. })
        ));
        assert!(PrimitiveShape::cube(0.0).is_ok());
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("Cube".parse::<PrimitiveKind>().unwrap(), PrimitiveKind::Cube);
        assert_eq!(" pyramid ".parse::<PrimitiveKind>().unwrap(), PrimitiveKind::Pyramid);
        assert!(matches!("sphere".parse::<PrimitiveKind>(), Err(SceneError::UnknownKind(_))));
        assert_eq!(PrimitiveKind::Pyramid.to_string(), "pyramid");
    }

    #[test]
    fn test_group_request_defaults() {
        let request = GroupRequest::default();
        assert_eq!(request.kind, PrimitiveKind::Cube);
        assert_eq!(request.size, 1.0);
        assert_eq!(request.height, 2.0);
        assert_eq!(request.count, 1);
    }

    #[test]
    fn test_cube_request_ignores_height() {
        let mut request = GroupRequest::cubes(3.0, 2);
        request.height = -50.0;
        assert_eq!(request.shape().unwrap(), PrimitiveShape::Cube { size: 3.0 });
        assert!(GroupRequest::pyramids(3.0, -50.0, 2).validate().is_err());
    }
}
