//! Objects held by a scene

use crate::foundation::math::Vec3;
use crate::placement::Placeable;

use super::primitive::{PrimitiveKind, PrimitiveShape};

/// A primitive in the scene
///
/// The position stays `None` until the placement engine assigns it. The
/// highlight flag is what a renderer reads to draw the selected object
/// differently.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    shape: PrimitiveShape,
    position: Option<Vec3>,
    highlighted: bool,
}

impl SceneObject {
    /// New unplaced, unhighlighted object
    pub fn new(shape: PrimitiveShape) -> Self {
        Self {
            shape,
            position: None,
            highlighted: false,
        }
    }

    /// Kind of primitive
    pub fn kind(&self) -> PrimitiveKind {
        self.shape.kind()
    }

    /// Whether a position has been assigned
    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    /// Whether the object is drawn highlighted
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Turn highlighting on or off
    pub fn set_highlight(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }
}

impl Placeable for SceneObject {
    fn effective_radius(&self) -> f32 {
        self.shape.effective_radius()
    }

    fn position(&self) -> Option<Vec3> {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = Some(position);
    }
}
