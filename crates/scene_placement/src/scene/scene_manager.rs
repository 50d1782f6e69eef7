//! Scene Manager - ordered collection of placed primitives
//!
//! Objects are identified by their index in insertion order. Every new
//! object is placed against all objects already in the scene, including
//! those added earlier in the same group.

use std::fmt;
use std::ops::Range;

use crate::foundation::math::{utils::round_to_unit, Vec3};
use crate::placement::{Placeable, PlacementEngine, RandomSource};

use super::primitive::{GroupRequest, PrimitiveKind, PrimitiveShape};
use super::scene_object::SceneObject;
use super::SceneError;

/// One row of the scene listing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectSummary {
    /// Index in the scene
    pub index: usize,
    /// Kind of primitive
    pub kind: PrimitiveKind,
    /// Assigned position
    pub position: Option<Vec3>,
    /// Whether the object is the selected one
    pub highlighted: bool,
}

impl fmt::Display for ObjectSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.highlighted { '*' } else { ' ' };
        write!(f, "{marker}{:>3} {:<8} position: ", self.index, self.kind.name())?;
        match self.position {
            Some(p) => write!(
                f,
                "{}, {}, {}",
                round_to_unit(p.x),
                round_to_unit(p.y),
                round_to_unit(p.z)
            ),
            None => f.write_str("unplaced"),
        }
    }
}

/// Ordered collection of scene objects with a single selection
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    selected: Option<usize>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Place one primitive and append it, returning its index
    pub fn add<R: RandomSource>(
        &mut self,
        shape: PrimitiveShape,
        engine: &mut PlacementEngine<R>,
    ) -> usize {
        let mut object = SceneObject::new(shape);
        engine.place(&mut object, &self.objects);
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// Add a group of identical primitives in request order
    ///
    /// Each member is placed against everything already in the scene,
    /// earlier members of this group included. Returns the indices of the
    /// new objects.
    pub fn add_group<R: RandomSource>(
        &mut self,
        request: &GroupRequest,
        engine: &mut PlacementEngine<R>,
    ) -> Result<Range<usize>, SceneError> {
        let shape = request.shape()?;
        let start = self.objects.len();
        self.objects.reserve(request.count);

        let mut fallbacks = 0;
        for _ in 0..request.count {
            let mut object = SceneObject::new(shape);
            if engine.place(&mut object, &self.objects).is_fallback() {
                fallbacks += 1;
            }
            self.objects.push(object);
        }

        log::info!(
            "Added {} {}(s) at indices {}..{} ({} via fallback)",
            request.count,
            request.kind,
            start,
            self.objects.len(),
            fallbacks
        );
        Ok(start..self.objects.len())
    }

    /// Highlight the object at `index` and un-highlight every other one
    pub fn select(&mut self, index: usize) -> Result<(), SceneError> {
        if index >= self.objects.len() {
            return Err(SceneError::NoSuchObject {
                index,
                len: self.objects.len(),
            });
        }

        for (i, object) in self.objects.iter_mut().enumerate() {
            object.set_highlight(i == index);
        }
        self.selected = Some(index);
        log::debug!("Selected object {}", index);
        Ok(())
    }

    /// Clear the selection
    pub fn deselect(&mut self) {
        for object in &mut self.objects {
            object.set_highlight(false);
        }
        self.selected = None;
    }

    /// Index of the selected object
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Remove every object and reset the selection
    pub fn clear(&mut self) {
        log::info!("Clearing scene of {} objects", self.objects.len());
        self.objects.clear();
        self.selected = None;
    }

    /// Objects in insertion order
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Object at `index`
    pub fn get(&self, index: usize) -> Option<&SceneObject> {
        self.objects.get(index)
    }

    /// Number of objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene has no objects
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// One summary per object, in order
    pub fn listing(&self) -> Vec<ObjectSummary> {
        self.objects
            .iter()
            .enumerate()
            .map(|(index, object)| ObjectSummary {
                index,
                kind: object.kind(),
                position: object.position(),
                highlighted: object.is_highlighted(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::PlacementConfig;
    use crate::placement::DefaultPlacementEngine;

    fn engine(seed: u64) -> DefaultPlacementEngine {
        DefaultPlacementEngine::seeded(PlacementConfig::default(), seed).unwrap()
    }

    fn populated(count: usize) -> Scene {
        let mut scene = Scene::new();
        scene
            .add_group(&GroupRequest::cubes(2.0, count), &mut engine(1))
            .unwrap();
        scene
    }

    #[test]
    fn test_add_returns_index() {
        let mut scene = Scene::new();
        let mut engine = engine(3);
        assert_eq!(scene.add(PrimitiveShape::cube(1.0).unwrap(), &mut engine), 0);
        assert_eq!(scene.add(PrimitiveShape::pyramid(1.0, 2.0).unwrap(), &mut engine), 1);
        assert_eq!(scene.len(), 2);
        assert!(scene.objects().iter().all(SceneObject::is_placed));
    }

    #[test]
    fn test_add_group_range() {
        let mut scene = populated(2);
        let range = scene
            .add_group(&GroupRequest::pyramids(3.0, 6.0, 4), &mut engine(2))
            .unwrap();

        assert_eq!(range, 2..6);
        assert!(scene.objects()[range].iter().all(|o| o.kind() == PrimitiveKind::Pyramid));
    }

    #[test]
    fn test_empty_group() {
        let mut scene = populated(1);
        let range = scene.add_group(&GroupRequest::cubes(1.0, 0), &mut engine(2)).unwrap();
        assert!(range.is_empty());
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_invalid_group_adds_nothing() {
        let mut scene = Scene::new();
        let result = scene.add_group(&GroupRequest::cubes(f32::NAN, 3), &mut engine(2));
        assert!(matches!(result, Err(SceneError::InvalidDimension { .. })));
        assert!(scene.is_empty());
    }

    #[test]
    fn test_select_highlights_exactly_one() {
        let mut scene = populated(4);

        scene.select(2).unwrap();
        assert_eq!(scene.selected(), Some(2));
        let highlighted: Vec<usize> = scene
            .listing()
            .iter()
            .filter(|s| s.highlighted)
            .map(|s| s.index)
            .collect();
        assert_eq!(highlighted, vec![2]);

        scene.select(0).unwrap();
        assert!(scene.get(0).unwrap().is_highlighted());
        assert!(!scene.get(2).unwrap().is_highlighted());

        scene.deselect();
        assert_eq!(scene.selected(), None);
        assert!(scene.objects().iter().all(|o| !o.is_highlighted()));
    }

    #[test]
    fn test_select_out_of_range() {
        let mut scene = populated(2);
        scene.select(1).unwrap();
        assert_eq!(scene.select(2), Err(SceneError::NoSuchObject { index: 2, len: 2 }));
        assert_eq!(scene.selected(), Some(1));
    }

    #[test]
    fn test_clear_resets_selection() {
        let mut scene = populated(3);
        scene.select(1).unwrap();
        scene.clear();
        assert!(scene.is_empty());
        assert_eq!(scene.selected(), None);
        assert!(scene.select(0).is_err());
    }

    #[test]
    fn test_listing_display() {
        let summary = ObjectSummary {
            index: 3,
            kind: PrimitiveKind::Pyramid,
            position: Some(Vec3::new(12.4, -0.2, 99.6)),
            highlighted: true,
        };
        assert_eq!(summary.to_string(), "*  3 pyramid  position: 12, 0, 100");

        let unplaced = ObjectSummary { position: None, highlighted: false, ..summary };
        assert_eq!(unplaced.to_string(), "   3 pyramid  position: unplaced");
    }
}
