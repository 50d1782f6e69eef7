//! Primitive scene demo application
//!
//! Loads a scene script, adds each group of primitives through the placement
//! engine and prints the resulting object list, the way the side panel of
//! an interactive editor would show it.
//!
//! Usage: `primitive_scene [scene.toml | scene.ron]`
//!
//! Set `SCENE_SEED` to get a reproducible layout; without it the engine is
//! seeded from entropy.

use std::path::PathBuf;

use scene_placement::foundation::logging;
use scene_placement::prelude::*;
use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Scene script could not be loaded or is invalid
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Scene operation failed
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    /// `SCENE_SEED` is not a number
    #[error("Invalid SCENE_SEED value: {0}")]
    Seed(String),
}

/// Script used when no file is given on the command line
fn default_script() -> SceneConfig {
    SceneConfig {
        groups: vec![
            GroupRequest::cubes(10.0, 3),
            GroupRequest::pyramids(8.0, 20.0, 2),
        ],
        select: Some(0),
        ..SceneConfig::default()
    }
}

fn load_script(path: Option<PathBuf>) -> Result<SceneConfig, AppError> {
    let script = match path {
        Some(path) => SceneConfig::load_from_file(&path)?,
        None => default_script(),
    };
    script.validate()?;
    Ok(script)
}

fn resolve_seed() -> Result<Option<u64>, AppError> {
    match std::env::var("SCENE_SEED") {
        Ok(value) => value.trim().parse().map(Some).map_err(|_| AppError::Seed(value)),
        Err(_) => Ok(None),
    }
}

/// Scene plus the engine that places into it
struct PrimitiveSceneApp {
    scene: Scene,
    engine: DefaultPlacementEngine,
}

impl PrimitiveSceneApp {
    fn new(placement: PlacementConfig, seed: Option<u64>) -> Result<Self, AppError> {
        let engine = match seed {
            Some(seed) => {
                log::info!("Creating primitive scene (seed {})", seed);
                DefaultPlacementEngine::seeded(placement, seed)?
            }
            None => {
                log::info!("Creating primitive scene (entropy seed)");
                DefaultPlacementEngine::from_entropy(placement)?
            }
        };

        Ok(Self {
            scene: Scene::new(),
            engine,
        })
    }

    fn run(&mut self, script: &SceneConfig) -> Result<(), AppError> {
        for request in &script.groups {
            self.scene.add_group(request, &mut self.engine)?;
        }

        if let Some(index) = script.select {
            self.scene.select(index)?;
        }

        log::info!("Scene holds {} objects", self.scene.len());
        Ok(())
    }

    fn print_listing(&self) {
        for row in self.scene.listing() {
            println!("{row}");
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let script = load_script(path)?;

    logging::init_with_level(&script.logging.level);

    let seed = resolve_seed()?;
    let mut app = PrimitiveSceneApp::new(script.placement, seed)?;
    app.run(&script)?;
    app.print_listing();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_script_runs() {
        let script = default_script();
        assert!(script.validate().is_ok());

        let mut app = PrimitiveSceneApp::new(script.placement, Some(4)).unwrap();
        app.run(&script).unwrap();

        assert_eq!(app.scene.len(), 5);
        assert_eq!(app.scene.selected(), Some(0));
    }

    #[test]
    fn test_bad_selection_is_reported() {
        let script = SceneConfig {
            groups: vec![GroupRequest::cubes(1.0, 1)],
            select: Some(3),
            ..SceneConfig::default()
        };

        let mut app = PrimitiveSceneApp::new(script.placement, None).unwrap();
        let err = app.run(&script).unwrap_err();
        assert!(matches!(err, AppError::Scene(SceneError::NoSuchObject { index: 3, len: 1 })));
    }

    #[test]
    fn test_invalid_placement_config_is_reported() {
        let placement = PlacementConfig::default().with_shift_step(f32::NAN);
        let result = PrimitiveSceneApp::new(placement, Some(1));
        assert!(matches!(result, Err(AppError::Config(ConfigError::Invalid(_)))));
    }

    #[test]
    fn test_missing_script_file() {
        let result = load_script(Some(PathBuf::from("no/such/scene.toml")));
        assert!(matches!(result, Err(AppError::Config(ConfigError::Io(_)))));
    }
}
