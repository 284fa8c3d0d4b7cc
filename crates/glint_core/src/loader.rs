//! Scene file loading.
//!
//! Scene files are JSON documents matching [`SceneDescription`]. Every
//! loaded scene is validated before it is handed back, so callers never see
//! a scene with a negative radius or NaN coordinates.

use std::path::Path;

use thiserror::Error;

use crate::scene::SceneDescription;

/// Errors that can occur while loading or validating a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Sphere {index} has invalid radius {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("Non-finite value in {0}")]
    NonFinite(String),

    #[error("Invalid viewport {width}x{height} at distance {distance}")]
    InvalidViewport {
        width: f32,
        height: f32,
        distance: f32,
    },

    #[error("Unknown built-in scene: {0}")]
    UnknownBuiltin(String),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Load a scene file from disk.
///
/// The scene name defaults to the file stem when the document has none.
///
/// # Example
///
/// ```ignore
/// use glint_core::load_scene;
///
/// let scene = load_scene("scenes/spheres.json")?;
/// println!("Loaded {} spheres", scene.sphere_count());
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let mut scene = load_scene_from_str(&text)?;

    if scene.name.is_empty() {
        scene.name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unnamed")
            .to_string();
    }

    log::info!(
        "Loaded scene '{}' from {}: {} spheres, {} lights",
        scene.name,
        path.display(),
        scene.sphere_count(),
        scene.light_count()
    );

    Ok(scene)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(json: &str) -> SceneResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(json)?;
    scene.validate()?;
    Ok(scene)
}
