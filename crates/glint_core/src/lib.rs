//! Glint Core - Scene description and loading.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `SphereDescription`, `LightDescription`
//! - **Scene files**: JSON loading with validation
//! - **Built-in scenes**: `three_spheres`, `lit_spheres`
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} spheres, {} lights",
//!     scene.sphere_count(),
//!     scene.light_count());
//! ```

pub mod builtin;
pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use builtin::{builtin, BUILTIN_NAMES};
pub use loader::{load_scene, load_scene_from_str, SceneError, SceneResult};
pub use scene::{
    LightDescription, Rgb, SceneDescription, SphereDescription, ViewportDescription, WHITE,
};
