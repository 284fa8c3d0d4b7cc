//! Scene description types for Glint.
//!
//! This module defines the serializable, renderer-agnostic form of a scene.
//! A `SceneDescription` is what a scene file deserializes into and what the
//! built-in scenes construct; the renderer converts it into its own runtime
//! representation once validation has passed.

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::loader::{SceneError, SceneResult};

/// An 8-bit RGB colour. Alpha is always fully opaque.
pub type Rgb = [u8; 3];

/// White, the default background.
pub const WHITE: Rgb = [255, 255, 255];

/// Fixed image plane the primary rays pass through.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportDescription {
    /// Width of the image plane in world units
    pub width: f32,
    /// Height of the image plane in world units
    pub height: f32,
    /// Distance of the image plane from the observer along +Z
    pub distance: f32,
}

impl Default for ViewportDescription {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            distance: 1.0,
        }
    }
}

/// A light source in a scene file.
///
/// Tagged by `"type"` in JSON: `{"type": "point", "position": [2, 1, 0], "intensity": 0.6}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LightDescription {
    /// Constant light independent of geometry
    Ambient { intensity: f32 },
    /// Light radiating from a position
    Point { position: [f32; 3], intensity: f32 },
    /// Light arriving from a fixed direction (pointing toward the light)
    Directional { direction: [f32; 3], intensity: f32 },
}

impl LightDescription {
    /// Intensity of this light regardless of its kind.
    pub fn intensity(&self) -> f32 {
        match *self {
            Self::Ambient { intensity }
            | Self::Point { intensity, .. }
            | Self::Directional { intensity, .. } => intensity,
        }
    }
}

/// A sphere in a scene file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereDescription {
    pub center: [f32; 3],
    pub radius: f32,
    pub color: Rgb,

    /// Specular exponent. Missing, `null` or negative (the classic `-1`)
    /// disables highlights.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specular: Option<f32>,
}

impl SphereDescription {
    /// Create a matte sphere.
    pub fn new(center: Vec3, radius: f32, color: Rgb) -> Self {
        Self {
            center: center.to_array(),
            radius,
            color,
            specular: None,
        }
    }

    /// Set the specular exponent.
    pub fn with_specular(mut self, exponent: f32) -> Self {
        self.specular = Some(exponent);
        self
    }

    /// Center as a vector.
    pub fn center(&self) -> Vec3 {
        Vec3::from_array(self.center)
    }

    /// The effective specular exponent, `None` when highlights are disabled.
    pub fn specular_exponent(&self) -> Option<f32> {
        self.specular.filter(|s| *s >= 0.0)
    }
}

/// A complete scene as read from disk or built in code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Scene name (file stem or built-in name)
    #[serde(default)]
    pub name: String,

    /// Eye position all primary rays start from
    #[serde(default)]
    pub observer: [f32; 3],

    /// Colour of pixels whose primary ray hits nothing
    #[serde(default = "default_background")]
    pub background: Rgb,

    /// Global ambient term added to every lit point
    #[serde(default)]
    pub ambient: f32,

    #[serde(default)]
    pub lights: Vec<LightDescription>,

    #[serde(default)]
    pub spheres: Vec<SphereDescription>,

    #[serde(default)]
    pub viewport: ViewportDescription,
}

fn default_background() -> Rgb {
    WHITE
}

impl Default for SceneDescription {
    fn default() -> Self {
        Self::new("")
    }
}

impl SceneDescription {
    /// Create an empty scene: observer at the origin, white background, no light.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            observer: [0.0; 3],
            background: WHITE,
            ambient: 0.0,
            lights: Vec::new(),
            spheres: Vec::new(),
            viewport: ViewportDescription::default(),
        }
    }

    /// Set the ambient term.
    pub fn with_ambient(mut self, ambient: f32) -> Self {
        self.ambient = ambient;
        self
    }

    /// Set the background colour.
    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    /// Add a sphere and return its index.
    pub fn add_sphere(&mut self, sphere: SphereDescription) -> usize {
        self.spheres.push(sphere);
        self.spheres.len() - 1
    }

    /// Add a light source.
    pub fn add_light(&mut self, light: LightDescription) {
        self.lights.push(light);
    }

    /// Observer position as a vector.
    pub fn observer(&self) -> Vec3 {
        Vec3::from_array(self.observer)
    }

    /// Number of spheres.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Number of light sources, not counting the global ambient term.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Reject input the tracer has no defined behaviour for.
    ///
    /// Radii must be positive and finite, every coordinate and intensity
    /// finite, and the viewport strictly positive in all three dimensions.
    pub fn validate(&self) -> SceneResult<()> {
        check_finite(&self.observer, "observer")?;
        if !self.ambient.is_finite() {
            return Err(SceneError::NonFinite("ambient".to_string()));
        }

        let vp = &self.viewport;
        let vp_ok = [vp.width, vp.height, vp.distance]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0);
        if !vp_ok {
            return Err(SceneError::InvalidViewport {
                width: vp.width,
                height: vp.height,
                distance: vp.distance,
            });
        }

        for (i, light) in self.lights.iter().enumerate() {
            let what = format!("light {i}");
            match light {
                LightDescription::Ambient { .. } => {}
                LightDescription::Point { position, .. } => check_finite(position, &what)?,
                LightDescription::Directional { direction, .. } => {
                    check_finite(direction, &what)?;
                    if direction.iter().all(|c| *c == 0.0) {
                        log::warn!("Directional light {} has a zero direction and will not light anything", i);
                    }
                }
            }
            if !light.intensity().is_finite() {
                return Err(SceneError::NonFinite(what));
            }
            if light.intensity() == 0.0 {
                log::warn!("Light {} has zero intensity", i);
            }
        }

        for (index, sphere) in self.spheres.iter().enumerate() {
            check_finite(&sphere.center, &format!("sphere {index}"))?;
            if !(sphere.radius.is_finite() && sphere.radius > 0.0) {
                return Err(SceneError::InvalidRadius {
                    index,
                    radius: sphere.radius,
                });
            }
            if sphere.specular.is_some_and(|s| !s.is_finite()) {
                return Err(SceneError::NonFinite(format!("sphere {index} specular")));
            }
        }

        Ok(())
    }
}

fn check_finite(v: &[f32; 3], what: &str) -> SceneResult<()> {
    if v.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(SceneError::NonFinite(what.to_string()))
    }
}
