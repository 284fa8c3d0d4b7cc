//! Runtime scene the tracer reads from.

use crate::primitive::Primitive;
use crate::shading::Color;
use crate::{LightSource, Sphere};
use glint_core::{LightDescription, Rgb, SceneDescription, SceneResult};
use glint_math::Vec3;
use image::Rgba;

/// Opaque colour from an RGB triple.
pub fn opaque([r, g, b]: Rgb) -> Color {
    Rgba([r, g, b, 255])
}

/// Everything a render needs: geometry, lights, background and eye position.
///
/// Built once before rendering and only read while tracing, so it is shared
/// freely across render threads.
pub struct Scene {
    primitives: Vec<Box<dyn Primitive>>,
    lights: Vec<LightSource>,
    ambient: f32,
    background: Color,
    observer: Vec3,
}

impl Scene {
    /// Create an empty scene: observer at the origin, white background, no light.
    pub fn new() -> Self {
        Self {
            primitives: Vec::new(),
            lights: Vec::new(),
            ambient: 0.0,
            background: Rgba([255, 255, 255, 255]),
            observer: Vec3::ZERO,
        }
    }

    /// Validate a description and build the runtime scene from it.
    pub fn from_description(desc: &SceneDescription) -> SceneResult<Self> {
        desc.validate()?;

        let mut scene = Scene::new()
            .with_ambient(desc.ambient)
            .with_background(opaque(desc.background))
            .with_observer(desc.observer());

        for sphere in &desc.spheres {
            let mut primitive = Sphere::new(sphere.center(), sphere.radius, opaque(sphere.color));
            if let Some(exponent) = sphere.specular_exponent() {
                primitive = primitive.with_specular(exponent);
            }
            scene.add_primitive(Box::new(primitive));
        }

        for light in &desc.lights {
            scene.add_light(match *light {
                LightDescription::Ambient { intensity } => LightSource::Ambient { intensity },
                LightDescription::Point {
                    position,
                    intensity,
                } => LightSource::Point {
                    position: Vec3::from_array(position),
                    intensity,
                },
                LightDescription::Directional {
                    direction,
                    intensity,
                } => LightSource::Directional {
                    direction: Vec3::from_array(direction),
                    intensity,
                },
            });
        }

        log::debug!(
            "Built scene '{}': {} primitives, {} lights, ambient {}",
            desc.name,
            scene.len(),
            scene.lights.len(),
            scene.ambient
        );

        Ok(scene)
    }

    /// Set the global ambient term.
    pub fn with_ambient(mut self, ambient: f32) -> Self {
        self.ambient = ambient;
        self
    }

    /// Set the background colour.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Set the observer position.
    pub fn with_observer(mut self, observer: Vec3) -> Self {
        self.observer = observer;
        self
    }

    /// Add a primitive. Scan order decides exact-distance ties.
    pub fn add_primitive(&mut self, primitive: Box<dyn Primitive>) {
        self.primitives.push(primitive);
    }

    /// Add a light source.
    pub fn add_light(&mut self, light: LightSource) {
        self.lights.push(light);
    }

    pub fn primitives(&self) -> &[Box<dyn Primitive>] {
        &self.primitives
    }

    pub fn lights(&self) -> &[LightSource] {
        &self.lights
    }

    pub fn ambient(&self) -> f32 {
        self.ambient
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn observer(&self) -> Vec3 {
        self.observer
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if the scene has no primitives.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
