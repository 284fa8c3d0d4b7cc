//! Light sources.

use crate::shading::{diffuse, specular};
use glint_math::{Interval, Vec3};

/// Minimum shadow-ray parameter, keeps a surface from shadowing itself.
pub const SHADOW_EPSILON: f32 = 0.001;

/// A light illuminating the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightSource {
    /// Constant contribution, independent of geometry and never shadowed.
    Ambient { intensity: f32 },
    /// Light radiating from a position.
    Point { position: Vec3, intensity: f32 },
    /// Light arriving from infinitely far away. `direction` points toward the light.
    Directional { direction: Vec3, intensity: f32 },
}

impl LightSource {
    /// Raw intensity of the light.
    pub fn intensity(&self) -> f32 {
        match *self {
            Self::Ambient { intensity }
            | Self::Point { intensity, .. }
            | Self::Directional { intensity, .. } => intensity,
        }
    }

    /// Vector from `point` toward the light, not normalized.
    ///
    /// For a point light `t = 1` along this vector lands on the light itself.
    /// Ambient light has no direction.
    pub fn direction_from(&self, point: Vec3) -> Option<Vec3> {
        match *self {
            Self::Ambient { .. } => None,
            Self::Point { position, .. } => Some(position - point),
            Self::Directional { direction, .. } => Some(direction),
        }
    }

    /// Parametric range a shadow caster must fall in to block this light.
    ///
    /// Point lights only care about geometry between the surface and the
    /// light, `[ε, 1)`; directional lights about anything in `[ε, ∞)`.
    pub fn shadow_range(&self) -> Option<Interval> {
        match self {
            Self::Ambient { .. } => None,
            Self::Point { .. } => Some(Interval::new(SHADOW_EPSILON, 1.0)),
            Self::Directional { .. } => Some(Interval::from_min(SHADOW_EPSILON)),
        }
    }

    /// Unshadowed light this source delivers to `point`.
    pub fn contribute(&self, point: Vec3, normal: Vec3, view: Vec3, exponent: Option<f32>) -> f32 {
        let intensity = self.intensity();
        match self.direction_from(point) {
            None => intensity,
            Some(l) => {
                diffuse(l, normal, intensity) + specular(l, normal, view, intensity, exponent)
            }
        }
    }
}
