//! Primitive trait and Hit for ray-object intersection.

use crate::{Color, Ray};
use glint_math::Vec3;

/// The nearest accepted intersection along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index of the primitive in the scene, in scan order
    pub index: usize,
    /// Parameter t where the intersection occurs
    pub t: f32,
}

/// Trait for objects that can be hit by rays and shaded.
///
/// Spheres are the only implementation; a new primitive type supplies its own
/// roots and its own normal rule here.
pub trait Primitive: Send + Sync {
    /// Both parametric roots of the ray against this surface.
    ///
    /// Returns `(f32::INFINITY, f32::INFINITY)` when the ray misses. The two
    /// roots come in no particular order; callers test each independently.
    fn intersect(&self, ray: &Ray) -> (f32, f32);

    /// Outward unit normal at a point on the surface.
    fn normal_at(&self, p: Vec3) -> Vec3;

    /// Base surface colour.
    fn color(&self) -> Color;

    /// Specular exponent, `None` for a matte surface.
    fn specular(&self) -> Option<f32>;
}
