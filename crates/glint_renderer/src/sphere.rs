//! Sphere primitive for ray tracing.

use crate::{primitive::Primitive, Color, Ray};
use glint_math::{Vec3, VectorExt};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    color: Color,
    specular: Option<f32>,
}

impl Sphere {
    /// Create a new matte sphere.
    pub fn new(center: Vec3, radius: f32, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
            specular: None,
        }
    }

    /// Set the specular exponent used for highlights.
    ///
    /// A negative exponent (the classic `-1`) leaves the sphere matte.
    pub fn with_specular(mut self, exponent: f32) -> Self {
        self.specular = Some(exponent).filter(|s| *s >= 0.0);
        self
    }

    /// Center of the sphere.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Radius of the sphere.
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Primitive for Sphere {
    fn intersect(&self, ray: &Ray) -> (f32, f32) {
        // Solved in f64: on large spheres (a ground plane stand-in) the
        // constant term cancels catastrophically in f32 and causes shadow acne.
        let co = (ray.origin() - self.center).as_dvec3();
        let d = ray.direction().as_dvec3();
        let r = self.radius as f64;

        let a = d.dot(d);
        let b = 2.0 * co.dot(d);
        let c = co.dot(co) - r * r;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return (f32::INFINITY, f32::INFINITY);
        }

        let sqrtd = discriminant.sqrt();
        let t1 = (-b + sqrtd) / (2.0 * a);
        let t2 = (-b - sqrtd) / (2.0 * a);
        (t1 as f32, t2 as f32)
    }

    fn normal_at(&self, p: Vec3) -> Vec3 {
        (p - self.center).normalized()
    }

    fn color(&self) -> Color {
        self.color
    }

    fn specular(&self) -> Option<f32> {
        self.specular
    }
}
