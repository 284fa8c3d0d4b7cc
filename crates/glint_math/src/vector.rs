//! Vector helpers layered on top of `glam::Vec3`.
//!
//! Addition, subtraction, dot and cross products come straight from glam.
//! This module adds the few operations the tracer needs with slightly
//! different edge-case behaviour, most importantly a normalize that maps the
//! zero vector to itself instead of producing NaNs.

use crate::Vec3;

/// Tolerance used by [`VectorExt::almost`].
pub const ALMOST_EPSILON: f32 = 1e-6;

/// Extra vector operations used throughout the renderer.
pub trait VectorExt: Sized {
    /// Euclidean length, accumulated in `f64` to keep precision on large scenes.
    fn magnitude(self) -> f32;

    /// Multiply every component by `k`.
    fn scale(self, k: f32) -> Self;

    /// Unit vector in the same direction; the zero vector stays zero.
    fn normalized(self) -> Self;

    /// Component-wise comparison with an absolute tolerance (strict `<`).
    fn approx_eq(self, other: Self, epsilon: f32) -> bool;

    /// [`approx_eq`](VectorExt::approx_eq) with [`ALMOST_EPSILON`].
    fn almost(self, other: Self) -> bool {
        self.approx_eq(other, ALMOST_EPSILON)
    }
}

impl VectorExt for Vec3 {
    #[inline]
    fn magnitude(self) -> f32 {
        let (x, y, z) = (self.x as f64, self.y as f64, self.z as f64);
        (x * x + y * y + z * z).sqrt() as f32
    }

    #[inline]
    fn scale(self, k: f32) -> Self {
        self * k
    }

    #[inline]
    fn normalized(self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Vec3::ZERO;
        }
        self.scale(1.0 / mag)
    }

    #[inline]
    fn approx_eq(self, other: Self, epsilon: f32) -> bool {
        let d = (self - other).abs();
        d.x < epsilon && d.y < epsilon && d.z < epsilon
    }
}
