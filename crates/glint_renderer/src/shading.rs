//! Diffuse + specular illumination and the final colour mapping.
//!
//! Light intensities are plain scalars that accumulate without clamping.
//! [`scale_color`] is the only place they are tone-mapped onto a colour.

use crate::trace::closest_intersection;
use crate::{Ray, Scene};
use glint_math::{Vec3, VectorExt};
use image::Rgba;

/// Color type alias (8-bit RGBA, alpha always opaque)
pub type Color = Rgba<u8>;

/// Opaque black.
pub const BLACK: Color = Rgba([0, 0, 0, 255]);

/// Lambertian term: `intensity * cos(angle between normal and l)`.
///
/// Zero when the surface faces away from the light.
#[inline]
pub fn diffuse(l: Vec3, normal: Vec3, intensity: f32) -> f32 {
    let n_dot_l = normal.dot(l);
    if n_dot_l > 0.0 {
        intensity * n_dot_l / (normal.magnitude() * l.magnitude())
    } else {
        0.0
    }
}

/// Phong highlight: `intensity * cos(angle between reflection and view)^exponent`.
///
/// `None` or a negative exponent disables the term. Zero when the reflection
/// points away from the viewer.
#[inline]
pub fn specular(l: Vec3, normal: Vec3, view: Vec3, intensity: f32, exponent: Option<f32>) -> f32 {
    let Some(exponent) = exponent.filter(|s| *s >= 0.0) else {
        return 0.0;
    };

    let r = normal.scale(2.0 * normal.dot(l)) - l;
    let r_dot_v = r.dot(view);
    if r_dot_v > 0.0 {
        intensity * (r_dot_v / (r.magnitude() * view.magnitude())).powf(exponent)
    } else {
        0.0
    }
}

/// Total light arriving at `point`: ambient plus every unshadowed light.
///
/// Each directional or point light casts a shadow ray over its own
/// [`shadow_range`](crate::LightSource::shadow_range); any primitive found
/// there removes that light's contribution entirely.
pub fn compute_light(
    scene: &Scene,
    point: Vec3,
    normal: Vec3,
    view: Vec3,
    exponent: Option<f32>,
) -> f32 {
    let mut intensity = scene.ambient();

    for light in scene.lights() {
        if let (Some(l), Some(range)) = (light.direction_from(point), light.shadow_range()) {
            if closest_intersection(scene, &Ray::new(point, l), range).is_some() {
                continue;
            }
        }
        intensity += light.contribute(point, normal, view, exponent);
    }

    intensity
}

/// Map accumulated light onto a base colour.
///
/// At or above 1.0 the colour is returned unchanged, at or below 0.0 it is
/// opaque black; in between each channel is scaled and truncated.
pub fn scale_color(base: Color, intensity: f32) -> Color {
    if intensity >= 1.0 {
        return base;
    }
    if intensity <= 0.0 {
        return BLACK;
    }

    let [r, g, b, _] = base.0;
    let scale = |c: u8| (c as f32 * intensity) as u8;
    Rgba([scale(r), scale(g), scale(b), 255])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Primitive;
    use crate::{LightSource, Sphere};

    fn point_light(position: Vec3, intensity: f32) -> LightSource {
        LightSource::Point {
            position,
            intensity,
        }
    }

    #[test]
    fn test_diffuse() {
        let up = Vec3::new(0.0, 5.0, 0.0);
        let down = Vec3::new(0.0, -5.0, 0.0);
        let diagonal = Vec3::new(1.0, 1.0, 0.0).normalized();

        assert!((diffuse(up, Vec3::Y, 1.0) - 1.0).abs() < 1e-3);
        assert_eq!(diffuse(up, -Vec3::Y, 1.0), 0.0);
        assert!((diffuse(up, diagonal, 1.0) - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-3);
        assert_eq!(diffuse(down, diagonal, 1.0), 0.0);
    }

    #[test]
    fn test_diffuse_unnormalized_normal() {
        let lit = diffuse(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, 3.0, 0.0), 0.5);
        assert!((lit - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_specular_disabled() {
        assert_eq!(specular(Vec3::Y, Vec3::Y, Vec3::Y, 1.0, None), 0.0);
    }

    #[test]
    fn test_negative_exponent_disables_specular() {
        let l = Vec3::new(1.0, 1.0, 0.0);
        let view = Vec3::new(-0.5, 1.0, 0.0);
        assert_eq!(specular(l, Vec3::Y, view, 1.0, Some(-1.0)), 0.0);
    }

    #[test]
    fn test_compute_light_with_negative_specular_sphere() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 3.0), 1.0, BLACK).with_specular(-1.0);
        let mut scene = Scene::new();
        scene.add_light(point_light(Vec3::new(1.0, 1.0, 0.0), 1.0));

        let view = Vec3::new(-0.5, 1.0, 0.0);
        let lit = compute_light(&scene, Vec3::ZERO, Vec3::Y, view, sphere.specular());
        let diffuse_only = diffuse(Vec3::new(1.0, 1.0, 0.0), Vec3::Y, 1.0);
        assert!((lit - diffuse_only).abs() < 1e-6);
    }

    #[test]
    fn test_specular_mirror_direction() {
        // Light and viewer both straight above: the reflection hits the eye.
        let lit = specular(Vec3::new(0.0, 5.0, 0.0), Vec3::Y, Vec3::Y, 0.8, Some(100.0));
        assert!((lit - 0.8).abs() < 1e-5);
    }

    #[test]
    fn test_specular_falls_off_with_exponent() {
        let l = Vec3::new(1.0, 1.0, 0.0);
        let view = Vec3::new(-0.5, 1.0, 0.0);
        let soft = specular(l, Vec3::Y, view, 1.0, Some(1.0));
        let sharp = specular(l, Vec3::Y, view, 1.0, Some(50.0));
        assert!(soft > 0.0);
        assert!(sharp < soft);
    }

    #[test]
    fn test_specular_away_from_viewer() {
        let l = Vec3::new(1.0, 1.0, 0.0);
        let view = Vec3::new(1.0, -1.0, 0.0);
        assert_eq!(specular(l, Vec3::Y, view, 1.0, Some(10.0)), 0.0);
    }

    #[test]
    fn test_compute_light_ambient_only() {
        let scene = Scene::new().with_ambient(0.2);
        let lit = compute_light(&scene, Vec3::ZERO, Vec3::Y, Vec3::Y, None);
        assert!((lit - 0.2).abs() < 1e-6);

        let dark = Scene::new();
        assert_eq!(compute_light(&dark, Vec3::ZERO, Vec3::Y, Vec3::Y, None), 0.0);
    }

    #[test]
    fn test_compute_light_point() {
        let mut scene = Scene::new();
        scene.add_light(point_light(Vec3::new(0.0, 5.0, 0.0), 1.0));
        let lit = compute_light(&scene, Vec3::ZERO, Vec3::Y, Vec3::Y, None);
        assert!((lit - 1.0).abs() < 1e-6);

        let mut scene = Scene::new().with_ambient(0.2);
        scene.add_light(point_light(Vec3::new(0.0, 5.0, 0.0), 0.5));
        scene.add_light(LightSource::Ambient { intensity: 0.1 });
        let lit = compute_light(&scene, Vec3::ZERO, Vec3::Y, Vec3::Y, None);
        assert!((lit - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_compute_light_is_not_clamped() {
        let mut scene = Scene::new().with_ambient(0.5);
        scene.add_light(point_light(Vec3::new(0.0, 5.0, 0.0), 1.0));
        scene.add_light(LightSource::Directional {
            direction: Vec3::Y,
            intensity: 1.0,
        });
        let lit = compute_light(&scene, Vec3::ZERO, Vec3::Y, Vec3::Y, None);
        assert!((lit - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_shadowed_point_light() {
        let mut scene = Scene::new();
        scene.add_light(point_light(Vec3::new(0.0, 5.0, 0.0), 1.0));
        scene.add_primitive(Box::new(Sphere::new(
            Vec3::new(0.0, 2.5, 0.0),
            1.0,
            BLACK,
        )));

        assert_eq!(compute_light(&scene, Vec3::ZERO, Vec3::Y, Vec3::Y, None), 0.0);
    }

    #[test]
    fn test_caster_beyond_point_light_does_not_shadow() {
        let mut scene = Scene::new();
        scene.add_light(point_light(Vec3::new(0.0, 5.0, 0.0), 1.0));
        scene.add_primitive(Box::new(Sphere::new(
            Vec3::new(0.0, 10.0, 0.0),
            1.0,
            BLACK,
        )));

        let lit = compute_light(&scene, Vec3::ZERO, Vec3::Y, Vec3::Y, None);
        assert!((lit - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_caster_shadows_directional_light_at_any_distance() {
        let mut scene = Scene::new();
        scene.add_light(LightSource::Directional {
            direction: Vec3::Y,
            intensity: 1.0,
        });
        scene.add_primitive(Box::new(Sphere::new(
            Vec3::new(0.0, 100.0, 0.0),
            1.0,
            BLACK,
        )));

        assert_eq!(compute_light(&scene, Vec3::ZERO, Vec3::Y, Vec3::Y, None), 0.0);
    }

    #[test]
    fn test_ambient_light_ignores_casters() {
        let mut scene = Scene::new();
        scene.add_light(LightSource::Ambient { intensity: 0.4 });
        scene.add_primitive(Box::new(Sphere::new(Vec3::ZERO, 10.0, BLACK)));

        let lit = compute_light(&scene, Vec3::ZERO, Vec3::Y, Vec3::Y, None);
        assert!((lit - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_scale_color() {
        let color = Rgba([200, 100, 50, 255]);

        assert_eq!(scale_color(color, 1.0), color);
        assert_eq!(scale_color(color, 3.7), color);
        assert_eq!(scale_color(color, 0.0), BLACK);
        assert_eq!(scale_color(color, -1.0), BLACK);
        assert_eq!(scale_color(color, 0.5), Rgba([100, 50, 25, 255]));
    }

    #[test]
    fn test_scale_color_truncates() {
        assert_eq!(scale_color(Rgba([255, 255, 1, 255]), 0.5), Rgba([127, 127, 0, 255]));
    }
}
