//! Nearest-hit search and primary ray tracing.

use crate::primitive::Hit;
use crate::shading::{compute_light, scale_color, Color};
use crate::{Ray, Scene};
use glint_math::{Interval, Vec3};

/// Find the nearest intersection with `t` in `[ray_t.min, ray_t.max)`.
///
/// Both roots of every primitive are tested independently. On an exact tie
/// the primitive that comes first in the scene wins.
pub fn closest_intersection(scene: &Scene, ray: &Ray, ray_t: Interval) -> Option<Hit> {
    let mut closest: Option<Hit> = None;
    let mut closest_so_far = f32::INFINITY;

    for (index, primitive) in scene.primitives().iter().enumerate() {
        let (t1, t2) = primitive.intersect(ray);
        for t in [t1, t2] {
            if ray_t.admits(t) && t < closest_so_far {
                closest_so_far = t;
                closest = Some(Hit { index, t });
            }
        }
    }

    closest
}

/// Colour seen from the scene's observer along `direction`.
///
/// Returns the background when nothing is hit inside `ray_t`.
pub fn trace_ray(scene: &Scene, direction: Vec3, ray_t: Interval) -> Color {
    let ray = Ray::new(scene.observer(), direction);

    let Some(hit) = closest_intersection(scene, &ray, ray_t) else {
        return scene.background();
    };

    let primitive = &scene.primitives()[hit.index];
    let p = ray.at(hit.t);
    let normal = primitive.normal_at(p);
    let view = -direction;

    let intensity = compute_light(scene, p, normal, view, primitive.specular());
    scale_color(primitive.color(), intensity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LightSource, Sphere};
    use image::Rgba;

    const RED: Color = Rgba([255, 0, 0, 255]);
    const GREEN: Color = Rgba([0, 255, 0, 255]);
    const BLUE: Color = Rgba([0, 0, 255, 255]);

    fn forward() -> Ray {
        Ray::new(Vec3::ZERO, Vec3::Z)
    }

    #[test]
    fn test_no_primitives() {
        let scene = Scene::new();
        assert_eq!(closest_intersection(&scene, &forward(), Interval::from_min(0.0)), None);
    }

    #[test]
    fn test_nearest_wins() {
        let mut scene = Scene::new();
        scene.add_primitive(Box::new(Sphere::new(Vec3::new(0.0, 0.0, 10.0), 1.0, RED)));
        scene.add_primitive(Box::new(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, GREEN)));

        let hit = closest_intersection(&scene, &forward(), Interval::from_min(1.0)).unwrap();
        assert_eq!(hit.index, 1);
        assert!((hit.t - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_interval_bounds() {
        let mut scene = Scene::new();
        scene.add_primitive(Box::new(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, RED)));

        // Near root at 4 is below the interval, the far root at 6 qualifies
        let hit = closest_intersection(&scene, &forward(), Interval::new(5.0, 10.0)).unwrap();
        assert!((hit.t - 6.0).abs() < 1e-5);

        // Upper bound is exclusive
        assert_eq!(
            closest_intersection(&scene, &forward(), Interval::new(0.0, 4.0)),
            None
        );
        // Both roots outside
        assert_eq!(
            closest_intersection(&scene, &forward(), Interval::new(6.5, 100.0)),
            None
        );
    }

    #[test]
    fn test_origin_inside_sphere() {
        let mut scene = Scene::new();
        scene.add_primitive(Box::new(Sphere::new(Vec3::ZERO, 2.0, RED)));

        let hit = closest_intersection(&scene, &forward(), Interval::from_min(0.0)).unwrap();
        assert!((hit.t - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_tie_goes_to_first_primitive() {
        let mut scene = Scene::new();
        scene.add_primitive(Box::new(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, RED)));
        scene.add_primitive(Box::new(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, BLUE)));

        for _ in 0..3 {
            let hit = closest_intersection(&scene, &forward(), Interval::from_min(1.0)).unwrap();
            assert_eq!(hit.index, 0);
        }
    }

    #[test]
    fn test_trace_miss_returns_background() {
        let mut scene = Scene::new().with_background(BLUE);
        scene.add_primitive(Box::new(Sphere::new(Vec3::new(0.0, -1.0, 3.0), 1.0, RED)));

        let color = trace_ray(&scene, Vec3::new(0.0, 0.0, -1.0), Interval::from_min(1.0));
        assert_eq!(color, BLUE);
    }

    #[test]
    fn test_trace_full_ambient_gives_base_color() {
        let mut scene = Scene::new().with_ambient(1.0);
        scene.add_primitive(Box::new(Sphere::new(Vec3::new(0.0, 0.0, 3.0), 1.0, GREEN)));

        assert_eq!(trace_ray(&scene, Vec3::Z, Interval::from_min(1.0)), GREEN);
    }

    #[test]
    fn test_trace_lit_from_viewer() {
        // Point light at the eye, looking straight at the sphere: n·l = |n||l|
        let mut scene = Scene::new().with_ambient(0.25);
        scene.add_light(LightSource::Point {
            position: Vec3::ZERO,
            intensity: 0.25,
        });
        scene.add_primitive(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, 3.0),
            1.0,
            Rgba([200, 200, 200, 255]),
        )));

        let color = trace_ray(&scene, Vec3::Z, Interval::from_min(1.0));
        assert_eq!(color, Rgba([100, 100, 100, 255]));
    }

    #[test]
    fn test_trace_unlit_is_black() {
        let mut scene = Scene::new();
        scene.add_primitive(Box::new(Sphere::new(Vec3::new(0.0, 0.0, 3.0), 1.0, RED)));

        assert_eq!(
            trace_ray(&scene, Vec3::Z, Interval::from_min(1.0)),
            crate::shading::BLACK
        );
    }
}
