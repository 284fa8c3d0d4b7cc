//! Scenes that ship with Glint.

use glint_math::Vec3;

use crate::loader::{SceneError, SceneResult};
use crate::scene::{LightDescription, SceneDescription, SphereDescription};

/// Names accepted by [`builtin`].
pub const BUILTIN_NAMES: &[&str] = &["three_spheres", "lit_spheres"];

/// Look up a built-in scene by name.
pub fn builtin(name: &str) -> SceneResult<SceneDescription> {
    match name {
        "three_spheres" => Ok(three_spheres()),
        "lit_spheres" => Ok(lit_spheres()),
        other => Err(SceneError::UnknownBuiltin(other.to_string())),
    }
}

/// Red, blue and green unit spheres under full ambient light.
///
/// With ambient 1.0 and no other lights every sphere renders in its exact
/// base colour, which makes this the reference scene for projection tests.
pub fn three_spheres() -> SceneDescription {
    let mut scene = SceneDescription::new("three_spheres").with_ambient(1.0);
    scene.add_sphere(SphereDescription::new(Vec3::new(0.0, -1.0, 3.0), 1.0, [255, 0, 0]));
    scene.add_sphere(SphereDescription::new(Vec3::new(2.0, 0.0, 4.0), 1.0, [0, 0, 255]));
    scene.add_sphere(SphereDescription::new(Vec3::new(-2.0, 0.0, 4.0), 1.0, [0, 255, 0]));
    scene
}

/// The three spheres on a yellow ground, lit by a point and a directional light.
pub fn lit_spheres() -> SceneDescription {
    let mut scene = three_spheres();
    scene.name = "lit_spheres".to_string();
    scene.ambient = 0.2;

    scene.spheres[0].specular = Some(500.0);
    scene.spheres[1].specular = Some(500.0);
    scene.spheres[2].specular = Some(10.0);

    // Ground: a huge sphere whose top sits at y = -1
    scene.add_sphere(
        SphereDescription::new(Vec3::new(0.0, -5001.0, 0.0), 5000.0, [255, 255, 0])
            .with_specular(1000.0),
    );

    scene.add_light(LightDescription::Point {
        position: [2.0, 1.0, 0.0],
        intensity: 0.6,
    });
    scene.add_light(LightDescription::Directional {
        direction: [1.0, 4.0, 4.0],
        intensity: 0.2,
    });
    scene
}
