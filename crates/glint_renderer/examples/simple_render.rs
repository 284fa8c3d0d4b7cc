//! Simple ray tracer example.
//!
//! Builds a small scene in code and saves it as PNG.

use glint_renderer::{render, LightSource, RenderConfig, Scene, Sphere, Vec3};
use image::Rgba;

fn main() {
    println!("Glint Ray Tracer - Simple Example");
    println!("=================================");

    let start = std::time::Instant::now();
    let scene = build_scene();
    println!("Scene built in {:?}", start.elapsed());

    let config = RenderConfig::new(512, 512);
    println!("Rendering {}x{}...", config.width, config.height);

    let start = std::time::Instant::now();
    let image = render(&scene, &config);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "simple_render.png";
    image.save(filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let mut scene = Scene::new()
        .with_ambient(0.15)
        .with_background(Rgba([20, 20, 40, 255]));

    // Ground
    scene.add_primitive(Box::new(
        Sphere::new(Vec3::new(0.0, -1001.0, 0.0), 1000.0, Rgba([180, 180, 180, 255]))
            .with_specular(1000.0),
    ));

    // A row of spheres with increasing shininess
    for (i, exponent) in [2.0, 20.0, 200.0].into_iter().enumerate() {
        let x = -2.2 + 2.2 * i as f32;
        scene.add_primitive(Box::new(
            Sphere::new(Vec3::new(x, 0.0, 5.0), 1.0, Rgba([90, 140, 230, 255])).with_specular(exponent),
        ));
    }

    scene.add_light(LightSource::Point {
        position: Vec3::new(-3.0, 4.0, 1.0),
        intensity: 0.6,
    });
    scene.add_light(LightSource::Directional {
        direction: Vec3::new(1.0, 4.0, -2.0),
        intensity: 0.25,
    });

    println!("Created {} objects", scene.len());
    scene
}
