//! Example: Load and inspect a scene file or built-in scene.
//!
//! Run with: cargo run --example inspect_scene -- scenes/lit_spheres.json
//!       or: cargo run --example inspect_scene -- lit_spheres

use std::env;
use std::path::Path;

use glint_core::{builtin, load_scene, LightDescription, BUILTIN_NAMES};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <scene.json | built-in name>");
        println!("\nBuilt-in scenes:");
        for name in BUILTIN_NAMES {
            println!("  {}", name);
        }
        return;
    }

    let source = &args[1];
    let loaded = if Path::new(source).exists() {
        load_scene(source)
    } else {
        builtin(source)
    };

    match loaded {
        Ok(scene) => {
            println!("\n=== Scene: {} ===", scene.name);
            println!("Observer: {:?}", scene.observer);
            println!("Background: {:?}", scene.background);
            println!("Ambient: {:.2}", scene.ambient);
            println!(
                "Viewport: {} x {} at distance {}",
                scene.viewport.width, scene.viewport.height, scene.viewport.distance
            );

            println!("\n--- Spheres ---");
            for (i, sphere) in scene.spheres.iter().enumerate() {
                println!(
                    "  [{}] center ({:.2}, {:.2}, {:.2}) radius {:.2} color {:?} specular {:?}",
                    i,
                    sphere.center[0],
                    sphere.center[1],
                    sphere.center[2],
                    sphere.radius,
                    sphere.color,
                    sphere.specular_exponent()
                );
            }

            println!("\n--- Lights ---");
            for (i, light) in scene.lights.iter().enumerate() {
                match light {
                    LightDescription::Ambient { intensity } => {
                        println!("  [{}] ambient {:.2}", i, intensity)
                    }
                    LightDescription::Point { position, intensity } => {
                        println!("  [{}] point at {:?} intensity {:.2}", i, position, intensity)
                    }
                    LightDescription::Directional { direction, intensity } => {
                        println!("  [{}] directional {:?} intensity {:.2}", i, direction, intensity)
                    }
                }
            }
        }
        Err(e) => {
            eprintln!("Error loading scene: {}", e);
        }
    }
}
