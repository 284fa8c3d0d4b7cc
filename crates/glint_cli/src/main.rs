use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use image::{ImageFormat, RgbaImage};
use log::LevelFilter;

use glint_core::{builtin, load_scene, SceneDescription};
use glint_renderer::{render, RenderConfig, Scene, Viewport};

mod cli;

use cli::Args;

fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_description(args: &Args) -> Result<SceneDescription> {
    match &args.scene {
        Some(path) => {
            load_scene(path).with_context(|| format!("Failed to load scene {}", path.display()))
        }
        None => builtin(&args.builtin)
            .with_context(|| format!("Available scenes: {}", glint_core::BUILTIN_NAMES.join(", "))),
    }
}

/// Write the render as PNG whatever the path's extension.
fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to save image to {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    log::info!("Starting Glint");

    if args.width == 0 || args.height == 0 {
        bail!("Image size must be non-zero, got {}x{}", args.width, args.height);
    }

    let desc = load_description(&args)?;
    let scene = Scene::from_description(&desc)
        .with_context(|| format!("Invalid scene '{}'", desc.name))?;

    let config = RenderConfig::new(args.width, args.height)
        .with_viewport(Viewport::from(desc.viewport))
        .with_parallel(!args.serial);

    let image = render(&scene, &config);

    save_png(&image, &args.output)?;
    log::info!("Saved image to {}", args.output.display());

    Ok(())
}
