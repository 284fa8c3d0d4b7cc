//! Raster driver.
//!
//! Issues one primary ray per pixel:
//! - Projection of each pixel onto the viewport
//! - Serial or row-parallel rendering
//! - Row-major RGBA output, top row first

use crate::shading::Color;
use crate::trace::trace_ray;
use crate::viewport::{canvas_to_viewport, Viewport};
use crate::Scene;
use glint_math::Interval;
use image::RgbaImage;
use rayon::prelude::*;
use std::time::Instant;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Image plane the pixels are projected onto
    pub viewport: Viewport,
    /// Closest accepted primary hit, normally the viewport distance
    pub near: f32,
    /// Spread rows across the rayon thread pool
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(1024, 1024)
    }
}

impl RenderConfig {
    /// Create a configuration for the default 1×1×1 viewport.
    pub fn new(width: u32, height: u32) -> Self {
        let viewport = Viewport::default();
        Self {
            width,
            height,
            viewport,
            near: viewport.distance,
            parallel: true,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the viewport. Primary rays start at its plane.
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self.near = viewport.distance;
        self
    }

    /// Enable or disable row-parallel rendering.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    fn primary_range(&self) -> Interval {
        Interval::from_min(self.near)
    }
}

/// Render a single pixel.
pub fn render_pixel(scene: &Scene, config: &RenderConfig, x: u32, y: u32) -> Color {
    let direction = canvas_to_viewport(x, y, &config.viewport, config.width, config.height);
    trace_ray(scene, direction, config.primary_range())
}

/// Render the entire scene, serially or row-parallel depending on the config.
pub fn render(scene: &Scene, config: &RenderConfig) -> RgbaImage {
    log::info!(
        "Rendering {}x{} ({} primitives, {} lights, {})",
        config.width,
        config.height,
        scene.len(),
        scene.lights().len(),
        if config.parallel { "parallel" } else { "serial" }
    );

    let start = Instant::now();
    let image = if config.parallel {
        render_parallel(scene, config)
    } else {
        render_serial(scene, config)
    };
    log::info!("Rendered in {:?}", start.elapsed());

    image
}

/// Render on the calling thread.
pub fn render_serial(scene: &Scene, config: &RenderConfig) -> RgbaImage {
    let mut image = RgbaImage::new(config.width, config.height);

    for y in 0..config.height {
        for x in 0..config.width {
            image.put_pixel(x, y, render_pixel(scene, config, x, y));
        }
    }

    image
}

/// Render with one rayon task per row.
///
/// Each task owns its row of the framebuffer, so no locking is needed.
pub fn render_parallel(scene: &Scene, config: &RenderConfig) -> RgbaImage {
    let mut image = RgbaImage::new(config.width, config.height);
    let row_len = config.width as usize * 4;
    if row_len == 0 {
        return image;
    }

    let pixels: &mut [u8] = &mut image;
    pixels
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, out) in row.chunks_exact_mut(4).enumerate() {
                let color = render_pixel(scene, config, x as u32, y as u32);
                out.copy_from_slice(&color.0);
            }
        });

    image
}
