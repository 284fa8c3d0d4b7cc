//! Mapping from canvas pixels to primary ray directions.

use glint_core::ViewportDescription;
use glint_math::Vec3;

/// Axis-aligned image plane centered on the +Z axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width of the plane in world units
    pub width: f32,
    /// Height of the plane in world units
    pub height: f32,
    /// Depth of the plane in front of the observer
    pub distance: f32,
}

impl Viewport {
    /// Create a new viewport.
    pub fn new(width: f32, height: f32, distance: f32) -> Self {
        Self {
            width,
            height,
            distance,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

impl From<ViewportDescription> for Viewport {
    fn from(desc: ViewportDescription) -> Self {
        Self::new(desc.width, desc.height, desc.distance)
    }
}

/// Point on the viewport under canvas pixel `(x, y)`, used as a ray direction.
///
/// Canvas row 0 is the top of the image while world Y grows upward, so Y is
/// flipped. The result is not normalized.
pub fn canvas_to_viewport(x: u32, y: u32, viewport: &Viewport, canvas_width: u32, canvas_height: u32) -> Vec3 {
    let left_edge = -viewport.width / 2.0;
    let top_edge = viewport.height / 2.0;

    let world_x = left_edge + (x as f32 / canvas_width as f32) * viewport.width;
    let world_y = top_edge - (y as f32 / canvas_height as f32) * viewport.height;
    Vec3::new(world_x, world_y, viewport.distance)
}
