//! Glint Renderer - Whitted-style CPU ray tracing
//!
//! One primary ray per pixel, one shadow ray per light, and a Phong-like
//! diffuse + specular model. No recursion, no sampling, no acceleration
//! structure: every pixel is a pure function of the scene and its coordinates.

mod light;
mod primitive;
mod renderer;
mod scene;
mod shading;
mod sphere;
mod trace;
mod viewport;

pub use light::{LightSource, SHADOW_EPSILON};
pub use primitive::{Hit, Primitive};
pub use renderer::{render, render_parallel, render_pixel, render_serial, RenderConfig};
pub use scene::{opaque, Scene};
pub use shading::{compute_light, diffuse, scale_color, specular, Color, BLACK};
pub use sphere::Sphere;
pub use trace::{closest_intersection, trace_ray};
pub use viewport::{canvas_to_viewport, Viewport};

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Interval, Ray, Vec3};
