//! Ursa Renderer - single-bounce CPU ray tracing of sphere scenes.
//!
//! One primary ray per pixel, direct light from a single point source with
//! hard shadows, Phong diffuse and specular terms. Optionally composites two
//! eye positions into a red/cyan stereogram.

mod camera;
mod framebuffer;
mod hittable;
mod output;
mod renderer;
mod shading;
mod sphere;
mod stereo;

pub use camera::{Camera, FIELD_OF_VIEW};
pub use framebuffer::{Framebuffer, FramebufferError};
pub use hittable::{scene_intersect, HitRecord, Hittable};
pub use output::{color_to_rgb, OutputError};
pub use renderer::{render_pixel, RenderConfig, Renderer};
pub use shading::{cast_ray, Shade, SHADOW_ATTENUATION, SHADOW_BIAS};
pub use stereo::StereoConfig;

/// Re-export scene and math types so callers need a single dependency
pub use ursa_core::{Light, Material, Scene, SceneError, Shape, Sphere};
pub use ursa_math::{Color, Interval, Ray, Vec3, WHITE};
