//! Direct lighting with hard shadows.
//!
//! Every primary ray gets exactly one shadow ray toward the light and no
//! further bounces. Results are linear and unclamped; specular highlights
//! routinely exceed the 0-255 range.

use ursa_core::{Light, Scene};
use ursa_math::{reflect, Color, Interval, Ray, Vec3, WHITE};

use crate::hittable::{scene_intersect, HitRecord, Hittable};

/// How far the shadow ray origin is pushed off the surface, in normal lengths.
pub const SHADOW_BIAS: f32 = 1.1;

/// Fraction of the light removed when the light is occluded.
pub const SHADOW_ATTENUATION: f32 = 0.9;

/// Color seen along a primary ray, plus whether the ray hit geometry.
///
/// The flag is what decides stereogram tinting. Comparing the color with
/// the background would also tint geometry that happens to match it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shade {
    pub color: Color,
    pub hit: bool,
}

impl Shade {
    /// The ray escaped the scene.
    pub fn miss(background: Color) -> Self {
        Self {
            color: background,
            hit: false,
        }
    }

    /// The ray landed on a surface.
    pub fn surface(color: Color) -> Self {
        Self { color, hit: true }
    }
}

/// Shade a primary ray against the scene.
///
/// Misses return `background`. A scene without a light renders every
/// surface black.
pub fn cast_ray(scene: &Scene, ray: &Ray, background: Color) -> Shade {
    let Some(rec) = scene_intersect(scene, ray) else {
        return Shade::miss(background);
    };

    match scene.light() {
        Some(light) => Shade::surface(direct_light(scene, light, &rec, ray.direction())),
        None => Shade::surface(Color::ZERO),
    }
}

/// Diffuse plus specular contribution of `light` at a surface hit.
fn direct_light(scene: &Scene, light: &Light, rec: &HitRecord, view_dir: Vec3) -> Color {
    let to_light = light.position() - rec.p;
    let light_distance = to_light.length();
    let light_dir = to_light.normalize_or_zero();

    let shadow = shadow_attenuation(scene, rec, light_dir, light_distance);

    let diffuse_intensity =
        light.intensity() * light_dir.dot(rec.normal).max(0.0) * (1.0 - shadow);

    let reflection = reflect(light_dir, rec.normal);
    let specular_intensity =
        light.intensity() * (-reflection.dot(view_dir)).max(0.0).powf(rec.material.spec());

    let diffuse = rec.material.diffuse() * diffuse_intensity * rec.material.diffuse_weight();
    let specular = WHITE * specular_intensity * rec.material.specular_weight();
    diffuse + specular
}

/// `SHADOW_ATTENUATION` if anything sits between the surface and the light, else 0.
fn shadow_attenuation(scene: &Scene, rec: &HitRecord, light_dir: Vec3, light_distance: f32) -> f32 {
    // Push the origin to the side of the surface the light is on
    let offset = rec.normal * SHADOW_BIAS;
    let origin = if light_dir.dot(rec.normal) < 0.0 {
        rec.p - offset
    } else {
        rec.p + offset
    };

    let shadow_ray = Ray::new(origin, light_dir);
    let occluded = scene
        .hit(&shadow_ray, Interval::FORWARD.with_max(light_distance))
        .is_some();

    if occluded {
        SHADOW_ATTENUATION
    } else {
        0.0
    }
}
