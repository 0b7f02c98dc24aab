//! Hittable trait and HitRecord for ray-object intersection.

use ursa_core::{Material, Scene, Shape};
use ursa_math::{Interval, Ray, Vec3};

/// Record of a ray-object intersection.
///
/// Only lives for the duration of one ray cast.
#[derive(Clone, Debug)]
pub struct HitRecord<'a> {
    /// Distance along the ray
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Outward unit surface normal
    pub normal: Vec3,
    /// Material of the object that was hit
    pub material: &'a Material,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Nearest intersection with a distance strictly inside `ray_t`.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>>;
}

impl Hittable for Shape {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        match self {
            Shape::Sphere(sphere) => sphere.hit(ray, ray_t),
        }
    }
}

impl Hittable for Scene {
    /// Linear scan over every shape. A later shape only replaces the current
    /// hit when it is strictly closer, so exact ties keep the earlier one.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let mut closest: Option<HitRecord<'a>> = None;

        for shape in self.shapes() {
            let max = closest.as_ref().map_or(ray_t.max, |rec| rec.t);
            if let Some(rec) = shape.hit(ray, ray_t.with_max(max)) {
                closest = Some(rec);
            }
        }

        closest
    }
}

/// Nearest hit in front of the ray origin, or `None` if the ray escapes.
pub fn scene_intersect<'a>(scene: &'a Scene, ray: &Ray) -> Option<HitRecord<'a>> {
    scene.hit(ray, Interval::FORWARD)
}
