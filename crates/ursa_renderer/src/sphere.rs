//! Ray-sphere intersection.

use ursa_core::Sphere;
use ursa_math::{Interval, Ray};

use crate::hittable::{HitRecord, Hittable};

impl Hittable for Sphere {
    /// Geometric solution of `|P - center|^2 = radius^2` for a unit-direction ray.
    ///
    /// Takes the near root when it is in range, otherwise the far root, which
    /// is the exit point when the origin is inside the sphere.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let l = self.center() - ray.origin();
        let tca = l.dot(ray.direction());
        let l2 = l.length_squared();
        let r2 = self.radius() * self.radius();

        // Sphere is behind an origin that sits outside it
        if tca < 0.0 && l2 > r2 {
            return None;
        }

        let d2 = l2 - tca * tca;
        if d2 > r2 {
            return None;
        }

        let thc = (r2 - d2).sqrt();
        let mut t = tca - thc;
        if !ray_t.surrounds(t) {
            t = tca + thc;
            if !ray_t.surrounds(t) {
                return None;
            }
        }

        let p = ray.at(t);
        Some(HitRecord {
            t,
            p,
            normal: (p - self.center()).normalize(),
            material: self.material().as_ref(),
        })
    }
}
