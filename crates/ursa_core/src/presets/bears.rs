//! Two teddy bears side by side, built from 24 spheres.
//!
//! The left bear is white, the right one is tan with a red belly. Eyes and
//! nose tips share a glossy black material.

use std::sync::Arc;

use ursa_math::{Color, Vec3};

use crate::error::Result;
use crate::{Light, Material, Scene, Sphere};

pub const SCENE_ID: &str = "bears";

pub fn build() -> Result<Scene> {
    let eye = Arc::new(Material::new(Color::ZERO, [0.6, 0.3], 35.0)?);

    // Left bear
    let white = Arc::new(Material::new(Color::splat(255.0), [1.0, 1.0], 30.0)?);

    // Right bear
    let tan = Arc::new(Material::new(Color::new(240.0, 175.0, 137.0), [1.0, 1.0], 30.0)?);
    let belly = Arc::new(Material::new(Color::new(201.0, 64.0, 26.0), [1.0, 1.0], 30.0)?);
    let brown = Arc::new(Material::new(Color::new(175.0, 85.0, 45.0), [1.0, 1.0], 15.0)?);

    let spheres: [(Vec3, f32, &Arc<Material>); 24] = [
        // Ears
        (Vec3::new(3.4, 2.9, -9.0), 0.4, &brown),
        (Vec3::new(-3.4, 2.9, -9.0), 0.4, &white),
        (Vec3::new(1.4, 2.9, -9.0), 0.4, &brown),
        (Vec3::new(-1.4, 2.9, -9.0), 0.4, &white),
        // Faces
        (Vec3::new(2.5, 2.0, -10.0), 1.5, &tan),
        (Vec3::new(-2.5, 2.0, -10.0), 1.5, &white),
        // Eyes
        (Vec3::new(-2.4, 2.1, -8.0), 0.1, &eye),
        (Vec3::new(2.4, 2.1, -8.0), 0.1, &eye),
        (Vec3::new(-1.7, 2.1, -8.0), 0.1, &eye),
        (Vec3::new(1.7, 2.1, -8.0), 0.1, &eye),
        // Noses
        (Vec3::new(2.4, 1.5, -9.0), 0.65, &brown),
        (Vec3::new(-2.4, 1.5, -9.0), 0.65, &white),
        (Vec3::new(-2.1, 1.7, -8.0), 0.1, &eye),
        (Vec3::new(2.1, 1.7, -8.0), 0.1, &eye),
        // Bellies
        (Vec3::new(2.5, -1.0, -10.0), 1.75, &belly),
        (Vec3::new(-2.5, -1.0, -10.0), 1.75, &white),
        // Arms
        (Vec3::new(4.0, 0.0, -9.0), 0.6, &tan),
        (Vec3::new(-4.0, 0.0, -9.0), 0.6, &white),
        (Vec3::new(1.0, 0.0, -9.0), 0.6, &tan),
        (Vec3::new(-1.0, 0.0, -9.0), 0.6, &white),
        // Legs
        (Vec3::new(4.0, -2.5, -9.0), 0.7, &tan),
        (Vec3::new(-4.0, -2.5, -9.0), 0.7, &white),
        (Vec3::new(1.0, -2.5, -9.0), 0.7, &tan),
        (Vec3::new(-1.0, -2.5, -9.0), 0.7, &white),
    ];

    let mut scene = Scene::new();
    for (center, radius, material) in spheres {
        scene.add(Sphere::new(center, radius, Arc::clone(material))?);
    }
    scene.set_light(Light::new(Vec3::new(0.0, 0.0, 20.0), 1.0)?);

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bears_layout() {
        let scene = build().unwrap();
        assert_eq!(scene.len(), 24);
        assert_eq!(scene.material_count(), 5);
        assert_eq!(scene.light().map(|l| l.position()), Some(Vec3::new(0.0, 0.0, 20.0)));
    }
}
