//! One grey sphere straight ahead of the camera, lit from the eye.

use std::sync::Arc;

use ursa_math::{Color, Vec3};

use crate::error::Result;
use crate::{Light, Material, Scene, Sphere};

pub const SCENE_ID: &str = "single_sphere";

pub fn build() -> Result<Scene> {
    let grey = Arc::new(Material::new(Color::splat(180.0), [0.9, 0.4], 50.0)?);

    Ok(Scene::new()
        .with_shape(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, grey)?)
        .with_light(Light::new(Vec3::ZERO, 1.0)?))
}
