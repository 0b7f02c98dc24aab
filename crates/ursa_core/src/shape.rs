//! Scene geometry.
//!
//! Geometry is a closed set of variants. Every variant carries a shared
//! material handle; the renderer gives each one an intersection routine.

use std::sync::Arc;

use ursa_math::Vec3;

use crate::error::{Result, SceneError};
use crate::material::Material;

/// A sphere primitive.
#[derive(Clone, Debug)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere. The radius must be strictly positive.
    pub fn new(center: Vec3, radius: f32, material: Arc<Material>) -> Result<Self> {
        if !center.is_finite() {
            return Err(SceneError::NonFinite("sphere center"));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SceneError::InvalidRadius(radius));
        }

        Ok(Self {
            center,
            radius,
            material,
        })
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }
}

/// Every kind of geometry a scene can hold.
#[derive(Clone, Debug)]
pub enum Shape {
    Sphere(Sphere),
}

impl Shape {
    /// Material shared by this shape.
    pub fn material(&self) -> &Arc<Material> {
        match self {
            Shape::Sphere(sphere) => sphere.material(),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}
