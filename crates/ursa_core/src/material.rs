//! Surface material shared between shapes.

use ursa_math::Color;

use crate::error::{Result, SceneError};

/// Phong-style surface description.
///
/// A material is created once and shared behind an `Arc` by every shape
/// that uses it; it is never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    diffuse: Color,
    albedo: [f32; 2],
    spec: f32,
}

impl Material {
    /// Create a material.
    ///
    /// `albedo` holds the diffuse and specular blend weights. They have no
    /// upper bound, so a scene can deliberately over- or under-expose.
    /// `spec` is the Phong exponent.
    pub fn new(diffuse: Color, albedo: [f32; 2], spec: f32) -> Result<Self> {
        if !diffuse.is_finite() {
            return Err(SceneError::NonFinite("material diffuse color"));
        }
        if !albedo[0].is_finite() || !albedo[1].is_finite() {
            return Err(SceneError::NonFinite("material albedo"));
        }
        if albedo[0] < 0.0 || albedo[1] < 0.0 {
            return Err(SceneError::NegativeAlbedo(albedo[0], albedo[1]));
        }
        if !spec.is_finite() {
            return Err(SceneError::NonFinite("material specular exponent"));
        }
        // 0^-n is infinite, which turns unlit specular into NaN
        if spec < 0.0 {
            return Err(SceneError::NegativeExponent(spec));
        }

        Ok(Self {
            diffuse,
            albedo,
            spec,
        })
    }

    /// Base surface color.
    #[inline]
    pub fn diffuse(&self) -> Color {
        self.diffuse
    }

    /// Weight of the diffuse term.
    #[inline]
    pub fn diffuse_weight(&self) -> f32 {
        self.albedo[0]
    }

    /// Weight of the specular term.
    #[inline]
    pub fn specular_weight(&self) -> f32 {
        self.albedo[1]
    }

    /// Phong exponent controlling highlight tightness.
    #[inline]
    pub fn spec(&self) -> f32 {
        self.spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_accessors() {
        let mat = Material::new(Color::new(240.0, 175.0, 137.0), [0.6, 0.3], 35.0).unwrap();
        assert_eq!(mat.diffuse(), Color::new(240.0, 175.0, 137.0));
        assert_eq!(mat.diffuse_weight(), 0.6);
        assert_eq!(mat.specular_weight(), 0.3);
        assert_eq!(mat.spec(), 35.0);
    }

    #[test]
    fn test_albedo_above_one_is_allowed() {
        assert!(Material::new(Color::ZERO, [2.5, 4.0], 10.0).is_ok());
    }

    #[test]
    fn test_negative_albedo_rejected() {
        let err = Material::new(Color::ZERO, [1.0, -0.1], 10.0).unwrap_err();
        assert_eq!(err, SceneError::NegativeAlbedo(1.0, -0.1));
    }

    #[test]
    fn test_negative_exponent_rejected() {
        let err = Material::new(Color::splat(100.0), [1.0, 0.0], -2.0).unwrap_err();
        assert_eq!(err, SceneError::NegativeExponent(-2.0));
        assert!(Material::new(Color::splat(100.0), [1.0, 0.0], 0.0).is_ok());
    }

    #[test]
    fn test_nan_color_rejected() {
        let err = Material::new(Color::new(f32::NAN, 0.0, 0.0), [1.0, 1.0], 10.0).unwrap_err();
        assert!(matches!(err, SceneError::NonFinite(_)));
    }
}
