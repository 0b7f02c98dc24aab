//! Point light.

use ursa_math::Vec3;

use crate::error::{Result, SceneError};

/// A single point light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    position: Vec3,
    intensity: f32,
}

impl Light {
    /// Create a point light. Intensity must be non-negative.
    pub fn new(position: Vec3, intensity: f32) -> Result<Self> {
        if !position.is_finite() {
            return Err(SceneError::NonFinite("light position"));
        }
        if !intensity.is_finite() {
            return Err(SceneError::NonFinite("light intensity"));
        }
        if intensity < 0.0 {
            return Err(SceneError::NegativeIntensity(intensity));
        }

        Ok(Self {
            position,
            intensity,
        })
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn intensity(&self) -> f32 {
        self.intensity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_creation() {
        let light = Light::new(Vec3::new(0.0, 0.0, 20.0), 1.0).unwrap();
        assert_eq!(light.position(), Vec3::new(0.0, 0.0, 20.0));
        assert_eq!(light.intensity(), 1.0);
    }

    #[test]
    fn test_zero_intensity_is_valid() {
        assert!(Light::new(Vec3::ZERO, 0.0).is_ok());
    }

    #[test]
    fn test_negative_intensity_rejected() {
        assert_eq!(
            Light::new(Vec3::ZERO, -1.0).unwrap_err(),
            SceneError::NegativeIntensity(-1.0)
        );
    }
}
