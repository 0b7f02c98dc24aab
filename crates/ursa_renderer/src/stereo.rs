//! Red/cyan stereogram compositing.

use ursa_math::{Color, Vec3};

use crate::shading::Shade;

/// Eye placement and tinting for stereogram renders.
///
/// Eye positions are offsets from the camera origin. Both eyes share the
/// camera's per-pixel direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StereoConfig {
    pub red_eye: Vec3,
    pub blue_eye: Vec3,
    /// Factor applied to an eye's color before its tint is added.
    pub scale: f32,
    pub red_tint: Color,
    pub blue_tint: Color,
}

impl Default for StereoConfig {
    fn default() -> Self {
        Self {
            red_eye: Vec3::new(0.4, 0.0, 0.0),
            blue_eye: Vec3::new(-0.4, 0.0, 0.0),
            scale: 0.57,
            red_tint: Color::new(100.0, 0.0, 0.0),
            blue_tint: Color::new(0.0, 0.0, 100.0),
        }
    }
}

impl StereoConfig {
    /// Scale and tint an eye's color if its ray hit geometry.
    /// Misses keep the raw background.
    pub fn tint(&self, shade: Shade, tint: Color) -> Color {
        if shade.hit {
            shade.color * self.scale + tint
        } else {
            shade.color
        }
    }

    /// Sum of both tinted eyes.
    ///
    /// A pixel where both eyes miss comes out as twice the background.
    pub fn composite(&self, red: Shade, blue: Shade) -> Color {
        self.tint(red, self.red_tint) + self.tint(blue, self.blue_tint)
    }
}
