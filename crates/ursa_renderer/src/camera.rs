//! Camera for primary ray generation.

use ursa_math::{Ray, Vec3};

/// Vertical field of view, in radians.
pub const FIELD_OF_VIEW: f32 = std::f32::consts::FRAC_PI_2;

/// Pinhole camera looking down -Z with a fixed 90 degree field of view.
///
/// Pixel row 0 is the bottom of the image, matching the bitmap row order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    origin: Vec3,
}

impl Camera {
    /// Create a camera at the world origin.
    pub fn new(image_width: u32, image_height: u32) -> Self {
        Self {
            image_width,
            image_height,
            origin: Vec3::ZERO,
        }
    }

    /// Set camera position.
    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.image_width as f32 / self.image_height as f32
    }

    /// Unit direction through the center of pixel (x, y).
    pub fn direction(&self, x: u32, y: u32) -> Vec3 {
        let scale = (FIELD_OF_VIEW / 2.0).tan();
        let i = (2.0 * (x as f32 + 0.5) / self.image_width as f32 - 1.0) * scale * self.aspect_ratio();
        let j = (2.0 * (y as f32 + 0.5) / self.image_height as f32 - 1.0) * scale;
        Vec3::new(i, j, -1.0).normalize()
    }

    /// Primary ray for pixel (x, y) from the camera origin.
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        self.get_ray_from(self.origin, x, y)
    }

    /// Primary ray for pixel (x, y) from an arbitrary eye position.
    pub fn get_ray_from(&self, eye: Vec3, x: u32, y: u32) -> Ray {
        Ray::new(eye, self.direction(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pixel_looks_straight_ahead() {
        let camera = Camera::new(1, 1);
        assert!((camera.direction(0, 0) - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_corner_directions_are_symmetric() {
        let camera = Camera::new(2, 2);
        let d = camera.direction(0, 0);
        let expected = Vec3::new(-0.5, -0.5, -1.0).normalize();
        assert!((d - expected).length() < 1e-6);

        let opposite = camera.direction(1, 1);
        assert!((opposite - Vec3::new(0.5, 0.5, -1.0).normalize()).length() < 1e-6);
    }

    #[test]
    fn test_row_zero_is_bottom() {
        let camera = Camera::new(10, 10);
        assert!(camera.direction(5, 0).y < 0.0);
        assert!(camera.direction(5, 9).y > 0.0);
    }

    #[test]
    fn test_aspect_ratio_widens_horizontal_span() {
        let wide = Camera::new(200, 100);
        let d = wide.direction(0, 50);
        // Left edge sits near i = -2 (tan 45 deg * aspect 2)
        assert!((d.x / -d.z + 1.99).abs() < 1e-3);
        assert!((d.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_ray_origin() {
        let origin = Vec3::new(1.0, 0.0, 0.0);
        let camera = Camera::new(4, 4).with_origin(origin);
        assert_eq!(camera.get_ray(0, 0).origin(), origin);
        assert_eq!(camera.get_ray_from(Vec3::ZERO, 0, 0).origin(), Vec3::ZERO);
    }
}
