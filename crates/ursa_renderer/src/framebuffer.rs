//! Fixed-size pixel storage.

use thiserror::Error;
use ursa_math::Color;

/// Errors from checked framebuffer access.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramebufferError {
    #[error("pixel ({x}, {y}) is outside the {width}x{height} framebuffer")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },
}

/// A height x width grid of colors, row-major.
///
/// Dimensions are fixed at construction. Row 0 is the bottom of the image.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a framebuffer with every pixel set to `fill`.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Get the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// If (x, y) is outside the framebuffer.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// If (x, y) is outside the framebuffer. Internal callers always pass
    /// coordinates derived from the buffer dimensions.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Set the pixel at (x, y), reporting out-of-range coordinates instead
    /// of panicking. Nothing is written on error.
    pub fn try_set(&mut self, x: i64, y: i64, color: Color) -> Result<(), FramebufferError> {
        let in_bounds = (0..self.width as i64).contains(&x) && (0..self.height as i64).contains(&y);
        if !in_bounds {
            return Err(FramebufferError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        self.set(x as u32, y as u32, color);
        Ok(())
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) is outside the {}x{} framebuffer",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }
}
