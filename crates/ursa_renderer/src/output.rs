//! Bitmap output.
//!
//! The only place colors are clamped to displayable bytes.

use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};
use log::info;
use thiserror::Error;
use ursa_math::Color;

use crate::framebuffer::Framebuffer;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("cannot encode an empty {0}x{1} image")]
    EmptyImage(u32, u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Clamp a 0-255 color to bytes. NaN channels become 0.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let channel = |v: f32| v.clamp(0.0, 255.0) as u8;
    [channel(color.x), channel(color.y), channel(color.z)]
}

impl Framebuffer {
    /// Convert to an 8-bit image with the top row first.
    pub fn to_rgb_image(&self) -> RgbImage {
        let height = self.height();
        RgbImage::from_fn(self.width(), height, |x, y| {
            Rgb(color_to_rgb(self.get(x, height - 1 - y)))
        })
    }

    /// Write the framebuffer to `path` as an uncompressed 24-bit BMP.
    pub fn write_bmp(&self, path: impl AsRef<Path>) -> Result<(), OutputError> {
        if self.width() == 0 || self.height() == 0 {
            return Err(OutputError::EmptyImage(self.width(), self.height()));
        }

        let path = path.as_ref();
        self.to_rgb_image()
            .save_with_format(path, ImageFormat::Bmp)?;
        info!("Wrote {}x{} bitmap to {}", self.width(), self.height(), path.display());
        Ok(())
    }
}
