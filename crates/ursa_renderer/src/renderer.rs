//! Frame rendering.
//!
//! Drives one primary ray per pixel (two in stereogram mode) over the whole
//! framebuffer. Scanlines are rendered in parallel with rayon; every pixel
//! depends only on the read-only scene and its own coordinates, so the
//! result is identical to a sequential pass.

use std::path::Path;
use std::time::Instant;

use log::{info, warn};
use rayon::prelude::*;
use ursa_core::Scene;
use ursa_math::Color;

use crate::camera::Camera;
use crate::framebuffer::Framebuffer;
use crate::output::OutputError;
use crate::shading::cast_ray;
use crate::stereo::StereoConfig;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Color returned when a ray doesn't hit anything
    pub background: Color,
    /// Eye placement and tints used when rendering a stereogram
    pub stereo: StereoConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: Color::ZERO,
            stereo: StereoConfig::default(),
        }
    }
}

/// Color of pixel (x, y).
pub fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    x: u32,
    y: u32,
    stereogram: bool,
) -> Color {
    if !stereogram {
        return cast_ray(scene, &camera.get_ray(x, y), config.background).color;
    }

    let stereo = &config.stereo;
    let red = cast_ray(
        scene,
        &camera.get_ray_from(camera.origin() + stereo.red_eye, x, y),
        config.background,
    );
    let blue = cast_ray(
        scene,
        &camera.get_ray_from(camera.origin() + stereo.blue_eye, x, y),
        config.background,
    );
    stereo.composite(red, blue)
}

/// Owns a scene and the framebuffer it is rendered into.
///
/// The framebuffer size comes from the camera and never changes.
pub struct Renderer {
    scene: Scene,
    camera: Camera,
    config: RenderConfig,
    framebuffer: Framebuffer,
}

impl Renderer {
    /// Create a renderer with the framebuffer filled with the background.
    pub fn new(scene: Scene, camera: Camera, config: RenderConfig) -> Self {
        if scene.light().is_none() {
            warn!("Scene has no light; every surface will render black");
        }

        let framebuffer = Framebuffer::new(camera.image_width, camera.image_height, config.background);
        Self {
            scene,
            camera,
            config,
            framebuffer,
        }
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Reset every pixel to the background color.
    pub fn clear(&mut self) {
        self.framebuffer.fill(self.config.background);
    }

    /// Render the whole frame, overwriting every pixel.
    pub fn render(&mut self, stereogram: bool) {
        let width = self.camera.image_width as usize;
        let height = self.camera.image_height;
        info!(
            "Rendering {}x{} ({} shapes, {})",
            width,
            height,
            self.scene.len(),
            if stereogram { "stereogram" } else { "single view" }
        );

        if width == 0 || height == 0 {
            return;
        }

        let start = Instant::now();
        let scene = &self.scene;
        let camera = &self.camera;
        let config = &self.config;

        // Minimal parallelism: one task per scanline
        self.framebuffer
            .pixels_mut()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, slot) in row.iter_mut().enumerate() {
                    *slot = render_pixel(scene, camera, config, x as u32, y as u32, stereogram);
                }
            });

        info!("Rendered in {:?}", start.elapsed());
    }

    /// Write the current framebuffer as a BMP file.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), OutputError> {
        self.framebuffer.write_bmp(path)
    }
}
