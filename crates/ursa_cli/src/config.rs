//! JSON render configuration.
//!
//! Every key is optional; a missing file means all defaults, which renders
//! the bears stereogram at 1000x1000 into `out.bmp`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use ursa_renderer::{Camera, Color, RenderConfig, Vec3};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("width and height must be positive, got {0}x{1}")]
    InvalidDimensions(u32, u32),

    #[error("outputPath must not be empty")]
    EmptyOutputPath,

    #[error("{0} must contain finite values")]
    NonFinite(&'static str),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct RenderFileConfig {
    pub width: u32,
    pub height: u32,
    pub stereogram: bool,
    pub output_path: String,
    pub scene: String,
    pub background: [f32; 3],
    pub camera_origin: [f32; 3],
}

impl Default for RenderFileConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1000,
            stereogram: true,
            output_path: "out.bmp".to_string(),
            scene: "bears".to_string(),
            background: [0.0, 0.0, 0.0],
            camera_origin: [0.0, 0.0, 0.0],
        }
    }
}

impl RenderFileConfig {
    /// Read and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Parse and validate a config from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions(self.width, self.height));
        }
        if self.output_path.trim().is_empty() {
            return Err(ConfigError::EmptyOutputPath);
        }
        if !self.background.iter().all(|v| v.is_finite()) {
            return Err(ConfigError::NonFinite("background"));
        }
        if !self.camera_origin.iter().all(|v| v.is_finite()) {
            return Err(ConfigError::NonFinite("cameraOrigin"));
        }
        Ok(())
    }

    pub fn camera(&self) -> Camera {
        Camera::new(self.width, self.height).with_origin(Vec3::from_array(self.camera_origin))
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            background: Color::from_array(self.background),
            ..Default::default()
        }
    }
}
