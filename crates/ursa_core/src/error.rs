//! Error types for scene construction.

use thiserror::Error;

/// Errors that can occur while describing a scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// Sphere radius is zero, negative or NaN.
    #[error("sphere radius must be positive, got {0}")]
    InvalidRadius(f32),

    /// One of the albedo weights is negative.
    #[error("albedo weights must be non-negative, got [{0}, {1}]")]
    NegativeAlbedo(f32, f32),

    /// Phong exponent is negative.
    #[error("specular exponent must be non-negative, got {0}")]
    NegativeExponent(f32),

    /// Light intensity is negative.
    #[error("light intensity must be non-negative, got {0}")]
    NegativeIntensity(f32),

    /// A position, color or scalar is NaN or infinite.
    #[error("{0} must be finite")]
    NonFinite(&'static str),

    /// No preset is registered under this name.
    #[error("unknown scene identifier: {0}")]
    UnknownPreset(String),
}

/// Result type for scene construction.
pub type Result<T> = std::result::Result<T, SceneError>;
