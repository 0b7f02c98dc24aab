//! Ursa Core - Scene description for the Ursa sphere tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Material`, `Sphere`, `Shape`, `Light`, `Scene`
//! - **Presets**: named, ready-to-render scenes built in memory
//!
//! Everything here is plain immutable data. Intersection and shading live in
//! `ursa_renderer`.
//!
//! # Example
//!
//! ```ignore
//! use ursa_core::presets::build_scene;
//!
//! let scene = build_scene("bears")?;
//! println!("{} shapes, {} materials", scene.len(), scene.material_count());
//! ```

pub mod error;
pub mod light;
pub mod material;
pub mod presets;
pub mod scene;
pub mod shape;

// Re-export commonly used types
pub use error::{Result, SceneError};
pub use light::Light;
pub use material::Material;
pub use scene::Scene;
pub use shape::{Shape, Sphere};
