//! Scene container.
//!
//! A scene is an ordered list of shapes plus at most one point light. It is
//! assembled before rendering and only read afterwards.

use std::collections::HashSet;
use std::sync::Arc;

use crate::light::Light;
use crate::shape::Shape;

/// Shapes and the single optional light.
///
/// Shape order only matters for tie-breaking between hits at exactly the
/// same distance, and callers must not rely on it.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
    light: Option<Light>,
}

impl Scene {
    /// Create an empty scene with no light.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape.
    pub fn add(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    /// Builder-style [`Scene::add`].
    pub fn with_shape(mut self, shape: impl Into<Shape>) -> Self {
        self.add(shape);
        self
    }

    /// Replace the light.
    pub fn set_light(&mut self, light: Light) {
        self.light = Some(light);
    }

    /// Builder-style [`Scene::set_light`].
    pub fn with_light(mut self, light: Light) -> Self {
        self.set_light(light);
        self
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn light(&self) -> Option<&Light> {
        self.light.as_ref()
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Number of distinct material instances referenced by the shapes.
    pub fn material_count(&self) -> usize {
        self.shapes
            .iter()
            .map(|shape| Arc::as_ptr(shape.material()))
            .collect::<HashSet<_>>()
            .len()
    }
}
