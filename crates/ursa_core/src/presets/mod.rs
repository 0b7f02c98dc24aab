//! Named scenes that can be built without any input files.

mod bears;
mod single_sphere;

use log::debug;

use crate::error::{Result, SceneError};
use crate::scene::Scene;

/// Identifiers of every registered preset.
pub const PRESET_IDS: [&str; 2] = [bears::SCENE_ID, single_sphere::SCENE_ID];

/// Build the preset registered under `scene_id` (case-insensitive).
pub fn build_scene(scene_id: &str) -> Result<Scene> {
    let scene = if scene_id.eq_ignore_ascii_case(bears::SCENE_ID) {
        bears::build()?
    } else if scene_id.eq_ignore_ascii_case(single_sphere::SCENE_ID) {
        single_sphere::build()?
    } else {
        return Err(SceneError::UnknownPreset(scene_id.to_string()));
    };

    debug!(
        "Built preset '{}': {} shapes, {} materials",
        scene_id,
        scene.len(),
        scene.material_count()
    );
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_builds() {
        for id in PRESET_IDS {
            let scene = build_scene(id).unwrap();
            assert!(!scene.is_empty(), "{id} has no shapes");
            assert!(scene.light().is_some(), "{id} has no light");
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(build_scene("BEARS").is_ok());
    }

    #[test]
    fn test_unknown_preset() {
        assert_eq!(
            build_scene("teapot").unwrap_err(),
            SceneError::UnknownPreset("teapot".to_string())
        );
    }
}
