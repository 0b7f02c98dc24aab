//! End-to-end rendering properties.

use std::sync::Arc;

use ursa_core::presets::build_scene;
use ursa_renderer::{
    color_to_rgb, Camera, Color, Light, Material, RenderConfig, Renderer, Scene, Sphere, Vec3,
};

const BACKGROUND: Color = Color::new(5.0, 6.0, 7.0);

fn config() -> RenderConfig {
    RenderConfig {
        background: BACKGROUND,
        ..Default::default()
    }
}

fn reference_scene() -> Scene {
    let mat = Arc::new(Material::new(Color::new(200.0, 100.0, 50.0), [0.6, 0.3], 10.0).unwrap());
    Scene::new()
        .with_shape(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, mat).unwrap())
        .with_light(Light::new(Vec3::ZERO, 1.0).unwrap())
}

fn assert_close(actual: Color, expected: Color) {
    assert!(
        (actual - expected).length() < 1e-3,
        "expected {expected:?}, got {actual:?}"
    );
}

#[test]
fn two_by_two_frame_sees_only_background() {
    // Every 2x2 pixel ray passes the unit sphere at d^2 = 25/3 > 1
    let mut renderer = Renderer::new(reference_scene(), Camera::new(2, 2), config());
    renderer.render(false);

    assert!(renderer.framebuffer().pixels().iter().all(|c| *c == BACKGROUND));
}

#[test]
fn three_by_three_frame_matches_reference() {
    let mut renderer = Renderer::new(reference_scene(), Camera::new(3, 3), config());
    renderer.render(false);
    let fb = renderer.framebuffer();

    for y in 0..3 {
        for x in 0..3 {
            if (x, y) == (1, 1) {
                // Head-on hit lit from the eye: 0.6 * diffuse + 0.3 * white
                assert_close(fb.get(x, y), Color::new(196.5, 136.5, 106.5));
            } else {
                assert_eq!(fb.get(x, y), BACKGROUND, "pixel ({x}, {y})");
            }
        }
    }
}

#[test]
fn render_is_deterministic() {
    let _ = env_logger::builder().is_test(true).try_init();
    let scene = build_scene("bears").unwrap();
    let mut renderer = Renderer::new(scene, Camera::new(48, 40), config());

    renderer.render(true);
    let first = renderer.framebuffer().clone();
    renderer.render(true);
    assert_eq!(renderer.framebuffer(), &first);

    renderer.render(false);
    let mono = renderer.framebuffer().clone();
    renderer.render(false);
    assert_eq!(renderer.framebuffer(), &mono);
    assert_ne!(mono, first);
}

#[test]
fn stereogram_background_is_doubled() {
    let scene = Scene::new()
        .with_shape(
            Sphere::new(
                Vec3::new(0.0, 0.0, 30.0),
                1.0,
                Arc::new(Material::new(Color::ZERO, [1.0, 1.0], 10.0).unwrap()),
            )
            .unwrap(),
        )
        .with_light(Light::new(Vec3::ZERO, 1.0).unwrap());

    let mut renderer = Renderer::new(scene, Camera::new(4, 4), config());
    renderer.render(true);

    assert!(renderer
        .framebuffer()
        .pixels()
        .iter()
        .all(|c| *c == BACKGROUND * 2.0));
}

#[test]
fn stereogram_red_eye_only_hit() {
    // Small sphere in front of the red eye at +0.4; the blue eye at -0.4 misses it
    let mat = Arc::new(Material::new(Color::new(200.0, 100.0, 50.0), [0.6, 0.3], 10.0).unwrap());
    let scene = Scene::new()
        .with_shape(Sphere::new(Vec3::new(0.4, 0.0, -5.0), 0.3, mat).unwrap())
        .with_light(Light::new(Vec3::new(0.4, 0.0, 0.0), 1.0).unwrap());

    let mut renderer = Renderer::new(scene, Camera::new(1, 1), config());
    renderer.render(true);

    let red = Color::new(196.5, 136.5, 106.5) * 0.57 + Color::new(100.0, 0.0, 0.0);
    assert_close(renderer.framebuffer().get(0, 0), red + BACKGROUND);
}

#[test]
fn bitmap_round_trip() {
    let scene = build_scene("bears").unwrap();
    let mut renderer = Renderer::new(scene, Camera::new(32, 24), config());
    renderer.render(true);

    let path = std::env::temp_dir().join(format!("ursa_round_trip_{}.bmp", std::process::id()));
    renderer.write(&path).unwrap();

    let img = image::open(&path).unwrap().to_rgb8();
    std::fs::remove_file(&path).ok();

    assert_eq!(img.dimensions(), (32, 24));
    let fb = renderer.framebuffer();
    for (x, y, pixel) in img.enumerate_pixels() {
        assert_eq!(pixel.0, color_to_rgb(fb.get(x, 23 - y)), "pixel ({x}, {y})");
    }
}
