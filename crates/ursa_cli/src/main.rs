use anyhow::{Context, Result};
use ursa_core::presets::{build_scene, PRESET_IDS};
use ursa_renderer::Renderer;

mod config;

use config::RenderFileConfig;

fn usage() -> String {
    format!(
        "usage: ursa [CONFIG.json]\n\nRenders a preset scene to a BMP file.\nPresets: {}",
        PRESET_IDS.join(", ")
    )
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = match std::env::args().nth(1) {
        Some(arg) if arg == "-h" || arg == "--help" => {
            println!("{}", usage());
            return Ok(());
        }
        Some(path) => RenderFileConfig::load(&path)
            .with_context(|| format!("Failed to load config '{path}'"))?,
        None => RenderFileConfig::default(),
    };

    log::info!("Starting Ursa: scene '{}'", config.scene);

    let scene = build_scene(&config.scene)
        .with_context(|| format!("Failed to build scene '{}'", config.scene))?;

    let mut renderer = Renderer::new(scene, config.camera(), config.render_config());
    renderer.render(config.stereogram);
    renderer
        .write(&config.output_path)
        .with_context(|| format!("Failed to write '{}'", config.output_path))?;

    println!("Saved to {}", config.output_path);
    Ok(())
}
