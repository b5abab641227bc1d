//! Headless dot demo
//!
//! Loads a level, drives the dot with a scripted key sequence and logs what a
//! renderer would draw each frame. Usage: `dot_demo [config] [map]`.

use std::path::PathBuf;

use thiserror::Error;
use tile_engine::config::{Config, ConfigError, LevelConfig};
use tile_engine::foundation::logging;
use tile_engine::foundation::math::Vec2;
use tile_engine::input::{InputEvent, KeyCode};
use tile_engine::particles::{ParticleEmitter, ParticleSheet};
use tile_engine::physics::{Aabb, MovingBody};
use tile_engine::render::{self, SpriteAnimation, TileSheet};
use tile_engine::tiles::MapError;
use tile_engine::Level;

/// Frames simulated before exiting
const FRAMES: u32 = 120;

/// Where the dot starts
const SPAWN: (f32, f32) = (100.0, 100.0);

#[derive(Error, Debug)]
enum DemoError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("map error: {0}")]
    Map(#[from] MapError),
}

/// One key edge at a given frame: `(frame, key, pressed, repeat)`
type ScriptedKey = (u32, KeyCode, bool, bool);

/// Walk right into the wall, slide down along it, then turn back up-left
const SCRIPT: &[ScriptedKey] = &[
    (0, KeyCode::Right, true, false),
    (5, KeyCode::Right, true, true),
    (10, KeyCode::Down, true, false),
    (60, KeyCode::Right, false, false),
    (60, KeyCode::Left, true, false),
    (80, KeyCode::Down, false, false),
    (80, KeyCode::Up, true, false),
    (100, KeyCode::Space, true, false),
    (110, KeyCode::Left, false, false),
    (110, KeyCode::Up, false, false),
];

fn run(config_path: PathBuf, map_override: Option<PathBuf>) -> Result<(), DemoError> {
    let mut config = LevelConfig::load_or_default(&config_path)?;
    if let Some(map) = map_override {
        config.map = map;
    }

    let mut level = Level::load_from_config(&config)?;
    let body = MovingBody::from_config(&config.dot, SPAWN.0, SPAWN.1);
    let extent = body.extent();
    let dot_clip = Aabb::new(0.0, 0.0, extent.w, extent.h);
    let dot = level.spawn(body);

    let (screen_w, screen_h) = (config.screen_width as f32, config.screen_height as f32);
    let sheet = TileSheet::default();
    let particle_sheet = ParticleSheet::default();
    let mut emitter = ParticleEmitter::new(Vec2::new(SPAWN.0, SPAWN.1));
    let mut walker = SpriteAnimation::walking();

    for frame in 0..FRAMES {
        for &(_, key, pressed, repeat) in SCRIPT.iter().filter(|(at, ..)| *at == frame) {
            let Some(event) = InputEvent::from_key(key, pressed, repeat) else {
                log::debug!("Frame {frame}: ignored {key:?}");
                continue;
            };
            if let Some(body) = level.body_mut(dot) {
                body.handle_input(event);
            }
        }

        level.step();

        let Some(body) = level.body(dot) else {
            break;
        };
        let Some(camera) = level.camera_for(dot, screen_w, screen_h) else {
            break;
        };
        emitter.update(body.position());
        walker.advance();

        let tiles = render::tile_draws(level.grid(), &sheet, &camera);
        let sparkles = emitter.draws(&particle_sheet, &camera);
        let dot_draw = render::body_draw(body, dot_clip, &camera);

        if frame % 10 == 0 {
            log::info!(
                "Frame {frame}: dot at ({}, {}), camera ({}, {}), {} tiles, {} sparkles, dot drawn at ({}, {}), walker frame {}",
                body.position().x,
                body.position().y,
                camera.viewport().x,
                camera.viewport().y,
                tiles.len(),
                sparkles.len(),
                dot_draw.destination.x,
                dot_draw.destination.y,
                walker.frame(),
            );
        }
    }

    if let Some(body) = level.despawn(dot) {
        log::info!("Dot finished at ({}, {})", body.position().x, body.position().y);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(logging::LevelFilter::Info);

    log::info!("Starting dot demo");

    let mut args = std::env::args().skip(1);
    let config_path = args.next().map_or_else(|| PathBuf::from("assets/level.toml"), PathBuf::from);
    let map_override = args.next().map(PathBuf::from);

    if let Err(e) = run(config_path, map_override) {
        log::error!("Dot demo failed: {e}");
        return Err(e.into());
    }

    log::info!("Dot demo finished");
    Ok(())
}
