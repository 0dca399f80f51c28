use log::{error, info};
use rigid2d::*;
use std::env;
use std::error::Error;
use std::fs;

mod scenes;
mod visual;

use scenes::{Launcher, Scene};

const HEADLESS_FRAMES: u32 = 600;
const FRAME_DT: f64 = 1.0 / 60.0;

#[derive(Debug, PartialEq)]
struct Options {
    visual: bool,
    scene: Scene,
    config_path: Option<String>,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options { visual: false, scene: Scene::Playground, config_path: None };
    let mut rest = args.iter().skip(1).peekable();

    if rest.peek().map(|s| s.as_str()) == Some("visual") {
        options.visual = true;
        rest.next();
    }

    while let Some(arg) = rest.next() {
        if arg == "--config" {
            let path = rest.next().ok_or("--config needs a path")?;
            options.config_path = Some(path.clone());
        } else {
            options.scene = Scene::parse(arg).ok_or_else(|| {
                format!("Unknown scene: {}. Available scenes: {}", arg, Scene::NAMES)
            })?;
        }
    }
    Ok(options)
}

fn load_config(path: &str) -> Result<WorldConfig, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let config: WorldConfig = serde_json::from_str(&text)?;
    config.validate()?;
    Ok(config)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            error!("{}", e);
            std::process::exit(2);
        }
    };

    let config = match &options.config_path {
        Some(path) => match load_config(path) {
            Ok(config) => {
                info!("Loaded config from {}", path);
                config
            }
            Err(e) => {
                error!("Could not load config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => WorldConfig::default(),
    };

    info!("Running scene: {:?}", options.scene);

    let result = if options.visual {
        visual::run_visual(options.scene, config).map_err(|e| e.to_string())
    } else {
        run_headless(options.scene, config).map_err(|e| e.to_string())
    };
    if let Err(e) = result {
        error!("Error running scene: {}", e);
        std::process::exit(1);
    }
}

fn run_headless(scene: Scene, config: WorldConfig) -> PhysicsResult<()> {
    let mut world = scene.build(config)?;
    let launcher = Launcher::default();

    info!("Simulating {} bodies", world.len());
    for frame in 0..HEADLESS_FRAMES {
        // Stand-in for pressing Space once a second.
        if scene == Scene::Playground && frame % 60 == 30 {
            world.add(launcher.spawn()?);
        }

        world.advance(FRAME_DT);
        world.retain(scenes::in_view);

        if frame % 60 == 0 {
            info!("Frame {}: {} bodies", frame, world.len());
            for (_, body) in world.bodies().filter(|(_, b)| !b.is_static()) {
                info!(
                    "  {} pos ({:.1}, {:.1}) vel ({:.1}, {:.1}){}",
                    body.name(),
                    body.position.x,
                    body.position.y,
                    body.velocity.x,
                    body.velocity.y,
                    if body.is_colliding() { " colliding" } else { "" }
                );
            }
        }
    }
    info!("Simulation finished.");
    Ok(())
}
