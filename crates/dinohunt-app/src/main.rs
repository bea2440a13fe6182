//! dinohunt: headless runner for the dinosaur arena simulation.
//!
//! Usage:
//!   dinohunt --seconds 30 --config game.json --assets assets/ --seed 7
//!
//! Logging honours `RUST_LOG`; the default is `dinohunt=info`.

use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

use glam::DVec3;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use dinohunt_app::game_loop::LoopSetup;
use dinohunt_app::state::{AppError, AppState, GameLoopCommand};
use dinohunt_core::config::GameConfig;
use dinohunt_core::input::{InputState, MovementIntents};
use dinohunt_core::state::FrameSnapshot;
use dinohunt_core::types::{facing_from_yaw, Ray};
use dinohunt_sim::engine::SimConfig;

/// How often the autopilot sends fresh input.
const AUTOPILOT_PERIOD: Duration = Duration::from_millis(50);

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "help" || a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    if let Err(err) = run(&args[1..]) {
        error!(error = %err, "dinohunt failed");
        if matches!(err, AppError::Args(_)) {
            print_usage();
        }
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dinohunt=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_thread_names(true)
        .init();
}

fn print_usage() {
    eprintln!(
        "dinohunt: headless dinosaur arena simulation\n\
         \n\
           --seconds <N>      How long to run (default: 10)\n\
           --config <path>    GameConfig JSON; missing fields keep their defaults\n\
           --assets <dir>     Directory with gunshot.mp3 and bite.mp3 (optional)\n\
           --seed <N>         RNG seed (default: random)\n\
         \n\
         Example:\n\
         \n\
           RUST_LOG=dinohunt=debug dinohunt --seconds 30 --seed 7\n"
    );
}

#[derive(Debug, Clone, PartialEq)]
struct Options {
    seconds: f64,
    config: Option<PathBuf>,
    assets: Option<PathBuf>,
    seed: Option<u64>,
}

fn parse_options(args: &[String]) -> Result<Options, AppError> {
    let mut options = Options {
        seconds: 10.0,
        config: None,
        assets: None,
        seed: None,
    };

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = args
            .get(i + 1)
            .ok_or_else(|| AppError::Args(format!("{flag} needs a value")))?;
        match flag {
            "--seconds" => {
                options.seconds = value
                    .parse::<f64>()
                    .ok()
                    .filter(|s| s.is_finite() && *s > 0.0)
                    .ok_or_else(|| AppError::Args(format!("bad --seconds value: {value}")))?;
            }
            "--config" => options.config = Some(PathBuf::from(value)),
            "--assets" => options.assets = Some(PathBuf::from(value)),
            "--seed" => {
                options.seed = Some(
                    value
                        .parse()
                        .map_err(|_| AppError::Args(format!("bad --seed value: {value}")))?,
                );
            }
            other => return Err(AppError::Args(format!("unknown option: {other}"))),
        }
        i += 2;
    }

    Ok(options)
}

fn run(args: &[String]) -> Result<(), AppError> {
    let options = parse_options(args)?;

    let game = match &options.config {
        Some(path) => {
            let game = GameConfig::load(path)?;
            info!(path = %path.display(), "config loaded");
            game
        }
        None => GameConfig::default(),
    };
    game.validate()?;

    let mut autopilot = Autopilot::new(game.player_eye_height);
    let state = AppState::new();
    state.start(LoopSetup {
        sim: SimConfig {
            game,
            seed: options.seed,
        },
        assets_dir: options.assets.clone(),
        ..Default::default()
    })?;

    let run_for = Duration::from_secs_f64(options.seconds);
    let started = Instant::now();
    while started.elapsed() < run_for {
        let snapshot = state.snapshot();
        let input = autopilot.next_input(started.elapsed(), snapshot.as_ref());
        state.send(GameLoopCommand::Input(input))?;
        std::thread::sleep(AUTOPILOT_PERIOD);
    }

    let stats = state.stop()?;
    info!(ticks = stats.ticks, hits = stats.hits, health = stats.health, "run finished");

    if let Some(snapshot) = state.snapshot() {
        match serde_json::to_string_pretty(&snapshot.hud) {
            Ok(json) => println!("{json}"),
            Err(err) => warn!(error = %err, "could not serialize final HUD"),
        }
    }
    Ok(())
}

/// Scripted input: keep turning, strafe back and forth, and fire along the
/// current facing every half second.
#[derive(Debug)]
struct Autopilot {
    eye_height: f64,
    last_shot: Option<Duration>,
}

impl Autopilot {
    const FIRE_EVERY: Duration = Duration::from_millis(500);
    const STRAFE_SWITCH_SECS: u64 = 2;

    fn new(eye_height: f64) -> Self {
        Self {
            eye_height,
            last_shot: None,
        }
    }

    fn next_input(&mut self, elapsed: Duration, snapshot: Option<&FrameSnapshot>) -> InputState {
        let strafe_right = (elapsed.as_secs() / Self::STRAFE_SWITCH_SECS) % 2 == 0;
        let movement = MovementIntents {
            rotate_left: true,
            strafe_left: !strafe_right,
            strafe_right,
            ..Default::default()
        };

        let due = self
            .last_shot
            .map_or(true, |last| elapsed.saturating_sub(last) >= Self::FIRE_EVERY);
        let shoot = match snapshot {
            Some(snapshot) if due => {
                self.last_shot = Some(elapsed);
                let eye = snapshot.minimap.player_position + DVec3::new(0.0, self.eye_height, 0.0);
                Some(Ray::new(eye, facing_from_yaw(snapshot.minimap.player_yaw)))
            }
            _ => None,
        };

        InputState {
            movement,
            pointer_motions: Vec::new(),
            shoot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_defaults() {
        let options = parse_options(&[]).unwrap();
        assert_eq!(options.seconds, 10.0);
        assert!(options.config.is_none());
        assert!(options.assets.is_none());
        assert!(options.seed.is_none());
    }

    #[test]
    fn test_parse_all_flags() {
        let options = parse_options(&args(&[
            "--seconds", "2.5", "--config", "game.json", "--assets", "assets", "--seed", "42",
        ]))
        .unwrap();
        assert_eq!(options.seconds, 2.5);
        assert_eq!(options.config, Some(PathBuf::from("game.json")));
        assert_eq!(options.assets, Some(PathBuf::from("assets")));
        assert_eq!(options.seed, Some(42));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            parse_options(&args(&["--seconds"])),
            Err(AppError::Args(_))
        ));
        assert!(matches!(
            parse_options(&args(&["--seconds", "-1"])),
            Err(AppError::Args(_))
        ));
        assert!(matches!(
            parse_options(&args(&["--seed", "abc"])),
            Err(AppError::Args(_))
        ));
        assert!(matches!(
            parse_options(&args(&["--speed", "3"])),
            Err(AppError::Args(_))
        ));
    }

    #[test]
    fn test_autopilot_fires_on_interval() {
        let mut autopilot = Autopilot::new(GameConfig::default().player_eye_height);
        let snapshot = FrameSnapshot::default();

        assert!(autopilot.next_input(Duration::ZERO, None).shoot.is_none());
        assert!(autopilot
            .next_input(Duration::from_millis(100), Some(&snapshot))
            .shoot
            .is_some());
        assert!(autopilot
            .next_input(Duration::from_millis(400), Some(&snapshot))
            .shoot
            .is_none());
        let input = autopilot.next_input(Duration::from_millis(600), Some(&snapshot));
        let ray = input.shoot.unwrap();
        assert_eq!(ray.origin, DVec3::new(0.0, 1.6, 0.0));
        assert_eq!(ray.direction, DVec3::Z);
        assert!(input.movement.rotate_left);
    }

    #[test]
    fn test_autopilot_fires_from_configured_eye_height() {
        let mut autopilot = Autopilot::new(2.5);
        let mut snapshot = FrameSnapshot::default();
        snapshot.minimap.player_position = DVec3::new(3.0, 0.0, -4.0);

        let ray = autopilot
            .next_input(Duration::from_millis(100), Some(&snapshot))
            .shoot
            .unwrap();
        assert_eq!(ray.origin, DVec3::new(3.0, 2.5, -4.0));
    }
}
