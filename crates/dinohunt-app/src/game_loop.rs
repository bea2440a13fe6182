//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside this thread, together with its renderer,
//! audio and HUD sinks, so none of them need to be `Send`. Commands arrive
//! via `mpsc` channel. Snapshots are stored in shared state for polling.

use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use dinohunt_core::collaborators::{HudRenderer, MinimapRenderer, NullRenderer};
use dinohunt_core::constants::TICK_RATE;
use dinohunt_core::input::InputState;
use dinohunt_core::state::FrameSnapshot;
use dinohunt_sim::engine::{Collaborators, SimConfig, SimulationEngine};

use crate::audio::SoundBank;
use crate::clock::{Clock, MonotonicClock};
use crate::hud::{LogHud, LogMinimap};
use crate::state::{AppError, GameLoopCommand};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// How the loop spaces its ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep so ticks land on the fixed tick rate.
    RealTime,
    /// Tick back to back. Time comes only from the clock.
    Unpaced,
}

/// Everything the loop thread needs to build its engine.
pub struct LoopSetup {
    pub sim: SimConfig,
    /// Directory holding `gunshot.mp3` and `bite.mp3`. `None` runs silent.
    pub assets_dir: Option<PathBuf>,
    pub clock: Box<dyn Clock>,
    pub pacing: Pacing,
    /// Stop on its own after this many ticks.
    pub max_ticks: Option<u64>,
    /// Log the minimap every this many ticks.
    pub minimap_every: u64,
}

impl Default for LoopSetup {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            assets_dir: None,
            clock: Box::new(MonotonicClock::new()),
            pacing: Pacing::RealTime,
            max_ticks: None,
            minimap_every: TICK_RATE as u64,
        }
    }
}

/// Summary returned when the loop exits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    pub ticks: u64,
    pub hits: u32,
    pub health: i32,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the handle to join on.
pub fn spawn_game_loop(
    setup: LoopSetup,
    latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<LoopStats>), AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("dinohunt-game-loop".into())
        .spawn(move || run_game_loop(setup, cmd_rx, &latest_snapshot))
        .map_err(AppError::SpawnLoop)?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown, channel disconnect or `max_ticks`.
pub fn run_game_loop(
    setup: LoopSetup,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
) -> LoopStats {
    let audio = match &setup.assets_dir {
        Some(dir) => SoundBank::load(dir),
        None => SoundBank::empty(),
    };
    let collaborators = Collaborators {
        renderer: Box::new(NullRenderer::default()),
        audio: Box::new(audio),
    };
    let mut engine = SimulationEngine::with_collaborators(setup.sim, collaborators);
    let mut hud = LogHud::new();
    let mut minimap = LogMinimap::new(setup.minimap_every);

    let mut input = InputState::idle();
    let mut stats = LoopStats::default();
    let mut next_tick_time = Instant::now();
    info!(pacing = ?setup.pacing, max_ticks = ?setup.max_ticks, "game loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Input(newer)) => input.merge(newer),
                Ok(GameLoopCommand::Reset) => {
                    engine.reset();
                    input = InputState::idle();
                }
                Ok(GameLoopCommand::Shutdown) => return finish(stats, "shutdown"),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return finish(stats, "disconnected"),
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick(setup.clock.now_ms(), &input);
        input.consume_pulses();
        stats = LoopStats {
            ticks: stats.ticks + 1,
            hits: snapshot.hud.hits,
            health: snapshot.hud.health,
        };

        // 3. Feed the HUD and minimap sinks
        hud.draw_hud(&snapshot.hud);
        minimap.draw_minimap(&snapshot.minimap);
        if !snapshot.events.is_empty() {
            debug!(tick = snapshot.time.tick, events = snapshot.events.len(), "tick events");
        }

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if setup.max_ticks.is_some_and(|max| stats.ticks >= max) {
            return finish(stats, "tick limit reached");
        }

        // 5. Sleep until next tick
        if setup.pacing == Pacing::RealTime {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind, reset to avoid catch-up spiral
                next_tick_time = now;
            }
        }
    }
}

fn finish(stats: LoopStats, reason: &str) -> LoopStats {
    info!(reason, ticks = stats.ticks, hits = stats.hits, health = stats.health, "game loop stopped");
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use dinohunt_core::config::GameConfig;
    use dinohunt_core::types::Ray;
    use glam::DVec3;

    fn unpaced(clock: ManualClock, max_ticks: u64) -> LoopSetup {
        LoopSetup {
            sim: SimConfig::seeded(3),
            clock: Box::new(clock),
            pacing: Pacing::Unpaced,
            max_ticks: Some(max_ticks),
            ..Default::default()
        }
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Input(InputState::idle())).unwrap();
        tx.send(GameLoopCommand::Reset).unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], GameLoopCommand::Input(_)));
        assert!(matches!(commands[1], GameLoopCommand::Reset));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_stops_at_tick_limit() {
        let (_tx, rx) = mpsc::channel::<GameLoopCommand>();
        let latest = Mutex::new(None);

        let stats = run_game_loop(unpaced(ManualClock::new(0), 120), rx, &latest);

        assert_eq!(stats.ticks, 120);
        assert_eq!(stats.health, 10);
        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.time.tick, 120);
    }

    #[test]
    fn test_shutdown_before_first_tick() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        tx.send(GameLoopCommand::Shutdown).unwrap();
        let latest = Mutex::new(None);

        let stats = run_game_loop(unpaced(ManualClock::new(0), 10), rx, &latest);

        assert_eq!(stats.ticks, 0);
        assert!(latest.lock().unwrap().is_none());
    }

    #[test]
    fn test_disconnect_stops_loop() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        drop(tx);
        let latest = Mutex::new(None);

        let stats = run_game_loop(unpaced(ManualClock::new(0), 10), rx, &latest);
        assert_eq!(stats.ticks, 0);
    }

    #[test]
    fn test_input_command_reaches_engine() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        tx.send(GameLoopCommand::Input(InputState {
            shoot: Some(Ray::new(DVec3::new(0.0, 1.6, 0.0), DVec3::Z)),
            ..Default::default()
        }))
        .unwrap();
        let latest = Mutex::new(None);

        run_game_loop(unpaced(ManualClock::new(1000), 5), rx, &latest);

        // The shot was fired at 1000 and the clock never moved.
        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.hud.reload_progress, 0.0);
    }

    #[test]
    fn test_custom_config_reaches_engine() {
        let (_tx, rx) = mpsc::channel::<GameLoopCommand>();
        let latest = Mutex::new(None);
        let game = GameConfig {
            starting_health: 3,
            ..GameConfig::default()
        };
        let setup = LoopSetup {
            sim: SimConfig {
                game,
                seed: Some(1),
            },
            ..unpaced(ManualClock::new(0), 1)
        };

        let stats = run_game_loop(setup, rx, &latest);
        assert_eq!(stats.health, 3);
    }

    #[test]
    fn test_spawned_loop_serves_app_state() {
        let state = crate::state::AppState::new();
        let clock = ManualClock::new(0);
        let setup = LoopSetup {
            sim: SimConfig::seeded(9),
            clock: Box::new(clock.clone()),
            ..Default::default()
        };
        state.start(setup).unwrap();
        assert!(state.is_running());
        assert!(matches!(
            state.start(LoopSetup::default()),
            Err(AppError::AlreadyRunning)
        ));

        clock.advance(16);
        std::thread::sleep(Duration::from_millis(100));
        state.send(GameLoopCommand::Reset).unwrap();
        std::thread::sleep(Duration::from_millis(50));

        let stats = state.stop().unwrap();
        assert!(stats.ticks > 0);
        assert!(!state.is_running());
        assert!(state.snapshot().is_some());
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
