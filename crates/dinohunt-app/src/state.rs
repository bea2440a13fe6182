//! Application state shared between the front end and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use thiserror::Error;

use dinohunt_core::config::ConfigError;
use dinohunt_core::input::InputState;
use dinohunt_core::state::FrameSnapshot;

use crate::game_loop::{self, LoopSetup, LoopStats};

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Latest decoded input; folded into the input for the next tick.
    Input(InputState),
    /// Start a fresh run.
    Reset,
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to spawn game loop thread: {0}")]
    SpawnLoop(#[source] std::io::Error),
    #[error("simulation already running")]
    AlreadyRunning,
    #[error("simulation not started")]
    NotRunning,
    #[error("game loop is no longer receiving commands")]
    LoopGone,
    #[error("game loop thread panicked")]
    LoopPanicked,
    #[error("invalid argument: {0}")]
    Args(String),
}

/// Shared application state.
///
/// - `mpsc::Sender` lives in a `Mutex` so the state is `Sync`
/// - `Option` covers the time before `start` and after `stop`
/// - the latest snapshot is `Arc`-shared with the game loop thread
#[derive(Default)]
pub struct AppState {
    command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    loop_handle: Mutex<Option<JoinHandle<LoopStats>>>,
    latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop. Fails if one is already running.
    pub fn start(&self, setup: LoopSetup) -> Result<(), AppError> {
        let mut tx_lock = self.command_tx.lock().map_err(|_| AppError::LoopPanicked)?;
        if tx_lock.is_some() {
            return Err(AppError::AlreadyRunning);
        }

        let (cmd_tx, handle) = game_loop::spawn_game_loop(setup, Arc::clone(&self.latest_snapshot))?;
        *tx_lock = Some(cmd_tx);
        if let Ok(mut handle_lock) = self.loop_handle.lock() {
            *handle_lock = Some(handle);
        }
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.command_tx
            .lock()
            .map(|tx| tx.is_some())
            .unwrap_or(false)
    }

    /// Forward a command to the game loop.
    pub fn send(&self, command: GameLoopCommand) -> Result<(), AppError> {
        let tx_lock = self.command_tx.lock().map_err(|_| AppError::LoopPanicked)?;
        match tx_lock.as_ref() {
            Some(tx) => tx.send(command).map_err(|_| AppError::LoopGone),
            None => Err(AppError::NotRunning),
        }
    }

    /// Latest snapshot, if the loop has produced one.
    pub fn snapshot(&self) -> Option<FrameSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    /// Ask the loop to shut down and wait for it.
    pub fn stop(&self) -> Result<LoopStats, AppError> {
        let tx = self
            .command_tx
            .lock()
            .map_err(|_| AppError::LoopPanicked)?
            .take()
            .ok_or(AppError::NotRunning)?;
        // The loop may already have exited on its own.
        let _ = tx.send(GameLoopCommand::Shutdown);

        let handle = self
            .loop_handle
            .lock()
            .map_err(|_| AppError::LoopPanicked)?
            .take()
            .ok_or(AppError::NotRunning)?;
        handle.join().map_err(|_| AppError::LoopPanicked)
    }
}
