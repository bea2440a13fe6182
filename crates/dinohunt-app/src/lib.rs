//! DINOHUNT headless runner.
//!
//! Wires the simulation engine to a fixed-rate game loop thread, a
//! monotonic clock, a sound bank and logging HUD/minimap sinks.

pub mod audio;
pub mod clock;
pub mod game_loop;
pub mod hud;
pub mod state;

pub use dinohunt_core as core;
