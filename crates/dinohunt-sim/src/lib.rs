//! Simulation engine for DINOHUNT.
//!
//! Owns the hecs ECS world, runs systems once per tick against a
//! caller-supplied timestamp, and produces FrameSnapshots for the frontend.

pub mod effects;
pub mod engine;
pub mod registry;
pub mod systems;
pub mod world_setup;

pub use dinohunt_core as core;
pub use engine::SimulationEngine;
