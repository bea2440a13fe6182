//! Systems that operate on the simulation state each tick.
//!
//! Systems are free functions over borrowed state. Run-wide state that is
//! not per-entity (cooldowns, timers, the slow effect) lives in small
//! structs owned by the engine and is passed in explicitly.

pub mod combat;
pub mod movement;
pub mod pickup;
pub mod render_sync;
pub mod snapshot;
pub mod spawner;
pub mod transient;
