//! Enemy AI for dinohunt.
//!
//! Implements the pursue/attack state machine and the bearing classification
//! used for directional hit feedback. Pure functions over plain data.

pub mod direction;
pub mod fsm;

pub use dinohunt_core as core;

#[cfg(test)]
mod tests;
