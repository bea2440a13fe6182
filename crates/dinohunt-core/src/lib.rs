//! Core types and definitions for the dinohunt simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, decoded input, state snapshots, events, tunables and the
//! collaborator traits the simulation calls into. It has no dependency on
//! any rendering, audio or windowing framework.

pub mod collaborators;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
