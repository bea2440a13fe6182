//! ECS components for hecs entities, plus the player record.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// World position of an entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec3);

/// Orientation about +y (radians, 0 faces +z).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Facing {
    pub yaw: f64,
}

/// Marks an entity as an enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Per-enemy behavior and timing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyState {
    pub behavior: EnemyBehavior,
    /// Timestamp of this enemy's last bite. `None` until the first one,
    /// so a freshly arrived enemy bites immediately.
    pub last_attack_at: Option<u64>,
    /// Moves at slow speed and renders with the slowed tint.
    /// Set from the global effect at spawn, then only changed by the effect manager.
    pub slowed: bool,
}

/// A collectible powerup. Its position never changes after spawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Powerup {
    pub kind: PowerupKind,
}

/// Handle of the renderer visual that draws this entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visual(pub VisualId);

/// Opaque renderer handle returned by [`crate::collaborators::Renderer::add_visual`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VisualId(pub u64);

/// The player. Created once per run, never despawned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Ground position; `y` stays 0.
    pub position: DVec3,
    /// Body yaw (radians, 0 faces +z).
    pub yaw: f64,
    /// Camera pitch (radians, clamped to ±90°).
    pub pitch: f64,
    /// Decrements by one per bite and may go negative.
    pub health: i32,
}

impl Player {
    pub fn new(health: i32) -> Self {
        Self {
            position: DVec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            health,
        }
    }
}
