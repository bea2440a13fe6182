//! Events emitted by the simulation for audio, visual and HUD feedback.
//!
//! Events are collected during a tick and handed out in the frame snapshot.
//! Collaborators have already been called by the time a consumer sees them.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Something that happened during the last tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// An enemy entered the field.
    EnemySpawned { enemy_id: u64, position: DVec3 },
    /// A powerup entered the field.
    PowerupSpawned {
        powerup_id: u64,
        kind: PowerupKind,
        position: DVec3,
    },
    /// A shot passed the cooldown check.
    ShotFired { result: ShotResult },
    /// Bullet impact/miss visual; the renderer keeps it for `ttl_ms`.
    BulletEffect {
        result: ShotResult,
        point: DVec3,
        ttl_ms: u64,
    },
    /// An enemy was shot and removed.
    EnemyKilled { enemy_id: u64 },
    /// An attacking enemy bit the player.
    PlayerBitten {
        enemy_id: u64,
        health: i32,
        directions: Vec<AttackDirection>,
    },
    /// A sound was requested from the audio collaborator.
    Sound { sound: SoundId },
    /// The player picked up a powerup.
    PowerupCollected { powerup_id: u64, kind: PowerupKind },
    /// The slow effect started (or was refreshed) and now ends at `expires_at`.
    SlowEffectStarted { expires_at: u64 },
    /// The slow effect ran out.
    SlowEffectEnded,
    /// Health reached zero. Emitted once per run.
    GameOver,
}
