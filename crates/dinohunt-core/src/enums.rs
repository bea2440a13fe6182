//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy behavior state. Exactly one holds at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyBehavior {
    /// Closing in on the player.
    #[default]
    Pursuing,
    /// Within attack range; stationary and biting on the melee interval.
    Attacking,
}

/// Collectible powerup kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerupKind {
    /// Slows every live enemy for the slow-effect duration.
    #[default]
    Slow,
}

/// Global slow-effect state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectPhase {
    #[default]
    Inactive,
    Active,
}

/// HUD edge indicator flashed when the player is bitten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AttackDirection {
    Top,
    Left,
    Right,
    Bottom,
}

/// Outcome of an accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShotResult {
    Hit,
    Miss,
}

/// Sounds the simulation asks the audio collaborator to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundId {
    Gunshot,
    Bite,
}

impl SoundId {
    pub const ALL: [SoundId; 2] = [SoundId::Gunshot, SoundId::Bite];

    /// Asset file name the sound is loaded from.
    pub fn file_name(self) -> &'static str {
        match self {
            SoundId::Gunshot => "gunshot.mp3",
            SoundId::Bite => "bite.mp3",
        }
    }
}

/// What a renderer visual represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisualKind {
    /// 1×2×1 enemy body.
    Enemy,
    /// Floating powerup sphere.
    Powerup(PowerupKind),
    /// Particle cloud attached to a slowed enemy.
    SlowMarker,
    /// Bullet impact or miss puff.
    BulletEffect(ShotResult),
}

/// Enemy body tint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tint {
    /// Reddish brown.
    #[default]
    Normal,
    /// Blue while slowed.
    Slowed,
}

/// Minimap dot color for an enemy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreatColor {
    #[default]
    Red,
    Blue,
}

/// Top-level run state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Running,
    /// Health reached zero. Ticking continues; this only latches the signal.
    GameOver,
}
