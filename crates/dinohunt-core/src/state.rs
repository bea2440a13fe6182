//! Frame snapshot: the complete visible state handed out after each tick.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete read-only state produced by one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub hud: HudState,
    pub minimap: MinimapView,
    /// Bullet effects still on screen.
    pub bullet_effects: Vec<BulletEffectView>,
    pub events: Vec<GameEvent>,
}

/// HUD counters, recomputed every tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudState {
    pub phase: GamePhase,
    pub hits: u32,
    pub health: i32,
    /// Elapsed fraction of the shot cooldown, in [0, 1]. Drives the radial gauge.
    pub reload_progress: f64,
    pub slow_active: bool,
    /// Directional flashes still fading out.
    pub attack_flashes: Vec<AttackFlashView>,
}

/// One fading edge indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackFlashView {
    pub direction: AttackDirection,
    /// 1.0 when the bite lands, linearly down to 0.0 at the end of the fade.
    pub opacity: f64,
}

/// Positions for the minimap overlay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MinimapView {
    /// Full field edge length, for scaling world units to map pixels.
    pub field_size: f64,
    pub player_position: DVec3,
    pub player_yaw: f64,
    pub enemies: Vec<EnemyDot>,
    pub powerups: Vec<DVec3>,
}

/// One enemy on the minimap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyDot {
    pub enemy_id: u64,
    pub position: DVec3,
    pub color: ThreatColor,
    pub behavior: EnemyBehavior,
}

/// A bullet effect that has not yet expired.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulletEffectView {
    pub result: ShotResult,
    pub point: DVec3,
    pub remaining_ms: u64,
}
