//! Snapshot system: reads the world and builds the HUD, minimap and
//! bullet-effect views for one frame.
//!
//! This system is read-only: it never modifies the world.

use hecs::World;

use dinohunt_core::components::{Enemy, EnemyState, Player, Position, Powerup};
use dinohunt_core::config::GameConfig;
use dinohunt_core::enums::ThreatColor;
use dinohunt_core::events::GameEvent;
use dinohunt_core::state::*;
use dinohunt_core::types::SimTime;

use crate::effects::EffectManager;
use crate::registry::entity_id;
use crate::systems::combat::CombatState;
use crate::systems::transient::TransientEffects;

/// Everything the snapshot reads besides the world.
pub struct SnapshotSources<'a> {
    pub time: SimTime,
    pub player: &'a Player,
    pub combat: &'a CombatState,
    pub effects: &'a EffectManager,
    pub transients: &'a TransientEffects,
    pub config: &'a GameConfig,
}

/// Build a complete FrameSnapshot from the current state.
pub fn build_snapshot(world: &World, sources: &SnapshotSources<'_>, events: Vec<GameEvent>) -> FrameSnapshot {
    let now = sources.time.now_ms;

    FrameSnapshot {
        time: sources.time,
        hud: build_hud(sources),
        minimap: build_minimap(world, sources),
        bullet_effects: sources.transients.bullet_views(now),
        events,
    }
}

/// Counters, health and the reload gauge.
pub fn build_hud(sources: &SnapshotSources<'_>) -> HudState {
    let now = sources.time.now_ms;
    HudState {
        phase: sources.combat.phase(),
        hits: sources.combat.hits,
        health: sources.player.health,
        reload_progress: sources
            .combat
            .reload_progress(now, sources.config.shoot_cooldown_ms),
        slow_active: sources.effects.is_active(),
        attack_flashes: sources.transients.flash_views(now),
    }
}

/// Player, enemy dots colored by slow state, and powerup positions.
fn build_minimap(world: &World, sources: &SnapshotSources<'_>) -> MinimapView {
    let mut enemies: Vec<EnemyDot> = world
        .query::<(&Enemy, &Position, &EnemyState)>()
        .iter()
        .map(|(id, (_enemy, pos, state))| EnemyDot {
            enemy_id: entity_id(id),
            position: pos.0,
            color: if state.slowed {
                ThreatColor::Blue
            } else {
                ThreatColor::Red
            },
            behavior: state.behavior,
        })
        .collect();
    enemies.sort_by_key(|e| e.enemy_id);

    let mut powerups: Vec<(u64, glam::DVec3)> = world
        .query::<(&Powerup, &Position)>()
        .iter()
        .map(|(id, (_powerup, pos))| (entity_id(id), pos.0))
        .collect();
    powerups.sort_by_key(|(id, _)| *id);

    MinimapView {
        field_size: sources.config.field_half_size * 2.0,
        player_position: sources.player.position,
        player_yaw: sources.player.yaw,
        enemies,
        powerups: powerups.into_iter().map(|(_, pos)| pos).collect(),
    }
}
