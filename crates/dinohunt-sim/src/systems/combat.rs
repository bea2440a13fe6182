//! Combat system: shooting, melee bites and player health.

use glam::DVec3;
use hecs::Entity;
use tracing::{debug, info, warn};

use dinohunt_core::collaborators::{AudioPlayer, Renderer};
use dinohunt_core::components::{Enemy, EnemyState, Player, Position};
use dinohunt_core::config::GameConfig;
use dinohunt_core::constants::ENEMY_HALF_EXTENTS;
use dinohunt_core::enums::{EnemyBehavior, GamePhase, ShotResult, SoundId, VisualKind};
use dinohunt_core::events::GameEvent;
use dinohunt_core::types::{facing_from_yaw, Ray, Transform};

use dinohunt_ai::direction::classify_attack_direction;

use crate::effects::EffectManager;
use crate::registry::{entity_id, EntityRegistry};
use crate::systems::transient::{AttackFlash, BulletEffect, TransientEffects};

/// Run-wide combat counters.
#[derive(Debug, Clone, Default)]
pub struct CombatState {
    /// `None` until the first accepted shot.
    pub last_shot_at: Option<u64>,
    pub hits: u32,
    /// Latched the first time health drops to zero.
    pub game_over_signaled: bool,
}

impl CombatState {
    pub fn phase(&self) -> GamePhase {
        if self.game_over_signaled {
            GamePhase::GameOver
        } else {
            GamePhase::Running
        }
    }

    /// Whether a shot at `now` passes the cooldown.
    pub fn can_fire(&self, now: u64, cooldown_ms: u64) -> bool {
        match self.last_shot_at {
            None => true,
            Some(last) => now.saturating_sub(last) >= cooldown_ms,
        }
    }

    /// Elapsed fraction of the cooldown in [0, 1]; full before the first shot.
    pub fn reload_progress(&self, now: u64, cooldown_ms: u64) -> f64 {
        match self.last_shot_at {
            None => 1.0,
            Some(_) if cooldown_ms == 0 => 1.0,
            Some(last) => (now.saturating_sub(last) as f64 / cooldown_ms as f64).clamp(0.0, 1.0),
        }
    }
}

/// What a call to [`fire_shot`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShotOutcome {
    /// Still cooling down. Nothing changed.
    Rejected,
    Hit { enemy: Entity, point: DVec3 },
    Miss { point: DVec3 },
}

/// Nearest enemy the ray passes through, with the distance along the ray.
pub fn nearest_hit(registry: &EntityRegistry, ray: &Ray) -> Option<(Entity, f64)> {
    let half_extents = DVec3::from_array(ENEMY_HALF_EXTENTS);
    registry
        .list_enemies()
        .into_iter()
        .filter_map(|enemy| {
            ray.intersect_box(enemy.position, enemy.yaw, half_extents)
                .map(|t| (enemy.id, t))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

/// Fire one shot along `ray` at `now`.
///
/// A rejected shot leaves the cooldown untouched and performs no hit test.
/// An accepted shot plays the gunshot, kills the nearest enemy on the ray
/// (dropping its visual and slow marker) or records a miss point
/// `miss_effect_distance` along the ray, and leaves a bullet effect behind.
#[allow(clippy::too_many_arguments)]
pub fn fire_shot(
    now: u64,
    ray: &Ray,
    combat: &mut CombatState,
    registry: &mut EntityRegistry,
    effects: &mut EffectManager,
    transients: &mut TransientEffects,
    renderer: &mut dyn Renderer,
    audio: &mut dyn AudioPlayer,
    events: &mut Vec<GameEvent>,
    config: &GameConfig,
) -> ShotOutcome {
    if !combat.can_fire(now, config.shoot_cooldown_ms) {
        return ShotOutcome::Rejected;
    }
    combat.last_shot_at = Some(now);

    audio.play(SoundId::Gunshot);
    events.push(GameEvent::Sound {
        sound: SoundId::Gunshot,
    });

    let (outcome, result, point) = match nearest_hit(registry, ray) {
        Some((enemy, t)) => {
            let point = ray.at(t);
            if let Some(visual) = registry.remove_enemy(enemy) {
                renderer.remove_visual(visual);
            }
            effects.on_enemy_removed(enemy, renderer);
            combat.hits += 1;
            debug!(enemy = entity_id(enemy), ?point, hits = combat.hits, "enemy hit");
            events.push(GameEvent::EnemyKilled {
                enemy_id: entity_id(enemy),
            });
            (ShotOutcome::Hit { enemy, point }, ShotResult::Hit, point)
        }
        None => {
            let point = ray.at(config.miss_effect_distance);
            debug!(?point, "shot missed");
            (ShotOutcome::Miss { point }, ShotResult::Miss, point)
        }
    };

    let visual = renderer.add_visual(VisualKind::BulletEffect(result), Transform::new(point, 0.0));
    transients.push_bullet(BulletEffect {
        result,
        point,
        visual,
        spawned_at: now,
        ttl_ms: config.bullet_effect_ttl_ms,
    });
    events.push(GameEvent::ShotFired { result });
    events.push(GameEvent::BulletEffect {
        result,
        point,
        ttl_ms: config.bullet_effect_ttl_ms,
    });

    outcome
}

/// Let every attacking enemy whose interval has elapsed bite the player.
///
/// Each bite costs one health, plays the bite sound and flashes the HUD
/// edges for the enemy's bearing. The game-over signal fires once, on the
/// bite that takes health to zero; ticking carries on afterwards.
#[allow(clippy::too_many_arguments)]
pub fn resolve_melee(
    now: u64,
    player: &mut Player,
    combat: &mut CombatState,
    registry: &mut EntityRegistry,
    transients: &mut TransientEffects,
    audio: &mut dyn AudioPlayer,
    events: &mut Vec<GameEvent>,
    config: &GameConfig,
) {
    let forward = facing_from_yaw(player.yaw);

    for (entity, (_enemy, pos, state)) in registry
        .world_mut()
        .query_mut::<(&Enemy, &Position, &mut EnemyState)>()
    {
        if state.behavior != EnemyBehavior::Attacking {
            continue;
        }
        let due = match state.last_attack_at {
            None => true,
            Some(last) => now.saturating_sub(last) >= config.melee_attack_interval_ms,
        };
        if !due {
            continue;
        }

        state.last_attack_at = Some(now);
        player.health -= 1;
        audio.play(SoundId::Bite);
        events.push(GameEvent::Sound {
            sound: SoundId::Bite,
        });

        let to_enemy = DVec3::new(pos.0.x - player.position.x, 0.0, pos.0.z - player.position.z);
        let directions = classify_attack_direction(forward, to_enemy);
        for &direction in &directions {
            transients.push_flash(AttackFlash {
                direction,
                started_at: now,
                fade_ms: config.attack_flash_fade_ms,
            });
        }

        info!(enemy = entity_id(entity), health = player.health, ?directions, "player bitten");
        events.push(GameEvent::PlayerBitten {
            enemy_id: entity_id(entity),
            health: player.health,
            directions,
        });
    }

    if player.health <= 0 && !combat.game_over_signaled {
        combat.game_over_signaled = true;
        warn!(hits = combat.hits, "player health depleted, game over");
        events.push(GameEvent::GameOver);
    }
}
