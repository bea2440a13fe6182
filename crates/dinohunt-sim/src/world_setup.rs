//! Entity spawn factories.
//!
//! Creates enemies and powerups with their component bundles and scene
//! visuals, placed relative to the player.

use glam::DVec3;
use hecs::Entity;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use dinohunt_core::collaborators::Renderer;
use dinohunt_core::components::Player;
use dinohunt_core::config::GameConfig;
use dinohunt_core::constants::{ENEMY_CENTER_HEIGHT, POWERUP_HEIGHT};
use dinohunt_core::enums::{PowerupKind, Tint, VisualKind};
use dinohunt_core::types::{yaw_towards, Transform};

use crate::effects::EffectManager;
use crate::registry::EntityRegistry;

/// Spawn an enemy in the arc in front of the player.
///
/// Bearing is the player's yaw ± the configured half arc, distance is
/// uniform in the spawn radius band, and the result is clamped to the field.
pub fn spawn_enemy(
    registry: &mut EntityRegistry,
    effects: &mut EffectManager,
    renderer: &mut dyn Renderer,
    rng: &mut ChaCha8Rng,
    player: &Player,
    config: &GameConfig,
) -> Entity {
    let arc = config.enemy_spawn_half_arc;
    let angle = player.yaw + rng.gen_range(-arc..=arc);
    let radius = rng.gen_range(config.enemy_spawn_radius_min..=config.enemy_spawn_radius_max);

    let position = DVec3::new(
        player.position.x + radius * angle.sin(),
        ENEMY_CENTER_HEIGHT,
        player.position.z + radius * angle.cos(),
    );
    let position = config.field_bounds().clamp(position);

    spawn_enemy_at(registry, effects, renderer, position, player.position)
}

/// Spawn an enemy at an exact position, facing `look_at`.
///
/// The enemy takes the slow flag that is current right now; it is not
/// re-evaluated later except by the effect manager.
pub fn spawn_enemy_at(
    registry: &mut EntityRegistry,
    effects: &mut EffectManager,
    renderer: &mut dyn Renderer,
    position: DVec3,
    look_at: DVec3,
) -> Entity {
    let slowed = effects.is_active();
    let transform = Transform::new(position, yaw_towards(position, look_at));

    let visual = renderer.add_visual(VisualKind::Enemy, transform);
    if slowed {
        renderer.set_tint(visual, Tint::Slowed);
    }

    let entity = registry.add_enemy(position, transform.yaw, slowed, visual);
    if slowed {
        effects.attach_marker(entity, transform, renderer);
    }

    debug!(?position, slowed, "enemy spawned");
    entity
}

/// Spawn a powerup on a random bearing around the player at fixed height.
/// Powerup placement is not clamped to the field.
pub fn spawn_powerup(
    registry: &mut EntityRegistry,
    renderer: &mut dyn Renderer,
    rng: &mut ChaCha8Rng,
    player: &Player,
    config: &GameConfig,
) -> Entity {
    let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let radius = rng.gen_range(config.powerup_spawn_radius_min..=config.powerup_spawn_radius_max);

    let position = DVec3::new(
        player.position.x + radius * angle.cos(),
        POWERUP_HEIGHT,
        player.position.z + radius * angle.sin(),
    );

    spawn_powerup_at(registry, renderer, PowerupKind::Slow, position)
}

/// Spawn a powerup at an exact position.
pub fn spawn_powerup_at(
    registry: &mut EntityRegistry,
    renderer: &mut dyn Renderer,
    kind: PowerupKind,
    position: DVec3,
) -> Entity {
    let visual = renderer.add_visual(VisualKind::Powerup(kind), Transform::new(position, 0.0));
    let entity = registry.add_powerup(kind, position, visual);
    debug!(?position, ?kind, "powerup spawned");
    entity
}
