//! Powerup pickup: the player collects any powerup within reach.

use glam::DVec3;
use tracing::debug;

use dinohunt_core::collaborators::Renderer;
use dinohunt_core::config::GameConfig;
use dinohunt_core::enums::PowerupKind;
use dinohunt_core::events::GameEvent;
use dinohunt_core::types::horizontal_distance;

use crate::effects::EffectManager;
use crate::registry::{entity_id, EntityRegistry};

/// Collect every powerup closer than the pickup radius (strictly) to the
/// player, measured on the ground plane. Returns how many were collected.
pub fn run(
    now: u64,
    player_position: DVec3,
    registry: &mut EntityRegistry,
    effects: &mut EffectManager,
    renderer: &mut dyn Renderer,
    events: &mut Vec<GameEvent>,
    config: &GameConfig,
) -> usize {
    let mut collected = 0;

    for powerup in registry.list_powerups() {
        if horizontal_distance(powerup.position, player_position) >= config.powerup_pickup_radius {
            continue;
        }
        let Some(visual) = registry.remove_powerup(powerup.id) else {
            continue;
        };
        renderer.remove_visual(visual);
        collected += 1;

        debug!(powerup = entity_id(powerup.id), kind = ?powerup.kind, "powerup collected");
        events.push(GameEvent::PowerupCollected {
            powerup_id: entity_id(powerup.id),
            kind: powerup.kind,
        });

        match powerup.kind {
            PowerupKind::Slow => {
                let expires_at =
                    effects.on_powerup_collected(now, config.slow_effect_duration_ms, registry, renderer);
                events.push(GameEvent::SlowEffectStarted { expires_at });
            }
        }
    }

    collected
}
