//! Movement system: advances the player from input and enemies toward the player.

use glam::DVec3;
use tracing::debug;

use dinohunt_core::components::{Enemy, EnemyState, Facing, Player, Position};
use dinohunt_core::config::GameConfig;
use dinohunt_core::constants::PITCH_LIMIT;
use dinohunt_core::input::{InputState, PointerMotion};
use dinohunt_core::types::facing_from_yaw;

use dinohunt_ai::fsm::{evaluate, PursuitContext};

use crate::registry::{entity_id, EntityRegistry};

/// Apply one tick of player input.
///
/// Pointer motions are applied first, then move/strafe intents are summed
/// along the current facing and the sum is clamped to the field, then the
/// rotate intents turn the body for the next tick.
pub fn step_player(player: &mut Player, input: &InputState, config: &GameConfig) {
    for motion in &input.pointer_motions {
        apply_pointer_motion(player, motion, config);
    }

    let intents = input.movement;
    let speed = config.player_move_speed;
    let facing = facing_from_yaw(player.yaw);
    let right = facing.cross(DVec3::Y).normalize_or_zero();

    let mut position = player.position;
    if intents.forward {
        position += facing * speed;
    }
    if intents.backward {
        position -= facing * speed;
    }
    if intents.strafe_left {
        position -= right * speed;
    }
    if intents.strafe_right {
        position += right * speed;
    }
    player.position = config.field_bounds().clamp(position);

    if intents.rotate_left {
        player.yaw += config.player_rotate_speed;
    }
    if intents.rotate_right {
        player.yaw -= config.player_rotate_speed;
    }
}

/// Turn and tilt the view from one pointer event.
pub fn apply_pointer_motion(player: &mut Player, motion: &PointerMotion, config: &GameConfig) {
    player.yaw += pointer_yaw_delta(motion, config.pointer_yaw_speed);
    player.pitch = (player.pitch - motion.delta_y * config.pointer_pitch_sensitivity)
        .clamp(-PITCH_LIMIT, PITCH_LIMIT);
}

/// Yaw change for a cursor position.
///
/// The screen is split into three equal bands. In the left band the player
/// turns left by `yaw_speed` scaled by how far the cursor is toward the
/// screen edge (0 at the band's inner edge, 1 at the screen edge); the right
/// band mirrors it. The center band does not turn.
pub fn pointer_yaw_delta(motion: &PointerMotion, yaw_speed: f64) -> f64 {
    if motion.screen_width <= 0.0 {
        return 0.0;
    }
    let band = motion.screen_width / 3.0;
    let x = motion.screen_x.clamp(0.0, motion.screen_width);

    if x < band {
        yaw_speed * (band - x) / band
    } else if x > 2.0 * band {
        -yaw_speed * (x - 2.0 * band) / band
    } else {
        0.0
    }
}

/// Move every enemy one pursuit step and refresh its behavior and facing.
pub fn run_enemies(registry: &mut EntityRegistry, player_position: DVec3, config: &GameConfig) {
    let bounds = config.field_bounds();

    for (entity, (_enemy, pos, facing, state)) in registry
        .world_mut()
        .query_mut::<(&Enemy, &mut Position, &mut Facing, &mut EnemyState)>()
    {
        let speed = if state.slowed {
            config.enemy_speed_slow
        } else {
            config.enemy_speed_normal
        };

        let update = evaluate(&PursuitContext {
            behavior: state.behavior,
            position: pos.0,
            player_position,
            speed,
            attack_range: config.attack_range,
        });

        pos.0 = bounds.clamp(update.new_position);
        facing.yaw = update.new_yaw;
        if update.behavior_changed {
            debug!(enemy = entity_id(entity), behavior = ?update.new_behavior, "enemy behavior changed");
            state.behavior = update.new_behavior;
        }
    }
}
