//! Enemy behavior finite state machine.
//!
//! Pure functions that compute the next behavior, position and facing for an
//! enemy from its distance to the player and its current speed.
//! No ECS dependency: operates on plain data.

use glam::DVec3;

use dinohunt_core::constants::DISTANCE_EPSILON;
use dinohunt_core::enums::EnemyBehavior;
use dinohunt_core::types::{horizontal_distance, yaw_towards};

/// Input to the enemy FSM for a single entity.
pub struct PursuitContext {
    pub behavior: EnemyBehavior,
    pub position: DVec3,
    pub player_position: DVec3,
    /// Step length for this tick (normal or slowed speed).
    pub speed: f64,
    pub attack_range: f64,
}

/// Output from the enemy FSM.
pub struct PursuitUpdate {
    pub new_behavior: EnemyBehavior,
    pub new_position: DVec3,
    /// Yaw facing the player's current position.
    pub new_yaw: f64,
    pub behavior_changed: bool,
}

/// True when `distance` is at or inside the attack range.
pub fn in_attack_range(distance: f64, attack_range: f64) -> bool {
    distance <= attack_range + DISTANCE_EPSILON
}

/// Evaluate one tick of pursuit for one enemy.
///
/// Out of range, the enemy steps `speed` straight at the player on the ground
/// plane. The behavior is decided from the distance after the step, so the
/// tick that brings an enemy into range is the tick it starts attacking.
/// An enemy in range does not move.
pub fn evaluate(ctx: &PursuitContext) -> PursuitUpdate {
    let distance = horizontal_distance(ctx.position, ctx.player_position);

    let new_position = if in_attack_range(distance, ctx.attack_range) {
        ctx.position
    } else {
        step_towards(ctx.position, ctx.player_position, ctx.speed)
    };

    let remaining = horizontal_distance(new_position, ctx.player_position);
    let new_behavior = if in_attack_range(remaining, ctx.attack_range) {
        EnemyBehavior::Attacking
    } else {
        EnemyBehavior::Pursuing
    };

    PursuitUpdate {
        new_behavior,
        new_position,
        new_yaw: yaw_towards(new_position, ctx.player_position),
        behavior_changed: new_behavior != ctx.behavior,
    }
}

/// Move `speed` along the ground-plane direction from `from` to `to`.
/// Height is preserved.
fn step_towards(from: DVec3, to: DVec3, speed: f64) -> DVec3 {
    let offset = DVec3::new(to.x - from.x, 0.0, to.z - from.z);
    let direction = offset.normalize_or_zero();
    from + direction * speed
}
