//! Pushes entity transforms to the renderer and draws the frame.

use std::collections::HashMap;

use hecs::Entity;

use dinohunt_core::collaborators::Renderer;
use dinohunt_core::components::{Enemy, Facing, Player, Position, Powerup, Visual};
use dinohunt_core::constants::POWERUP_SPIN_PER_TICK;
use dinohunt_core::types::Transform;

use crate::effects::EffectManager;
use crate::registry::EntityRegistry;

/// Sync enemy bodies and their slow markers, spin powerups, then render
/// from the player's eye.
pub fn run(
    registry: &mut EntityRegistry,
    effects: &EffectManager,
    player: &Player,
    eye_height: f64,
    renderer: &mut dyn Renderer,
) {
    let mut enemy_transforms: HashMap<Entity, Transform> = HashMap::new();
    for (entity, (_enemy, pos, facing, visual)) in registry
        .world()
        .query::<(&Enemy, &Position, &Facing, &Visual)>()
        .iter()
    {
        let transform = Transform::new(pos.0, facing.yaw);
        renderer.set_transform(visual.0, transform);
        enemy_transforms.insert(entity, transform);
    }

    for (enemy, marker) in effects.markers() {
        if let Some(transform) = enemy_transforms.get(&enemy) {
            renderer.set_transform(marker, *transform);
        }
    }

    for (_entity, (_powerup, pos, facing, visual)) in registry
        .world_mut()
        .query_mut::<(&Powerup, &Position, &mut Facing, &Visual)>()
    {
        facing.yaw = (facing.yaw + POWERUP_SPIN_PER_TICK).rem_euclid(std::f64::consts::TAU);
        renderer.set_transform(visual.0, Transform::new(pos.0, facing.yaw));
    }

    renderer.render_frame(camera_transform(player, eye_height));
}

/// Camera at the player's eye, looking along the player's yaw and pitch.
pub fn camera_transform(player: &Player, eye_height: f64) -> Transform {
    let mut position = player.position;
    position.y = eye_height;
    Transform {
        position,
        yaw: player.yaw,
        pitch: player.pitch,
    }
}
