//! Entity registry: the owner of every live enemy and powerup.
//!
//! Wraps the hecs world. Identity is the hecs `Entity`. Listing returns
//! owned snapshots, so callers may add or remove entities while walking a
//! list without invalidating it. Removing an absent id is a no-op.

use glam::DVec3;
use hecs::{Entity, World};

use dinohunt_core::components::*;
use dinohunt_core::enums::{EnemyBehavior, PowerupKind};

/// Snapshot of one enemy.
#[derive(Debug, Clone)]
pub struct EnemyRecord {
    pub id: Entity,
    pub position: DVec3,
    pub yaw: f64,
    pub state: EnemyState,
    pub visual: VisualId,
}

/// Snapshot of one powerup.
#[derive(Debug, Clone, Copy)]
pub struct PowerupRecord {
    pub id: Entity,
    pub kind: PowerupKind,
    pub position: DVec3,
    pub visual: VisualId,
}

/// Stable numeric id for events and views.
pub fn entity_id(entity: Entity) -> u64 {
    entity.to_bits().get()
}

#[derive(Default)]
pub struct EntityRegistry {
    world: World,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_enemy(&mut self, position: DVec3, yaw: f64, slowed: bool, visual: VisualId) -> Entity {
        self.world.spawn((
            Enemy,
            Position(position),
            Facing { yaw },
            EnemyState {
                behavior: EnemyBehavior::Pursuing,
                last_attack_at: None,
                slowed,
            },
            Visual(visual),
        ))
    }

    /// Despawn an enemy, returning its visual so the caller can drop it from the scene.
    /// `None` if `id` is not a live enemy.
    pub fn remove_enemy(&mut self, id: Entity) -> Option<VisualId> {
        if self.world.get::<&Enemy>(id).is_err() {
            return None;
        }
        let visual = self.world.get::<&Visual>(id).ok().map(|v| v.0);
        let _ = self.world.despawn(id);
        visual
    }

    pub fn add_powerup(&mut self, kind: PowerupKind, position: DVec3, visual: VisualId) -> Entity {
        self.world.spawn((
            Powerup { kind },
            Position(position),
            Facing::default(),
            Visual(visual),
        ))
    }

    /// Despawn a powerup, returning its visual. `None` if `id` is not a live powerup.
    pub fn remove_powerup(&mut self, id: Entity) -> Option<VisualId> {
        if self.world.get::<&Powerup>(id).is_err() {
            return None;
        }
        let visual = self.world.get::<&Visual>(id).ok().map(|v| v.0);
        let _ = self.world.despawn(id);
        visual
    }

    pub fn contains(&self, id: Entity) -> bool {
        self.world.contains(id)
    }

    /// All live enemies, ordered by id.
    pub fn list_enemies(&self) -> Vec<EnemyRecord> {
        let mut enemies: Vec<EnemyRecord> = self
            .world
            .query::<(&Enemy, &Position, &Facing, &EnemyState, &Visual)>()
            .iter()
            .map(|(id, (_enemy, pos, facing, state, visual))| EnemyRecord {
                id,
                position: pos.0,
                yaw: facing.yaw,
                state: state.clone(),
                visual: visual.0,
            })
            .collect();
        enemies.sort_by_key(|e| entity_id(e.id));
        enemies
    }

    /// All live powerups, ordered by id.
    pub fn list_powerups(&self) -> Vec<PowerupRecord> {
        let mut powerups: Vec<PowerupRecord> = self
            .world
            .query::<(&Powerup, &Position, &Visual)>()
            .iter()
            .map(|(id, (powerup, pos, visual))| PowerupRecord {
                id,
                kind: powerup.kind,
                position: pos.0,
                visual: visual.0,
            })
            .collect();
        powerups.sort_by_key(|p| entity_id(p.id));
        powerups
    }

    pub fn enemy_count(&self) -> usize {
        self.world.query::<&Enemy>().iter().count()
    }

    pub fn powerup_count(&self) -> usize {
        self.world.query::<&Powerup>().iter().count()
    }

    /// Despawn everything, returning the visuals that were attached.
    pub fn clear(&mut self) -> Vec<VisualId> {
        let visuals = self
            .world
            .query::<&Visual>()
            .iter()
            .map(|(_, visual)| visual.0)
            .collect();
        self.world.clear();
        visuals
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
