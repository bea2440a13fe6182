//! Slow-effect state machine and the per-enemy markers it attaches.
//!
//! The manager owns the global {Inactive, Active} state and an arena of
//! marker records. Each slowed enemy maps to exactly one marker slot; the
//! enemy itself stays owned by the registry.

use std::collections::HashMap;

use hecs::Entity;
use tracing::info;

use dinohunt_core::collaborators::Renderer;
use dinohunt_core::components::{EnemyState, Facing, Position, Visual, VisualId};
use dinohunt_core::enums::{EffectPhase, Tint, VisualKind};
use dinohunt_core::types::Transform;

use crate::registry::EntityRegistry;

/// Index of a marker slot in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(usize);

#[derive(Debug, Clone, Copy)]
struct MarkerRecord {
    enemy: Entity,
    visual: VisualId,
}

#[derive(Debug, Default)]
pub struct EffectManager {
    phase: EffectPhase,
    /// Meaningful only while active.
    expires_at: u64,
    markers: Vec<Option<MarkerRecord>>,
    free_slots: Vec<usize>,
    by_enemy: HashMap<Entity, MarkerId>,
}

impl EffectManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> EffectPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == EffectPhase::Active
    }

    pub fn expires_at(&self) -> Option<u64> {
        self.is_active().then_some(self.expires_at)
    }

    /// Start (or refresh) the slow effect and slow every live enemy.
    ///
    /// Collecting while already active pushes the expiry out; enemies that
    /// already carry a marker keep their single marker.
    pub fn on_powerup_collected(
        &mut self,
        now: u64,
        duration_ms: u64,
        registry: &mut EntityRegistry,
        renderer: &mut dyn Renderer,
    ) -> u64 {
        let refreshed = self.is_active();
        self.phase = EffectPhase::Active;
        self.expires_at = now + duration_ms;

        let world = registry.world_mut();
        let mut newly_slowed = Vec::new();
        for (entity, (state, visual, pos, facing)) in
            world.query_mut::<(&mut EnemyState, &Visual, &Position, &Facing)>()
        {
            state.slowed = true;
            renderer.set_tint(visual.0, Tint::Slowed);
            newly_slowed.push((entity, Transform::new(pos.0, facing.yaw)));
        }
        for (entity, transform) in newly_slowed {
            self.attach_marker(entity, transform, renderer);
        }

        if refreshed {
            info!(expires_at = self.expires_at, "slow effect refreshed");
        } else {
            info!(expires_at = self.expires_at, "slow effect activated");
        }
        self.expires_at
    }

    /// Expire the effect once `now` reaches the deadline. Returns true on the
    /// tick the effect ends.
    pub fn tick(&mut self, now: u64, registry: &mut EntityRegistry, renderer: &mut dyn Renderer) -> bool {
        if !self.is_active() || now < self.expires_at {
            return false;
        }

        self.phase = EffectPhase::Inactive;
        for (entity, (state, visual)) in registry
            .world_mut()
            .query_mut::<(&mut EnemyState, &Visual)>()
        {
            state.slowed = false;
            renderer.set_tint(visual.0, Tint::Normal);
            self.detach_marker(entity, renderer);
        }
        // Markers whose enemy vanished without notice.
        let orphans: Vec<Entity> = self.by_enemy.keys().copied().collect();
        for entity in orphans {
            self.detach_marker(entity, renderer);
        }

        info!("slow effect expired");
        true
    }

    /// Attach a marker to `enemy` if it has none yet.
    pub fn attach_marker(&mut self, enemy: Entity, transform: Transform, renderer: &mut dyn Renderer) -> MarkerId {
        if let Some(&id) = self.by_enemy.get(&enemy) {
            return id;
        }

        let visual = renderer.add_visual(VisualKind::SlowMarker, transform);
        let record = MarkerRecord { enemy, visual };
        let id = match self.free_slots.pop() {
            Some(slot) => {
                self.markers[slot] = Some(record);
                MarkerId(slot)
            }
            None => {
                self.markers.push(Some(record));
                MarkerId(self.markers.len() - 1)
            }
        };
        self.by_enemy.insert(enemy, id);
        id
    }

    /// Drop the marker of a destroyed enemy. No-op if it has none.
    pub fn on_enemy_removed(&mut self, enemy: Entity, renderer: &mut dyn Renderer) {
        self.detach_marker(enemy, renderer);
    }

    pub fn marker_for(&self, enemy: Entity) -> Option<MarkerId> {
        self.by_enemy.get(&enemy).copied()
    }

    pub fn marker_count(&self) -> usize {
        self.by_enemy.len()
    }

    /// (enemy, marker visual) pairs for transform syncing.
    pub fn markers(&self) -> impl Iterator<Item = (Entity, VisualId)> + '_ {
        self.markers
            .iter()
            .flatten()
            .map(|record| (record.enemy, record.visual))
    }

    /// Back to Inactive with no markers, removing their visuals.
    pub fn clear(&mut self, renderer: &mut dyn Renderer) {
        for record in self.markers.drain(..).flatten() {
            renderer.remove_visual(record.visual);
        }
        self.free_slots.clear();
        self.by_enemy.clear();
        self.phase = EffectPhase::Inactive;
        self.expires_at = 0;
    }

    fn detach_marker(&mut self, enemy: Entity, renderer: &mut dyn Renderer) {
        let Some(MarkerId(slot)) = self.by_enemy.remove(&enemy) else {
            return;
        };
        if let Some(record) = self.markers[slot].take() {
            renderer.remove_visual(record.visual);
        }
        self.free_slots.push(slot);
    }
}
