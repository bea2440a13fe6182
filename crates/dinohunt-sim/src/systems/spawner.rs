//! Spawn scheduling: decides when enemies and powerups enter the field.
//!
//! Cadence is expressed as timestamp comparisons evaluated once per tick,
//! never as free-running timers.

use dinohunt_core::config::GameConfig;

/// What the scheduler wants spawned this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnDecision {
    pub spawn_enemy: bool,
    pub spawn_powerup: bool,
}

/// Timestamps of the last spawns.
#[derive(Debug, Clone, Default)]
pub struct SpawnScheduler {
    /// `None` until the first enemy, which spawns on the first tick.
    last_enemy_spawn_at: Option<u64>,
    /// Anchored on the first tick; powerups follow a fixed cadence from there.
    powerup_slot: Option<u64>,
    /// When a powerup last actually spawned (or the anchor, before the first).
    last_powerup_spawn_at: Option<u64>,
}

impl SpawnScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scheduler that treats `now` as the moment both kinds last spawned.
    pub fn primed(now: u64) -> Self {
        Self {
            last_enemy_spawn_at: Some(now),
            powerup_slot: Some(now),
            last_powerup_spawn_at: Some(now),
        }
    }

    pub fn last_enemy_spawn_at(&self) -> Option<u64> {
        self.last_enemy_spawn_at
    }

    pub fn last_powerup_spawn_at(&self) -> Option<u64> {
        self.last_powerup_spawn_at
    }

    /// Check both cadences against `now`.
    ///
    /// Enemies fire when strictly more than the interval has passed since
    /// the last enemy. Powerups follow a fixed grid, but a slot only fires
    /// once a full interval has passed since the previous powerup actually
    /// spawned, so a late tick never pulls the next one closer. After a
    /// stall longer than one interval the grid re-anchors at `now`.
    pub fn tick(&mut self, now: u64, config: &GameConfig) -> SpawnDecision {
        let spawn_enemy = match self.last_enemy_spawn_at {
            None => true,
            Some(last) => now.saturating_sub(last) > config.enemy_spawn_interval_ms,
        };
        if spawn_enemy {
            self.last_enemy_spawn_at = Some(now);
        }

        let interval = config.powerup_spawn_interval_ms;
        let spawn_powerup = match (self.powerup_slot, self.last_powerup_spawn_at) {
            (Some(slot), Some(last))
                if now.saturating_sub(slot) >= interval && now.saturating_sub(last) >= interval =>
            {
                let mut next = slot + interval;
                if now.saturating_sub(next) >= interval {
                    next = now;
                }
                self.powerup_slot = Some(next);
                self.last_powerup_spawn_at = Some(now);
                true
            }
            (Some(_), Some(_)) => false,
            _ => {
                self.powerup_slot = Some(now);
                self.last_powerup_spawn_at = Some(now);
                false
            }
        };

        SpawnDecision {
            spawn_enemy,
            spawn_powerup,
        }
    }
}
