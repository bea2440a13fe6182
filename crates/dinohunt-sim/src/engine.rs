//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the entity registry, the player and every piece
//! of run-wide state, runs all systems once per tick and produces a
//! `FrameSnapshot`. Time is whatever the caller passes as `now_ms`, so the
//! engine is headless and can be driven by a controllable clock in tests.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use dinohunt_core::collaborators::{AudioPlayer, NullRenderer, Renderer, SilentAudio};
use dinohunt_core::components::Player;
use dinohunt_core::config::GameConfig;
use dinohunt_core::enums::GamePhase;
use dinohunt_core::events::GameEvent;
use dinohunt_core::input::InputState;
use dinohunt_core::state::FrameSnapshot;
use dinohunt_core::types::{Ray, SimTime};

use crate::effects::EffectManager;
use crate::registry::{entity_id, EntityRegistry};
use crate::systems;
use crate::systems::combat::{CombatState, ShotOutcome};
use crate::systems::snapshot::SnapshotSources;
use crate::systems::spawner::SpawnScheduler;
use crate::systems::transient::TransientEffects;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Default)]
pub struct SimConfig {
    pub game: GameConfig,
    /// RNG seed. `None` seeds from OS entropy; the same seed and inputs
    /// give the same run.
    pub seed: Option<u64>,
}

impl SimConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            game: GameConfig::default(),
            seed: Some(seed),
        }
    }
}

/// The outside world the engine draws and plays sounds through.
pub struct Collaborators {
    pub renderer: Box<dyn Renderer>,
    pub audio: Box<dyn AudioPlayer>,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            renderer: Box::new(NullRenderer::default()),
            audio: Box::new(SilentAudio),
        }
    }
}

/// The simulation engine. Owns the registry and all sim state.
pub struct SimulationEngine {
    registry: EntityRegistry,
    player: Player,
    time: SimTime,
    config: GameConfig,
    rng: ChaCha8Rng,
    scheduler: SpawnScheduler,
    combat: CombatState,
    effects: EffectManager,
    transients: TransientEffects,
    collaborators: Collaborators,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create an engine that draws nothing and plays nothing.
    pub fn new(config: SimConfig) -> Self {
        Self::with_collaborators(config, Collaborators::default())
    }

    pub fn with_collaborators(config: SimConfig, collaborators: Collaborators) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let game = config.game;
        if game.enemy_speed_slow > game.enemy_speed_normal {
            warn!(
                slow = game.enemy_speed_slow,
                normal = game.enemy_speed_normal,
                "slow enemy speed is above normal speed"
            );
        }
        info!(seed = ?config.seed, field_half_size = game.field_half_size, "simulation created");

        Self {
            registry: EntityRegistry::new(),
            player: Player::new(game.starting_health),
            time: SimTime::default(),
            rng,
            scheduler: SpawnScheduler::new(),
            combat: CombatState::default(),
            effects: EffectManager::new(),
            transients: TransientEffects::new(),
            collaborators,
            events: Vec::new(),
            config: game,
        }
    }

    /// Advance the simulation by one tick at `now_ms` and return the
    /// resulting snapshot.
    pub fn tick(&mut self, now_ms: u64, input: &InputState) -> FrameSnapshot {
        self.time.advance(now_ms);
        let now = self.time.now_ms;

        // 1. Player movement and view
        systems::movement::step_player(&mut self.player, input, &self.config);

        // 2. Shooting
        if let Some(ray) = input.shoot {
            self.fire_shot(now, ray);
        }

        // 3. Spawning
        self.run_spawner(now);

        // 4. Enemy pursuit
        systems::movement::run_enemies(&mut self.registry, self.player.position, &self.config);

        // 5. Melee
        systems::combat::resolve_melee(
            now,
            &mut self.player,
            &mut self.combat,
            &mut self.registry,
            &mut self.transients,
            self.collaborators.audio.as_mut(),
            &mut self.events,
            &self.config,
        );

        // 6. Powerup pickup
        systems::pickup::run(
            now,
            self.player.position,
            &mut self.registry,
            &mut self.effects,
            self.collaborators.renderer.as_mut(),
            &mut self.events,
            &self.config,
        );

        // 7. Slow-effect expiry
        if self
            .effects
            .tick(now, &mut self.registry, self.collaborators.renderer.as_mut())
        {
            self.events.push(GameEvent::SlowEffectEnded);
        }

        // 8. Bullet effects and attack flashes
        self.transients
            .expire(now, self.collaborators.renderer.as_mut());

        // 9. Scene sync and render
        systems::render_sync::run(
            &mut self.registry,
            &self.effects,
            &self.player,
            self.config.player_eye_height,
            self.collaborators.renderer.as_mut(),
        );

        // 10. Snapshot
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(self.registry.world(), &self.sources(), events)
    }

    /// Fire a shot along `ray` at `now`. Resulting events appear in the next snapshot.
    pub fn fire_shot(&mut self, now: u64, ray: Ray) -> ShotOutcome {
        systems::combat::fire_shot(
            now,
            &ray,
            &mut self.combat,
            &mut self.registry,
            &mut self.effects,
            &mut self.transients,
            self.collaborators.renderer.as_mut(),
            self.collaborators.audio.as_mut(),
            &mut self.events,
            &self.config,
        )
    }

    /// Start a fresh run: full health, zero hits, no entities, no effects.
    /// The RNG carries on.
    pub fn reset(&mut self) {
        let renderer = self.collaborators.renderer.as_mut();
        for visual in self.registry.clear() {
            renderer.remove_visual(visual);
        }
        self.effects.clear(renderer);
        self.transients.clear(renderer);

        self.player = Player::new(self.config.starting_health);
        self.time = SimTime::default();
        self.scheduler = SpawnScheduler::new();
        self.combat = CombatState::default();
        self.events.clear();
        info!("simulation reset");
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.combat.phase()
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn effects(&self) -> &EffectManager {
        &self.effects
    }

    pub fn combat(&self) -> &CombatState {
        &self.combat
    }

    pub fn transients(&self) -> &TransientEffects {
        &self.transients
    }

    /// Build a snapshot of the current state without advancing.
    pub fn snapshot(&self) -> FrameSnapshot {
        systems::snapshot::build_snapshot(self.registry.world(), &self.sources(), Vec::new())
    }

    fn sources(&self) -> SnapshotSources<'_> {
        SnapshotSources {
            time: self.time,
            player: &self.player,
            combat: &self.combat,
            effects: &self.effects,
            transients: &self.transients,
            config: &self.config,
        }
    }

    fn run_spawner(&mut self, now: u64) {
        let decision = self.scheduler.tick(now, &self.config);

        if decision.spawn_enemy {
            let entity = world_setup::spawn_enemy(
                &mut self.registry,
                &mut self.effects,
                self.collaborators.renderer.as_mut(),
                &mut self.rng,
                &self.player,
                &self.config,
            );
            self.push_enemy_spawned(entity);
        }

        if decision.spawn_powerup {
            let entity = world_setup::spawn_powerup(
                &mut self.registry,
                self.collaborators.renderer.as_mut(),
                &mut self.rng,
                &self.player,
                &self.config,
            );
            if let Some(powerup) = self
                .registry
                .list_powerups()
                .into_iter()
                .find(|p| p.id == entity)
            {
                self.events.push(GameEvent::PowerupSpawned {
                    powerup_id: entity_id(entity),
                    kind: powerup.kind,
                    position: powerup.position,
                });
            }
        }
    }

    fn push_enemy_spawned(&mut self, entity: hecs::Entity) {
        if let Some(enemy) = self
            .registry
            .list_enemies()
            .into_iter()
            .find(|e| e.id == entity)
        {
            self.events.push(GameEvent::EnemySpawned {
                enemy_id: entity_id(entity),
                position: enemy.position,
            });
        }
    }

    /// Place an enemy by hand (for testing).
    #[cfg(test)]
    pub fn spawn_enemy_at(&mut self, position: glam::DVec3) -> hecs::Entity {
        let entity = world_setup::spawn_enemy_at(
            &mut self.registry,
            &mut self.effects,
            self.collaborators.renderer.as_mut(),
            position,
            self.player.position,
        );
        self.push_enemy_spawned(entity);
        entity
    }

    /// Place a powerup by hand (for testing).
    #[cfg(test)]
    pub fn spawn_powerup_at(&mut self, position: glam::DVec3) -> hecs::Entity {
        world_setup::spawn_powerup_at(
            &mut self.registry,
            self.collaborators.renderer.as_mut(),
            dinohunt_core::enums::PowerupKind::Slow,
            position,
        )
    }

    /// Suppress scheduled spawns until the intervals elapse from `now` (for testing).
    #[cfg(test)]
    pub fn prime_spawns(&mut self, now: u64) {
        self.scheduler = SpawnScheduler::primed(now);
    }

    /// Mutable player access (for testing).
    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }
}
