//! Simulation constants and tuning parameters.
//!
//! These are the defaults behind [`crate::config::GameConfig`]. Systems read
//! the config, never these constants directly, so every value here can be
//! overridden at startup.

/// Nominal tick rate of the runner (Hz). One tick per display refresh.
pub const TICK_RATE: u32 = 60;

// --- Field ---

/// Full edge length of the square playing field (units).
pub const FIELD_SIZE: f64 = 100.0;

/// Half of [`FIELD_SIZE`]; positions are clamped to `±FIELD_HALF_SIZE`.
pub const FIELD_HALF_SIZE: f64 = FIELD_SIZE / 2.0;

// --- Player ---

/// Health the player starts each run with.
pub const STARTING_HEALTH: i32 = 10;

/// Distance moved per tick for each active move/strafe intent.
pub const PLAYER_MOVE_SPEED: f64 = 0.15;

/// Yaw change per tick for each active rotate intent (radians).
pub const PLAYER_ROTATE_SPEED: f64 = 0.03;

/// Camera height above the player's ground position.
pub const PLAYER_EYE_HEIGHT: f64 = 1.6;

/// Maximum yaw change from one pointer event at the very screen edge (radians).
pub const POINTER_YAW_SPEED: f64 = 0.05;

/// Pitch change per pixel of vertical pointer motion (radians).
pub const POINTER_PITCH_SENSITIVITY: f64 = 0.002;

/// Pitch is clamped to ±90°.
pub const PITCH_LIMIT: f64 = std::f64::consts::FRAC_PI_2;

// --- Enemies ---

/// Milliseconds between enemy spawns.
pub const ENEMY_SPAWN_INTERVAL_MS: u64 = 3_000;

/// Enemies spawn within ±45° of the player's facing.
pub const ENEMY_SPAWN_HALF_ARC: f64 = std::f64::consts::FRAC_PI_4;

/// Minimum enemy spawn distance from the player.
pub const ENEMY_SPAWN_RADIUS_MIN: f64 = 20.0;

/// Maximum enemy spawn distance from the player.
pub const ENEMY_SPAWN_RADIUS_MAX: f64 = 30.0;

/// Enemy pursuit speed per tick.
pub const ENEMY_SPEED_NORMAL: f64 = 0.05;

/// Enemy pursuit speed per tick while slowed.
pub const ENEMY_SPEED_SLOW: f64 = 0.02;

/// Horizontal distance at or below which an enemy stops and attacks.
pub const ATTACK_RANGE: f64 = 2.0;

/// Minimum milliseconds between two melee attacks from the same enemy.
pub const MELEE_ATTACK_INTERVAL_MS: u64 = 1_000;

/// Enemy body half extents (x, y, z) in its local frame: a 1×2×1 box.
pub const ENEMY_HALF_EXTENTS: [f64; 3] = [0.5, 1.0, 0.5];

/// Enemies stand on the ground, so their center sits at half body height.
pub const ENEMY_CENTER_HEIGHT: f64 = 1.0;

// --- Shooting ---

/// Minimum milliseconds between two accepted shots.
pub const SHOOT_COOLDOWN_MS: u64 = 500;

/// A missed shot leaves its effect this far along the aim ray.
pub const MISS_EFFECT_DISTANCE: f64 = 50.0;

/// Lifetime of bullet hit/miss effects (ms).
pub const BULLET_EFFECT_TTL_MS: u64 = 1_000;

// --- Powerups ---

/// Milliseconds between powerup spawns.
pub const POWERUP_SPAWN_INTERVAL_MS: u64 = 10_000;

/// Minimum powerup spawn distance from the player.
pub const POWERUP_SPAWN_RADIUS_MIN: f64 = 10.0;

/// Maximum powerup spawn distance from the player.
pub const POWERUP_SPAWN_RADIUS_MAX: f64 = 20.0;

/// Powerups float at this fixed height.
pub const POWERUP_HEIGHT: f64 = 0.5;

/// Player-to-powerup distance below which the powerup is collected.
pub const POWERUP_PICKUP_RADIUS: f64 = 2.0;

/// Presentational powerup spin per tick (radians).
pub const POWERUP_SPIN_PER_TICK: f64 = 0.01;

// --- Slow effect ---

/// Duration of the slow effect once collected (ms).
pub const SLOW_EFFECT_DURATION_MS: u64 = 5_000;

// --- HUD ---

/// Directional attack flashes fade from full opacity to zero over this long (ms).
pub const ATTACK_FLASH_FADE_MS: u64 = 800;

/// Tolerance for range comparisons, absorbing accumulated step error.
pub const DISTANCE_EPSILON: f64 = 1e-9;
