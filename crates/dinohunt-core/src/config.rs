//! Runtime tunables.
//!
//! [`GameConfig`] defaults to the values in [`crate::constants`]. A JSON file
//! may override any subset of fields; missing fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::types::FieldBounds;

/// Errors from loading or validating a [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Every tunable the simulation reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field_half_size: f64,

    pub starting_health: i32,
    pub player_move_speed: f64,
    pub player_rotate_speed: f64,
    pub player_eye_height: f64,
    pub pointer_yaw_speed: f64,
    pub pointer_pitch_sensitivity: f64,

    pub enemy_spawn_interval_ms: u64,
    pub enemy_spawn_half_arc: f64,
    pub enemy_spawn_radius_min: f64,
    pub enemy_spawn_radius_max: f64,
    pub enemy_speed_normal: f64,
    pub enemy_speed_slow: f64,
    pub attack_range: f64,
    pub melee_attack_interval_ms: u64,

    pub shoot_cooldown_ms: u64,
    pub miss_effect_distance: f64,
    pub bullet_effect_ttl_ms: u64,

    pub powerup_spawn_interval_ms: u64,
    pub powerup_spawn_radius_min: f64,
    pub powerup_spawn_radius_max: f64,
    pub powerup_pickup_radius: f64,

    pub slow_effect_duration_ms: u64,
    pub attack_flash_fade_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_half_size: FIELD_HALF_SIZE,
            starting_health: STARTING_HEALTH,
            player_move_speed: PLAYER_MOVE_SPEED,
            player_rotate_speed: PLAYER_ROTATE_SPEED,
            player_eye_height: PLAYER_EYE_HEIGHT,
            pointer_yaw_speed: POINTER_YAW_SPEED,
            pointer_pitch_sensitivity: POINTER_PITCH_SENSITIVITY,
            enemy_spawn_interval_ms: ENEMY_SPAWN_INTERVAL_MS,
            enemy_spawn_half_arc: ENEMY_SPAWN_HALF_ARC,
            enemy_spawn_radius_min: ENEMY_SPAWN_RADIUS_MIN,
            enemy_spawn_radius_max: ENEMY_SPAWN_RADIUS_MAX,
            enemy_speed_normal: ENEMY_SPEED_NORMAL,
            enemy_speed_slow: ENEMY_SPEED_SLOW,
            attack_range: ATTACK_RANGE,
            melee_attack_interval_ms: MELEE_ATTACK_INTERVAL_MS,
            shoot_cooldown_ms: SHOOT_COOLDOWN_MS,
            miss_effect_distance: MISS_EFFECT_DISTANCE,
            bullet_effect_ttl_ms: BULLET_EFFECT_TTL_MS,
            powerup_spawn_interval_ms: POWERUP_SPAWN_INTERVAL_MS,
            powerup_spawn_radius_min: POWERUP_SPAWN_RADIUS_MIN,
            powerup_spawn_radius_max: POWERUP_SPAWN_RADIUS_MAX,
            powerup_pickup_radius: POWERUP_PICKUP_RADIUS,
            slow_effect_duration_ms: SLOW_EFFECT_DURATION_MS,
            attack_flash_fade_ms: ATTACK_FLASH_FADE_MS,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn field_bounds(&self) -> FieldBounds {
        FieldBounds::new(self.field_half_size)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    reason: "must be a finite positive number",
                })
            }
        }
        fn non_zero(field: &'static str, value: u64) -> Result<(), ConfigError> {
            if value > 0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    reason: "must be greater than zero",
                })
            }
        }

        positive("field_half_size", self.field_half_size)?;
        positive("player_move_speed", self.player_move_speed)?;
        positive("player_rotate_speed", self.player_rotate_speed)?;
        positive("enemy_speed_normal", self.enemy_speed_normal)?;
        positive("enemy_speed_slow", self.enemy_speed_slow)?;
        positive("attack_range", self.attack_range)?;
        positive("enemy_spawn_radius_min", self.enemy_spawn_radius_min)?;
        positive("powerup_spawn_radius_min", self.powerup_spawn_radius_min)?;
        positive("powerup_pickup_radius", self.powerup_pickup_radius)?;
        non_zero("enemy_spawn_interval_ms", self.enemy_spawn_interval_ms)?;
        non_zero("powerup_spawn_interval_ms", self.powerup_spawn_interval_ms)?;
        non_zero("shoot_cooldown_ms", self.shoot_cooldown_ms)?;
        non_zero("melee_attack_interval_ms", self.melee_attack_interval_ms)?;
        non_zero("slow_effect_duration_ms", self.slow_effect_duration_ms)?;
        non_zero("attack_flash_fade_ms", self.attack_flash_fade_ms)?;

        if self.starting_health <= 0 {
            return Err(ConfigError::Invalid {
                field: "starting_health",
                reason: "must be at least 1",
            });
        }
        if self.enemy_spawn_radius_max < self.enemy_spawn_radius_min {
            return Err(ConfigError::Invalid {
                field: "enemy_spawn_radius_max",
                reason: "must not be below enemy_spawn_radius_min",
            });
        }
        if self.powerup_spawn_radius_max < self.powerup_spawn_radius_min {
            return Err(ConfigError::Invalid {
                field: "powerup_spawn_radius_max",
                reason: "must not be below powerup_spawn_radius_min",
            });
        }
        if !(0.0..=std::f64::consts::PI).contains(&self.enemy_spawn_half_arc) {
            return Err(ConfigError::Invalid {
                field: "enemy_spawn_half_arc",
                reason: "must lie in [0, π]",
            });
        }
        Ok(())
    }
}
