#[cfg(test)]
mod tests {
    use glam::DVec3;

    use crate::config::{ConfigError, GameConfig};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::input::{InputState, MovementIntents, PointerMotion};
    use crate::state::FrameSnapshot;
    use crate::types::{facing_from_yaw, horizontal_distance, yaw_towards, FieldBounds, Ray, SimTime};

    // ---- Field bounds ----

    #[test]
    fn test_field_clamp_horizontal_axes_only() {
        let bounds = FieldBounds::new(FIELD_HALF_SIZE);
        let clamped = bounds.clamp(DVec3::new(80.0, 3.0, -120.0));
        assert_eq!(clamped, DVec3::new(50.0, 3.0, -50.0));
        assert!(bounds.contains(clamped));
        assert!(!bounds.contains(DVec3::new(50.1, 0.0, 0.0)));
    }

    #[test]
    fn test_field_clamp_leaves_inside_points() {
        let bounds = FieldBounds::new(50.0);
        let p = DVec3::new(-12.5, 0.0, 49.0);
        assert_eq!(bounds.clamp(p), p);
    }

    // ---- Geometry ----

    #[test]
    fn test_facing_and_yaw_agree() {
        let yaw = 0.7;
        let facing = facing_from_yaw(yaw);
        assert!((facing.length() - 1.0).abs() < 1e-12);
        let back = yaw_towards(DVec3::ZERO, facing * 10.0);
        assert!((back - yaw).abs() < 1e-12);
        // Yaw 0 faces +z.
        assert!((facing_from_yaw(0.0) - DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_horizontal_distance_ignores_height() {
        let d = horizontal_distance(DVec3::new(0.0, 0.0, 0.0), DVec3::new(3.0, 7.0, 4.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_ray_hits_box_front_face() {
        let ray = Ray::new(DVec3::new(0.0, 1.0, 0.0), DVec3::Z);
        let half = DVec3::new(0.5, 1.0, 0.5);
        let t = ray.intersect_box(DVec3::new(0.0, 1.0, 10.0), 0.0, half).unwrap();
        assert!((t - 9.5).abs() < 1e-9, "expected front face at 9.5, got {t}");
    }

    #[test]
    fn test_ray_misses_box_to_the_side() {
        let ray = Ray::new(DVec3::new(0.0, 1.0, 0.0), DVec3::Z);
        let half = DVec3::new(0.5, 1.0, 0.5);
        assert!(ray.intersect_box(DVec3::new(2.0, 1.0, 10.0), 0.0, half).is_none());
    }

    #[test]
    fn test_ray_ignores_box_behind_origin() {
        let ray = Ray::new(DVec3::new(0.0, 1.0, 0.0), DVec3::Z);
        let half = DVec3::new(0.5, 1.0, 0.5);
        assert!(ray.intersect_box(DVec3::new(0.0, 1.0, -10.0), 0.0, half).is_none());
    }

    #[test]
    fn test_ray_respects_box_rotation() {
        // A ray grazing x = 0.6 misses an axis-aligned box of half width 0.5,
        // but hits the same box rotated 45° (corner reaches ~0.707).
        let ray = Ray::new(DVec3::new(0.6, 1.0, 0.0), DVec3::Z);
        let half = DVec3::new(0.5, 1.0, 0.5);
        let center = DVec3::new(0.0, 1.0, 10.0);
        assert!(ray.intersect_box(center, 0.0, half).is_none());
        assert!(ray
            .intersect_box(center, std::f64::consts::FRAC_PI_4, half)
            .is_some());
    }

    #[test]
    fn test_ray_origin_inside_box_reports_zero() {
        let ray = Ray::new(DVec3::new(0.0, 1.0, 10.0), DVec3::X);
        let half = DVec3::new(0.5, 1.0, 0.5);
        let t = ray.intersect_box(DVec3::new(0.0, 1.0, 10.0), 0.0, half).unwrap();
        assert_eq!(t, 0.0);
    }

    #[test]
    fn test_sim_time_never_runs_backwards() {
        let mut time = SimTime::default();
        time.advance(1_000);
        time.advance(900);
        assert_eq!(time.tick, 2);
        assert_eq!(time.now_ms, 1_000);
    }

    // ---- Config ----

    #[test]
    fn test_default_config_matches_constants() {
        let config = GameConfig::default();
        assert_eq!(config.field_half_size, 50.0);
        assert_eq!(config.enemy_spawn_interval_ms, 3_000);
        assert_eq!(config.powerup_spawn_interval_ms, 10_000);
        assert_eq!(config.shoot_cooldown_ms, 500);
        assert_eq!(config.melee_attack_interval_ms, 1_000);
        assert_eq!(config.attack_range, 2.0);
        assert_eq!(config.slow_effect_duration_ms, 5_000);
        assert_eq!(config.enemy_speed_normal, 0.05);
        assert_eq!(config.enemy_speed_slow, 0.02);
        assert_eq!(config.player_move_speed, 0.15);
        assert_eq!(config.player_rotate_speed, 0.03);
        assert_eq!(config.starting_health, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json_str(r#"{ "starting_health": 3, "attack_range": 1.5 }"#)
            .unwrap();
        assert_eq!(config.starting_health, 3);
        assert_eq!(config.attack_range, 1.5);
        assert_eq!(config.shoot_cooldown_ms, SHOOT_COOLDOWN_MS);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = GameConfig::from_json_str("{ starting_health: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = GameConfig::from_json_str(r#"{ "field_half_size": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "field_half_size",
                ..
            }
        ));

        let err = GameConfig::from_json_str(r#"{ "shoot_cooldown_ms": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "shoot_cooldown_ms",
                ..
            }
        ));

        let err = GameConfig::from_json_str(
            r#"{ "enemy_spawn_radius_min": 30.0, "enemy_spawn_radius_max": 20.0 }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("enemy_spawn_radius_max"));
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let err = GameConfig::load("/definitely/not/here/dinohunt.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    // ---- Input ----

    #[test]
    fn test_input_merge_keeps_pending_shot() {
        let mut pending = InputState::idle();
        pending.merge(InputState {
            shoot: Some(Ray::new(DVec3::ZERO, DVec3::Z)),
            ..Default::default()
        });
        pending.merge(InputState {
            movement: MovementIntents {
                forward: true,
                ..Default::default()
            },
            pointer_motions: vec![PointerMotion {
                screen_x: 10.0,
                screen_width: 300.0,
                delta_y: 0.0,
            }],
            shoot: None,
        });

        assert!(pending.shoot.is_some(), "later snapshot must not drop a click");
        assert!(pending.movement.forward);
        assert_eq!(pending.pointer_motions.len(), 1);

        pending.consume_pulses();
        assert!(pending.shoot.is_none());
        assert!(pending.pointer_motions.is_empty());
        assert!(pending.movement.forward, "held keys survive the tick");
    }

    // ---- Serialization ----

    #[test]
    fn test_game_event_is_tagged() {
        let event = GameEvent::Sound {
            sound: SoundId::Bite,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"Sound""#), "got {json}");
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut snapshot = FrameSnapshot::default();
        snapshot.hud.health = 7;
        snapshot.events.push(GameEvent::GameOver);
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.hud.health, 7);
        assert_eq!(back.events, vec![GameEvent::GameOver]);
    }

    #[test]
    fn test_sound_file_names() {
        assert_eq!(SoundId::Gunshot.file_name(), "gunshot.mp3");
        assert_eq!(SoundId::Bite.file_name(), "bite.mp3");
    }
}
