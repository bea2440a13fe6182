#[cfg(test)]
mod tests {
    use glam::DVec3;

    use dinohunt_core::constants::*;
    use dinohunt_core::enums::{AttackDirection, EnemyBehavior};
    use dinohunt_core::types::horizontal_distance;

    use crate::direction::classify_attack_direction;
    use crate::fsm::{evaluate, in_attack_range, PursuitContext};

    fn make_context(behavior: EnemyBehavior, z: f64, speed: f64) -> PursuitContext {
        // Enemy straight ahead of a player standing at the origin.
        PursuitContext {
            behavior,
            position: DVec3::new(0.0, ENEMY_CENTER_HEIGHT, z),
            player_position: DVec3::ZERO,
            speed,
            attack_range: ATTACK_RANGE,
        }
    }

    // ---- Pursuit ----

    #[test]
    fn test_far_enemy_steps_by_speed() {
        let ctx = make_context(EnemyBehavior::Pursuing, 10.0, ENEMY_SPEED_NORMAL);
        let update = evaluate(&ctx);
        assert!(!update.behavior_changed);
        assert_eq!(update.new_behavior, EnemyBehavior::Pursuing);
        let before = horizontal_distance(ctx.position, ctx.player_position);
        let after = horizontal_distance(update.new_position, ctx.player_position);
        assert!(
            (before - after - ENEMY_SPEED_NORMAL).abs() < 1e-12,
            "distance should drop by exactly the speed, dropped {}",
            before - after
        );
    }

    #[test]
    fn test_slow_speed_step() {
        let ctx = make_context(EnemyBehavior::Pursuing, 10.0, ENEMY_SPEED_SLOW);
        let update = evaluate(&ctx);
        assert!((update.new_position.z - (10.0 - ENEMY_SPEED_SLOW)).abs() < 1e-12);
    }

    #[test]
    fn test_step_preserves_height() {
        let ctx = make_context(EnemyBehavior::Pursuing, 10.0, ENEMY_SPEED_NORMAL);
        let update = evaluate(&ctx);
        assert_eq!(update.new_position.y, ENEMY_CENTER_HEIGHT);
    }

    #[test]
    fn test_arrival_tick_switches_to_attacking() {
        let ctx = make_context(EnemyBehavior::Pursuing, 2.05, ENEMY_SPEED_NORMAL);
        let update = evaluate(&ctx);
        assert!(update.behavior_changed);
        assert_eq!(update.new_behavior, EnemyBehavior::Attacking);
        assert!((update.new_position.z - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_enemy_in_range_holds_position() {
        let ctx = make_context(EnemyBehavior::Attacking, 1.5, ENEMY_SPEED_NORMAL);
        let update = evaluate(&ctx);
        assert!(!update.behavior_changed);
        assert_eq!(update.new_behavior, EnemyBehavior::Attacking);
        assert_eq!(update.new_position, ctx.position);
    }

    #[test]
    fn test_player_escape_resumes_pursuit() {
        let ctx = make_context(EnemyBehavior::Attacking, 3.0, ENEMY_SPEED_NORMAL);
        let update = evaluate(&ctx);
        assert!(update.behavior_changed);
        assert_eq!(update.new_behavior, EnemyBehavior::Pursuing);
    }

    #[test]
    fn test_enemy_faces_player() {
        let ctx = PursuitContext {
            behavior: EnemyBehavior::Pursuing,
            position: DVec3::new(10.0, ENEMY_CENTER_HEIGHT, 0.0),
            player_position: DVec3::ZERO,
            speed: ENEMY_SPEED_NORMAL,
            attack_range: ATTACK_RANGE,
        };
        let update = evaluate(&ctx);
        // Facing -x.
        assert!((update.new_yaw + std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn test_scenario_distance_25_reaches_range_in_460_ticks() {
        let mut ctx = make_context(EnemyBehavior::Pursuing, 25.0, ENEMY_SPEED_NORMAL);
        let mut arrived_at = None;
        for tick in 1..=600u32 {
            let update = evaluate(&ctx);
            ctx.position = update.new_position;
            ctx.behavior = update.new_behavior;
            if update.new_behavior == EnemyBehavior::Attacking {
                arrived_at = Some(tick);
                break;
            }
        }
        assert_eq!(arrived_at, Some(460));
    }

    #[test]
    fn test_attack_range_boundary() {
        assert!(in_attack_range(2.0, ATTACK_RANGE));
        assert!(in_attack_range(1.9, ATTACK_RANGE));
        assert!(!in_attack_range(2.0001, ATTACK_RANGE));
    }

    // ---- Direction classification ----

    #[test]
    fn test_enemy_along_facing_flashes_bottom() {
        let dirs = classify_attack_direction(DVec3::Z, DVec3::new(0.1, 0.0, 1.0));
        assert_eq!(dirs, vec![AttackDirection::Bottom]);
    }

    #[test]
    fn test_enemy_opposite_facing_flashes_all_edges() {
        let dirs = classify_attack_direction(DVec3::Z, DVec3::new(0.0, 0.0, -1.0));
        assert_eq!(
            dirs,
            vec![
                AttackDirection::Top,
                AttackDirection::Left,
                AttackDirection::Right,
                AttackDirection::Bottom,
            ]
        );
    }

    #[test]
    fn test_side_enemies_use_cross_product_sign() {
        // forward +z, enemy at +x: (z × x).y = +1
        let right = classify_attack_direction(DVec3::Z, DVec3::X);
        assert_eq!(right, vec![AttackDirection::Right]);

        let left = classify_attack_direction(DVec3::Z, DVec3::NEG_X);
        assert_eq!(left, vec![AttackDirection::Left]);
    }

    #[test]
    fn test_direction_needs_no_normalization() {
        let a = classify_attack_direction(DVec3::Z * 3.0, DVec3::X * 0.2);
        let b = classify_attack_direction(DVec3::Z, DVec3::X);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_vector_falls_to_side_band() {
        // Degenerate bearing lands in the side band with cross = 0, i.e. Left.
        let dirs = classify_attack_direction(DVec3::Z, DVec3::ZERO);
        assert_eq!(dirs, vec![AttackDirection::Left]);
    }
}
