//! Attack-direction classification for HUD edge flashes.

use std::f64::consts::FRAC_PI_4;

use glam::DVec3;

use dinohunt_core::enums::AttackDirection;

/// Map the bearing of a biting enemy to the HUD edges that should flash.
///
/// `player_forward` is the player's facing vector and `to_enemy` points from
/// the player to the enemy; neither needs to be normalized.
///
/// - angle < π/4: `[Bottom]`
/// - angle > 3π/4: all four edges, used when the bearing is ambiguous
/// - otherwise the sign of `(forward × to_enemy).y` picks `[Right]` or `[Left]`
pub fn classify_attack_direction(player_forward: DVec3, to_enemy: DVec3) -> Vec<AttackDirection> {
    let angle = angle_between(player_forward, to_enemy);
    let cross = player_forward.cross(to_enemy).y;

    if angle < FRAC_PI_4 {
        vec![AttackDirection::Bottom]
    } else if angle > 3.0 * FRAC_PI_4 {
        vec![
            AttackDirection::Top,
            AttackDirection::Left,
            AttackDirection::Right,
            AttackDirection::Bottom,
        ]
    } else if cross > 0.0 {
        vec![AttackDirection::Right]
    } else {
        vec![AttackDirection::Left]
    }
}

/// Unsigned angle in [0, π]. Degenerate (zero-length) inputs give π/2.
fn angle_between(a: DVec3, b: DVec3) -> f64 {
    let denominator = (a.length_squared() * b.length_squared()).sqrt();
    if denominator == 0.0 {
        return std::f64::consts::FRAC_PI_2;
    }
    (a.dot(b) / denominator).clamp(-1.0, 1.0).acos()
}
