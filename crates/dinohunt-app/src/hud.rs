//! HUD and minimap sinks that write to the log instead of a screen.

use tracing::{info, trace, warn};

use dinohunt_core::collaborators::{HudRenderer, MinimapRenderer};
use dinohunt_core::enums::GamePhase;
use dinohunt_core::state::{HudState, MinimapView};

/// Logs HUD counters when they change.
#[derive(Debug, Default)]
pub struct LogHud {
    last: Option<(GamePhase, u32, i32, bool)>,
    draws: u64,
}

impl LogHud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl HudRenderer for LogHud {
    fn draw_hud(&mut self, hud: &HudState) {
        self.draws += 1;
        let key = (hud.phase, hud.hits, hud.health, hud.slow_active);
        if self.last != Some(key) {
            if hud.phase == GamePhase::GameOver && self.last.map(|l| l.0) != Some(GamePhase::GameOver) {
                warn!(hits = hud.hits, "game over");
            }
            info!(
                hits = hud.hits,
                health = hud.health,
                slow = hud.slow_active,
                "hud"
            );
            self.last = Some(key);
        }
        for flash in &hud.attack_flashes {
            trace!(direction = ?flash.direction, opacity = flash.opacity, "attack flash");
        }
        trace!(reload = hud.reload_progress, "reload gauge");
    }
}

/// Logs the minimap every `every` frames.
#[derive(Debug)]
pub struct LogMinimap {
    every: u64,
    frame: u64,
}

impl LogMinimap {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frame: 0,
        }
    }
}

impl MinimapRenderer for LogMinimap {
    fn draw_minimap(&mut self, minimap: &MinimapView) {
        self.frame += 1;
        if self.frame % self.every != 0 {
            return;
        }
        info!(
            player = ?minimap.player_position,
            yaw = minimap.player_yaw,
            enemies = minimap.enemies.len(),
            powerups = minimap.powerups.len(),
            "minimap"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_hud_counts_draws() {
        let mut hud = LogHud::new();
        let state = HudState {
            health: 10,
            ..Default::default()
        };
        hud.draw_hud(&state);
        hud.draw_hud(&state);
        assert_eq!(hud.draws(), 2);
    }

    #[test]
    fn test_minimap_interval_never_zero() {
        let mut minimap = LogMinimap::new(0);
        minimap.draw_minimap(&MinimapView::default());
        assert_eq!(minimap.frame, 1);
    }
}
