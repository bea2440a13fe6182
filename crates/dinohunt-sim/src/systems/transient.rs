//! Short-lived presentational state: bullet effects and attack flashes.
//!
//! Every record carries its start time and is dropped by polling against
//! `now` once per tick.

use glam::DVec3;

use dinohunt_core::collaborators::Renderer;
use dinohunt_core::components::VisualId;
use dinohunt_core::enums::{AttackDirection, ShotResult};
use dinohunt_core::state::{AttackFlashView, BulletEffectView};

#[derive(Debug, Clone, Copy)]
pub struct BulletEffect {
    pub result: ShotResult,
    pub point: DVec3,
    pub visual: VisualId,
    pub spawned_at: u64,
    pub ttl_ms: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct AttackFlash {
    pub direction: AttackDirection,
    pub started_at: u64,
    pub fade_ms: u64,
}

impl AttackFlash {
    /// Full opacity at the bite, fading linearly to zero over `fade_ms`.
    pub fn opacity(&self, now: u64) -> f64 {
        let elapsed = now.saturating_sub(self.started_at) as f64;
        (1.0 - elapsed / self.fade_ms as f64).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Default)]
pub struct TransientEffects {
    bullets: Vec<BulletEffect>,
    flashes: Vec<AttackFlash>,
}

impl TransientEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_bullet(&mut self, effect: BulletEffect) {
        self.bullets.push(effect);
    }

    pub fn push_flash(&mut self, flash: AttackFlash) {
        self.flashes.push(flash);
    }

    /// Drop everything whose lifetime has run out, removing bullet visuals.
    pub fn expire(&mut self, now: u64, renderer: &mut dyn Renderer) {
        self.bullets.retain(|effect| {
            let alive = now.saturating_sub(effect.spawned_at) < effect.ttl_ms;
            if !alive {
                renderer.remove_visual(effect.visual);
            }
            alive
        });
        self.flashes
            .retain(|flash| now.saturating_sub(flash.started_at) < flash.fade_ms);
    }

    pub fn bullet_views(&self, now: u64) -> Vec<BulletEffectView> {
        self.bullets
            .iter()
            .map(|effect| BulletEffectView {
                result: effect.result,
                point: effect.point,
                remaining_ms: effect
                    .ttl_ms
                    .saturating_sub(now.saturating_sub(effect.spawned_at)),
            })
            .collect()
    }

    pub fn flash_views(&self, now: u64) -> Vec<AttackFlashView> {
        self.flashes
            .iter()
            .map(|flash| AttackFlashView {
                direction: flash.direction,
                opacity: flash.opacity(now),
            })
            .collect()
    }

    pub fn bullet_count(&self) -> usize {
        self.bullets.len()
    }

    pub fn flash_count(&self) -> usize {
        self.flashes.len()
    }

    pub fn clear(&mut self, renderer: &mut dyn Renderer) {
        for effect in self.bullets.drain(..) {
            renderer.remove_visual(effect.visual);
        }
        self.flashes.clear();
    }
}
