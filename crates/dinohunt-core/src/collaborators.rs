//! Interfaces the simulation calls into but does not implement.
//!
//! Rendering, audio and HUD drawing live outside the core. Implementations
//! must not fail the tick: errors are absorbed on their side.

use crate::components::VisualId;
use crate::enums::{SoundId, Tint, VisualKind};
use crate::state::{HudState, MinimapView};
use crate::types::Transform;

/// Scene-graph sink for 3D visuals.
pub trait Renderer {
    fn add_visual(&mut self, kind: VisualKind, transform: Transform) -> VisualId;
    fn set_transform(&mut self, id: VisualId, transform: Transform);
    fn set_tint(&mut self, id: VisualId, tint: Tint);
    /// Removing an unknown id is a no-op.
    fn remove_visual(&mut self, id: VisualId);
    fn render_frame(&mut self, camera: Transform);
}

/// Fire-and-forget sound playback. Failures are swallowed.
pub trait AudioPlayer {
    fn play(&mut self, sound: SoundId);
}

/// Draws counters, health, the reload gauge and directional flashes.
pub trait HudRenderer {
    fn draw_hud(&mut self, hud: &HudState);
}

/// Draws the overhead map.
pub trait MinimapRenderer {
    fn draw_minimap(&mut self, minimap: &MinimapView);
}

/// Renderer that hands out ids and draws nothing. Used headless.
#[derive(Debug, Default)]
pub struct NullRenderer {
    next_id: u64,
}

impl Renderer for NullRenderer {
    fn add_visual(&mut self, _kind: VisualKind, _transform: Transform) -> VisualId {
        self.next_id += 1;
        VisualId(self.next_id)
    }

    fn set_transform(&mut self, _id: VisualId, _transform: Transform) {}

    fn set_tint(&mut self, _id: VisualId, _tint: Tint) {}

    fn remove_visual(&mut self, _id: VisualId) {}

    fn render_frame(&mut self, _camera: Transform) {}
}

/// Audio player that plays nothing.
#[derive(Debug, Default)]
pub struct SilentAudio;

impl AudioPlayer for SilentAudio {
    fn play(&mut self, _sound: SoundId) {}
}
