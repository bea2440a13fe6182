//! Decoded per-tick player input.
//!
//! The input collector folds raw device events into one [`InputState`] and
//! hands it to the simulation once per tick. The simulation never sees raw
//! key codes or DOM events.

use serde::{Deserialize, Serialize};

use crate::types::Ray;

/// Held movement/rotation intents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementIntents {
    pub forward: bool,
    pub backward: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
}

/// One pointer movement event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerMotion {
    /// Cursor x in pixels from the left screen edge.
    pub screen_x: f64,
    /// Screen width in pixels.
    pub screen_width: f64,
    /// Vertical pointer delta in pixels (positive = down).
    pub delta_y: f64,
}

/// Everything the simulation needs from the player for one tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    pub movement: MovementIntents,
    /// Pointer events received since the previous tick, in arrival order.
    pub pointer_motions: Vec<PointerMotion>,
    /// Set for exactly one tick when the player clicks; carries the decoded aim ray.
    pub shoot: Option<Ray>,
}

impl InputState {
    /// Input with nothing held and nothing pressed.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Fold a newer snapshot into this one, keeping one-shot requests.
    ///
    /// Held intents take the newer value. Pointer motions accumulate.
    /// A pending shot survives until the tick consumes it.
    pub fn merge(&mut self, newer: InputState) {
        self.movement = newer.movement;
        self.pointer_motions.extend(newer.pointer_motions);
        if newer.shoot.is_some() {
            self.shoot = newer.shoot;
        }
    }

    /// Clear the one-shot parts after a tick has consumed them.
    pub fn consume_pulses(&mut self) {
        self.pointer_motions.clear();
        self.shoot = None;
    }
}
