//! Fundamental geometric and simulation types.
//!
//! World axes follow the scene convention: x and z span the ground plane,
//! y is up. A yaw of 0 faces +z.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Timestamp of the current tick in milliseconds, as supplied by the clock.
    pub now_ms: u64,
}

impl SimTime {
    /// Advance by one tick, stamping it with `now_ms`.
    /// Timestamps never run backwards even if the clock does.
    pub fn advance(&mut self, now_ms: u64) {
        self.tick += 1;
        self.now_ms = self.now_ms.max(now_ms);
    }
}

/// Square playable area centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub half_size: f64,
}

impl FieldBounds {
    pub fn new(half_size: f64) -> Self {
        Self { half_size }
    }

    /// Clamp the horizontal axes into the field. Height is left untouched.
    pub fn clamp(&self, position: DVec3) -> DVec3 {
        DVec3::new(
            position.x.clamp(-self.half_size, self.half_size),
            position.y,
            position.z.clamp(-self.half_size, self.half_size),
        )
    }

    pub fn contains(&self, position: DVec3) -> bool {
        position.x.abs() <= self.half_size && position.z.abs() <= self.half_size
    }
}

/// A decoded aim ray in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: DVec3,
    /// Unit direction. [`Ray::new`] normalizes.
    pub direction: DVec3,
}

impl Ray {
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to an oriented box, or `None` if it misses.
    ///
    /// The box is centered at `center`, rotated by `yaw` about +y, with the
    /// given half extents in its local frame. Hits behind the origin are
    /// rejected; an origin inside the box reports `t = 0`.
    pub fn intersect_box(&self, center: DVec3, yaw: f64, half_extents: DVec3) -> Option<f64> {
        // Move the ray into the box's local frame.
        let (sin, cos) = (-yaw).sin_cos();
        let rotate = |v: DVec3| DVec3::new(v.x * cos + v.z * sin, v.y, -v.x * sin + v.z * cos);
        let origin = rotate(self.origin - center);
        let direction = rotate(self.direction);

        let mut t_min = f64::NEG_INFINITY;
        let mut t_max = f64::INFINITY;
        for axis in 0..3 {
            let o = origin[axis];
            let d = direction[axis];
            let h = half_extents[axis];
            if d.abs() < 1e-12 {
                if o.abs() > h {
                    return None;
                }
                continue;
            }
            let t1 = (-h - o) / d;
            let t2 = (h - o) / d;
            t_min = t_min.max(t1.min(t2));
            t_max = t_max.min(t1.max(t2));
            if t_min > t_max {
                return None;
            }
        }

        if t_max < 0.0 {
            None
        } else {
            Some(t_min.max(0.0))
        }
    }
}

/// Position and orientation handed to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: DVec3,
    /// Rotation about +y (radians).
    pub yaw: f64,
    /// Rotation about the local x axis (radians). Only the camera uses it.
    pub pitch: f64,
}

impl Transform {
    pub fn new(position: DVec3, yaw: f64) -> Self {
        Self {
            position,
            yaw,
            pitch: 0.0,
        }
    }
}

/// Unit facing vector on the ground plane for a yaw angle.
pub fn facing_from_yaw(yaw: f64) -> DVec3 {
    DVec3::new(yaw.sin(), 0.0, yaw.cos())
}

/// Yaw that faces from `from` toward `to` on the ground plane.
pub fn yaw_towards(from: DVec3, to: DVec3) -> f64 {
    let dx = to.x - from.x;
    let dz = to.z - from.z;
    dx.atan2(dz)
}

/// Distance between two points ignoring height.
pub fn horizontal_distance(a: DVec3, b: DVec3) -> f64 {
    let dx = b.x - a.x;
    let dz = b.z - a.z;
    (dx * dx + dz * dz).sqrt()
}
