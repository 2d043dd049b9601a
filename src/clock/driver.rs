//! The automatic angle driver.

use crate::prelude::*;

/// Produces a continuously increasing sweep angle in `[0, 720)`, advanced
/// once per frame. When the angle reaches a full sweep it restarts from
/// zero: a snap back, not a reflection.
#[derive(Debug, Clone)]
pub struct SweepDriver {
    angle: f32,
    degrees_per_sec: f32,
}

impl SweepDriver {
    /// Creates a driver which completes one full 720° sweep every
    /// `duration_ms` milliseconds.
    pub fn new(duration_ms: f32) -> Self {
        Self {
            angle: 0.0,
            degrees_per_sec: SWEEP_DEGREES / (duration_ms * 0.001),
        }
    }

    /// Advances the angle by `delta_secs` worth of sweep and returns it.
    pub fn tick(&mut self, delta_secs: f32) -> f32 {
        self.angle =
            (self.angle + self.degrees_per_sec * delta_secs) % SWEEP_DEGREES;
        self.angle
    }

    /// The driver's current angle in degrees.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Restarts the sweep from zero.
    pub fn reset(&mut self) {
        self.angle = 0.0;
    }
}
