//! Frame-driven value tween.

use super::xfer::Easing;
use crate::util::lerp;

/// A time-based interpolator between two values, advanced once per frame by
/// the frame delta. This is the stand-in for a host framework's tweening
/// primitive: it owns its duration and easing curve, and holds its final
/// value once the duration has elapsed.
#[derive(Debug, Clone)]
pub struct Tween {
    start_value: f32,
    target_value: f32,
    current_value: f32,

    duration_secs: f32,
    elapsed_secs: f32,
    active: bool,

    easing: Easing,
}

impl Tween {
    /// Creates an inactive `Tween` holding `value`.
    pub fn new(value: f32) -> Self {
        Self {
            start_value: value,
            target_value: value,
            current_value: value,

            duration_secs: 0.0,
            elapsed_secs: 0.0,
            active: false,

            easing: Easing::default(),
        }
    }

    /// Builder method to set the easing curve (see [`Easing`]).
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Immediately jumps to `value`, cancelling any running animation.
    pub fn snap_to(&mut self, value: f32) {
        self.start_value = value;
        self.target_value = value;
        self.current_value = value;
        self.elapsed_secs = 0.0;
        self.active = false;
    }

    /// Starts animating from the current value to `target_value` over
    /// `duration_ms`. A non-positive duration is equivalent to
    /// [`snap_to()`][Self::snap_to()].
    pub fn animate_to(&mut self, target_value: f32, duration_ms: f32) {
        if duration_ms <= 0.0 {
            self.snap_to(target_value);
            return;
        }

        self.start_value = self.current_value;
        self.target_value = target_value;
        self.duration_secs = duration_ms * 0.001;
        self.elapsed_secs = 0.0;
        self.active = true;
    }

    /// Advances the tween by `delta_secs` and returns the new value.
    /// Intended to be called once per frame.
    pub fn tick(&mut self, delta_secs: f32) -> f32 {
        if !self.active {
            return self.current_value;
        }

        self.elapsed_secs += delta_secs;
        let t = (self.elapsed_secs / self.duration_secs).min(1.0);
        self.current_value =
            lerp(self.start_value, self.target_value, self.easing.apply(t));

        if t >= 1.0 {
            self.active = false;
        }

        self.current_value
    }

    /// Returns the tween's current value, i.e. the last value returned by
    /// its [`tick()`][Self::tick()] method.
    pub fn value(&self) -> f32 {
        self.current_value
    }

    /// Returns the value the tween is animating towards.
    pub fn target_value(&self) -> f32 {
        self.target_value
    }

    /// Returns whether the tween is still progressing towards its target.
    pub fn is_active(&self) -> bool {
        self.active
    }
}
