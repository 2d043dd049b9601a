//! Transfer functions and types.

use std::f32::consts::PI;

/// Easing curves applied to a normalised progress value.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Easing {
    /// Linear mapping from `a -> b`
    #[default]
    Linear,
    /// Quarter-sine mapping from `a -> b`, biased towards b ("ease-out")
    SineOut,
    /// Quarter-sine mapping from `a -> b`, biased towards a ("ease-in")
    SineIn,
}

impl Easing {
    /// Applies the easing curve to `t`.
    ///
    /// `t` is clamped between `0` and `1`.
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Self::Linear => t.clamp(0.0, 1.0),
            Self::SineOut => sine_upper(t),
            Self::SineIn => sine_lower(t),
        }
    }
}

/// Returns the "upper part" of a sine function `(0 -> π/2)`. The output is
/// normalised.
///
/// `input` is clamped between `0.0` and `1.0`.
pub fn sine_upper(input: f32) -> f32 {
    let input = input.clamp(0.0, 1.0);
    (input * PI / 2.0).sin()
}

/// Returns the "lower part" of a sine function `(-π -> 0)`. The output is
/// normalised.
///
/// `input` is clamped between `0.0` and `1.0`.
pub fn sine_lower(input: f32) -> f32 {
    let input = input.clamp(0.0, 1.0);
    (input * PI / 2.0 + PI).cos() + 1.0
}
