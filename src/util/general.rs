//! General-purpose utility functions.

/// Maps a value from the provided input range to the provided output range.
#[inline]
pub fn map(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    scale(normalize(value, in_min, in_max), out_min, out_max)
}

/// Scales a value to a provided range, assuming it is normalised.
///
/// Like `map()`, but with no input range.
#[inline]
pub fn scale(value: f32, min: f32, max: f32) -> f32 {
    value.mul_add(max - min, min)
}

/// Normalizes a value from a provided range.
///
/// Like `map()`, but with the output range set to `0.0 - 1.0`.
#[inline]
pub fn normalize(value: f32, min: f32, max: f32) -> f32 {
    (value - min) / (max - min)
}

/// Returns whether `value` and `target` are equal, with a tolerance of
/// `tolerance`.
#[inline]
pub fn within_tolerance(value: f32, target: f32, tolerance: f32) -> bool {
    (value - target).abs() <= tolerance
}
