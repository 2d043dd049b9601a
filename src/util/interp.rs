//! Interpolation functions.

use std::f32::consts::PI;

/// Shorthand for the `linear` function.
///
/// `t` is clamped between `0` and `1`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    linear(a, b, t)
}

/// Linearly interpolates between `a` and `b` based on the value of `t`.
///
/// `t` is clamped between `0` and `1`.
pub fn linear(a: f32, b: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t == 0.0 {
        return a;
    } else if t == 1.0 {
        return b;
    }

    t.mul_add(b - a, a)
}

/// Linearly interpolates between `a` and `b` based on the value of `t`.
///
/// The output may be an extrapolation of the input if `t` exceeds `0` or `1`.
pub fn linear_unclamped(a: f32, b: f32, t: f32) -> f32 {
    t.mul_add(b - a, a)
}

/// "Inverse linear interpolation": finds the interpolation value
/// within a range.
pub fn ilerp(a: f32, b: f32, val: f32) -> f32 {
    if b == a {
        return 0.0;
    }

    (val - a) / (b - a)
}

/// Interpolates between `a` and `b` based on the value of `t`, using
/// a cosine wave as the transfer function.
///
/// `t` is clamped between `0` and `1`.
pub fn cosine(a: f32, b: f32, t: f32) -> f32 {
    let t = (1.0 - (PI * t.clamp(0.0, 1.0)).cos()) * 0.5;

    linear(a, b, t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::within_tolerance;

    #[test]
    fn test_linear_interp() {
        assert!(within_tolerance(linear(0.0, 10.0, 0.5), 5.0, f32::EPSILON));
        assert!(within_tolerance(linear(-1.0, 1.0, 0.25), -0.5, f32::EPSILON));
        // clamped at the ends
        assert!(within_tolerance(linear(0.0, 10.0, 1.5), 10.0, f32::EPSILON));
        assert!(within_tolerance(linear(0.0, 10.0, -0.5), 0.0, f32::EPSILON));
    }

    #[test]
    fn test_linear_unclamped_extrapolates() {
        assert!(within_tolerance(
            linear_unclamped(0.0, 10.0, 1.5),
            15.0,
            f32::EPSILON
        ));
    }

    #[test]
    fn test_ilerp_inverts_lerp() {
        let t = 0.35;
        let v = linear(2.0, 8.0, t);
        assert!(within_tolerance(ilerp(2.0, 8.0, v), t, 1e-6));
        // degenerate range
        assert!(within_tolerance(ilerp(3.0, 3.0, 5.0), 0.0, f32::EPSILON));
    }

    #[test]
    fn test_cosine_interp() {
        assert!(within_tolerance(cosine(0.0, 1.0, 0.0), 0.0, 1e-6));
        assert!(within_tolerance(cosine(0.0, 1.0, 0.5), 0.5, 1e-6));
        assert!(within_tolerance(cosine(0.0, 1.0, 1.0), 1.0, 1e-6));
    }
}
