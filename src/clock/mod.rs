//! Dial geometry for the 24-hour accordion clock.
//!
//! The hand sweeps through 720°: two laps of the dial, read as 24 "hours"
//! of 30° each. During the first lap the hand folds in one step per hour,
//! releasing a tick onto the rim as it goes; during the second lap it
//! extends again, collecting the ticks back one by one. Everything in this
//! module is a pure function of the current angle and the dial's pixel
//! size.

use crate::prelude::*;

pub mod dial;
pub mod driver;
pub mod scrub;

pub use dial::TweenDial;
pub use driver::SweepDriver;
pub use scrub::ScrubDial;

/// Derives the hour bucket in `[0, 23]` from an angle in degrees.
///
/// The angle is reduced modulo 720 first, so the wrap point itself maps
/// back to hour 0 (the sweep restarts, it does not reflect).
pub fn hour_bucket(angle: f32) -> usize {
    let angle = angle.rem_euclid(SWEEP_DEGREES);
    (angle / DEGREES_PER_HOUR) as usize
}

/// The radial distance covered by one hour step.
pub fn step_height(max_radius: f32) -> f32 {
    max_radius / NUM_TICKS as f32
}

/// The hand's length for the given hour bucket.
///
/// Shrinks one step per hour over the first lap, then grows back over the
/// second. The first lap starts at `11` steps rather than `12` because one
/// extra hour is spent settling the first tick.
pub fn hand_length(max_radius: f32, hour: usize) -> f32 {
    let step = step_height(max_radius);

    step * if hour < NUM_TICKS {
        (NUM_TICKS - 1 - hour) as f32
    } else {
        (hour - NUM_TICKS) as f32
    }
}

/// Returns whether the tick at `index` is visible for the given hour
/// bucket.
///
/// Ticks form a trailing window behind the hand: a tick appears once the
/// hand has passed it, and disappears again 12 hours later.
pub fn tick_visible(index: usize, hour: usize) -> bool {
    index <= hour && index + NUM_TICKS > hour
}

/// The fixed dial angle of the tick at `index`, in degrees.
pub fn tick_angle(index: usize) -> f32 {
    index as f32 * DEGREES_PER_HOUR
}

/// The radial distance a tick slides outward while settling into place
/// on the rim.
pub fn settle_distance(max_radius: f32, hour: usize) -> f32 {
    step_height(max_radius) * hour as f32
}

/// The radial distance the collection segment travels along the hand when
/// a tick is picked back up during the second lap.
pub fn collect_distance(max_radius: f32, hour: usize) -> f32 {
    step_height(max_radius) * (NUM_HOURS - hour - 1) as f32
}

/// The duration of the assembly/disassembly transition for the given hour
/// bucket, in milliseconds.
///
/// Settling ticks take longer the further they travel; collection takes
/// longer the closer the hand is to full length.
pub fn transition_duration_ms(hour: usize) -> f32 {
    if hour < NUM_TICKS {
        TRANSITION_UNIT_MS * hour as f32 / 2.0
    } else {
        TRANSITION_UNIT_MS * (NUM_HOURS - hour) as f32
    }
}

/// Maps the sweep angle onto a tick's local progress fraction in
/// `[0, 1]`, eased by `easing`.
///
/// The fraction starts rising once the hand passes `start_angle` and
/// saturates `degree_limit` degrees later.
pub fn angle_to_fraction(
    angle: f32,
    start_angle: f32,
    degree_limit: f32,
    easing: Easing,
) -> f32 {
    let current_deg = (angle - start_angle).clamp(0.0, degree_limit);
    easing.apply(current_deg / degree_limit)
}

/// The collection segment's progress fraction, derived directly from the
/// angle. `None` during the first lap, where nothing is collected.
pub fn collect_fraction(angle: f32) -> Option<f32> {
    (angle >= 360.0).then(|| (angle % DEGREES_PER_HOUR) / DEGREES_PER_HOUR)
}

/// Derives the stroke width from the dial's pixel width.
pub fn stroke_width(px_width: f32) -> f32 {
    px_width / STROKE_DIVISOR
}

/// Maps a clockwise-from-twelve angle in degrees and a radius to a point
/// in nannou's centered, y-up coordinates.
pub fn dial_point(angle_deg: f32, radius: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    vec2(radius * rad.sin(), radius * rad.cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_RADIUS: f32 = 120.0;

    #[test]
    fn test_hour_bucket_boundaries() {
        assert_eq!(hour_bucket(0.0), 0);
        assert_eq!(hour_bucket(29.9), 0);
        assert_eq!(hour_bucket(30.0), 1);
        assert_eq!(hour_bucket(359.9), 11);
        assert_eq!(hour_bucket(360.0), 12);
        assert_eq!(hour_bucket(719.9), 23);
    }

    #[test]
    fn test_hour_bucket_wraps_at_full_sweep() {
        // the sweep restarts at 720°, it never reaches hour 24
        assert_eq!(hour_bucket(720.0), 0);
        assert_eq!(hour_bucket(750.0), 1);
        assert_eq!(hour_bucket(1440.0), 0);
    }

    #[test]
    fn test_hand_length_folds_in_over_first_lap() {
        let step = step_height(MAX_RADIUS);

        let mut prev = f32::MAX;
        for hour in 0..12 {
            let len = hand_length(MAX_RADIUS, hour);
            assert!(within_tolerance(len, step * (11 - hour) as f32, 1e-4));
            assert!(len < prev);
            prev = len;
        }

        assert!(within_tolerance(
            hand_length(MAX_RADIUS, 0),
            step * 11.0,
            1e-4
        ));
        assert!(within_tolerance(hand_length(MAX_RADIUS, 11), 0.0, 1e-4));
    }

    #[test]
    fn test_hand_length_extends_over_second_lap() {
        let step = step_height(MAX_RADIUS);

        assert!(within_tolerance(hand_length(MAX_RADIUS, 12), 0.0, 1e-4));

        let mut prev = -1.0;
        for hour in 12..24 {
            let len = hand_length(MAX_RADIUS, hour);
            assert!(within_tolerance(len, step * (hour - 12) as f32, 1e-4));
            assert!(len > prev);
            prev = len;
        }
    }

    #[test]
    fn test_tick_window_trails_the_hand() {
        for hour in 0..24 {
            for index in 0..NUM_TICKS {
                let expected = index <= hour && index + 12 > hour;
                assert_eq!(tick_visible(index, hour), expected);
            }
        }
    }

    #[test]
    fn test_visible_tick_counts() {
        let count = |hour| (0..NUM_TICKS).filter(|&i| tick_visible(i, hour)).count();

        // one new tick per hour over the first lap...
        for hour in 0..12 {
            assert_eq!(count(hour), hour + 1);
        }
        // ...then one collected per hour over the second
        for hour in 12..24 {
            assert_eq!(count(hour), 23 - hour);
        }
    }

    #[test]
    fn test_tick_window_wraparound() {
        // hour 23 -> 0: all ticks gone, then the first reappears
        assert_eq!((0..NUM_TICKS).filter(|&i| tick_visible(i, 23)).count(), 0);
        let visible: Vec<usize> =
            (0..NUM_TICKS).filter(|&i| tick_visible(i, 0)).collect();
        assert_eq!(visible, vec![0]);
    }

    #[test]
    fn test_transition_durations() {
        assert!(within_tolerance(transition_duration_ms(6), 150.0, 1e-4));
        assert!(within_tolerance(transition_duration_ms(20), 200.0, 1e-4));
        assert!(within_tolerance(transition_duration_ms(0), 0.0, 1e-4));
        assert!(within_tolerance(transition_duration_ms(12), 600.0, 1e-4));
    }

    #[test]
    fn test_slider_endpoints() {
        let step = step_height(MAX_RADIUS);

        // slider 0 -> angle 0 -> full hand
        let hour = hour_bucket(0.0 * SWEEP_DEGREES);
        assert_eq!(hour, 0);
        assert!(within_tolerance(
            hand_length(MAX_RADIUS, hour),
            step * 11.0,
            1e-4
        ));

        // slider 1 -> angle 720 -> wraps back to hour 0, not 24
        assert_eq!(hour_bucket(1.0 * SWEEP_DEGREES), 0);
    }

    #[test]
    fn test_angle_to_fraction() {
        let f = |angle| angle_to_fraction(angle, 90.0, 60.0, Easing::Linear);

        assert!(within_tolerance(f(0.0), 0.0, 1e-6));
        assert!(within_tolerance(f(90.0), 0.0, 1e-6));
        assert!(within_tolerance(f(120.0), 0.5, 1e-6));
        assert!(within_tolerance(f(150.0), 1.0, 1e-6));
        // saturates once the hand has moved past the limit
        assert!(within_tolerance(f(300.0), 1.0, 1e-6));
    }

    #[test]
    fn test_collect_fraction_second_lap_only() {
        assert!(collect_fraction(0.0).is_none());
        assert!(collect_fraction(359.9).is_none());

        let f = collect_fraction(360.0).unwrap();
        assert!(within_tolerance(f, 0.0, 1e-6));
        let f = collect_fraction(375.0).unwrap();
        assert!(within_tolerance(f, 0.5, 1e-6));
    }

    #[test]
    fn test_transition_distances() {
        let step = step_height(MAX_RADIUS);

        assert!(within_tolerance(settle_distance(MAX_RADIUS, 0), 0.0, 1e-4));
        assert!(within_tolerance(
            settle_distance(MAX_RADIUS, 11),
            step * 11.0,
            1e-4
        ));
        assert!(within_tolerance(
            collect_distance(MAX_RADIUS, 12),
            step * 11.0,
            1e-4
        ));
        assert!(within_tolerance(
            collect_distance(MAX_RADIUS, 23),
            0.0,
            1e-4
        ));
    }

    #[test]
    fn test_dial_point_quadrants() {
        let r = 10.0;

        let p = dial_point(0.0, r);
        assert!(within_tolerance(p.x, 0.0, 1e-4));
        assert!(within_tolerance(p.y, r, 1e-4));

        let p = dial_point(90.0, r);
        assert!(within_tolerance(p.x, r, 1e-4));
        assert!(within_tolerance(p.y, 0.0, 1e-4));

        let p = dial_point(180.0, r);
        assert!(within_tolerance(p.x, 0.0, 1e-4));
        assert!(within_tolerance(p.y, -r, 1e-4));
    }

    #[test]
    fn test_stroke_width_from_viewport() {
        assert!(within_tolerance(stroke_width(480.0), 20.0, 1e-6));
        // a zero-sized viewport degrades to drawing nothing
        assert!(within_tolerance(stroke_width(0.0), 0.0, 1e-6));
    }
}
