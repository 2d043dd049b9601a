//! A dial instance recomputed synchronously from its angle.

use super::*;
use crate::prelude::*;
use nannou::prelude::{Draw, WHITE};

/// A dial with no time-based transition state: every drawn element is a
/// pure function of the current angle. Used for the slider-driven display,
/// and for the single automatic dial, where the angle itself is the only
/// animated quantity.
///
/// Tick positions ease in over the 60° following their dial angle (the
/// synchronous stand-in for the tween dial's settling animation), and the
/// collection segment's progress is read straight from the angle's
/// position within the current hour.
pub struct ScrubDial {
    bounds: Rect,
    angle: f32,
}

impl ScrubDial {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds, angle: 0.0 }
    }

    /// Sets the dial's sweep angle. All derived values follow on the next
    /// draw; there is nothing to advance.
    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }

    /// Replaces the dial's bounds after a layout change.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// The dial's current angle in degrees.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// The hour bucket derived from the current angle.
    pub fn hour(&self) -> usize {
        hour_bucket(self.angle)
    }

    /// Draws the hand, the collection segment and all visible ticks.
    pub fn draw(&self, draw: &Draw) {
        let stroke = stroke_width(self.bounds.w());
        if stroke <= 0.0 {
            return;
        }

        let half = stroke * 0.5;
        let max_radius = self.bounds.h() * 0.5;
        let center = self.bounds.xy();
        let hour = self.hour();

        let tip = center + dial_point(self.angle, hand_length(max_radius, hour));
        draw.line()
            .start(center)
            .end(tip)
            .weight(stroke)
            .color(WHITE);

        if let Some(fraction) = collect_fraction(self.angle) {
            let mid = max_radius
                - half
                - collect_distance(max_radius, hour) * fraction;
            let start = center + dial_point(self.angle, mid - half);
            let end = center + dial_point(self.angle, mid + half);
            draw.line().start(start).end(end).weight(stroke).color(WHITE);
        }

        for index in 0..NUM_TICKS {
            if !tick_visible(index, hour) {
                continue;
            }

            let fraction = angle_to_fraction(
                self.angle,
                tick_angle(index),
                2.0 * DEGREES_PER_HOUR,
                Easing::SineOut,
            );
            let mid = max_radius
                - half
                - settle_distance(max_radius, index) * (1.0 - fraction);

            let angle_deg = tick_angle(index);
            let start = center + dial_point(angle_deg, mid - half);
            let end = center + dial_point(angle_deg, mid + half);
            draw.line().start(start).end(end).weight(stroke).color(WHITE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_derives_from_angle() {
        let mut dial = ScrubDial::new(Rect::from_x_y_w_h(0.0, 0.0, 200.0, 200.0));
        assert_eq!(dial.hour(), 0);

        dial.set_angle(365.0);
        assert_eq!(dial.hour(), 12);

        // scrubbing backwards is fine: there is no transition state to tear down
        dial.set_angle(29.0);
        assert_eq!(dial.hour(), 0);

        dial.set_angle(SWEEP_DEGREES);
        assert_eq!(dial.hour(), 0);
    }
}
