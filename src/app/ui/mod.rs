//! A minimal immediate-mode slider control.

use super::*;

/// A horizontal slider with a continuous value in `[0, 1]`, driven by the
/// window's mouse callbacks and drawn with the same `Draw` API as the
/// dials.
pub struct Slider {
    bounds: Rect,
    value: f32,
    dragging: bool,
}

impl Slider {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds, value: 0.0, dragging: false }
    }

    /// The slider's current value in `[0, 1]`.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Sets the slider's value, clamped to `[0, 1]`.
    pub fn set_value(&mut self, value: f32) {
        self.value = value.clamp(0.0, 1.0);
    }

    /// Replaces the slider's bounds after a layout change.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Begins a drag if `pos` falls within the slider's bounds, jumping
    /// the value to the pressed position. Returns whether a drag started.
    pub fn start_drag(&mut self, pos: Vec2) -> bool {
        if !self.bounds.contains(pos) {
            return false;
        }

        self.dragging = true;
        self.set_value_from_x(pos.x);
        true
    }

    /// Updates the value from the cursor position while dragging. Returns
    /// whether the value changed.
    pub fn drag_to(&mut self, pos: Vec2) -> bool {
        if !self.dragging {
            return false;
        }

        let previous = self.value;
        self.set_value_from_x(pos.x);
        self.value != previous
    }

    /// Ends any drag in progress.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Draws the track and the handle.
    pub fn draw(&self, draw: &Draw) {
        let (left, right) = self.track_extent();
        let y = self.bounds.y();

        draw.line()
            .start(vec2(left, y))
            .end(vec2(right, y))
            .weight(3.0)
            .color(GRAY);

        let x = lerp(left, right, self.value);
        draw.ellipse()
            .x_y(x, y)
            .radius(SLIDER_HANDLE_RADIUS)
            .color(WHITE);
    }

    fn set_value_from_x(&mut self, x: f32) {
        let (left, right) = self.track_extent();
        self.value = ilerp(left, right, x).clamp(0.0, 1.0);
    }

    fn track_extent(&self) -> (f32, f32) {
        (
            self.bounds.left() + SLIDER_PADDING,
            self.bounds.right() - SLIDER_PADDING,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider() -> Slider {
        // track spans x = -84 ..= 84
        Slider::new(Rect::from_x_y_w_h(0.0, 0.0, 200.0, SLIDER_HEIGHT))
    }

    #[test]
    fn test_press_sets_value_from_position() {
        let mut slider = slider();

        assert!(slider.start_drag(vec2(0.0, 0.0)));
        assert!(within_tolerance(slider.value(), 0.5, 1e-6));

        assert!(slider.start_drag(vec2(84.0, 10.0)));
        assert!(within_tolerance(slider.value(), 1.0, 1e-6));
    }

    #[test]
    fn test_press_outside_bounds_ignored() {
        let mut slider = slider();

        assert!(!slider.start_drag(vec2(0.0, 100.0)));
        assert!(!slider.is_dragging());
        assert!(within_tolerance(slider.value(), 0.0, f32::EPSILON));
    }

    #[test]
    fn test_drag_clamps_to_track() {
        let mut slider = slider();
        slider.start_drag(vec2(0.0, 0.0));

        // dragging past either end clamps
        assert!(slider.drag_to(vec2(500.0, 0.0)));
        assert!(within_tolerance(slider.value(), 1.0, f32::EPSILON));
        assert!(slider.drag_to(vec2(-500.0, 0.0)));
        assert!(within_tolerance(slider.value(), 0.0, f32::EPSILON));
    }

    #[test]
    fn test_drag_requires_press() {
        let mut slider = slider();

        assert!(!slider.drag_to(vec2(50.0, 0.0)));
        assert!(within_tolerance(slider.value(), 0.0, f32::EPSILON));

        slider.start_drag(vec2(0.0, 0.0));
        slider.end_drag();
        assert!(!slider.drag_to(vec2(50.0, 0.0)));
    }
}
