//! Mouse callbacks, used for the slider control.

use super::*;

pub fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left
        || model.mode() != DisplayMode::SliderControl
    {
        return;
    }

    model.slider.start_drag(app.mouse.position());
}

pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    // drag_to is a no-op unless a press started on the slider
    model.slider.drag_to(pos);
}

pub fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.slider.end_drag();
    }
}
