use super::*;

pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        // the desktop stand-in for the original's toggle button
        Key::Space | Key::T => model.toggle_mode(),
        Key::R => model.restart(),

        _ => {}
    }
}

pub fn key_released(_app: &App, _model: &mut Model, _key: Key) {
    //
}
