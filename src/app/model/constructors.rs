//! App constructors and layout.

use super::*;

/// Builds the app window.
pub fn build_window(app: &App, width: u32, height: u32) -> Id {
    app.new_window()
        .size(width, height)
        .resizable(true)
        .key_pressed(keys::key_pressed)
        .key_released(keys::key_released)
        .mouse_pressed(mouse::mouse_pressed)
        .mouse_moved(mouse::mouse_moved)
        .mouse_released(mouse::mouse_released)
        .resized(resized)
        .view(view)
        .title("Accordion Clock")
        .build()
        .expect("failed to build app window!")
}

/// Builds one tween-animated dial per parallel lap duration.
pub fn build_parallel_clocks(window: Rect) -> Vec<AutoClock> {
    parallel_dial_bounds(window)
        .into_iter()
        .zip(PARALLEL_SWEEP_DURATIONS_MS)
        .map(|(bounds, duration_ms)| AutoClock {
            driver: SweepDriver::new(duration_ms),
            dial: TweenDial::new(bounds),
        })
        .collect()
}

/// Bounds of the parallel dials: a centered row of squares.
pub fn parallel_dial_bounds(window: Rect) -> Vec<Rect> {
    let count = PARALLEL_SWEEP_DURATIONS_MS.len();
    let cell_w = window.w() / count as f32;
    let side = cell_w.min(window.h()) * 0.9;

    (0..count)
        .map(|i| {
            let x = window.left() + cell_w * (i as f32 + 0.5);
            Rect::from_x_y_w_h(x, window.y(), side, side)
        })
        .collect()
}

/// Bounds of the slider display: two stacked dials above the slider.
pub fn slider_mode_bounds(window: Rect) -> (Rect, Rect, Rect) {
    let dial_h = ((window.h() - SLIDER_HEIGHT * 3.0) * 0.5).max(0.0);
    let side = dial_h.min(window.w()) * 0.9;

    let single = Rect::from_x_y_w_h(
        window.x(),
        window.top() - dial_h * 0.5,
        side,
        side,
    );
    let scrub = Rect::from_x_y_w_h(
        window.x(),
        window.top() - dial_h * 1.5,
        side,
        side,
    );
    let slider = Rect::from_x_y_w_h(
        window.x(),
        window.bottom() + SLIDER_HEIGHT * 1.5,
        window.w() * 0.8,
        SLIDER_HEIGHT,
    );

    (single, scrub, slider)
}
