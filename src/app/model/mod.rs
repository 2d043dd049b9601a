//! The whole app's state.

use super::view::view;
use super::*;
use crate::clock::{ScrubDial, SweepDriver, TweenDial};
use nannou::prelude::WindowId as Id;
use ui::Slider;

mod constructors;
use constructors::*;

/// The two display modes, toggled at run time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    /// Several automatic dials sweeping in parallel at different rates.
    Parallel,
    /// One automatic dial above a slider-controlled dial.
    SliderControl,
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parallel => write!(f, "parallel animations"),
            Self::SliderControl => write!(f, "single animation"),
        }
    }
}

/// One automatically driven dial paired with its angle driver.
pub struct AutoClock {
    pub driver: SweepDriver,
    pub dial: TweenDial,
}

/// The app's model, i.e. its state.
pub struct Model {
    window: Id,
    window_rect: Rect,

    mode: DisplayMode,

    /// The independently timed dials of the parallel display.
    pub parallel: Vec<AutoClock>,

    /// The automatic dial of the slider display.
    pub single_driver: SweepDriver,
    pub single_dial: ScrubDial,

    /// The slider-controlled dial and its input control.
    pub scrub_dial: ScrubDial,
    pub slider: Slider,
}

impl Model {
    /// Builds the app's `Model`.
    ///
    /// # Panics
    ///
    /// Panics if a new window cannot be initialized.
    pub fn build(app: &App) -> Self {
        let window =
            build_window(app, WINDOW_SIZE.x as u32, WINDOW_SIZE.y as u32);
        let window_rect =
            Rect::from_w_h(WINDOW_SIZE.x as f32, WINDOW_SIZE.y as f32);

        let (single_bounds, scrub_bounds, slider_bounds) =
            slider_mode_bounds(window_rect);

        Self {
            window,
            window_rect,

            mode: DisplayMode::Parallel,

            parallel: build_parallel_clocks(window_rect),

            single_driver: SweepDriver::new(DEFAULT_SWEEP_DURATION_MS),
            single_dial: ScrubDial::new(single_bounds),

            scrub_dial: ScrubDial::new(scrub_bounds),
            slider: Slider::new(slider_bounds),
        }
    }

    /// The current display mode.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Switches between the parallel and slider displays. The animations
    /// restart, as recreated instances would.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            DisplayMode::Parallel => DisplayMode::SliderControl,
            DisplayMode::SliderControl => DisplayMode::Parallel,
        };
        self.restart();
    }

    /// Restarts the automatic animations from angle zero with cleared
    /// transition state. The slider keeps its value.
    pub fn restart(&mut self) {
        self.parallel = build_parallel_clocks(self.window_rect);
        self.single_driver.reset();
        self.single_dial.set_angle(0.0);
    }

    /// Recomputes dial and slider bounds from the current window rect.
    pub fn layout(&mut self) {
        let dial_bounds = parallel_dial_bounds(self.window_rect);
        for (clock, bounds) in self.parallel.iter_mut().zip(dial_bounds) {
            clock.dial.set_bounds(bounds);
        }

        let (single_bounds, scrub_bounds, slider_bounds) =
            slider_mode_bounds(self.window_rect);
        self.single_dial.set_bounds(single_bounds);
        self.scrub_dial.set_bounds(scrub_bounds);
        self.slider.set_bounds(slider_bounds);
    }
}

impl Updatable for Model {
    fn update(&mut self, update: &Update) {
        let delta = update.since_last.as_secs_f32();

        match self.mode {
            DisplayMode::Parallel => {
                for clock in &mut self.parallel {
                    let angle = clock.driver.tick(delta);
                    clock.dial.set_angle(angle);
                    clock.dial.advance(delta);
                }
            }
            DisplayMode::SliderControl => {
                self.single_dial.set_angle(self.single_driver.tick(delta));
                self.scrub_dial
                    .set_angle(self.slider.value() * SWEEP_DEGREES);
            }
        }
    }
}

impl Drawable for Model {
    fn draw(&self, draw: &Draw, _frame: &Frame) {
        match self.mode {
            DisplayMode::Parallel => {
                for clock in &self.parallel {
                    clock.dial.draw(draw);
                }
            }
            DisplayMode::SliderControl => {
                self.single_dial.draw(draw);
                self.scrub_dial.draw(draw);
                self.slider.draw(draw);

                draw.text("control the animation with the slider")
                    .x_y(
                        self.window_rect.x(),
                        self.window_rect.bottom() + SLIDER_HEIGHT * 2.5,
                    )
                    .w(self.window_rect.w())
                    .font_size(14)
                    .color(WHITE);
            }
        }

        let other = match self.mode {
            DisplayMode::Parallel => DisplayMode::SliderControl,
            DisplayMode::SliderControl => DisplayMode::Parallel,
        };
        draw.text(&format!("space: show {other}   r: restart"))
            .x_y(
                self.window_rect.x(),
                self.window_rect.bottom() + SLIDER_HEIGHT * 0.5,
            )
            .w(self.window_rect.w())
            .font_size(13)
            .color(GRAY);
    }
}

/// The window-resize callback. Layout is rederived from the new rect,
/// including each dial's stroke width.
pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    model.window_rect = Rect::from_w_h(size.x, size.y);
    model.layout();
}
