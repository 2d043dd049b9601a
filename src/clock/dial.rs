//! A dial instance animated by time-based tweens.

use super::*;
use crate::prelude::*;
use nannou::prelude::{Draw, WHITE};

/// Sentinel for an inactive transition value.
pub const INACTIVE: f32 = -1.0;

/// A dial whose tick transitions run as short tweens whenever the hour
/// bucket changes.
///
/// Hour changes are detected in [`set_angle()`][Self::set_angle()] but the
/// transition tweens are only (re)started in
/// [`advance()`][Self::advance()], decoupled through a single-slot,
/// latest-value-only channel so that several angle updates within one
/// frame start a single transition.
pub struct TweenDial {
    bounds: Rect,

    angle: f32,
    current_hour: usize,

    /// The segment sliding along the hand while a tick is collected.
    collect: Tween,
    /// Per-tick settling progress. A tick at the sentinel is hidden.
    settles: Vec<Tween>,

    hour_tx: CCSender<usize>,
    hour_rx: CCReceiver<usize>,
}

impl TweenDial {
    /// Creates a dial with all transition state at the inactive sentinel.
    pub fn new(bounds: Rect) -> Self {
        let (hour_tx, hour_rx) = bounded_channel(1);

        let collect = Tween::new(INACTIVE).with_easing(Easing::SineOut);
        let settles = (0..NUM_TICKS)
            .map(|_| Tween::new(INACTIVE).with_easing(Easing::SineOut))
            .collect();

        Self {
            bounds,

            angle: 0.0,
            current_hour: 0,

            collect,
            settles,

            hour_tx,
            hour_rx,
        }
    }

    /// Sets the dial's sweep angle, detecting hour-bucket changes.
    ///
    /// On a change, the collection segment is snapped to the sentinel
    /// *before* the new transition is queued; drawing between the change
    /// and the next [`advance()`][Self::advance()] must not show the
    /// segment at its stale position.
    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;

        let new_hour = hour_bucket(angle);
        if new_hour != self.current_hour {
            self.current_hour = new_hour;
            self.collect.snap_to(INACTIVE);
            self.send_latest_hour(new_hour);
        }
    }

    /// Advances all transition tweens by `delta_secs`, starting the
    /// transition for the most recent hour change first.
    pub fn advance(&mut self, delta_secs: f32) {
        let mut latest = None;
        while let Ok(hour) = self.hour_rx.try_recv() {
            latest = Some(hour);
        }
        if let Some(hour) = latest {
            self.start_transition(hour);
        }

        self.collect.tick(delta_secs);
        for settle in &mut self.settles {
            settle.tick(delta_secs);
        }
    }

    /// Replaces the dial's bounds after a layout change.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// The dial's current angle in degrees.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// The hour bucket derived from the last angle update.
    pub fn current_hour(&self) -> usize {
        self.current_hour
    }

    /// The collection segment's transition value (sentinel when hidden).
    pub fn collect_value(&self) -> f32 {
        self.collect.value()
    }

    /// The settling value of the tick at `index` (sentinel when hidden).
    pub fn settle_value(&self, index: usize) -> f32 {
        self.settles[index].value()
    }

    /// Draws the hand, the collection segment and any settled ticks.
    pub fn draw(&self, draw: &Draw) {
        let stroke = stroke_width(self.bounds.w());
        if stroke <= 0.0 {
            return;
        }

        let half = stroke * 0.5;
        let max_radius = self.bounds.h() * 0.5;
        let center = self.bounds.xy();
        let hour = self.current_hour;

        let tip = center + dial_point(self.angle, hand_length(max_radius, hour));
        draw.line()
            .start(center)
            .end(tip)
            .weight(stroke)
            .color(WHITE);

        let collect = self.collect.value();
        if collect != INACTIVE {
            let mid = max_radius
                - half
                - collect_distance(max_radius, hour) * collect;
            draw_radial_segment(draw, center, self.angle, mid, half, stroke);
        }

        for (index, settle) in self.settles.iter().enumerate() {
            let value = settle.value();
            if value == INACTIVE {
                continue;
            }

            let mid = max_radius
                - half
                - settle_distance(max_radius, hour) * (1.0 - value);
            draw_radial_segment(
                draw,
                center,
                tick_angle(index),
                mid,
                half,
                stroke,
            );
        }
    }

    fn start_transition(&mut self, hour: usize) {
        let duration_ms = transition_duration_ms(hour);

        if hour < NUM_TICKS {
            self.collect.snap_to(INACTIVE);
            self.settles[hour].snap_to(0.0);
            self.settles[hour].animate_to(1.0, duration_ms);
        } else {
            self.settles[hour - NUM_TICKS].snap_to(INACTIVE);
            self.collect.snap_to(COLLECT_SNAP_START);
            self.collect.animate_to(1.0, duration_ms);
        }
    }

    /// Pushes `hour` into the single-slot channel, displacing any value
    /// already queued.
    fn send_latest_hour(&self, hour: usize) {
        if self.hour_tx.try_send(hour).is_err() {
            _ = self.hour_rx.try_recv();
            _ = self.hour_tx.try_send(hour);
        }
    }
}

/// Draws one tick: a short radial segment of length `stroke` centered at
/// radius `mid` along `angle_deg`.
fn draw_radial_segment(
    draw: &Draw,
    center: Vec2,
    angle_deg: f32,
    mid: f32,
    half: f32,
    stroke: f32,
) {
    let start = center + dial_point(angle_deg, mid - half);
    let end = center + dial_point(angle_deg, mid + half);

    draw.line().start(start).end(end).weight(stroke).color(WHITE);
}
