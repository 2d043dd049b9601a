//! Global constants and static variables.

/// A convenience struct to allow `WINDOW_SIZE` to have `x` and `y` fields.
pub struct V2 {
    pub x: f64,
    pub y: f64,
}

/// The size of the application's window in display units.
pub const WINDOW_SIZE: V2 = V2 { x: 540.0, y: 640.0 };

/// The total sweep of the hand: two full revolutions, i.e. 24 "hours" at
/// 30° each.
pub const SWEEP_DEGREES: f32 = 720.0;

/// Degrees covered by one hour bucket.
pub const DEGREES_PER_HOUR: f32 = 30.0;

/// The number of hour buckets over a full sweep.
pub const NUM_HOURS: usize = 24;

/// The number of tick indicators around the dial.
pub const NUM_TICKS: usize = 12;

/// The dial's stroke width is derived from its pixel width divided by this.
pub const STROKE_DIVISOR: f32 = 24.0;

/// Base unit for the assembly/disassembly transition durations, in
/// milliseconds. A transition lasts `TRANSITION_UNIT_MS * hour / 2` while
/// the hand is folding in, and `TRANSITION_UNIT_MS * (24 - hour)` while it
/// is extending.
pub const TRANSITION_UNIT_MS: f32 = 50.0;

/// The progress value the collection segment snaps to before tweening to
/// `1.0`. Starting slightly above zero hides the rim-adjacent frame that
/// would otherwise flash at the tick's settled position.
pub const COLLECT_SNAP_START: f32 = 0.1;

/// Lap duration of the single automatic dial, in milliseconds.
pub const DEFAULT_SWEEP_DURATION_MS: f32 = 5000.0;

/// Lap durations of the dials shown in the parallel display mode.
pub const PARALLEL_SWEEP_DURATIONS_MS: [f32; 3] = [5000.0, 10000.0, 20000.0];

/// The height of the slider's hit region in display units.
pub const SLIDER_HEIGHT: f32 = 36.0;

/// The radius of the slider's handle in display units.
pub const SLIDER_HANDLE_RADIUS: f32 = 9.0;

/// Horizontal padding applied to the slider track within its bounds.
pub const SLIDER_PADDING: f32 = 16.0;
