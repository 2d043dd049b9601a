//! Project-wide exports for easy access.

pub use crate::settings::*;
pub use crate::util::*;
pub use crossbeam_channel::{
    bounded as bounded_channel, Receiver as CCReceiver, Sender as CCSender,
};
pub use nannou::prelude::{vec2, Rect, Vec2};
