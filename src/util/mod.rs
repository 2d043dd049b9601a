//! Global utility functions — these are publicly re-exported in `prelude.rs`.

pub mod general;
pub mod interp;
pub mod tween;
pub mod xfer;

pub use general::*;
pub use interp::{ilerp, lerp};
pub use tween::Tween;
pub use xfer::Easing;
