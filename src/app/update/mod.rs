//! The update callback, for mutating state each frame. Not for drawing.

use super::*;

/// The app's update callback for updating state.
pub fn update(_app: &App, model: &mut Model, update: Update) {
    model.update(&update);
}
