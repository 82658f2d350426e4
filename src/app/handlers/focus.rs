//! Handler für den Tastaturfokus.

use crate::app::SessionState;
use crate::input::LineTarget;

pub fn set(state: &mut SessionState, target: LineTarget) {
    state.focus = Some(target);
}

pub fn clear(state: &mut SessionState) {
    state.focus = None;
}
