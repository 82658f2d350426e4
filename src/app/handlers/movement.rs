//! Handler für relative Bewegungen (Drag-Frame oder Tastendruck).

use super::placement;
use crate::app::{ResponseFields, SessionState};
use crate::core::Handle;
use crate::shared::DrawLinesOptions;
use glam::DVec2;

/// Verschiebt einen Griff und synchronisiert danach Container und Antwortfeld.
pub fn move_handle<F: ResponseFields>(
    state: &mut SessionState,
    fields: &mut F,
    options: &DrawLinesOptions,
    line: usize,
    handle: Handle,
    delta: DVec2,
) {
    let layout = state.layout;
    let Some(target) = state.lines.get_mut(line) else {
        return;
    };
    target.move_handle(handle, delta, layout.movement_bounds(target.container));
    placement::sync_line(state, fields, options, line);
}

/// Verschiebt die ganze Linie und synchronisiert danach Container und Antwortfeld.
pub fn move_line<F: ResponseFields>(
    state: &mut SessionState,
    fields: &mut F,
    options: &DrawLinesOptions,
    line: usize,
    delta: DVec2,
) {
    let layout = state.layout;
    let Some(target) = state.lines.get_mut(line) else {
        return;
    };
    target.move_whole(delta, layout.movement_bounds(target.container));
    placement::sync_line(state, fields, options, line);
}
