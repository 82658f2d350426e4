//! Handler für die Drag-Geste (`Idle -> Dragging -> Idle`).

use super::movement;
use crate::app::{GestureState, ResponseFields, SessionState};
use crate::input::{LinePart, LineTarget};
use crate::shared::DrawLinesOptions;
use glam::DVec2;

/// Startet eine Drag-Geste auf einem Griff oder dem Linienkörper.
pub fn begin(state: &mut SessionState, target: LineTarget, pointer: DVec2) {
    state.gesture = GestureState::Dragging {
        line: target.line,
        part: target.part,
        origin: pointer,
        last_pointer: pointer,
    };
}

/// Wendet einen Zeiger-Frame an. Das Delta bezieht sich auf den vorherigen Frame,
/// nicht auf den Drag-Start.
pub fn update<F: ResponseFields>(
    state: &mut SessionState,
    fields: &mut F,
    options: &DrawLinesOptions,
    pointer: DVec2,
) {
    if !pointer.is_finite() {
        log::debug!("Drag-Frame mit ungültiger Zeigerposition verworfen");
        return;
    }
    let GestureState::Dragging {
        line,
        part,
        last_pointer,
        ..
    } = &mut state.gesture
    else {
        return;
    };

    let delta = pointer - *last_pointer;
    *last_pointer = pointer;
    let (line, part) = (*line, *part);

    match part {
        LinePart::Handle(handle) => {
            movement::move_handle(state, fields, options, line, handle, delta)
        }
        LinePart::Body => movement::move_line(state, fields, options, line, delta),
    }
}

/// Beendet die Geste. Die zuletzt berechnete Position bleibt bestehen.
pub fn end(state: &mut SessionState) {
    if let GestureState::Dragging {
        line,
        origin,
        last_pointer,
        ..
    } = state.gesture
    {
        log::debug!(
            "Drag auf Linie {} beendet ({:.1} px Zeigerweg)",
            line,
            origin.distance(last_pointer)
        );
    }
    state.gesture = GestureState::Idle;
}
