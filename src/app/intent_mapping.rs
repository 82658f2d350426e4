//! Mapping von Eingabe-Events auf mutierende Line-Commands.

use super::{LineCommand, SessionState};
use crate::input::{key_action, InputEvent, KeyAction, LinePart};
use crate::shared::DrawLinesOptions;

/// Übersetzt ein `InputEvent` in eine Sequenz ausführbarer `LineCommand`s.
///
/// Ungültige Ziele und unbelegte Tasten ergeben eine leere Sequenz.
pub fn map_event_to_commands(
    state: &SessionState,
    options: &DrawLinesOptions,
    event: InputEvent,
) -> Vec<LineCommand> {
    match event {
        InputEvent::PointerDown { target, position } => {
            if !state.is_valid_target(&target) {
                return vec![];
            }
            let mut commands = Vec::with_capacity(2);
            if state.gesture.is_dragging() {
                // Verwaiste Geste (kein PointerUp erhalten) zuerst beenden
                commands.push(LineCommand::EndDrag);
            }
            commands.push(LineCommand::BeginDrag {
                target,
                pointer: position,
            });
            commands
        }
        InputEvent::PointerMove { position } => {
            if state.gesture.is_dragging() {
                vec![LineCommand::DragTo { pointer: position }]
            } else {
                vec![]
            }
        }
        InputEvent::PointerUp => {
            if state.gesture.is_dragging() {
                vec![LineCommand::EndDrag]
            } else {
                vec![]
            }
        }
        InputEvent::KeyDown { key } => match key_action(&key) {
            KeyAction::Move(direction) => {
                let Some(focus) = state.focus else {
                    return vec![];
                };
                let delta = direction * options.keyboard_step;
                match focus.part {
                    LinePart::Handle(handle) => vec![LineCommand::MoveHandle {
                        line: focus.line,
                        handle,
                        delta,
                    }],
                    LinePart::Body => vec![LineCommand::MoveLine {
                        line: focus.line,
                        delta,
                    }],
                }
            }
            KeyAction::Cancel if state.gesture.is_dragging() => vec![LineCommand::EndDrag],
            KeyAction::Cancel | KeyAction::Activate | KeyAction::Ignored => vec![],
        },
        InputEvent::Focus { target } => {
            if state.is_valid_target(&target) {
                vec![LineCommand::SetFocus { target }]
            } else {
                vec![]
            }
        }
        InputEvent::Blur => {
            if state.focus.is_some() {
                vec![LineCommand::ClearFocus]
            } else {
                vec![]
            }
        }
        InputEvent::ImageLoaded { width, height } => {
            let valid = width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0;
            if valid {
                vec![LineCommand::SetDropArea { width, height }]
            } else {
                log::warn!("Bildgröße {}x{} ungültig, Ereignis verworfen", width, height);
                vec![]
            }
        }
    }
}
