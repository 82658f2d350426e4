//! Zeiger-Gesten-Zustand: `Idle -> Dragging -> Idle`.

use crate::input::LinePart;
use glam::DVec2;

/// Zustand der Drag-Geste eines Frage-Containers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// Keine Geste aktiv
    #[default]
    Idle,
    /// Drag läuft
    Dragging {
        /// Gezogene Linie
        line: usize,
        /// Griff oder ganze Linie
        part: LinePart,
        /// Zeigerposition beim Start
        origin: DVec2,
        /// Zeigerposition des letzten Frames (Bezug für das nächste Delta)
        last_pointer: DVec2,
    },
}

impl GestureState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, GestureState::Dragging { .. })
    }

    /// Index der gezogenen Linie.
    pub fn dragged_line(&self) -> Option<usize> {
        match self {
            GestureState::Dragging { line, .. } => Some(*line),
            GestureState::Idle => None,
        }
    }
}
