//! Sitzungszustand eines Frage-Containers: zentrale Datenhaltung des Controllers.

mod gesture;
mod layout;

pub use gesture::GestureState;
pub use layout::QuestionLayout;

use super::CommandLog;
use crate::core::Line;
use crate::input::LineTarget;

/// Veränderlicher Zustand einer laufenden Bearbeitung.
///
/// Die Fragedefinition bleibt davon getrennt und unverändert.
#[derive(Debug)]
pub struct SessionState {
    /// Live-Linien in Definitionsreihenfolge
    pub lines: Vec<Line>,
    /// Größen von Ablagefläche und Home-Leiste
    pub layout: QuestionLayout,
    /// Aktive Zeiger-Geste
    pub gesture: GestureState,
    /// Tastaturfokus (Linie + Teil)
    pub focus: Option<LineTarget>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl SessionState {
    /// Erstellt einen Sitzungszustand ohne aktive Geste und ohne Fokus.
    pub fn new(lines: Vec<Line>, layout: QuestionLayout) -> Self {
        Self {
            lines,
            layout,
            gesture: GestureState::Idle,
            focus: None,
            command_log: CommandLog::new(),
        }
    }

    /// Prüft, ob ein Ziel auf eine vorhandene Linie zeigt.
    pub fn is_valid_target(&self, target: &LineTarget) -> bool {
        target.line < self.lines.len()
    }

    /// Anzahl platzierter Linien.
    pub fn placed_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| l.container == crate::core::ContainerState::Placed)
            .count()
    }
}
