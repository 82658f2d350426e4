//! Verlauf einer Bearbeitung: ausgeführte Line-Commands und wirkungslose Events.

use super::LineCommand;

/// Ausgeführte Commands in Reihenfolge, plus Zähler für Events ohne Command
/// (Zeiger-Frames ohne Geste, Tasten ohne Fokus, reservierte Tasten).
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<LineCommand>,
    ignored: usize,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen ausgeführten Command an; bei vollem Log fällt die ältere Hälfte weg.
    pub fn record(&mut self, command: LineCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command);
    }

    /// Zählt ein Event, das keinen Command ausgelöst hat.
    pub fn record_ignored(&mut self) {
        self.ignored += 1;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LineCommand] {
        &self.entries
    }

    /// Anzahl wirkungsloser Events seit Sitzungsbeginn.
    pub fn ignored(&self) -> usize {
        self.ignored
    }

    /// Letzte Drag-Geste als Folge `BeginDrag .. EndDrag` (ohne Abschluss, falls noch aktiv).
    pub fn last_gesture(&self) -> &[LineCommand] {
        let start = self
            .entries
            .iter()
            .rposition(|c| matches!(c, LineCommand::BeginDrag { .. }));
        let Some(start) = start else {
            return &[];
        };
        let end = self.entries[start..]
            .iter()
            .position(|c| *c == LineCommand::EndDrag)
            .map_or(self.entries.len(), |offset| start + offset + 1);
        &self.entries[start..end]
    }
}
