//! Controller-Commands und Ergebnis der Event-Verarbeitung.

use crate::core::Handle;
use crate::input::LineTarget;
use glam::DVec2;

/// Mutierender Command auf dem Sitzungszustand.
/// Wird aus einem [`crate::input::InputEvent`] abgeleitet.
#[derive(Debug, Clone, PartialEq)]
pub enum LineCommand {
    /// Drag-Geste starten (Griff oder ganze Linie)
    BeginDrag { target: LineTarget, pointer: DVec2 },
    /// Drag-Geste fortsetzen: Delta gegen die letzte Zeigerposition
    DragTo { pointer: DVec2 },
    /// Drag-Geste beenden, ohne Rücksetzen
    EndDrag,
    /// Einen Griff um ein Delta verschieben (Tastatur)
    MoveHandle {
        line: usize,
        handle: Handle,
        delta: DVec2,
    },
    /// Ganze Linie um ein Delta verschieben (Tastatur)
    MoveLine { line: usize, delta: DVec2 },
    /// Tastaturfokus setzen
    SetFocus { target: LineTarget },
    /// Tastaturfokus aufheben
    ClearFocus,
    /// Größe der Ablagefläche setzen (Bild geladen)
    SetDropArea { width: f64, height: f64 },
}

/// Was ein Event bewirkt hat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Mindestens ein Command wurde ausgeführt
    Applied,
    /// Reservierte Taste (Leertaste/Escape) ohne Wirkung
    Reserved,
    /// Unbekanntes Ziel oder unbelegte Taste, still verworfen
    Ignored,
}
