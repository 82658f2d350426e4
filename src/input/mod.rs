//! Roh-Eingaben des Hosts: Zeiger, Tastatur, Bild geladen.
//!
//! Der Host (DOM, Toolkit, Test) übersetzt seine Events in [`InputEvent`]s;
//! der Controller kennt keine Event-Quelle.

pub mod keyboard;

pub use keyboard::{key_action, Key, KeyAction};

use crate::core::Handle;
use glam::DVec2;

/// Getroffener Teil einer Linie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePart {
    /// Ein Griff (Einzelpunkt-Drag)
    Handle(Handle),
    /// Linienkörper (Drag der ganzen Linie)
    Body,
}

/// Ziel eines Zeiger- oder Fokus-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineTarget {
    /// Nullbasierter Linienindex
    pub line: usize,
    pub part: LinePart,
}

impl LineTarget {
    pub fn new(line: usize, part: LinePart) -> Self {
        Self { line, part }
    }
}

/// Eingabe-Event eines Frage-Containers. Positionen im Rahmen der Frage
/// (Ablagefläche ab Ursprung, Home-Leiste direkt darunter).
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Zeiger/Touch gedrückt auf einem Linienteil
    PointerDown { target: LineTarget, position: DVec2 },
    /// Zeiger/Touch bewegt
    PointerMove { position: DVec2 },
    /// Zeiger/Touch losgelassen (Ende der Geste)
    PointerUp,
    /// Taste gedrückt
    KeyDown { key: Key },
    /// Tastaturfokus auf einem Linienteil
    Focus { target: LineTarget },
    /// Tastaturfokus verlassen
    Blur,
    /// Hintergrundbild geladen, Größe der Ablagefläche bekannt
    ImageLoaded { width: f64, height: f64 },
}

/// Event samt Container-ID der Frage, aus der es stammt.
#[derive(Debug, Clone, PartialEq)]
pub struct RawInputEvent {
    pub container_id: String,
    pub event: InputEvent,
}

impl RawInputEvent {
    pub fn new(container_id: impl Into<String>, event: InputEvent) -> Self {
        Self {
            container_id: container_id.into(),
            event,
        }
    }
}
