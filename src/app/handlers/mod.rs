//! Feature-Handler für LineCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod drag;
pub mod focus;
pub mod layout;
pub mod movement;
pub mod placement;
