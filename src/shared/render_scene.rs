//! Render-Szene als expliziter Übergabevertrag zwischen Controller und Darstellung.
//!
//! Lebt im shared-Modul, da `app` sie baut und eine Präsentationsschicht sie konsumiert.

use crate::core::{Bounds, ContainerState, LineLabels, LineType};
use glam::DVec2;

/// Darstellungsdaten einer Linie.
#[derive(Debug, Clone, PartialEq)]
pub struct LineView {
    pub index: usize,
    pub number: u32,
    pub line_type: LineType,
    pub labels: LineLabels,
    /// Alle Kontrollpunkte in Zeichenreihenfolge (inkl. Anker bei Geraden)
    pub points: Vec<DVec2>,
    pub container: ContainerState,
    /// `placed` / `inactive`
    pub state_tag: &'static str,
    /// Trägt den Tastaturfokus
    pub focused: bool,
    /// Wird gerade gezogen
    pub dragging: bool,
}

/// Read-only Daten für einen Darstellungs-Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Größe der Ablagefläche [Breite, Höhe]
    pub drop_size: [f64; 2],
    /// Fläche der Home-Leiste
    pub tray_bounds: Bounds,
    pub lines: Vec<LineView>,
}

impl RenderScene {
    /// Linien eines Containers.
    pub fn lines_in(&self, container: ContainerState) -> impl Iterator<Item = &LineView> {
        self.lines.iter().filter(move |l| l.container == container)
    }
}
