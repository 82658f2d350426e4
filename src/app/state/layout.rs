//! Geometrie des Frage-Rahmens: Ablagefläche oben, Home-Leiste direkt darunter.

use crate::core::{Bounds, ContainerState};
use crate::shared::DrawLinesOptions;
use glam::DVec2;

/// Größen des Frage-Rahmens in Bildpixeln.
///
/// Die Ablagefläche belegt `[0, w] × [0, h]`, die Home-Leiste `[0, w] × [h, h + tray]`
/// mit einem Slot pro Linie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuestionLayout {
    pub drop_width: f64,
    pub drop_height: f64,
    pub tray_height: f64,
}

impl QuestionLayout {
    /// Erstellt das Layout für `line_count` Linien.
    pub fn new(drop_width: f64, drop_height: f64, line_count: usize, options: &DrawLinesOptions) -> Self {
        Self {
            drop_width,
            drop_height,
            tray_height: line_count as f64 * options.home_slot_height,
        }
    }

    /// Ablagefläche.
    pub fn drop_bounds(&self) -> Bounds {
        Bounds::from_max(self.drop_width, self.drop_height)
    }

    /// Home-Leiste.
    pub fn tray_bounds(&self) -> Bounds {
        Bounds::new(
            DVec2::new(0.0, self.drop_height),
            DVec2::new(self.drop_width, self.drop_height + self.tray_height),
        )
    }

    /// Gesamter Rahmen (Ablagefläche + Home-Leiste).
    pub fn frame_bounds(&self) -> Bounds {
        Bounds::from_max(self.drop_width, self.drop_height + self.tray_height)
    }

    /// Bewegungsgrenzen: platzierte Linien bleiben auf der Ablagefläche,
    /// Home-Linien dürfen in die Ablagefläche gezogen werden.
    pub fn movement_bounds(&self, container: ContainerState) -> Bounds {
        match container {
            ContainerState::Placed => self.drop_bounds(),
            ContainerState::Home => self.frame_bounds(),
        }
    }

    /// Start- und Endpunkt einer Linie in ihrem Home-Slot.
    pub fn home_slot(&self, index: usize, options: &DrawLinesOptions) -> (DVec2, DVec2) {
        let y = self.drop_height + options.home_slot_height * (index as f64 + 0.5);
        let x_start = options.home_margin_x.min(self.drop_width);
        let x_end = (options.home_margin_x + options.home_line_length)
            .min(self.drop_width)
            .max(x_start);
        (DVec2::new(x_start, y), DVec2::new(x_end, y))
    }
}
