//! Einordnung eines Bewertungsbruchs in einen Bewertungszustand.

use serde::Serialize;

/// Bewertungszustand eines Versuchs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GradedState {
    GradedRight,
    GradedPartial,
    GradedWrong,
}

/// Externe Einordnung des rohen Bruchs.
///
/// Die Bewertung ruft den Klassifizierer mit dem ungerundeten Bruch auf.
pub trait GradeClassifier {
    fn classify(&self, fraction: f64) -> GradedState;
}

/// Schwellwert-Klassifizierer: `< epsilon` falsch, `> 1 - epsilon` richtig, sonst teilweise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdClassifier {
    pub epsilon: f64,
}

impl Default for ThresholdClassifier {
    fn default() -> Self {
        Self { epsilon: 1e-6 }
    }
}

impl GradeClassifier for ThresholdClassifier {
    fn classify(&self, fraction: f64) -> GradedState {
        if fraction < self.epsilon {
            GradedState::GradedWrong
        } else if fraction > 1.0 - self.epsilon {
            GradedState::GradedRight
        } else {
            GradedState::GradedPartial
        }
    }
}
