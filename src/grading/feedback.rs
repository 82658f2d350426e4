//! Hinweis-Feedback für interaktive Versuche.

use super::definition::QuestionDefinition;
use super::response::Response;
use serde::Serialize;

/// Feedback nach einem falschen Versuch, abhängig von den Fragen-Flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HintFeedback {
    /// `(korrekte Punkte, Punkte gesamt)` wenn `show_num_correct` gesetzt ist
    pub num_parts_right: Option<(usize, usize)>,
    /// Nummern beantworteter, aber nicht vollständig korrekter Linien wenn `show_misplaced` gesetzt ist
    pub misplaced_lines: Vec<u32>,
}

impl QuestionDefinition {
    /// Baut das Hinweis-Feedback für eine Antwort.
    pub fn hint_feedback(&self, response: &Response) -> HintFeedback {
        let num_parts_right = self
            .show_num_correct
            .then(|| self.count_parts_right(response));

        let misplaced_lines = if self.show_misplaced {
            self.classify_response(response)
                .into_iter()
                .filter(|p| p.attempted && !p.is_fully_correct())
                .map(|p| p.number)
                .collect()
        } else {
            Vec::new()
        };

        HintFeedback {
            num_parts_right,
            misplaced_lines,
        }
    }
}
