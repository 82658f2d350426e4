//! Bewertung: Vollständigkeit, Teilpunkte, Alles-oder-nichts, Zusammenfassungen.
//!
//! Fehlerhafte Antwortwerte brechen die Bewertung nie ab: betroffene Punkte
//! gelten als "nicht in der Zone".

use super::classifier::{GradeClassifier, GradedState};
use super::definition::{GradeMethod, LineDefinition, QuestionDefinition};
use super::messages::{MessageCatalog, MessageKey};
use super::response::{choice_key, graded_tokens, Response};
use crate::core::{in_zone, Coordinate};
use serde::Serialize;

/// Bewertung einer einzelnen Linie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinePlacement {
    /// Einsbasierte Anzeigenummer
    pub number: u32,
    /// Linie hat einen nicht-leeren Antwortwert
    pub attempted: bool,
    pub start_correct: bool,
    pub end_correct: bool,
}

impl LinePlacement {
    /// Anzahl korrekter Punkte (0..=2).
    pub fn parts_right(&self) -> usize {
        usize::from(self.start_correct) + usize::from(self.end_correct)
    }

    pub fn is_fully_correct(&self) -> bool {
        self.start_correct && self.end_correct
    }
}

/// Ergebnis von [`QuestionDefinition::grade_response`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeResult {
    /// Roher Bruch in `[0, 1]`
    pub fraction: f64,
    pub state: GradedState,
}

impl QuestionDefinition {
    /// Antwort-Keys `c0..c{n-1}`.
    pub fn expected_data(&self) -> Vec<String> {
        (0..self.lines.len()).map(choice_key).collect()
    }

    /// Mindestens eine Linie hat einen nicht-leeren Wert.
    ///
    /// Prüft nicht, ob *alle* Linien beantwortet sind.
    pub fn is_complete_response(&self, response: &Response) -> bool {
        (0..self.lines.len()).any(|i| response.line_value(i).is_some())
    }

    /// Identisch zu [`QuestionDefinition::is_complete_response`].
    pub fn is_gradable_response(&self, response: &Response) -> bool {
        self.is_complete_response(response)
    }

    /// Meldungsschlüssel, genau dann vorhanden wenn die Antwort nicht vollständig ist.
    pub fn validation_error(&self, response: &Response) -> Option<MessageKey> {
        (!self.is_complete_response(response)).then_some(MessageKey::PleaseDragLines)
    }

    /// Validierungstext aus dem Sprachkatalog, leer wenn die Antwort vollständig ist.
    pub fn get_validation_error(
        &self,
        response: &Response,
        catalog: &dyn MessageCatalog,
    ) -> String {
        self.validation_error(response)
            .map(|key| catalog.get_string(key))
            .unwrap_or_default()
    }

    /// Erwartete Antwort: Zonenmittelpunkte jeder Linie ohne Toleranz.
    pub fn correct_response(&self) -> Response {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| (choice_key(i), line.zone.to_response_value()))
            .collect()
    }

    /// Bewertet jede Linie einzeln.
    pub fn classify_response(&self, response: &Response) -> Vec<LinePlacement> {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| mark_line(line, response.line_value(i)))
            .collect()
    }

    /// `(korrekte Punkte, 2 × Linien)`.
    pub fn count_parts_right(&self, response: &Response) -> (usize, usize) {
        let right = self
            .classify_response(response)
            .iter()
            .map(LinePlacement::parts_right)
            .sum();
        (right, 2 * self.lines.len())
    }

    /// `(vollständig korrekte Linien, Linien)`.
    pub fn count_parts_right_all_or_none(&self, response: &Response) -> (usize, usize) {
        let right = self
            .classify_response(response)
            .iter()
            .filter(|p| p.is_fully_correct())
            .count();
        (right, self.lines.len())
    }

    /// Roher Bruch nach der Bewertungsmethode der Frage.
    pub fn fraction(&self, response: &Response) -> f64 {
        let (right, total) = match self.grade_method {
            GradeMethod::Partial => self.count_parts_right(response),
            GradeMethod::AllNone => self.count_parts_right_all_or_none(response),
        };
        if total == 0 {
            return 0.0;
        }
        right as f64 / total as f64
    }

    /// Bewertet eine Antwort und ordnet den ungerundeten Bruch ein.
    pub fn grade_response(
        &self,
        response: &Response,
        classifier: &dyn GradeClassifier,
    ) -> GradeResult {
        let fraction = self.fraction(response);
        GradeResult {
            fraction,
            state: classifier.classify(fraction),
        }
    }

    /// Summe der Brüche aller Antworten eines Versuchsverlaufs.
    ///
    /// Keine Mittelung: die Normierung auf `total_tries` erfolgt beim Aufrufer.
    pub fn compute_final_grade(&self, responses: &[Response], total_tries: usize) -> f64 {
        let sum: f64 = responses.iter().map(|r| self.fraction(r)).sum();
        log::debug!(
            "Endnote: Summe {} aus {} Antworten ({} Versuche)",
            sum,
            responses.len(),
            total_tries
        );
        sum
    }

    /// Vergleicht pro Linie beide bewerteten Punkt-Strings exakt.
    ///
    /// Fehlend und leer gelten als gleich.
    pub fn is_same_response(&self, prev: &Response, next: &Response) -> bool {
        self.lines.iter().enumerate().all(|(i, line)| {
            let a = compared_points(line, prev.line_value(i).unwrap_or_default());
            let b = compared_points(line, next.line_value(i).unwrap_or_default());
            a == b
        })
    }

    /// `"Line {n}: {a} {b}"` je beantworteter Linie, mit `", "` verbunden.
    pub fn summarise_response(&self, response: &Response) -> String {
        self.lines
            .iter()
            .enumerate()
            .filter_map(|(i, line)| {
                let value = response.line_value(i)?;
                let points = compared_points(line, value);
                Some(format!("Line {}: {}", line.number, points.join(" ")))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Zusammenfassung der erwarteten Antwort.
    pub fn right_answer_summary(&self) -> String {
        self.summarise_response(&self.correct_response())
    }

    /// Entfernt die Werte aller Linien, die nicht vollständig korrekt sind.
    pub fn clear_wrong_from_response(&self, response: &Response) -> Response {
        let mut cleared = response.clone();
        for (i, placement) in self.classify_response(response).iter().enumerate() {
            if !placement.is_fully_correct() {
                cleared.remove(&choice_key(i));
            }
        }
        cleared
    }
}

fn mark_line(line: &LineDefinition, value: Option<&str>) -> LinePlacement {
    let mut placement = LinePlacement {
        number: line.number,
        attempted: value.is_some(),
        start_correct: false,
        end_correct: false,
    };
    let Some(value) = value else {
        return placement;
    };

    let Some((start, end)) = graded_tokens(value, line.line_type) else {
        log::warn!(
            "Linie {}: Antwort '{}' hat keine zwei Punkte, zählt als falsch",
            line.number,
            value
        );
        return placement;
    };

    placement.start_correct = point_in_zone(line.number, start, &line.zone.start);
    placement.end_correct = point_in_zone(line.number, end, &line.zone.end);
    placement
}

/// Bewertete Punkt-Strings eines Werts; fehlerhafte Werte bleiben ungekürzt.
fn compared_points<'a>(line: &LineDefinition, value: &'a str) -> Vec<&'a str> {
    match graded_tokens(value, line.line_type) {
        Some((start, end)) => vec![start, end],
        None => value.split_whitespace().collect(),
    }
}

fn point_in_zone(number: u32, token: &str, zone: &Coordinate) -> bool {
    match Coordinate::parse(token) {
        Ok(point) => in_zone(&point, zone),
        Err(e) => {
            log::warn!("Linie {}: Punkt verworfen: {}", number, e);
            false
        }
    }
}
