//! Schnittstelle zu den extern verwalteten Antwortfeldern (z.B. versteckte Formularfelder).

use crate::grading::Response;

/// Antwortfelder, in die der Controller die aktuelle Geometrie schreibt.
pub trait ResponseFields {
    /// Aktueller Wert eines Feldes.
    fn read_field(&self, key: &str) -> Option<String>;
    /// Überschreibt den Wert eines Feldes.
    fn write_field(&mut self, key: &str, value: &str);
}

impl ResponseFields for Response {
    fn read_field(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }

    fn write_field(&mut self, key: &str, value: &str) {
        self.set(key, value);
    }
}
