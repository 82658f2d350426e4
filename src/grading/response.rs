//! Antwort-Map `c{index} -> "x1,y1 x2,y2"`.

use crate::core::LineType;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Antwort-Key für eine Linie (nullbasierter Index).
pub fn choice_key(index: usize) -> String {
    format!("c{index}")
}

/// Antwortfelder eines Versuchs, in Einfügereihenfolge.
///
/// Ein fehlender oder leerer Wert bedeutet "nicht bearbeitet".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Response {
    fields: IndexMap<String, String>,
}

impl Response {
    /// Erstellt eine leere Antwort.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt ein Feld (überschreibt einen vorhandenen Wert).
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Setzt den Wert einer Linie.
    pub fn set_line(&mut self, index: usize, value: impl Into<String>) {
        self.set(choice_key(index), value);
    }

    /// Roher Feldwert.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Nicht-leerer Wert einer Linie, getrimmt.
    pub fn line_value(&self, index: usize) -> Option<&str> {
        self.get(&choice_key(index))
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    /// Entfernt ein Feld.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.fields.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Alle Felder in Einfügereihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Response {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Zerlegt einen Antwort-Wert in die beiden bewerteten Punkt-Strings.
///
/// Zwei Tokens werden direkt übernommen. Vier Tokens (ungekürzte SVG-Punkte einer
/// Geraden) liefern die beiden mittleren. Alles andere ist fehlerhaft.
pub fn graded_tokens(value: &str, line_type: LineType) -> Option<(&str, &str)> {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    match tokens.as_slice() {
        [start, end] => Some((*start, *end)),
        [_, start, end, _] if line_type.has_outer_anchors() => Some((*start, *end)),
        _ => None,
    }
}
