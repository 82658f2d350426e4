//! Fehlertypen für Koordinaten- und Geometrie-Parsing.

use super::LineType;
use thiserror::Error;

/// Fehler beim Parsen einer Koordinate (`"x,y"` bzw. `"x,y;toleranz"`).
///
/// Während der Bewertung wird dieser Fehler zu "nicht in der Zone" degradiert,
/// während der Interaktion wird der betroffene Schritt ignoriert.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Weniger als zwei Zahlenfelder vor dem `;`
    #[error("Koordinate '{text}' erwartet 'x,y', gefunden: {found} Feld(er)")]
    MissingField { text: String, found: usize },
    /// Mehr als zwei Zahlenfelder vor dem `;` oder mehr als ein `;`
    #[error("Koordinate '{text}' enthält zu viele Felder")]
    TooManyFields { text: String },
    /// Feld ist keine Zahl
    #[error("'{field}' ist keine Zahl")]
    NotANumber { field: String },
    /// Feld ist NaN oder unendlich
    #[error("'{field}' ist keine endliche Zahl")]
    NotFinite { field: String },
    /// Feld ist negativ (Bildkoordinaten und Toleranzen sind >= 0)
    #[error("'{field}' ist negativ")]
    Negative { field: String },
}

/// Fehler beim Befüllen eines Linien-Geometriemodells.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Einer der Punkte konnte nicht geparst werden
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Punktanzahl passt nicht zum Linientyp
    #[error("Linientyp '{line_type}' erwartet {expected} Punkte, erhalten: {actual}")]
    InvalidGeometry {
        line_type: LineType,
        expected: usize,
        actual: usize,
    },
}
