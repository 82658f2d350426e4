//! Linientypen und ihre Kontrollpunkt-Anzahl.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Art einer Linie.
///
/// Die Anzahl der Kontrollpunkte ist allein durch den Typ bestimmt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LineType {
    /// Strecke mit zwei Endpunkten
    #[default]
    #[serde(rename = "linesegment")]
    Segment,
    /// Strahl: zwei Endpunkte, Pfeil am Ende (Richtung nur für die Darstellung)
    #[serde(rename = "linesinglearrow")]
    Ray,
    /// Strecke mit Pfeilen an beiden Enden
    #[serde(rename = "linedoublearrows")]
    DoubleArrow,
    /// Gerade: zwei äußere Anker (Darstellung) + zwei innere Griffe (bewertet)
    #[serde(rename = "lineinfinite")]
    InfiniteLine,
}

impl LineType {
    /// Alle Linientypen in Definitionsreihenfolge.
    pub const ALL: [LineType; 4] = [
        LineType::Segment,
        LineType::Ray,
        LineType::DoubleArrow,
        LineType::InfiniteLine,
    ];

    /// Anzahl der Kontrollpunkte, die eine Linie dieses Typs hält.
    pub fn control_point_count(self) -> usize {
        match self {
            LineType::InfiniteLine => 4,
            _ => 2,
        }
    }

    /// Gibt zurück, ob die Linie abgeleitete äußere Anker besitzt.
    pub fn has_outer_anchors(self) -> bool {
        self == LineType::InfiniteLine
    }

    /// Gespeicherter Typ-Name.
    pub fn as_str(self) -> &'static str {
        match self {
            LineType::Segment => "linesegment",
            LineType::Ray => "linesinglearrow",
            LineType::DoubleArrow => "linedoublearrows",
            LineType::InfiniteLine => "lineinfinite",
        }
    }
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unbekannter Typ-Name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unbekannter Linientyp: '{0}'")]
pub struct UnknownLineType(pub String);

impl FromStr for LineType {
    type Err = UnknownLineType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LineType::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| UnknownLineType(s.to_string()))
    }
}
