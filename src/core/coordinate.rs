//! Koordinaten-Primitive: `"x,y;toleranz"` parsen und serialisieren.

use super::ParseError;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Standard-Toleranzradius (Pixel), wenn eine Zonen-Definition keinen `;toleranz`-Teil hat.
pub const DEFAULT_ZONE_TOLERANCE: f64 = 10.0;

/// 2D-Koordinate im Bildpixel-Raum mit zugehörigem Toleranzradius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// X in Bildpixeln (>= 0)
    pub x: f64,
    /// Y in Bildpixeln (>= 0)
    pub y: f64,
    /// Toleranzradius in Bildpixeln (>= 0)
    pub tolerance: f64,
}

impl Coordinate {
    /// Erstellt eine Koordinate mit Toleranz.
    pub fn new(x: f64, y: f64, tolerance: f64) -> Self {
        Self { x, y, tolerance }
    }

    /// Erstellt einen reinen Punkt (Toleranz 0).
    pub fn point(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// Erstellt einen Punkt aus einer Position.
    pub fn from_position(position: DVec2) -> Self {
        Self::point(position.x, position.y)
    }

    /// Position als Vektor.
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Parsed `"x,y"` oder `"x,y;toleranz"`, fehlende Toleranz = [`DEFAULT_ZONE_TOLERANCE`].
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Self::parse_with_default(text, DEFAULT_ZONE_TOLERANCE)
    }

    /// Wie [`Coordinate::parse`], aber mit frei wählbarer Standard-Toleranz.
    pub fn parse_with_default(text: &str, default_tolerance: f64) -> Result<Self, ParseError> {
        let mut parts = text.split(';');
        let coords = parts.next().unwrap_or_default();
        let tolerance = parts.next();
        if parts.next().is_some() {
            return Err(ParseError::TooManyFields {
                text: text.to_string(),
            });
        }

        let fields: Vec<&str> = coords.split(',').collect();
        if fields.len() < 2 {
            return Err(ParseError::MissingField {
                text: text.to_string(),
                found: fields.iter().filter(|f| !f.trim().is_empty()).count(),
            });
        }
        if fields.len() > 2 {
            return Err(ParseError::TooManyFields {
                text: text.to_string(),
            });
        }

        let x = parse_number(fields[0])?;
        let y = parse_number(fields[1])?;
        let tolerance = match tolerance {
            Some(field) => parse_number(field)?,
            None => default_tolerance,
        };

        Ok(Self { x, y, tolerance })
    }

    /// Antwort-Form `"x,y"` (ohne Toleranz).
    pub fn to_point_string(&self) -> String {
        format!("{},{}", self.x, self.y)
    }

    /// Zonen-Form `"x,y;toleranz"`.
    pub fn to_zone_string(&self) -> String {
        format!("{},{};{}", self.x, self.y, self.tolerance)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_zone_string())
    }
}

impl FromStr for Coordinate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Formatiert eine Position in Antwort-Form `"x,y"`.
pub fn format_point(position: DVec2) -> String {
    Coordinate::from_position(position).to_point_string()
}

fn parse_number(field: &str) -> Result<f64, ParseError> {
    let trimmed = field.trim();
    let value: f64 = trimmed.parse().map_err(|_| ParseError::NotANumber {
        field: trimmed.to_string(),
    })?;
    if !value.is_finite() {
        return Err(ParseError::NotFinite {
            field: trimmed.to_string(),
        });
    }
    if value < 0.0 {
        return Err(ParseError::Negative {
            field: trimmed.to_string(),
        });
    }
    Ok(value)
}
