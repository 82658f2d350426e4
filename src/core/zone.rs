//! Zonen-Matcher: liegt ein Punkt innerhalb des Toleranzradius einer Zielzone?

use super::Coordinate;
use serde::{Deserialize, Serialize};

/// Prüft, ob `point` innerhalb der Zone liegt.
///
/// Euklidischer Abstand <= Toleranzradius der Zone; der Rand zählt als Treffer.
pub fn in_zone(point: &Coordinate, zone: &Coordinate) -> bool {
    point.position().distance(zone.position()) <= zone.tolerance
}

/// Zielzonen für die beiden bewerteten Punkte einer Linie.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Ziel für den Startpunkt (bei Geraden: innerer Start-Griff)
    pub start: Coordinate,
    /// Ziel für den Endpunkt (bei Geraden: innerer End-Griff)
    pub end: Coordinate,
}

impl Zone {
    /// Erstellt ein Zonenpaar.
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end }
    }

    /// Erwartete Antwort `"x1,y1 x2,y2"` (ohne Toleranz).
    pub fn to_response_value(&self) -> String {
        format!(
            "{} {}",
            self.start.to_point_string(),
            self.end.to_point_string()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_with_zero_tolerance() {
        for (x, y) in [(0.0, 0.0), (10.0, 10.0), (123.5, 7.25)] {
            let p = Coordinate::point(x, y);
            assert!(in_zone(&p, &Coordinate::new(x, y, 0.0)));
        }
    }

    #[test]
    fn boundary_counts_as_inside() {
        let zone = Coordinate::new(10.0, 10.0, 5.0);
        assert!(in_zone(&Coordinate::point(13.0, 14.0), &zone));
        assert!(!in_zone(&Coordinate::point(13.0, 14.1), &zone));
    }

    #[test]
    fn uses_euclidean_distance_not_axis_box() {
        let zone = Coordinate::new(0.0, 0.0, 10.0);
        // Innerhalb der Bounding-Box, aber ausserhalb des Kreises
        assert!(!in_zone(&Coordinate::point(8.0, 8.0), &zone));
        assert!(in_zone(&Coordinate::point(6.0, 8.0), &zone));
    }

    #[test]
    fn only_zone_tolerance_matters() {
        let p = Coordinate::new(0.0, 0.0, 100.0);
        let zone = Coordinate::new(20.0, 0.0, 10.0);
        assert!(!in_zone(&p, &zone));
        assert!(in_zone(&zone, &p));
    }

    #[test]
    fn zone_response_value_has_no_tolerance() {
        let zone = Zone::new(
            Coordinate::new(10.0, 10.0, 12.0),
            Coordinate::new(300.0, 10.0, 12.0),
        );
        assert_eq!(zone.to_response_value(), "10,10 300,10");
    }
}
