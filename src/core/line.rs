//! Linien-Geometriemodell: Kontrollpunkte, Parsen, Verschieben, Serialisieren.

use super::coordinate::format_point;
use super::{Bounds, Coordinate, GeometryError, LineType};
use glam::DVec2;

/// Container, in dem eine Linie gerade liegt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerState {
    /// Home-Leiste: noch nicht platziert, Koordinaten ohne Bedeutung für die Bewertung
    #[default]
    Home,
    /// Auf der Ablagefläche platziert
    Placed,
}

impl ContainerState {
    /// CSS-äquivalenter Zustands-Tag für die Darstellung.
    pub fn state_tag(self) -> &'static str {
        match self {
            ContainerState::Home => "inactive",
            ContainerState::Placed => "placed",
        }
    }
}

/// Ziehbarer Griff einer Linie.
///
/// Bei Geraden bezeichnen `Start`/`End` die inneren Griffe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    Start,
    End,
}

/// Anzeigetexte einer Linie (dürfen leer sein).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineLabels {
    pub start: String,
    pub middle: String,
    pub end: String,
}

/// Eine Linie mit ihren Kontrollpunkten.
///
/// Die Anzahl der Kontrollpunkte wird durch den Typ festgelegt und ändert sich nie.
/// Bei [`LineType::InfiniteLine`] sind Index 0 und 3 äußere Anker (reine Darstellung),
/// Index 1 und 2 die bewerteten Griffe.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Nullbasierter Index (bestimmt den Antwort-Key `c{index}`)
    pub index: usize,
    /// Einsbasierte Anzeigenummer
    pub number: u32,
    line_type: LineType,
    /// Beschriftungen an Start, Mitte und Ende
    pub labels: LineLabels,
    control_points: Vec<DVec2>,
    /// Aktueller Container
    pub container: ContainerState,
}

impl Line {
    /// Erstellt eine Linie im Home-Container mit den bewerteten Punkten `start` und `end`.
    pub fn new(
        index: usize,
        number: u32,
        line_type: LineType,
        labels: LineLabels,
        start: DVec2,
        end: DVec2,
    ) -> Self {
        let control_points = if line_type.has_outer_anchors() {
            vec![start, start, end, end]
        } else {
            vec![start, end]
        };
        Self {
            index,
            number,
            line_type,
            labels,
            control_points,
            container: ContainerState::Home,
        }
    }

    pub fn line_type(&self) -> LineType {
        self.line_type
    }

    /// Index des Kontrollpunkts hinter einem Griff.
    fn handle_index(&self, handle: Handle) -> usize {
        match (self.line_type.has_outer_anchors(), handle) {
            (false, Handle::Start) => 0,
            (false, Handle::End) => 1,
            (true, Handle::Start) => 1,
            (true, Handle::End) => 2,
        }
    }

    /// Position eines Griffs.
    pub fn handle_position(&self, handle: Handle) -> DVec2 {
        self.control_points[self.handle_index(handle)]
    }

    /// Die beiden bewerteten Punkte (Start, Ende).
    pub fn graded_points(&self) -> [DVec2; 2] {
        [
            self.handle_position(Handle::Start),
            self.handle_position(Handle::End),
        ]
    }

    /// Befüllt die Kontrollpunkte aus Punkt-Strings.
    ///
    /// Geraden akzeptieren zwei Punkte (bereits auf die inneren Griffe gekürzt)
    /// oder vier (Anker, Griff, Griff, Anker). Bei einem Fehler bleibt die Linie unverändert.
    pub fn parse(&mut self, raw_points: &[&str]) -> Result<(), GeometryError> {
        let expected = self.line_type.control_point_count();
        let accepted = raw_points.len() == expected
            || (self.line_type.has_outer_anchors() && raw_points.len() == 2);
        if !accepted {
            return Err(GeometryError::InvalidGeometry {
                line_type: self.line_type,
                expected,
                actual: raw_points.len(),
            });
        }

        let points = raw_points
            .iter()
            .map(|raw| Coordinate::parse(raw).map(|c| c.position()))
            .collect::<Result<Vec<_>, _>>()?;

        self.control_points = match (self.line_type.has_outer_anchors(), points.as_slice()) {
            (true, [start, end]) => vec![*start, *start, *end, *end],
            _ => points,
        };
        Ok(())
    }

    /// Befüllt die Kontrollpunkte aus einem Antwort-Wert `"x1,y1 x2,y2"`.
    pub fn parse_response(&mut self, value: &str) -> Result<(), GeometryError> {
        let tokens: Vec<&str> = value.split_whitespace().collect();
        self.parse(&tokens)
    }

    /// Verschiebt einen Griff um `delta` und begrenzt ihn auf `bounds`.
    ///
    /// Bei Geraden werden die äußeren Anker anschließend neu abgeleitet.
    pub fn move_handle(&mut self, handle: Handle, delta: DVec2, bounds: Bounds) {
        let idx = self.handle_index(handle);
        self.control_points[idx] = bounds.clamp(self.control_points[idx] + delta);
        self.fit_anchors(bounds);
    }

    /// Verschiebt die ganze Linie um `delta`, ohne dass ein bewerteter Punkt `bounds` verlässt.
    ///
    /// Das Delta wird pro Achse so gekürzt, dass die Form erhalten bleibt.
    pub fn move_whole(&mut self, delta: DVec2, bounds: Bounds) {
        let [a, b] = self.graded_points();
        let lo = a.min(b);
        let hi = a.max(b);
        let clamped = DVec2::new(
            delta.x.max(bounds.min.x - lo.x).min(bounds.max.x - hi.x),
            delta.y.max(bounds.min.y - lo.y).min(bounds.max.y - hi.y),
        );

        for handle in [Handle::Start, Handle::End] {
            let idx = self.handle_index(handle);
            self.control_points[idx] = bounds.clamp(self.control_points[idx] + clamped);
        }
        self.fit_anchors(bounds);
    }

    /// Begrenzt beide bewerteten Punkte einzeln auf `bounds` und leitet die Anker neu ab.
    pub fn clamp_to(&mut self, bounds: Bounds) {
        for handle in [Handle::Start, Handle::End] {
            let idx = self.handle_index(handle);
            self.control_points[idx] = bounds.clamp(self.control_points[idx]);
        }
        self.fit_anchors(bounds);
    }

    /// Setzt beide bewerteten Punkte direkt (z.B. beim Einsortieren in die Home-Leiste).
    pub fn set_graded_points(&mut self, start: DVec2, end: DVec2, bounds: Bounds) {
        let start_idx = self.handle_index(Handle::Start);
        let end_idx = self.handle_index(Handle::End);
        self.control_points[start_idx] = start;
        self.control_points[end_idx] = end;
        self.fit_anchors(bounds);
    }

    /// Leitet die äußeren Anker einer Geraden neu ab, sodass sie `bounds` durchspannt.
    ///
    /// Für andere Linientypen ein No-op.
    pub fn fit_anchors(&mut self, bounds: Bounds) {
        if !self.line_type.has_outer_anchors() {
            return;
        }
        let [a, b] = self.graded_points();
        let (first, last) = bounds.clip_infinite_line(a, b).unwrap_or((a, b));
        self.control_points[0] = first;
        self.control_points[3] = last;
    }

    /// Container, der nach der Rückkehr-Regel zur aktuellen Lage gehört.
    ///
    /// Liegt der Startpunkt tiefer als `drop_area_height - margin`, gehört die Linie nach Home.
    pub fn container_for(&self, drop_area_height: f64, margin: f64) -> ContainerState {
        if self.handle_position(Handle::Start).y > drop_area_height - margin {
            ContainerState::Home
        } else {
            ContainerState::Placed
        }
    }

    /// Alle Kontrollpunkte in Zeichenreihenfolge.
    pub fn to_svg_points(&self) -> Vec<DVec2> {
        self.control_points.clone()
    }

    /// Antwort-Wert `"x1,y1 x2,y2"` der bewerteten Punkte (ohne Toleranz).
    pub fn serialize_response(&self) -> String {
        let [start, end] = self.graded_points();
        format!("{} {}", format_point(start), format_point(end))
    }
}
