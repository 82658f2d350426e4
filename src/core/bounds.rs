//! Achsenparallele Begrenzungsrechtecke für Container (Ablagefläche, Home-Leiste).

use glam::DVec2;

/// Rechteck `[min.x, max.x] × [min.y, max.y]` in Bildpixeln.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    /// Erstellt ein Rechteck aus zwei Ecken.
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Rechteck `[0, max_x] × [0, max_y]`.
    pub fn from_max(max_x: f64, max_y: f64) -> Self {
        Self::new(DVec2::ZERO, DVec2::new(max_x, max_y))
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Begrenzt eine Position auf das Rechteck.
    pub fn clamp(&self, position: DVec2) -> DVec2 {
        DVec2::new(
            position.x.max(self.min.x).min(self.max.x),
            position.y.max(self.min.y).min(self.max.y),
        )
    }

    /// Prüft, ob eine Position im Rechteck liegt (Rand inklusive).
    pub fn contains(&self, position: DVec2) -> bool {
        position.x >= self.min.x
            && position.x <= self.max.x
            && position.y >= self.min.y
            && position.y <= self.max.y
    }

    /// Schnitt der unendlichen Geraden durch `a` und `b` mit dem Rechteck.
    ///
    /// Liefert die beiden Randpunkte in Richtung `a -> b`, oder `None` wenn
    /// `a == b` oder die Gerade das Rechteck verfehlt.
    pub fn clip_infinite_line(&self, a: DVec2, b: DVec2) -> Option<(DVec2, DVec2)> {
        let dir = b - a;
        if dir.length_squared() < f64::EPSILON {
            return None;
        }

        let mut t_min = f64::NEG_INFINITY;
        let mut t_max = f64::INFINITY;
        for (origin, d, lo, hi) in [
            (a.x, dir.x, self.min.x, self.max.x),
            (a.y, dir.y, self.min.y, self.max.y),
        ] {
            if d.abs() < f64::EPSILON {
                if origin < lo || origin > hi {
                    return None;
                }
                continue;
            }
            let t1 = (lo - origin) / d;
            let t2 = (hi - origin) / d;
            t_min = t_min.max(t1.min(t2));
            t_max = t_max.min(t1.max(t2));
        }

        if t_min > t_max {
            return None;
        }
        Some((a + dir * t_min, a + dir * t_max))
    }
}
