//! Zentrale Konfiguration für Interaktion und Bewertung.
//!
//! `DrawLinesOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::DEFAULT_ZONE_TOLERANCE;
use serde::{Deserialize, Serialize};

// ── Ablagefläche ────────────────────────────────────────────────────

/// Abstand zur Unterkante der Ablagefläche, ab dem eine Linie zurück nach Home wandert.
pub const HOME_RETURN_MARGIN: f64 = 20.0;

// ── Home-Leiste ─────────────────────────────────────────────────────

/// Höhe eines Slots in der Home-Leiste (eine Linie pro Slot).
pub const HOME_SLOT_HEIGHT: f64 = 50.0;
/// Länge einer Linie in ihrem Home-Slot.
pub const HOME_LINE_LENGTH: f64 = 200.0;
/// Linker Rand der Linien in der Home-Leiste.
pub const HOME_MARGIN_X: f64 = 10.0;

// ── Tastatur ────────────────────────────────────────────────────────

/// Schrittweite pro Tastendruck in Bildpixeln.
pub const KEYBOARD_STEP: f64 = 1.0;

// ── Bewertung ───────────────────────────────────────────────────────

/// Toleranz des Standard-Klassifizierers (richtig / teilweise / falsch).
pub const FRACTION_EPSILON: f64 = 1e-6;

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `drawlines.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawLinesOptions {
    // ── Zonen ───────────────────────────────────────────────────
    /// Toleranzradius für Zonen ohne `;toleranz`
    pub default_zone_tolerance: f64,

    // ── Interaktion ─────────────────────────────────────────────
    /// Rückkehr-Schwelle: Abstand zur Unterkante der Ablagefläche
    pub home_return_margin: f64,
    /// Schrittweite pro Pfeil-/WASD-Taste
    pub keyboard_step: f64,

    // ── Home-Leiste ─────────────────────────────────────────────
    /// Slot-Höhe in der Home-Leiste
    pub home_slot_height: f64,
    /// Linienlänge im Home-Slot
    pub home_line_length: f64,
    /// Linker Rand im Home-Slot
    #[serde(default = "default_home_margin_x")]
    pub home_margin_x: f64,

    // ── Bewertung ───────────────────────────────────────────────
    /// Toleranz des Standard-Klassifizierers
    #[serde(default = "default_fraction_epsilon")]
    pub fraction_epsilon: f64,
}

impl Default for DrawLinesOptions {
    fn default() -> Self {
        Self {
            default_zone_tolerance: DEFAULT_ZONE_TOLERANCE,
            home_return_margin: HOME_RETURN_MARGIN,
            keyboard_step: KEYBOARD_STEP,
            home_slot_height: HOME_SLOT_HEIGHT,
            home_line_length: HOME_LINE_LENGTH,
            home_margin_x: HOME_MARGIN_X,
            fraction_epsilon: FRACTION_EPSILON,
        }
    }
}

/// Serde-Default für `home_margin_x` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_home_margin_x() -> f64 {
    HOME_MARGIN_X
}

/// Serde-Default für `fraction_epsilon` (Abwärtskompatibilität).
fn default_fraction_epsilon() -> f64 {
    FRACTION_EPSILON
}

impl DrawLinesOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("drawlines"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("drawlines.toml")
    }

    /// Standard-Klassifizierer mit der konfigurierten Toleranz.
    pub fn classifier(&self) -> crate::grading::ThresholdClassifier {
        crate::grading::ThresholdClassifier {
            epsilon: self.fraction_epsilon,
        }
    }
}
