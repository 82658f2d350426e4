//! Unveränderliche Fragedefinition und ihr Laden aus TOML.

use crate::core::{Coordinate, LineLabels, LineType, ParseError, Zone};
use anyhow::Context;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Erlaubtes Zonenformat `x,y;toleranz` (Toleranz optional, nur nicht-negative Zahlen).
const ZONE_FORMAT: &str = r"^\s*\d+(\.\d+)?\s*,\s*\d+(\.\d+)?\s*(;\s*\d+(\.\d+)?\s*)?$";

/// Bewertungsmethode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeMethod {
    /// Jeder der 2×N Punkte zählt einzeln
    #[default]
    Partial,
    /// Eine Linie zählt nur, wenn beide Punkte stimmen
    AllNone,
}

/// Welche Zone einer Linie betroffen ist (für Fehlermeldungen).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneEnd {
    Start,
    End,
}

impl std::fmt::Display for ZoneEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ZoneEnd::Start => "zone_start",
            ZoneEnd::End => "zone_end",
        })
    }
}

/// Konfigurationsfehler beim Laden einer Frage (fatal, vor jeder Interaktion).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DefinitionError {
    #[error("Frage enthält keine Linien")]
    NoLines,
    #[error("Linie {number}: {which} fehlt")]
    MissingZone { number: u32, which: ZoneEnd },
    #[error("Linie {number}: {which} '{text}' hat kein gültiges Format 'x,y;toleranz'")]
    InvalidZoneFormat {
        number: u32,
        which: ZoneEnd,
        text: String,
    },
    #[error("Linie {number}: {which} ungültig")]
    InvalidZone {
        number: u32,
        which: ZoneEnd,
        #[source]
        source: ParseError,
    },
    #[error("Linie an Position {position} hat Nummer {found}, erwartet {position}")]
    NumberMismatch { position: u32, found: u32 },
}

/// Eine Linie wie sie in der gespeicherten Fragedefinition steht.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineConfig {
    pub number: u32,
    #[serde(rename = "type", default)]
    pub line_type: LineType,
    #[serde(default, alias = "labelstart")]
    pub label_start: String,
    #[serde(default, alias = "labelmiddle")]
    pub label_middle: String,
    #[serde(default, alias = "labelend")]
    pub label_end: String,
    #[serde(default, alias = "zonestart")]
    pub zone_start: Option<String>,
    #[serde(default, alias = "zoneend")]
    pub zone_end: Option<String>,
}

/// Gespeicherte Fragedefinition (Eingabe des Fragen-Speichers).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionConfig {
    #[serde(default, alias = "grademethod")]
    pub grade_method: GradeMethod,
    #[serde(default, alias = "shownumcorrect")]
    pub show_num_correct: bool,
    #[serde(default, alias = "showmisplaced")]
    pub show_misplaced: bool,
    #[serde(default)]
    pub lines: Vec<LineConfig>,
}

/// Lesende Projektion einer Linie für die Bewertung.
#[derive(Debug, Clone, PartialEq)]
pub struct LineDefinition {
    /// Einsbasierte Anzeigenummer
    pub number: u32,
    pub line_type: LineType,
    pub labels: LineLabels,
    /// Zielzonen für Start und Ende
    pub zone: Zone,
}

/// Validierte, während eines Versuchs unveränderliche Fragedefinition.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionDefinition {
    pub lines: Vec<LineDefinition>,
    pub grade_method: GradeMethod,
    /// Feedback: Anzahl korrekter Teile anzeigen
    pub show_num_correct: bool,
    /// Feedback: falsch platzierte Linien hervorheben
    pub show_misplaced: bool,
}

/// Prüft das gespeicherte Zonenformat `x,y;toleranz`.
pub fn validate_zone_format(text: &str) -> bool {
    Regex::new(ZONE_FORMAT).is_ok_and(|re| re.is_match(text))
}

impl QuestionDefinition {
    /// Erstellt eine Definition direkt aus Linien.
    pub fn new(lines: Vec<LineDefinition>, grade_method: GradeMethod) -> Self {
        Self {
            lines,
            grade_method,
            show_num_correct: false,
            show_misplaced: false,
        }
    }

    /// Validiert eine gespeicherte Konfiguration.
    ///
    /// Fehlende oder ungültige Zonen sowie eine Nummerierung abweichend von `1..=n`
    /// sind fatal.
    pub fn from_config(
        config: &QuestionConfig,
        default_tolerance: f64,
    ) -> Result<Self, DefinitionError> {
        if config.lines.is_empty() {
            return Err(DefinitionError::NoLines);
        }

        let mut lines = Vec::with_capacity(config.lines.len());
        for (i, line) in config.lines.iter().enumerate() {
            let position = i as u32 + 1;
            if line.number != position {
                return Err(DefinitionError::NumberMismatch {
                    position,
                    found: line.number,
                });
            }

            let start = parse_zone(
                line.number,
                ZoneEnd::Start,
                line.zone_start.as_deref(),
                default_tolerance,
            )?;
            let end = parse_zone(
                line.number,
                ZoneEnd::End,
                line.zone_end.as_deref(),
                default_tolerance,
            )?;

            lines.push(LineDefinition {
                number: line.number,
                line_type: line.line_type,
                labels: LineLabels {
                    start: line.label_start.clone(),
                    middle: line.label_middle.clone(),
                    end: line.label_end.clone(),
                },
                zone: Zone::new(start, end),
            });
        }

        Ok(Self {
            lines,
            grade_method: config.grade_method,
            show_num_correct: config.show_num_correct,
            show_misplaced: config.show_misplaced,
        })
    }

    /// Parsed eine Fragedefinition aus einem TOML-String.
    pub fn from_toml_str(content: &str, default_tolerance: f64) -> anyhow::Result<Self> {
        let config: QuestionConfig =
            toml::from_str(content).context("Fragedefinition ist kein gültiges TOML")?;
        let definition = Self::from_config(&config, default_tolerance)?;
        Ok(definition)
    }

    /// Lädt eine Fragedefinition aus einer TOML-Datei.
    pub fn load_from_file(path: &std::path::Path, default_tolerance: f64) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Fragedefinition nicht lesbar: {}", path.display()))?;
        let definition = Self::from_toml_str(&content, default_tolerance)
            .with_context(|| format!("Fragedefinition fehlerhaft: {}", path.display()))?;
        log::info!(
            "Fragedefinition geladen aus {} ({} Linien, {:?})",
            path.display(),
            definition.line_count(),
            definition.grade_method
        );
        Ok(definition)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

fn parse_zone(
    number: u32,
    which: ZoneEnd,
    text: Option<&str>,
    default_tolerance: f64,
) -> Result<Coordinate, DefinitionError> {
    let text = text
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(DefinitionError::MissingZone { number, which })?;

    if !validate_zone_format(text) {
        return Err(DefinitionError::InvalidZoneFormat {
            number,
            which,
            text: text.to_string(),
        });
    }

    Coordinate::parse_with_default(text, default_tolerance)
        .map_err(|source| DefinitionError::InvalidZone {
            number,
            which,
            source,
        })
}
