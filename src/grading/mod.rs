//! Bewertung: Fragedefinition, Antworten, Teilpunkte und Endnote.
//!
//! - `definition`: unveränderliche Fragedefinition (TOML, Validierung)
//! - `response`: Antwort-Map `c{index} -> "x1,y1 x2,y2"`
//! - `engine`: Bewertungsoperationen
//! - `classifier`: Einordnung des Bruchs (richtig / teilweise / falsch)
//! - `feedback`: Hinweis-Feedback
//! - `messages`: Validierungsmeldungen

pub mod classifier;
pub mod definition;
pub mod engine;
pub mod feedback;
pub mod messages;
pub mod response;

pub use classifier::{GradeClassifier, GradedState, ThresholdClassifier};
pub use definition::{
    validate_zone_format, DefinitionError, GradeMethod, LineConfig, LineDefinition,
    QuestionConfig, QuestionDefinition, ZoneEnd,
};
pub use engine::{GradeResult, LinePlacement};
pub use feedback::HintFeedback;
pub use messages::{DefaultMessages, MessageCatalog, MessageKey};
pub use response::{choice_key, graded_tokens, Response};
