//! Draw-Lines Question Library.
//! Liniengeometrie, Bewertung und Interaktions-Zustandsmaschine als Library exportiert.

pub mod app;
pub mod core;
pub mod grading;
pub mod input;
pub mod shared;

pub use app::{EventOutcome, InteractionController, LineCommand, QuestionManager, ResponseFields};
pub use core::{
    in_zone, Bounds, ContainerState, Coordinate, GeometryError, Handle, Line, LineLabels,
    LineType, ParseError, Zone,
};
pub use grading::{
    GradeMethod, GradeResult, GradedState, QuestionDefinition, Response, ThresholdClassifier,
};
pub use input::{InputEvent, Key, LinePart, LineTarget, RawInputEvent};
pub use shared::{DrawLinesOptions, RenderScene};
