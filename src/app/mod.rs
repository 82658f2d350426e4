//! Application-Layer: Controller, Manager, State und Commands.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod manager;
pub mod render_scene;
pub mod response_fields;
/// Sitzungszustand eines Frage-Containers
///
/// Live-Linien, Layout, Geste und Fokus.
pub mod state;

pub use command_log::CommandLog;
pub use controller::InteractionController;
pub use events::{EventOutcome, LineCommand};
pub use manager::QuestionManager;
pub use render_scene::build as build_render_scene;
pub use response_fields::ResponseFields;
pub use state::{GestureState, QuestionLayout, SessionState};
