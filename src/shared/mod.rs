//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und einer Präsentationsschicht geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::DrawLinesOptions;
pub use options::{HOME_RETURN_MARGIN, KEYBOARD_STEP};
pub use render_scene::{LineView, RenderScene};
