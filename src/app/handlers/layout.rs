//! Handler für Größenänderungen der Ablagefläche (Hintergrundbild geladen).

use super::placement;
use crate::app::{QuestionLayout, ResponseFields, SessionState};
use crate::core::ContainerState;
use crate::shared::DrawLinesOptions;
use glam::DVec2;

/// Setzt die Größe der Ablagefläche.
///
/// Home-Linien werden in ihre Slots der verschobenen Home-Leiste gelegt,
/// platzierte Linien in die neue Ablagefläche geklemmt und neu synchronisiert.
pub fn set_drop_area<F: ResponseFields>(
    state: &mut SessionState,
    fields: &mut F,
    options: &DrawLinesOptions,
    width: f64,
    height: f64,
) {
    let layout = QuestionLayout::new(width, height, state.lines.len(), options);
    state.layout = layout;
    log::info!("Ablagefläche {}x{} gesetzt", width, height);

    for index in 0..state.lines.len() {
        let container = state.lines[index].container;
        match container {
            ContainerState::Home => {
                let (start, end) = layout.home_slot(index, options);
                state.lines[index].set_graded_points(start, end, layout.tray_bounds());
            }
            ContainerState::Placed => {
                state.lines[index].move_whole(DVec2::ZERO, layout.drop_bounds());
                placement::sync_line(state, fields, options, index);
            }
        }
    }
}
