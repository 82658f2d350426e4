//! Container-Zuordnung nach jeder Bewegung und Schreiben des Antwortfelds.

use crate::app::{ResponseFields, SessionState};
use crate::core::ContainerState;
use crate::grading::choice_key;
use crate::shared::DrawLinesOptions;

/// Leitet den Container einer Linie neu ab, passt die Anker an und schreibt das Antwortfeld.
///
/// Platzierte Linien werden vorher vollständig auf die Ablagefläche begrenzt.
///
/// - platziert: `"x1,y1 x2,y2"`
/// - platziert -> Home: leerer String
/// - Home -> Home: Feld bleibt unberührt
pub fn sync_line<F: ResponseFields>(
    state: &mut SessionState,
    fields: &mut F,
    options: &DrawLinesOptions,
    index: usize,
) {
    let layout = state.layout;
    let Some(line) = state.lines.get_mut(index) else {
        return;
    };

    let previous = line.container;
    let next = line.container_for(layout.drop_height, options.home_return_margin);
    if previous != next {
        log::debug!("Linie {}: {:?} -> {:?}", line.number, previous, next);
        line.container = next;
    }
    match next {
        ContainerState::Placed => line.clamp_to(layout.drop_bounds()),
        ContainerState::Home => line.fit_anchors(layout.tray_bounds()),
    }

    let key = choice_key(line.index);
    match (previous, next) {
        (_, ContainerState::Placed) => fields.write_field(&key, &line.serialize_response()),
        (ContainerState::Placed, ContainerState::Home) => fields.write_field(&key, ""),
        (ContainerState::Home, ContainerState::Home) => {}
    }
}
