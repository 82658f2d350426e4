//! Builder für Render-Szenen aus dem Sitzungszustand.

use crate::app::SessionState;
use crate::shared::{LineView, RenderScene};

/// Baut eine RenderScene aus dem aktuellen Sitzungszustand.
pub fn build(state: &SessionState) -> RenderScene {
    let dragged = state.gesture.dragged_line();
    let lines = state
        .lines
        .iter()
        .map(|line| LineView {
            index: line.index,
            number: line.number,
            line_type: line.line_type(),
            labels: line.labels.clone(),
            points: line.to_svg_points(),
            container: line.container,
            state_tag: line.container.state_tag(),
            focused: state.focus.is_some_and(|f| f.line == line.index),
            dragging: dragged == Some(line.index),
        })
        .collect();

    RenderScene {
        drop_size: [state.layout.drop_width, state.layout.drop_height],
        tray_bounds: state.layout.tray_bounds(),
        lines,
    }
}
