//! Interaction Controller: Zustandsmaschine eines Frage-Containers.

use super::render_scene;
use super::{EventOutcome, LineCommand, QuestionLayout, ResponseFields, SessionState};
use crate::core::{ContainerState, Line};
use crate::grading::{choice_key, QuestionDefinition, Response};
use crate::input::{key_action, InputEvent, KeyAction};
use crate::shared::{DrawLinesOptions, RenderScene};
use anyhow::ensure;
use std::sync::Arc;

/// Vermittelt Zeiger-, Tastatur- und Bild-Events an die Linien einer Frage
/// und schreibt die aktuelle Geometrie in die Antwortfelder.
#[derive(Debug)]
pub struct InteractionController<F: ResponseFields = Response> {
    container_id: String,
    definition: Arc<QuestionDefinition>,
    options: DrawLinesOptions,
    session: SessionState,
    fields: F,
}

impl<F: ResponseFields> InteractionController<F> {
    /// Erstellt einen Controller und stellt einen vorherigen Versuch aus `fields` wieder her.
    ///
    /// Linien ohne (gültigen) gespeicherten Wert liegen in ihrem Home-Slot.
    pub fn new(
        container_id: impl Into<String>,
        definition: Arc<QuestionDefinition>,
        drop_size: [f64; 2],
        options: DrawLinesOptions,
        fields: F,
    ) -> anyhow::Result<Self> {
        let [width, height] = drop_size;
        ensure!(
            width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0,
            "Ungültige Größe der Ablagefläche: {}x{}",
            width,
            height
        );

        let container_id = container_id.into();
        let layout = QuestionLayout::new(width, height, definition.line_count(), &options);
        let lines = definition
            .lines
            .iter()
            .enumerate()
            .map(|(index, def)| {
                let (start, end) = layout.home_slot(index, &options);
                let mut line = Line::new(
                    index,
                    def.number,
                    def.line_type,
                    def.labels.clone(),
                    start,
                    end,
                );
                line.fit_anchors(layout.tray_bounds());
                restore_line(&mut line, &fields, &layout, &options);
                line
            })
            .collect();

        let session = SessionState::new(lines, layout);
        log::info!(
            "Frage '{}' initialisiert: {} Linien, {} wiederhergestellt",
            container_id,
            session.lines.len(),
            session.placed_count()
        );

        Ok(Self {
            container_id,
            definition,
            options,
            session,
            fields,
        })
    }

    /// Verarbeitet ein Eingabe-Event über Event->Command Mapping.
    pub fn handle_event(&mut self, event: InputEvent) -> EventOutcome {
        let reserved = matches!(
            &event,
            InputEvent::KeyDown { key }
                if matches!(key_action(key), KeyAction::Activate | KeyAction::Cancel)
        );

        let commands =
            super::intent_mapping::map_event_to_commands(&self.session, &self.options, event);
        if commands.is_empty() {
            self.session.command_log.record_ignored();
            return if reserved {
                EventOutcome::Reserved
            } else {
                EventOutcome::Ignored
            };
        }

        for command in commands {
            self.handle_command(command);
        }
        EventOutcome::Applied
    }

    /// Führt einen mutierenden Command aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(&mut self, command: LineCommand) {
        use super::handlers;

        self.session.command_log.record(command.clone());
        let state = &mut self.session;
        let fields = &mut self.fields;
        let options = &self.options;

        match command {
            // === Drag-Geste ===
            LineCommand::BeginDrag { target, pointer } => {
                handlers::drag::begin(state, target, pointer)
            }
            LineCommand::DragTo { pointer } => {
                handlers::drag::update(state, fields, options, pointer)
            }
            LineCommand::EndDrag => handlers::drag::end(state),

            // === Tastatur ===
            LineCommand::MoveHandle {
                line,
                handle,
                delta,
            } => handlers::movement::move_handle(state, fields, options, line, handle, delta),
            LineCommand::MoveLine { line, delta } => {
                handlers::movement::move_line(state, fields, options, line, delta)
            }
            LineCommand::SetFocus { target } => handlers::focus::set(state, target),
            LineCommand::ClearFocus => handlers::focus::clear(state),

            // === Layout ===
            LineCommand::SetDropArea { width, height } => {
                handlers::layout::set_drop_area(state, fields, options, width, height)
            }
        }
    }

    /// Baut die Render-Szene aus dem aktuellen Zustand.
    pub fn build_render_scene(&self) -> RenderScene {
        render_scene::build(&self.session)
    }

    /// Antwort aus den aktuell platzierten Linien (unabhängig vom Inhalt der Felder).
    pub fn current_response(&self) -> Response {
        self.session
            .lines
            .iter()
            .filter(|line| line.container == ContainerState::Placed)
            .map(|line| (choice_key(line.index), line.serialize_response()))
            .collect()
    }

    pub fn lines(&self) -> &[Line] {
        &self.session.lines
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.session.lines.get(index)
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    pub fn definition(&self) -> &QuestionDefinition {
        &self.definition
    }

    pub fn options(&self) -> &DrawLinesOptions {
        &self.options
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }
}

/// Übernimmt einen gespeicherten Antwortwert.
///
/// Der Container folgt derselben Rückkehr-Regel wie nach einer Bewegung.
fn restore_line<F: ResponseFields>(
    line: &mut Line,
    fields: &F,
    layout: &QuestionLayout,
    options: &DrawLinesOptions,
) {
    let Some(value) = fields.read_field(&choice_key(line.index)) else {
        return;
    };
    if value.trim().is_empty() {
        return;
    }

    match line.parse_response(&value) {
        Ok(()) => {
            line.container = line.container_for(layout.drop_height, options.home_return_margin);
            match line.container {
                ContainerState::Placed => line.clamp_to(layout.drop_bounds()),
                ContainerState::Home => line.fit_anchors(layout.tray_bounds()),
            }
        }
        Err(e) => {
            log::warn!(
                "Gespeicherte Antwort für Linie {} verworfen ('{}'): {}",
                line.number,
                value,
                e
            );
        }
    }
}
