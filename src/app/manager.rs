//! Question Manager: Registry von Container-ID auf Interaction Controller.

use super::{EventOutcome, InteractionController, ResponseFields};
use crate::grading::{QuestionDefinition, Response};
use crate::input::RawInputEvent;
use crate::shared::DrawLinesOptions;
use indexmap::IndexMap;
use std::sync::Arc;

/// Expliziter Kontext aller Fragen einer Seite bzw. Sitzung.
///
/// `init` ist pro Container-ID idempotent; Einträge leben bis `clear`.
#[derive(Debug)]
pub struct QuestionManager<F: ResponseFields = Response> {
    controllers: IndexMap<String, InteractionController<F>>,
}

impl<F: ResponseFields> Default for QuestionManager<F> {
    fn default() -> Self {
        Self {
            controllers: IndexMap::new(),
        }
    }
}

impl<F: ResponseFields> QuestionManager<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Controller für `container_id`.
    ///
    /// Ist die ID bereits registriert, bleibt der bestehende Controller unverändert.
    pub fn init(
        &mut self,
        container_id: &str,
        definition: Arc<QuestionDefinition>,
        drop_size: [f64; 2],
        options: DrawLinesOptions,
        fields: F,
    ) -> anyhow::Result<&mut InteractionController<F>> {
        if self.controllers.contains_key(container_id) {
            log::debug!("Frage '{}' bereits initialisiert, init ignoriert", container_id);
        } else {
            let controller =
                InteractionController::new(container_id, definition, drop_size, options, fields)?;
            self.controllers.insert(container_id.to_string(), controller);
        }

        self.controllers
            .get_mut(container_id)
            .ok_or_else(|| anyhow::anyhow!("Frage '{}' nicht registriert", container_id))
    }

    /// Leitet ein Event an den Controller seines Containers weiter.
    pub fn dispatch(&mut self, raw: RawInputEvent) -> EventOutcome {
        match self.controllers.get_mut(&raw.container_id) {
            Some(controller) => controller.handle_event(raw.event),
            None => {
                log::debug!("Event für unbekannte Frage '{}' verworfen", raw.container_id);
                EventOutcome::Ignored
            }
        }
    }

    pub fn controller(&self, container_id: &str) -> Option<&InteractionController<F>> {
        self.controllers.get(container_id)
    }

    pub fn controller_mut(&mut self, container_id: &str) -> Option<&mut InteractionController<F>> {
        self.controllers.get_mut(container_id)
    }

    pub fn contains(&self, container_id: &str) -> bool {
        self.controllers.contains_key(container_id)
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Entfernt alle Controller (Seite/Sitzung beendet).
    pub fn clear(&mut self) {
        self.controllers.clear();
    }
}
