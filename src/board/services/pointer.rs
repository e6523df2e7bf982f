//! Pointer adapter over the host's native drag-and-drop lifecycle.

use super::{
    BeginOutcome, DragSession, HitTestEngine, InputAdapter, InputModality, MoveFeedback, Release,
};
use crate::{
    board::{
        domain::{Point, TaskId},
        ports::RegionProvider,
    },
    config::BoardConfig,
};
use tracing::debug;
use uuid::Uuid;

/// Data attached to a native drag operation.
///
/// The drop handler reads the task from here rather than from the session,
/// which may have been reset by an earlier drag-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPayload {
    task_id: TaskId,
}

impl DragPayload {
    /// Creates a payload for the dragged task.
    #[must_use]
    pub const fn new(task_id: TaskId) -> Self {
        Self { task_id }
    }

    /// Task carried by the drag.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Encodes the payload as plain-text transfer data.
    #[must_use]
    pub fn to_transfer_data(&self) -> String {
        self.task_id.to_string()
    }

    /// Decodes plain-text transfer data.
    ///
    /// # Errors
    ///
    /// Returns [`uuid::Error`] when the data is not a task identifier.
    pub fn from_transfer_data(data: &str) -> Result<Self, uuid::Error> {
        let uuid = Uuid::parse_str(data.trim())?;
        Ok(Self::new(TaskId::from_uuid(uuid)))
    }
}

/// Translates native drag start, over, drop and end callbacks.
#[derive(Debug, Clone, Default)]
pub struct PointerAdapter {
    card_hints: bool,
    payload: Option<DragPayload>,
}

impl PointerAdapter {
    /// Creates an adapter using the card-hint setting from `config`.
    #[must_use]
    pub const fn new(config: &BoardConfig) -> Self {
        Self {
            card_hints: config.card_hints,
            payload: None,
        }
    }

    /// Handles native drag-start.
    ///
    /// Returns the payload to attach to the drag, or `None` when another
    /// drag is already active.
    pub fn drag_start(&mut self, session: &mut DragSession, task_id: TaskId) -> Option<DragPayload> {
        if session.is_busy() {
            debug!(task_id = %task_id, "pointer drag ignored, another drag is active");
            return None;
        }
        session.start(task_id, InputModality::Pointer);
        let payload = DragPayload::new(task_id);
        self.payload = Some(payload);
        debug!(task_id = %task_id, "pointer drag started");
        Some(payload)
    }

    /// Handles a native drop at `at`, reading the task from `payload`.
    ///
    /// Resets the session whatever the outcome, unless a touch drag owns it,
    /// in which case the drop is cancelled and the touch drag carries on.
    pub fn drop_with(
        &mut self,
        session: &mut DragSession,
        payload: DragPayload,
        at: Point,
        regions: &dyn RegionProvider,
    ) -> Release {
        if session.is_busy() && !self.owns(session) {
            debug!(task_id = %payload.task_id(), "pointer drop ignored, a touch drag is active");
            return Release::Cancelled;
        }
        let target = HitTestEngine::column_at(at, &regions.column_regions());
        self.drag_end(session);
        target.map_or(Release::Cancelled, |status| Release::Transition {
            task_id: payload.task_id(),
            target: status,
        })
    }

    /// Handles native drag-end, which fires whether or not a drop happened.
    ///
    /// A session held by a touch contact is left untouched.
    pub fn drag_end(&mut self, session: &mut DragSession) {
        self.payload = None;
        if !session.is_busy() || self.owns(session) {
            session.reset();
        }
    }

    fn owns(&self, session: &DragSession) -> bool {
        session.input_modality() == Some(self.modality())
    }
}

impl InputAdapter for PointerAdapter {
    fn modality(&self) -> InputModality {
        InputModality::Pointer
    }

    fn begin(&mut self, session: &mut DragSession, task_id: TaskId, _at: Point) -> BeginOutcome {
        self.drag_start(session, task_id)
            .map_or(BeginOutcome::Ignored, |_| BeginOutcome::Started)
    }

    fn move_to(
        &mut self,
        session: &mut DragSession,
        at: Point,
        regions: &dyn RegionProvider,
    ) -> MoveFeedback {
        if !self.owns(session) {
            return MoveFeedback::default();
        }

        let column = HitTestEngine::column_at(at, &regions.column_regions());
        session.set_hover_column(column);
        if self.card_hints && column.is_some() {
            let card = HitTestEngine::card_at(
                at,
                &regions.card_regions(),
                session.dragged_task_id(),
            );
            session.set_hover_card(card);
        }

        MoveFeedback {
            suppress_default: column.is_some(),
            armed_now: false,
        }
    }

    fn release(
        &mut self,
        session: &mut DragSession,
        at: Point,
        regions: &dyn RegionProvider,
    ) -> Release {
        let Some(payload) = self.payload else {
            self.drag_end(session);
            return Release::Cancelled;
        };
        self.drop_with(session, payload, at, regions)
    }

    fn cancel(&mut self, session: &mut DragSession) {
        self.drag_end(session);
    }
}
