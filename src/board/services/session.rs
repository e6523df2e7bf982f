//! Drag session: the single piece of mutable drag state shared by both
//! input adapters.

use crate::board::domain::{Point, TaskId, TaskStatus};

/// Input protocol driving the current drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputModality {
    /// Native pointer drag-and-drop.
    Pointer,
    /// Drag synthesised from raw touch samples.
    Touch,
}

/// Side of the hovered card the pointer is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverPosition {
    /// Above the card's vertical midpoint.
    Above,
    /// At or below the card's vertical midpoint.
    Below,
}

/// Touch contact being tracked before and during a touch drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchTracking {
    /// Task under the finger at touch-start.
    pub task_id: TaskId,
    /// Where the finger first landed.
    pub origin: Point,
    /// Whether the contact has left the dead-zone.
    pub armed: bool,
}

/// State of the drag in progress, if any.
///
/// At most one drag exists at a time. Hover fields are only ever set while a
/// task is being dragged, and [`DragSession::reset`] clears everything at
/// once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragSession {
    dragged_task_id: Option<TaskId>,
    input_modality: Option<InputModality>,
    hover_column_status: Option<TaskStatus>,
    hover_card_id: Option<TaskId>,
    hover_position: Option<HoverPosition>,
    touch: Option<TouchTracking>,
}

impl DragSession {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Task being dragged.
    #[must_use]
    pub const fn dragged_task_id(&self) -> Option<TaskId> {
        self.dragged_task_id
    }

    /// Protocol driving the drag.
    #[must_use]
    pub const fn input_modality(&self) -> Option<InputModality> {
        self.input_modality
    }

    /// Column under the pointer or finger.
    #[must_use]
    pub const fn hover_column_status(&self) -> Option<TaskStatus> {
        self.hover_column_status
    }

    /// Card under the pointer.
    #[must_use]
    pub const fn hover_card_id(&self) -> Option<TaskId> {
        self.hover_card_id
    }

    /// Side of the hovered card, for the insertion line.
    #[must_use]
    pub const fn hover_position(&self) -> Option<HoverPosition> {
        self.hover_position
    }

    /// Touch contact being tracked.
    #[must_use]
    pub const fn touch(&self) -> Option<&TouchTracking> {
        self.touch.as_ref()
    }

    /// Returns `true` while a task is being dragged.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragged_task_id.is_some()
    }

    /// Returns `true` while a drag is active or a touch is being tracked.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.is_dragging() || self.touch.is_some()
    }

    /// Marks `task_id` as dragged with the given protocol.
    pub fn start(&mut self, task_id: TaskId, modality: InputModality) {
        self.dragged_task_id = Some(task_id);
        self.input_modality = Some(modality);
        self.clear_hover();
    }

    /// Starts tracking a touch contact without starting a drag.
    pub fn track_touch(&mut self, task_id: TaskId, origin: Point) {
        self.touch = Some(TouchTracking {
            task_id,
            origin,
            armed: false,
        });
    }

    /// Arms the tracked touch and starts the drag.
    ///
    /// Returns the dragged task the first time only; later calls, or calls
    /// without a tracked touch, return `None`.
    pub fn arm_touch(&mut self) -> Option<TaskId> {
        let tracking = self.touch.as_mut()?;
        if tracking.armed {
            return None;
        }
        tracking.armed = true;
        let task_id = tracking.task_id;
        self.start(task_id, InputModality::Touch);
        Some(task_id)
    }

    /// Sets the hovered column. Leaving every column also clears the card
    /// hover. Ignored when nothing is being dragged.
    pub fn set_hover_column(&mut self, status: Option<TaskStatus>) {
        if !self.is_dragging() {
            return;
        }
        self.hover_column_status = status;
        if status.is_none() {
            self.hover_card_id = None;
            self.hover_position = None;
        }
    }

    /// Sets the hovered card and side. Ignored when nothing is being dragged.
    pub fn set_hover_card(&mut self, card: Option<(TaskId, HoverPosition)>) {
        if !self.is_dragging() {
            return;
        }
        self.hover_card_id = card.map(|(task_id, _)| task_id);
        self.hover_position = card.map(|(_, position)| position);
    }

    /// Returns the session to empty. Resetting an empty session does nothing.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    const fn clear_hover(&mut self) {
        self.hover_column_status = None;
        self.hover_card_id = None;
        self.hover_position = None;
    }
}
