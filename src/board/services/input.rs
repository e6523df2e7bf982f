//! Shared contract of the pointer and touch input adapters.

use super::{DragSession, InputModality};
use crate::board::{
    domain::{Point, TaskId, TaskStatus},
    ports::RegionProvider,
};

/// Result of a `begin` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeginOutcome {
    /// A drag started immediately.
    Started,
    /// The contact is tracked but no drag has started yet.
    Tracking,
    /// Another drag or contact is already active; the call had no effect.
    Ignored,
}

/// Feedback for the host after a move sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveFeedback {
    /// Whether the host should suppress the default scroll or selection
    /// behaviour of the event.
    pub suppress_default: bool,
    /// Whether this sample turned a tracked touch into a drag.
    pub armed_now: bool,
}

/// What a release resolved to, read from the session before it was reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// A touch that never left the dead-zone. The view layer treats it as a
    /// tap on the task.
    Tap {
        /// Task that was tapped.
        task_id: TaskId,
    },
    /// Released outside every column, or nothing was being dragged.
    Cancelled,
    /// Released over a column.
    Transition {
        /// Task that was dropped.
        task_id: TaskId,
        /// Status of the column it was dropped on.
        target: TaskStatus,
    },
}

/// One input protocol translated into drag session updates.
///
/// The session is passed into every call, so both adapters write to the
/// same state and every exit path ends in [`DragSession::reset`].
pub trait InputAdapter {
    /// Protocol this adapter handles.
    fn modality(&self) -> InputModality;

    /// Handles the start of an interaction on a task card.
    fn begin(&mut self, session: &mut DragSession, task_id: TaskId, at: Point) -> BeginOutcome;

    /// Handles a move sample.
    fn move_to(
        &mut self,
        session: &mut DragSession,
        at: Point,
        regions: &dyn RegionProvider,
    ) -> MoveFeedback;

    /// Handles the end of the interaction and resets the session.
    fn release(
        &mut self,
        session: &mut DragSession,
        at: Point,
        regions: &dyn RegionProvider,
    ) -> Release;

    /// Abandons the interaction without committing anything.
    fn cancel(&mut self, session: &mut DragSession);
}
