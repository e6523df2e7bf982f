//! Task board: wires input adapters, the drag session, the completion gate
//! and an optimistic local view of the task store.

use super::{
    BeginOutcome, CommittedTransition, CompletionDialog, CompletionGate, CompletionRequest,
    DragPayload, DragSession, GateError, InputAdapter, InputModality, MoveFeedback,
    PointerAdapter, Release, TouchAdapter, TransitionDecision, TransitionOutcome,
};
use crate::{
    board::{
        domain::{Column, ColumnProjection, Grade, Point, SubjectFilter, Task, TaskId, TaskStatus},
        ports::{RegionProvider, TaskStore, TaskStoreError},
    },
    config::BoardConfig,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised by board operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The released task is not in the local view.
    #[error("task not on the board: {0}")]
    UnknownTask(TaskId),
    /// The completion gate rejected the call.
    #[error(transparent)]
    Gate(#[from] GateError),
    /// The task store failed; the local view has been rolled back.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// What a release led to.
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseOutcome {
    /// A touch tap on the task; nothing was dragged.
    Tap(TaskId),
    /// The drag ended without a drop target.
    Cancelled,
    /// The drop was routed through the completion gate.
    Transition(TransitionOutcome),
}

/// Interactive task board over a [`TaskStore`].
///
/// Commits are applied to the local view as soon as they are issued and
/// rolled back if the store rejects them, so the displayed status always
/// settles on the last committed value.
pub struct TaskBoard<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    session: DragSession,
    pointer: PointerAdapter,
    touch: TouchAdapter,
    gate: CompletionGate,
    tasks: Vec<Task>,
}

impl<S, C> TaskBoard<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates an empty board. Call [`TaskBoard::refresh`] to load tasks.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>, config: &BoardConfig) -> Self {
        Self {
            store,
            clock,
            session: DragSession::new(),
            pointer: PointerAdapter::new(config),
            touch: TouchAdapter::new(config),
            gate: CompletionGate::new(),
            tasks: Vec::new(),
        }
    }

    /// Reloads the local view from the store.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when the store cannot be listed; the
    /// previous view is kept.
    pub async fn refresh(&mut self) -> BoardResult<()> {
        self.tasks = self.store.list().await?;
        debug!(count = self.tasks.len(), "board refreshed");
        Ok(())
    }

    /// Tasks as currently displayed.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Displayed task with the given identifier.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    /// Column views of the displayed tasks.
    #[must_use]
    pub fn columns(&self, filter: SubjectFilter) -> [Column; 3] {
        ColumnProjection::project(&self.tasks, filter)
    }

    /// Current drag state, for rendering hover feedback.
    #[must_use]
    pub const fn session(&self) -> &DragSession {
        &self.session
    }

    /// Props for the confirmation surface.
    #[must_use]
    pub fn dialog(&self) -> CompletionDialog {
        self.gate.dialog()
    }

    /// Completion awaiting confirmation.
    #[must_use]
    pub const fn pending_completion(&self) -> Option<&CompletionRequest> {
        self.gate.pending()
    }

    /// Starts an interaction on a task card.
    pub fn begin(&mut self, modality: InputModality, task_id: TaskId, at: Point) -> BeginOutcome {
        self.with_adapter(modality, |adapter, session| adapter.begin(session, task_id, at))
    }

    /// Starts a native pointer drag and returns the payload to attach to it.
    pub fn pointer_drag_start(&mut self, task_id: TaskId) -> Option<DragPayload> {
        self.pointer.drag_start(&mut self.session, task_id)
    }

    /// Feeds a move sample.
    pub fn move_to(
        &mut self,
        modality: InputModality,
        at: Point,
        regions: &dyn RegionProvider,
    ) -> MoveFeedback {
        self.with_adapter(modality, |adapter, session| {
            adapter.move_to(session, at, regions)
        })
    }

    /// Ends the interaction and routes the drop through the completion gate.
    ///
    /// The drop target is read from the session before it is reset.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] when the dropped task is unknown or an
    /// immediate commit fails.
    pub async fn release(
        &mut self,
        modality: InputModality,
        at: Point,
        regions: &dyn RegionProvider,
    ) -> BoardResult<ReleaseOutcome> {
        let release = self.with_adapter(modality, |adapter, session| {
            adapter.release(session, at, regions)
        });
        self.handle_release(release).await
    }

    /// Handles a native pointer drop carrying `payload`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] when the dropped task is unknown or an
    /// immediate commit fails.
    pub async fn pointer_drop(
        &mut self,
        payload: DragPayload,
        at: Point,
        regions: &dyn RegionProvider,
    ) -> BoardResult<ReleaseOutcome> {
        let release = self
            .pointer
            .drop_with(&mut self.session, payload, at, regions);
        self.handle_release(release).await
    }

    /// Abandons the interaction. Native pointer drag-end lands here too.
    pub fn cancel(&mut self, modality: InputModality) {
        self.with_adapter(modality, |adapter, session| adapter.cancel(session));
    }

    /// Routes a resolved release.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] when the dropped task is unknown or an
    /// immediate commit fails.
    pub async fn handle_release(&mut self, release: Release) -> BoardResult<ReleaseOutcome> {
        debug!(?release, "release resolved");
        match release {
            Release::Tap { task_id } => Ok(ReleaseOutcome::Tap(task_id)),
            Release::Cancelled => Ok(ReleaseOutcome::Cancelled),
            Release::Transition { task_id, target } => self
                .transition(task_id, target)
                .await
                .map(ReleaseOutcome::Transition),
        }
    }

    /// Requests moving a task to `target` through the completion gate.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownTask`] when the task is not displayed or
    /// [`BoardError::Store`] when an immediate commit fails.
    pub async fn transition(
        &mut self,
        task_id: TaskId,
        target: TaskStatus,
    ) -> BoardResult<TransitionOutcome> {
        let task = self
            .tasks
            .iter()
            .find(|task| task.id() == task_id)
            .ok_or(BoardError::UnknownTask(task_id))?;
        match self.gate.evaluate(task, target) {
            TransitionDecision::Unchanged => Ok(TransitionOutcome::Unchanged),
            TransitionDecision::Confirm(request) => {
                Ok(TransitionOutcome::AwaitingConfirmation(request))
            }
            TransitionDecision::Commit(patch) => {
                let committed = self.commit(CommittedTransition { task_id, patch }).await?;
                Ok(TransitionOutcome::Committed(committed))
            }
        }
    }

    /// Confirms the pending completion, recording `grade` if given.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Gate`] when nothing is pending or
    /// [`BoardError::Store`] when the commit fails.
    pub async fn confirm(&mut self, grade: Option<Grade>) -> BoardResult<CommittedTransition> {
        let transition = self.gate.resolve(grade)?;
        self.commit(transition).await
    }

    /// Drops the pending completion without writing anything.
    pub fn dismiss(&mut self) -> Option<CompletionRequest> {
        self.gate.dismiss()
    }

    /// Closing the confirmation surface without confirming dismisses.
    pub fn on_open_change(&mut self, open: bool) -> Option<CompletionRequest> {
        self.gate.on_open_change(open)
    }

    fn with_adapter<T>(
        &mut self,
        modality: InputModality,
        f: impl FnOnce(&mut dyn InputAdapter, &mut DragSession) -> T,
    ) -> T {
        let adapter: &mut dyn InputAdapter = match modality {
            InputModality::Pointer => &mut self.pointer,
            InputModality::Touch => &mut self.touch,
        };
        f(adapter, &mut self.session)
    }

    async fn commit(&mut self, transition: CommittedTransition) -> BoardResult<CommittedTransition> {
        let CommittedTransition { task_id, patch } = transition;
        let slot = self
            .tasks
            .iter_mut()
            .find(|task| task.id() == task_id)
            .ok_or(BoardError::UnknownTask(task_id))?;
        let previous = slot.clone();
        slot.apply(&patch, &*self.clock);

        if let Err(err) = self.store.update(task_id, patch).await {
            warn!(task_id = %task_id, error = %err, "task store rejected transition, rolling back");
            if let Some(entry) = self.tasks.iter_mut().find(|task| task.id() == task_id) {
                *entry = previous;
            }
            return Err(err.into());
        }

        info!(task_id = %task_id, patch = ?patch, "transition committed");
        Ok(transition)
    }
}
