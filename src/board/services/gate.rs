//! Completion gate: status transitions into `done` wait for confirmation.
//!
//! Moving a task to any other column commits straight away. Moving it into
//! `done` raises a [`CompletionRequest`] instead; nothing is written until
//! the user confirms, optionally attaching a grade. Dismissing the request
//! writes nothing at all.

use crate::board::{
    domain::{ActivityType, Grade, Task, TaskId, TaskPatch, TaskStatus},
    ports::{TaskStore, TaskStoreError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Pending confirmation for a transition into `done`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// Task awaiting completion.
    pub task_id: TaskId,
    /// Task title shown on the confirmation surface.
    pub title: String,
    /// Task category shown on the confirmation surface.
    pub activity_type: ActivityType,
}

impl CompletionRequest {
    fn for_task(task: &Task) -> Self {
        Self {
            task_id: task.id(),
            title: task.title().to_owned(),
            activity_type: task.activity_type(),
        }
    }
}

/// What a requested transition calls for.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionDecision {
    /// The task is already in the target status.
    Unchanged,
    /// Commit the patch now.
    Commit(TaskPatch),
    /// Hold the transition until the user confirms completion.
    Confirm(CompletionRequest),
}

/// Pure transition rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransitionGate;

impl TransitionGate {
    /// Decides how moving `task` to `target` is handled.
    ///
    /// Entering `done` needs confirmation; leaving it, or any other move,
    /// commits immediately.
    #[must_use]
    pub fn decide(task: &Task, target: TaskStatus) -> TransitionDecision {
        if task.status() == target {
            TransitionDecision::Unchanged
        } else if target.is_done() {
            TransitionDecision::Confirm(CompletionRequest::for_task(task))
        } else {
            TransitionDecision::Commit(TaskPatch::status(target))
        }
    }
}

/// Props for the confirmation surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionDialog {
    /// Whether the surface is shown.
    pub open: bool,
    /// Title of the task being completed; empty when closed.
    pub activity_title: String,
    /// Category of the task being completed.
    pub activity_type: Option<ActivityType>,
}

/// Errors raised by the completion gate.
#[derive(Debug, Error)]
pub enum GateError {
    /// `confirm` was called with no completion awaiting confirmation.
    #[error("no completion is awaiting confirmation")]
    NothingPending,
    /// The task store rejected the commit.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// A patch that was handed to the task store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommittedTransition {
    /// Updated task.
    pub task_id: TaskId,
    /// Fields that were written.
    pub patch: TaskPatch,
}

/// Result of requesting a transition through the gate.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionOutcome {
    /// Nothing to do.
    Unchanged,
    /// The transition was committed.
    Committed(CommittedTransition),
    /// The transition is suspended until confirmed or dismissed.
    AwaitingConfirmation(CompletionRequest),
}

/// Holds at most one suspended completion.
///
/// This type never talks to the store; [`CompletionGateService`] and the
/// task board build on it to commit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionGate {
    pending: Option<CompletionRequest>,
}

impl CompletionGate {
    /// Creates a gate with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Completion awaiting confirmation.
    #[must_use]
    pub const fn pending(&self) -> Option<&CompletionRequest> {
        self.pending.as_ref()
    }

    /// Decides the transition and suspends it when it needs confirmation.
    ///
    /// A new request replaces any earlier one, which is dropped without
    /// writing anything.
    pub fn evaluate(&mut self, task: &Task, target: TaskStatus) -> TransitionDecision {
        let decision = TransitionGate::decide(task, target);
        debug!(task_id = %task.id(), from = %task.status(), to = %target, ?decision, "transition evaluated");
        if let TransitionDecision::Confirm(request) = &decision {
            if let Some(replaced) = self.pending.replace(request.clone()) {
                debug!(task_id = %replaced.task_id, "pending completion replaced");
            }
        }
        decision
    }

    /// Takes the pending completion and builds the patch to commit.
    ///
    /// Without a grade, only the status is written and any existing grade is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::NothingPending`] when nothing awaits
    /// confirmation.
    pub fn resolve(&mut self, grade: Option<Grade>) -> Result<CommittedTransition, GateError> {
        let request = self.pending.take().ok_or(GateError::NothingPending)?;
        Ok(CommittedTransition {
            task_id: request.task_id,
            patch: TaskPatch::completion(grade),
        })
    }

    /// Drops the pending completion without writing anything.
    pub fn dismiss(&mut self) -> Option<CompletionRequest> {
        let dismissed = self.pending.take();
        if let Some(request) = &dismissed {
            debug!(task_id = %request.task_id, "completion dismissed");
        }
        dismissed
    }

    /// Mirrors the confirmation surface's open-state callback: closing it
    /// without confirming dismisses the request.
    pub fn on_open_change(&mut self, open: bool) -> Option<CompletionRequest> {
        if open { None } else { self.dismiss() }
    }

    /// Props for the confirmation surface.
    #[must_use]
    pub fn dialog(&self) -> CompletionDialog {
        self.pending
            .as_ref()
            .map_or_else(CompletionDialog::default, |request| CompletionDialog {
                open: true,
                activity_title: request.title.clone(),
                activity_type: Some(request.activity_type),
            })
    }
}

/// Completion gate wired straight to a task store.
#[derive(Debug)]
pub struct CompletionGateService<S>
where
    S: TaskStore,
{
    store: Arc<S>,
    gate: CompletionGate,
}

impl<S> CompletionGateService<S>
where
    S: TaskStore,
{
    /// Creates a service committing to `store`.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            gate: CompletionGate::new(),
        }
    }

    /// Completion awaiting confirmation.
    #[must_use]
    pub const fn pending(&self) -> Option<&CompletionRequest> {
        self.gate.pending()
    }

    /// Props for the confirmation surface.
    #[must_use]
    pub fn dialog(&self) -> CompletionDialog {
        self.gate.dialog()
    }

    /// Requests moving `task` to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Store`] when an immediate commit fails.
    pub async fn request_transition(
        &mut self,
        task: &Task,
        target: TaskStatus,
    ) -> Result<TransitionOutcome, GateError> {
        match self.gate.evaluate(task, target) {
            TransitionDecision::Unchanged => Ok(TransitionOutcome::Unchanged),
            TransitionDecision::Confirm(request) => {
                Ok(TransitionOutcome::AwaitingConfirmation(request))
            }
            TransitionDecision::Commit(patch) => {
                let committed = self
                    .commit(CommittedTransition {
                        task_id: task.id(),
                        patch,
                    })
                    .await?;
                Ok(TransitionOutcome::Committed(committed))
            }
        }
    }

    /// Confirms the pending completion, recording `grade` if given.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::NothingPending`] when nothing awaits
    /// confirmation, or [`GateError::Store`] when the commit fails. The
    /// request is cleared either way.
    pub async fn confirm(&mut self, grade: Option<Grade>) -> Result<CommittedTransition, GateError> {
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

    async fn commit(
        &self,
        transition: CommittedTransition,
    ) -> Result<CommittedTransition, GateError> {
        if let Err(err) = self.store.update(transition.task_id, transition.patch).await {
            warn!(task_id = %transition.task_id, error = %err, "task store rejected transition");
            return Err(err.into());
        }
        info!(task_id = %transition.task_id, patch = ?transition.patch, "transition committed");
        Ok(transition)
    }
}
