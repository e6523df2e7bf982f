//! Task record, workflow status, and the partial updates the board requests.

use super::{BoardDomainError, ParseActivityTypeError, ParseTaskStatusError, SubjectId, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of a task; each status is rendered as one board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not started.
    Pending,
    /// Work is under way.
    InProgress,
    /// Terminal status. Entering it goes through the completion gate.
    Done,
}

impl TaskStatus {
    /// Every status, in board column order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Done];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }

    /// Returns `true` for the terminal status.
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of academic activity a task represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    /// Homework or coursework to hand in.
    Assignment,
    /// Exam or quiz.
    Exam,
    /// Longer-running project.
    Project,
    /// Reading or study session.
    Reading,
    /// Anything else.
    Other,
}

impl ActivityType {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assignment => "assignment",
            Self::Exam => "exam",
            Self::Project => "project",
            Self::Reading => "reading",
            Self::Other => "other",
        }
    }
}

impl TryFrom<&str> for ActivityType {
    type Error = ParseActivityTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "assignment" => Ok(Self::Assignment),
            "exam" => Ok(Self::Exam),
            "project" => Ok(Self::Project),
            "reading" => Ok(Self::Reading),
            "other" => Ok(Self::Other),
            _ => Err(ParseActivityTypeError(value.to_owned())),
        }
    }
}

/// Grade recorded when a task is completed, on a 0 to 10 scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Grade(f64);

impl Grade {
    /// Lowest grade on the scale.
    pub const MIN: f64 = 0.0;
    /// Highest grade on the scale.
    pub const MAX: f64 = 10.0;

    /// Creates a validated grade.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidGrade`] when the value is not
    /// finite or falls outside `0..=10`.
    pub fn new(value: f64) -> Result<Self, BoardDomainError> {
        if !value.is_finite() || !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(BoardDomainError::InvalidGrade(value));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Grade {
    type Error = BoardDomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Grade> for f64 {
    fn from(grade: Grade) -> Self {
        grade.0
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Partial update the board asks the task store to apply.
///
/// Absent fields are left untouched by the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskPatch {
    /// New workflow status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    /// New grade.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<Grade>,
}

impl TaskPatch {
    /// Patch that only changes the status.
    #[must_use]
    pub const fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            grade: None,
        }
    }

    /// Patch that completes a task, recording `grade` when one was given.
    #[must_use]
    pub const fn completion(grade: Option<Grade>) -> Self {
        Self {
            status: Some(TaskStatus::Done),
            grade,
        }
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none() && self.grade.is_none()
    }
}

/// Task as seen by the board.
///
/// The task store owns identity and lifecycle; the board only reads tasks
/// and requests [`TaskPatch`] updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    subject_id: SubjectId,
    activity_type: ActivityType,
    status: TaskStatus,
    grade: Option<Grade>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a pending task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the title is blank.
    pub fn new(
        title: impl Into<String>,
        subject_id: SubjectId,
        activity_type: ActivityType,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        let raw = title.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyTitle);
        }

        Ok(Self {
            id: TaskId::new(),
            title: trimmed.to_owned(),
            subject_id,
            activity_type,
            status: TaskStatus::Pending,
            grade: None,
            updated_at: clock.utc(),
        })
    }

    /// Returns the task with the given status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the task with the given grade.
    #[must_use]
    pub fn with_grade(mut self, grade: Grade) -> Self {
        self.grade = Some(grade);
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the subject the task belongs to.
    #[must_use]
    pub const fn subject_id(&self) -> SubjectId {
        self.subject_id
    }

    /// Returns the activity category.
    #[must_use]
    pub const fn activity_type(&self) -> ActivityType {
        self.activity_type
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the recorded grade, if any.
    #[must_use]
    pub const fn grade(&self) -> Option<Grade> {
        self.grade
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Merges a partial update into the task.
    ///
    /// An empty patch leaves the task, including its timestamp, unchanged.
    pub fn apply(&mut self, patch: &TaskPatch, clock: &impl Clock) {
        if patch.is_empty() {
            return;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(grade) = patch.grade {
            self.grade = Some(grade);
        }
        self.updated_at = clock.utc();
    }
}
