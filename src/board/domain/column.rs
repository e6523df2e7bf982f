//! Derived column views of the task list.

use super::{SubjectId, Task, TaskId, TaskStatus};

/// Restricts the board to one subject or shows every task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubjectFilter {
    /// Show tasks from every subject.
    #[default]
    All,
    /// Show only tasks of the given subject.
    Subject(SubjectId),
}

impl SubjectFilter {
    /// Returns `true` when the task passes the filter.
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Subject(subject_id) => task.subject_id() == subject_id,
        }
    }
}

/// Tasks sharing one workflow status. Rebuilt on every projection.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    status: TaskStatus,
    tasks: Vec<Task>,
}

impl Column {
    /// Status shared by every task in the column.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the column has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns `true` when the task is shown in this column.
    #[must_use]
    pub fn contains(&self, task_id: TaskId) -> bool {
        self.tasks.iter().any(|task| task.id() == task_id)
    }
}

/// Stateless projection from the flat task list to the three board columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnProjection;

impl ColumnProjection {
    /// Groups `tasks` by status, keeping their input order within a column.
    ///
    /// Always returns one column per status, in [`TaskStatus::ALL`] order.
    #[must_use]
    pub fn project(tasks: &[Task], filter: SubjectFilter) -> [Column; 3] {
        TaskStatus::ALL.map(|status| Column {
            status,
            tasks: tasks
                .iter()
                .filter(|task| task.status() == status && filter.matches(task))
                .cloned()
                .collect(),
        })
    }
}
