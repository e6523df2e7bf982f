//! Shared test helpers for in-memory board integration tests.

use mockable::DefaultClock;
use planboard::board::{
    adapters::memory::InMemoryTaskStore,
    domain::{ActivityType, SubjectId, Task, TaskStatus},
};
use rstest::fixture;

/// Provides a fresh in-memory store for each test.
#[fixture]
pub fn store() -> InMemoryTaskStore {
    InMemoryTaskStore::new()
}

/// Builds a task in `status` and adds it to `store`.
///
/// # Errors
///
/// Returns an error if the title is blank or the task is already stored.
pub fn seed(
    store: &InMemoryTaskStore,
    title: &str,
    activity_type: ActivityType,
    status: TaskStatus,
) -> Result<Task, eyre::Report> {
    let task = Task::new(title, SubjectId::new(), activity_type, &DefaultClock)?.with_status(status);
    store.insert(task.clone())?;
    Ok(task)
}
