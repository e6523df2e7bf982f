//! In-memory task store for tests and offline use.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{Task, TaskId, TaskPatch},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Tasks are kept in insertion order so listings are stable.
pub struct InMemoryTaskStore<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    tasks: Arc<RwLock<Vec<Task>>>,
    clock: Arc<C>,
}

impl InMemoryTaskStore<DefaultClock> {
    /// Creates an empty store stamped by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTaskStore<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> fmt::Debug for InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryTaskStore")
            .field("tasks", &self.tasks)
            .finish_non_exhaustive()
    }
}

fn lock_error(err: impl ToString) -> TaskStoreError {
    TaskStoreError::persistence(std::io::Error::other(err.to_string()))
}

impl<C> InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty store stamped by the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(Vec::new())),
            clock,
        }
    }

    /// Adds a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DuplicateTask`] when a task with the same
    /// identifier is already stored.
    pub fn insert(&self, task: Task) -> TaskStoreResult<()> {
        let mut tasks = self.tasks.write().map_err(lock_error)?;
        if tasks.iter().any(|stored| stored.id() == task.id()) {
            return Err(TaskStoreError::DuplicateTask(task.id()));
        }
        tasks.push(task);
        Ok(())
    }
}

#[async_trait]
impl<C> TaskStore for InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskStoreResult<()> {
        let mut tasks = self.tasks.write().map_err(lock_error)?;
        let task = tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(TaskStoreError::NotFound(id))?;
        task.apply(&patch, &*self.clock);
        Ok(())
    }

    async fn list(&self) -> TaskStoreResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(lock_error)?;
        Ok(tasks.clone())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        let tasks = self.tasks.read().map_err(lock_error)?;
        Ok(tasks.iter().find(|task| task.id() == id).cloned())
    }
}
