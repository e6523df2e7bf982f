//! Store semantics: duplicates, partial updates and lookups.

use super::helpers::{seed, store};
use planboard::board::{
    adapters::memory::InMemoryTaskStore,
    domain::{ActivityType, Grade, TaskId, TaskPatch, TaskStatus},
    ports::{TaskStore, TaskStoreError},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn inserting_same_task_twice_is_rejected(store: InMemoryTaskStore) -> Result<(), eyre::Report> {
    let task = seed(&store, "Essay", ActivityType::Assignment, TaskStatus::Pending)?;

    let result = store.insert(task.clone());

    eyre::ensure!(
        matches!(result, Err(TaskStoreError::DuplicateTask(id)) if id == task.id()),
        "expected DuplicateTask, got {result:?}"
    );
    eyre::ensure!(store.list().await?.len() == 1, "duplicate was stored");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn updating_missing_task_is_not_found(store: InMemoryTaskStore) {
    let missing = TaskId::new();

    let result = store
        .update(missing, TaskPatch::status(TaskStatus::Done))
        .await;

    assert!(matches!(result, Err(TaskStoreError::NotFound(id)) if id == missing));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completion_patch_writes_status_and_grade(
    store: InMemoryTaskStore,
) -> Result<(), eyre::Report> {
    let task = seed(&store, "Midterm", ActivityType::Exam, TaskStatus::InProgress)?;
    let grade = Grade::new(8.5)?;

    store
        .update(task.id(), TaskPatch::completion(Some(grade)))
        .await?;

    let stored = store
        .find_by_id(task.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task vanished"))?;
    eyre::ensure!(stored.status() == TaskStatus::Done, "status not written");
    eyre::ensure!(stored.grade() == Some(grade), "grade not written");
    eyre::ensure!(stored.updated_at() >= task.updated_at(), "timestamp went backwards");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_patch_keeps_recorded_grade(store: InMemoryTaskStore) -> Result<(), eyre::Report> {
    let task = seed(&store, "Project", ActivityType::Project, TaskStatus::InProgress)?;
    let grade = Grade::new(6.0)?;
    store
        .update(task.id(), TaskPatch::completion(Some(grade)))
        .await?;

    store
        .update(task.id(), TaskPatch::status(TaskStatus::Pending))
        .await?;

    let stored = store
        .find_by_id(task.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task vanished"))?;
    eyre::ensure!(stored.status() == TaskStatus::Pending, "status not written");
    eyre::ensure!(stored.grade() == Some(grade), "grade was cleared");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clones_share_the_same_tasks(store: InMemoryTaskStore) -> Result<(), eyre::Report> {
    let handle = store.clone();
    let task = seed(&store, "Reading", ActivityType::Reading, TaskStatus::Pending)?;

    let found = handle.find_by_id(task.id()).await?;

    eyre::ensure!(found.as_ref() == Some(&task), "clone did not see insert");
    Ok(())
}
