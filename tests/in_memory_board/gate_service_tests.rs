//! Completion gate service committing to the in-memory store.

use super::helpers::{seed, store};
use planboard::board::{
    adapters::memory::InMemoryTaskStore,
    domain::{ActivityType, Grade, TaskStatus},
    ports::TaskStore,
    services::{CompletionGateService, TransitionOutcome},
};
use rstest::rstest;
use std::sync::Arc;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn confirmed_completion_reaches_the_store(
    store: InMemoryTaskStore,
) -> Result<(), eyre::Report> {
    let store = Arc::new(store);
    let task = seed(&store, "Final exam", ActivityType::Exam, TaskStatus::InProgress)?;
    let mut service = CompletionGateService::new(Arc::clone(&store));

    let outcome = service.request_transition(&task, TaskStatus::Done).await?;
    eyre::ensure!(
        matches!(outcome, TransitionOutcome::AwaitingConfirmation(ref request) if request.title == "Final exam"),
        "expected a suspended completion, got {outcome:?}"
    );
    eyre::ensure!(service.dialog().open, "dialog should be open");
    eyre::ensure!(
        service.dialog().activity_type == Some(ActivityType::Exam),
        "dialog shows the wrong activity type"
    );

    let grade = Grade::new(9.0)?;
    service.confirm(Some(grade)).await?;

    let stored = store
        .find_by_id(task.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task vanished"))?;
    eyre::ensure!(stored.status() == TaskStatus::Done, "status not written");
    eyre::ensure!(stored.grade() == Some(grade), "grade not written");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dismissed_completion_never_reaches_the_store(
    store: InMemoryTaskStore,
) -> Result<(), eyre::Report> {
    let store = Arc::new(store);
    let task = seed(&store, "Lab", ActivityType::Assignment, TaskStatus::Pending)?;
    let mut service = CompletionGateService::new(Arc::clone(&store));

    service.request_transition(&task, TaskStatus::Done).await?;
    service.on_open_change(false);

    let stored = store
        .find_by_id(task.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task vanished"))?;
    eyre::ensure!(stored == task, "dismissal changed the task");
    eyre::ensure!(!service.dialog().open, "dialog should be closed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reverting_a_completed_task_commits_at_once(
    store: InMemoryTaskStore,
) -> Result<(), eyre::Report> {
    let store = Arc::new(store);
    let task = seed(&store, "Reading log", ActivityType::Reading, TaskStatus::Done)?;
    let mut service = CompletionGateService::new(Arc::clone(&store));

    let outcome = service
        .request_transition(&task, TaskStatus::InProgress)
        .await?;

    eyre::ensure!(
        matches!(outcome, TransitionOutcome::Committed(_)),
        "expected an immediate commit, got {outcome:?}"
    );
    let stored = store
        .find_by_id(task.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task vanished"))?;
    eyre::ensure!(stored.status() == TaskStatus::InProgress, "status not written");
    Ok(())
}
