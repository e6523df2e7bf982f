//! Then steps for completion gate BDD scenarios.

use super::world::{BoardWorld, parse_status, run_async};
use planboard::board::{
    domain::{Grade, Task},
    ports::TaskStore,
    services::ReleaseOutcome,
};
use rstest_bdd_macros::then;

fn stored_task(world: &BoardWorld) -> Result<Task, eyre::Report> {
    let task_id = world.task_id()?;
    run_async(world.store.find_by_id(task_id))?
        .ok_or_else(|| eyre::eyre!("task missing from store"))
}

#[then(r#"a completion confirmation is shown for "{title}""#)]
fn confirmation_shown(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    let dialog = world.board.dialog();
    if !dialog.open || dialog.activity_title != title {
        return Err(eyre::eyre!(
            "expected open confirmation for {title}, got {dialog:?}"
        ));
    }
    Ok(())
}

#[then("no completion confirmation is shown")]
fn no_confirmation_shown(world: &BoardWorld) -> Result<(), eyre::Report> {
    let dialog = world.board.dialog();
    if dialog.open {
        return Err(eyre::eyre!("expected no confirmation, got {dialog:?}"));
    }
    Ok(())
}

#[then(r#"the stored status is "{status}""#)]
fn stored_status_is(world: &BoardWorld, status: String) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let stored = stored_task(world)?;
    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected stored status {expected}, found {}",
            stored.status()
        ));
    }
    let shown = world.board.task(stored.id()).map(Task::status);
    if shown != Some(expected) {
        return Err(eyre::eyre!("board shows {shown:?}, store has {expected}"));
    }
    Ok(())
}

#[then(r#"the stored grade is "{grade}""#)]
fn stored_grade_is(world: &BoardWorld, grade: String) -> Result<(), eyre::Report> {
    let expected = Grade::new(grade.parse()?)?;
    let stored = stored_task(world)?;
    if stored.grade() != Some(expected) {
        return Err(eyre::eyre!(
            "expected stored grade {expected}, found {:?}",
            stored.grade()
        ));
    }
    Ok(())
}

#[then("the release is a tap on the task")]
fn release_is_tap(world: &BoardWorld) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    match world.last_release.as_ref() {
        Some(Ok(ReleaseOutcome::Tap(tapped))) if *tapped == task_id => Ok(()),
        other => Err(eyre::eyre!("expected a tap on {task_id}, got {other:?}")),
    }
}
