//! When steps for completion gate BDD scenarios.

use super::world::{BoardWorld, column_centre, parse_status, run_async};
use eyre::WrapErr;
use planboard::board::{
    domain::{Grade, Point},
    services::InputModality,
};
use rstest_bdd_macros::when;

#[when(r#"the task is dragged with the pointer to the "{status}" column"#)]
fn pointer_drag_to_column(world: &mut BoardWorld, status: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    let target = column_centre(parse_status(&status)?);
    let modality = InputModality::Pointer;

    world.board.begin(modality, task_id, target);
    world.board.move_to(modality, target, &world.regions);
    let result = run_async(world.board.release(modality, target, &world.regions));
    world.last_release = Some(result);
    Ok(())
}

#[when(r#"the task is dragged by touch to the "{status}" column"#)]
fn touch_drag_to_column(world: &mut BoardWorld, status: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    let origin = world
        .board
        .task(task_id)
        .map(|task| column_centre(task.status()))
        .ok_or_else(|| eyre::eyre!("task missing from board"))?;
    let target = column_centre(parse_status(&status)?);
    let modality = InputModality::Touch;

    world.board.begin(modality, task_id, origin);
    world.board.move_to(modality, target, &world.regions);
    let result = run_async(world.board.release(modality, target, &world.regions));
    world.last_release = Some(result);
    Ok(())
}

#[when("the task is touched and released without leaving the dead-zone")]
fn touch_tap(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    let modality = InputModality::Touch;
    let origin = Point::new(50.0, 200.0);
    let nudged = Point::new(53.0, 198.0);

    world.board.begin(modality, task_id, origin);
    world.board.move_to(modality, nudged, &world.regions);
    let result = run_async(world.board.release(modality, nudged, &world.regions));
    world.last_release = Some(result);
    Ok(())
}

#[when(r#"the completion is confirmed with grade "{grade}""#)]
fn confirm_with_grade(world: &mut BoardWorld, grade: String) -> Result<(), eyre::Report> {
    let value = grade.parse().wrap_err("grade placeholder is not a number")?;
    run_async(world.board.confirm(Some(Grade::new(value)?))).wrap_err("confirm completion")?;
    Ok(())
}

#[when("the confirmation is closed")]
fn close_confirmation(world: &mut BoardWorld) {
    world.board.on_open_change(false);
}
