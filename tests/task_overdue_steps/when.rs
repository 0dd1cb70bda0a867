//! When steps for overdue and completion rate scenarios.

use super::world::TaskScenarioWorld;
use rstest_bdd_macros::when;

#[when("the overdue tasks are requested")]
fn overdue_tasks_requested(world: &mut TaskScenarioWorld) -> Result<(), eyre::Report> {
    let count = world.user()?.overdue_tasks(&world.clock).len();
    world.overdue_count = Some(count);
    Ok(())
}

#[when(r#"the task "{title}" is toggled"#)]
fn task_toggled(world: &mut TaskScenarioWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_titled(&title)?.id();
    world
        .user_mut()?
        .find_task_mut(id)
        .ok_or_else(|| eyre::eyre!("task '{title}' disappeared"))?
        .toggle();
    Ok(())
}

#[when("the completion rate is calculated")]
fn completion_rate_calculated(world: &mut TaskScenarioWorld) -> Result<(), eyre::Report> {
    let rate = world.user()?.completion_rate();
    world.completion_rate = Some(rate);
    Ok(())
}
