//! Given steps for overdue and completion rate scenarios.

use super::world::TaskScenarioWorld;
use chrono::{DateTime, Utc};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tasktrack::{
    clock::FixedClock,
    task::domain::{Priority, Task, TaskId, User, UserId, parse_due_date},
};

#[given("a user with id {id:u64}")]
fn user_with_id(world: &mut TaskScenarioWorld, id: u64) {
    world.user = Some(User::new(
        UserId::new(id),
        format!("user {id}"),
        format!("user{id}@example.com"),
    ));
}

#[given(r#"the current time is "{instant}""#)]
fn current_time(world: &mut TaskScenarioWorld, instant: String) -> Result<(), eyre::Report> {
    let now = DateTime::parse_from_rfc3339(&instant)
        .wrap_err("parse scenario instant")?
        .with_timezone(&Utc);
    world.clock = FixedClock::new(now);
    Ok(())
}

#[given(r#"a "{priority}" priority task "{title}" due "{due}""#)]
fn priority_task_due(
    world: &mut TaskScenarioWorld,
    priority: String,
    title: String,
    due: String,
) -> Result<(), eyre::Report> {
    let due_date = parse_due_date(&due).wrap_err("parse scenario due date")?;
    add_priority_task(world, &priority, title, due_date)
}

#[given(r#"a "{priority}" priority task "{title}" with no due date"#)]
fn priority_task_undated(
    world: &mut TaskScenarioWorld,
    priority: String,
    title: String,
) -> Result<(), eyre::Report> {
    add_priority_task(world, &priority, title, None)
}

#[given(r#"a plain task "{title}" that is complete"#)]
fn complete_plain_task(world: &mut TaskScenarioWorld, title: String) -> Result<(), eyre::Report> {
    add_plain_task(world, title, true)
}

#[given(r#"a plain task "{title}" that is incomplete"#)]
fn incomplete_plain_task(
    world: &mut TaskScenarioWorld,
    title: String,
) -> Result<(), eyre::Report> {
    add_plain_task(world, title, false)
}

fn add_priority_task(
    world: &mut TaskScenarioWorld,
    priority: &str,
    title: String,
    due_date: Option<DateTime<Utc>>,
) -> Result<(), eyre::Report> {
    let level = Priority::try_from(priority).wrap_err("parse scenario priority")?;
    let id = world.allocate_task_id();
    let owner = world.user()?.id();
    let task = Task::new_priority(TaskId::new(id), owner, title, false, level, due_date);
    world.user_mut()?.add_task(task).wrap_err("attach scenario task")?;
    Ok(())
}

fn add_plain_task(
    world: &mut TaskScenarioWorld,
    title: String,
    complete: bool,
) -> Result<(), eyre::Report> {
    let id = world.allocate_task_id();
    let owner = world.user()?.id();
    world
        .user_mut()?
        .add_task(Task::new(TaskId::new(id), owner, title, complete))
        .wrap_err("attach scenario task")?;
    Ok(())
}
