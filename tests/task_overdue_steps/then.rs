//! Then steps for overdue and completion rate scenarios.

use super::world::TaskScenarioWorld;
use eyre::WrapErr;
use rstest_bdd_macros::then;
use tasktrack::task::domain::parse_due_date;

#[then("the user has {count:u64} overdue tasks")]
fn user_has_overdue_tasks(world: &TaskScenarioWorld, count: u64) -> Result<(), eyre::Report> {
    let actual = u64::try_from(world.user()?.overdue_tasks(&world.clock).len())
        .wrap_err("overdue count fits in u64")?;
    if actual != count {
        return Err(eyre::eyre!("expected {count} overdue tasks, found {actual}"));
    }
    if let Some(requested) = world.overdue_count {
        eyre::ensure!(
            u64::try_from(requested).is_ok_and(|value| value == count),
            "overdue query returned {requested}, expected {count}"
        );
    }
    Ok(())
}

#[then(r#"the status of "{title}" is "{status}""#)]
fn status_of_task(
    world: &TaskScenarioWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let label = world.task_titled(&title)?.status_label(&world.clock);
    if label != status {
        return Err(eyre::eyre!("expected status '{status}', found '{label}'"));
    }
    Ok(())
}

#[then(r#"the task "{title}" is still due "{due}""#)]
fn task_still_due(
    world: &TaskScenarioWorld,
    title: String,
    due: String,
) -> Result<(), eyre::Report> {
    let expected = parse_due_date(&due).map_err(|err| eyre::eyre!("invalid due date: {err}"))?;
    let actual = world.task_titled(&title)?.due_date();
    eyre::ensure!(actual == expected, "expected due {expected:?}, found {actual:?}");
    Ok(())
}

#[then(r#"the completion rate is "{rate}""#)]
fn completion_rate_is(world: &TaskScenarioWorld, rate: String) -> Result<(), eyre::Report> {
    let computed = world
        .completion_rate
        .ok_or_else(|| eyre::eyre!("completion rate was not calculated"))?;
    let rendered = format!("{computed:.2}");
    eyre::ensure!(rendered == rate, "expected rate {rate}, found {rendered}");
    Ok(())
}
