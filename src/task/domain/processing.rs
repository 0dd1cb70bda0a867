//! Stateless queries over caller-supplied task collections.
//!
//! Every function borrows its input and returns a new sequence of references
//! in input order unless it explicitly reorders; none mutate the tasks.

use super::{Task, UserId};
use indexmap::IndexMap;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Direction for [`sort_by_due_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Earliest due date first.
    #[default]
    Ascending,
    /// Latest due date first.
    Descending,
}

/// Aggregate completion figures for a task collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaskStatistics {
    /// Number of tasks considered.
    pub total_count: usize,
    /// Number of completed tasks.
    pub completed_count: usize,
    /// Number of open tasks.
    pub incomplete_count: usize,
    /// Percentage of completed tasks in `[0, 100]`.
    pub completion_rate: f64,
}

/// Returns `100 * completed / total`, or `0.0` for an empty collection.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "completion rate is a real-valued percentage of task counts"
)]
#[must_use]
pub fn completion_rate(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    completed as f64 / total as f64 * 100.0
}

/// Returns tasks whose title contains `keyword`, ignoring case.
///
/// An empty keyword matches every task.
pub fn search_tasks<'a>(
    tasks: impl IntoIterator<Item = &'a Task>,
    keyword: &str,
) -> Vec<&'a Task> {
    let needle = keyword.to_lowercase();
    tasks
        .into_iter()
        .filter(|task| task.title().to_lowercase().contains(&needle))
        .collect()
}

/// Returns tasks ordered by due date.
///
/// The sort is stable. Tasks without a due date, including plain tasks, come
/// last in both directions.
pub fn sort_by_due_date<'a>(
    tasks: impl IntoIterator<Item = &'a Task>,
    order: SortOrder,
) -> Vec<&'a Task> {
    let mut sorted: Vec<&Task> = tasks.into_iter().collect();
    sorted.sort_by(|left, right| match (left.due_date(), right.due_date()) {
        (Some(a), Some(b)) => match order {
            SortOrder::Ascending => a.cmp(&b),
            SortOrder::Descending => b.cmp(&a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    sorted
}

/// Returns tasks whose status label starts with `prefix`.
///
/// `"Incomplete"` therefore also matches `"Incomplete (Overdue)"`.
pub fn filter_by_status<'a>(
    tasks: impl IntoIterator<Item = &'a Task>,
    prefix: &str,
    clock: &impl Clock,
) -> Vec<&'a Task> {
    tasks
        .into_iter()
        .filter(|task| task.status_label(clock).starts_with(prefix))
        .collect()
}

/// Returns tasks owned by `user_id`.
pub fn filter_by_user<'a>(
    tasks: impl IntoIterator<Item = &'a Task>,
    user_id: UserId,
) -> Vec<&'a Task> {
    tasks
        .into_iter()
        .filter(|task| task.owner_id() == user_id)
        .collect()
}

/// Computes completion statistics over `tasks`.
pub fn calculate_statistics<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> TaskStatistics {
    let (total_count, completed_count) = tasks
        .into_iter()
        .fold((0_usize, 0_usize), |(total, completed), task| {
            (total + 1, completed + usize::from(task.is_complete()))
        });
    TaskStatistics {
        total_count,
        completed_count,
        incomplete_count: total_count - completed_count,
        completion_rate: completion_rate(completed_count, total_count),
    }
}

/// Groups tasks by owner.
///
/// Owners appear in the order their first task was seen; each group keeps
/// input order.
pub fn group_by_user<'a>(
    tasks: impl IntoIterator<Item = &'a Task>,
) -> IndexMap<UserId, Vec<&'a Task>> {
    let mut groups: IndexMap<UserId, Vec<&Task>> = IndexMap::new();
    for task in tasks {
        groups.entry(task.owner_id()).or_default().push(task);
    }
    groups
}
