//! Domain model for users and their tasks.
//!
//! Tasks come in two variants, plain and priority, distinguished by
//! [`TaskKind`] rather than by runtime type checks. Users own their tasks
//! exclusively. The [`processing`] functions are pure queries over any task
//! collection. Nothing here touches the network or the filesystem.

mod error;
mod ids;
mod priority;
pub mod processing;
mod status;
mod task;
mod user;

pub use error::{ParsePriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, UserId};
pub use priority::{Priority, PriorityDetails, parse_due_date};
pub use processing::{
    SortOrder, TaskStatistics, calculate_statistics, completion_rate, filter_by_status,
    filter_by_user, group_by_user, search_tasks, sort_by_due_date,
};
pub use status::{OVERDUE_SUFFIX, TaskStatus};
pub use task::{Task, TaskKind};
pub use user::User;
