//! Error types for task domain validation and parsing.

use super::{TaskId, UserId};
use thiserror::Error;

/// Errors returned by task and user domain operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The operation is only defined for priority tasks.
    #[error("'{operation}' is not supported on plain task {task_id}")]
    UnsupportedOperation {
        /// Name of the rejected operation.
        operation: &'static str,
        /// Task the operation was invoked on.
        task_id: TaskId,
    },

    /// The task belongs to a different user than the one it was attached to.
    #[error("task {task_id} is owned by user {owner_id}, not user {user_id}")]
    ForeignTask {
        /// Identifier of the rejected task.
        task_id: TaskId,
        /// Owner recorded on the task.
        owner_id: UserId,
        /// User the task was being attached to.
        user_id: UserId,
    },

    /// The due date is not a `YYYY-MM-DD` calendar date.
    #[error("invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDueDate(String),
}

/// Error returned while parsing a priority level.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}, expected low, medium or high")]
pub struct ParsePriorityError(pub String);

/// Error returned while parsing a completion status label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
