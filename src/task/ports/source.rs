//! Source port for the remote users/todos provider.

use crate::task::domain::{Task, TaskId, UserId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task source operations.
pub type TaskSourceResult<T> = Result<T, TaskSourceError>;

/// Raw user record as served by the provider.
///
/// Additional provider fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Provider-assigned user identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

/// Raw todo record as served by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoRecord {
    /// Provider-assigned task identifier.
    pub id: u64,
    /// Identifier of the owning user.
    pub user_id: u64,
    /// Task title.
    pub title: String,
    /// Completion flag.
    #[serde(default)]
    pub completed: bool,
}

impl TodoRecord {
    /// Converts the record into a plain task.
    #[must_use]
    pub fn into_task(self) -> Task {
        Task::new(
            TaskId::new(self.id),
            UserId::new(self.user_id),
            self.title,
            self.completed,
        )
    }
}

/// Read-only contract for the users/todos provider.
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Returns every user record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError`] when the provider cannot be reached or its
    /// payload cannot be decoded.
    async fn fetch_users(&self) -> TaskSourceResult<Vec<UserRecord>>;

    /// Returns every todo record across all users.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError`] when the provider cannot be reached or its
    /// payload cannot be decoded.
    async fn fetch_todos(&self) -> TaskSourceResult<Vec<TodoRecord>>;
}

/// Errors returned by task source implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskSourceError {
    /// The provider could not be reached or read.
    #[error("task source unavailable: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The provider returned a payload that does not match the record shapes.
    #[error("malformed task source payload: {0}")]
    Decode(String),
}

impl TaskSourceError {
    /// Wraps a transport error.
    #[must_use]
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
