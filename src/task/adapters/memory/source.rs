//! In-memory task source for tests and embedding.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::ports::{TaskSource, TaskSourceError, TaskSourceResult, TodoRecord, UserRecord};

/// Thread-safe in-memory task source.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskSource {
    state: Arc<RwLock<InMemorySourceState>>,
}

#[derive(Debug, Default)]
struct InMemorySourceState {
    users: Vec<UserRecord>,
    todos: Vec<TodoRecord>,
}

impl InMemoryTaskSource {
    /// Creates an empty in-memory source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source serving the given records.
    #[must_use]
    pub fn with_records(users: Vec<UserRecord>, todos: Vec<TodoRecord>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemorySourceState { users, todos })),
        }
    }

    /// Appends a user record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::Transport`] when the internal lock is
    /// poisoned.
    pub fn push_user(&self, user: UserRecord) -> TaskSourceResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskSourceError::transport(std::io::Error::other(err.to_string()))
        })?;
        state.users.push(user);
        Ok(())
    }

    /// Appends a todo record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::Transport`] when the internal lock is
    /// poisoned.
    pub fn push_todo(&self, todo: TodoRecord) -> TaskSourceResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskSourceError::transport(std::io::Error::other(err.to_string()))
        })?;
        state.todos.push(todo);
        Ok(())
    }
}

#[async_trait]
impl TaskSource for InMemoryTaskSource {
    async fn fetch_users(&self) -> TaskSourceResult<Vec<UserRecord>> {
        let state = self.state.read().map_err(|err| {
            TaskSourceError::transport(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.users.clone())
    }

    async fn fetch_todos(&self) -> TaskSourceResult<Vec<TodoRecord>> {
        let state = self.state.read().map_err(|err| {
            TaskSourceError::transport(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.todos.clone())
    }
}
