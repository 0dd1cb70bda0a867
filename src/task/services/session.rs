//! Session-level operations over a loaded set of users.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;

use crate::task::{
    domain::{
        ParsePriorityError, Priority, Task, TaskDomainError, TaskId, User, UserId, parse_due_date,
    },
    ports::{TaskSource, TaskSourceError},
};

use super::load_users;

/// Raw input for creating a priority task, as typed by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePriorityTaskRequest {
    title: String,
    priority: String,
    due_date: Option<String>,
}

impl CreatePriorityTaskRequest {
    /// Creates a request with a title and a priority label.
    #[must_use]
    pub fn new(title: impl Into<String>, priority: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            priority: priority.into(),
            due_date: None,
        }
    }

    /// Sets the due date as typed, in `YYYY-MM-DD` form.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }
}

/// Service-level errors for session operations.
#[derive(Debug, Error)]
pub enum TaskSessionError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The priority label is not one of low, medium or high.
    #[error(transparent)]
    Priority(#[from] ParsePriorityError),
    /// Loading from the task source failed.
    #[error(transparent)]
    Source(#[from] TaskSourceError),
}

/// Result type for session operations.
pub type TaskSessionResult<T> = Result<T, TaskSessionError>;

/// Users and tasks loaded for one run, plus the clock used to judge overdue
/// tasks.
#[derive(Debug, Clone)]
pub struct TaskSession<C>
where
    C: Clock + Send + Sync,
{
    users: Vec<User>,
    clock: Arc<C>,
}

impl<C> TaskSession<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a session over already assembled users.
    #[must_use]
    pub const fn from_users(users: Vec<User>, clock: Arc<C>) -> Self {
        Self { users, clock }
    }

    /// Loads users and tasks from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSessionError::Source`] when the source fails.
    pub async fn load<S>(source: &S, clock: Arc<C>) -> TaskSessionResult<Self>
    where
        S: TaskSource + ?Sized,
    {
        let users = load_users(source).await?;
        Ok(Self::from_users(users, clock))
    }

    /// Returns the session clock.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns all users in load order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Finds a user by identifier.
    #[must_use]
    pub fn user(&self, user_id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id() == user_id)
    }

    /// Finds a user by identifier for mutation.
    pub fn user_mut(&mut self, user_id: UserId) -> Option<&mut User> {
        self.users.iter_mut().find(|user| user.id() == user_id)
    }

    /// Iterates over every task, user by user.
    pub fn all_tasks(&self) -> impl Iterator<Item = &Task> {
        self.users.iter().flat_map(User::tasks)
    }

    /// Toggles completion of a user's task.
    ///
    /// Returns `None` when the user or the task does not exist.
    pub fn toggle_task(&mut self, user_id: UserId, task_id: TaskId) -> Option<&Task> {
        let task = self.user_mut(user_id)?.find_task_mut(task_id)?;
        task.toggle();
        tracing::debug!(%user_id, %task_id, complete = task.is_complete(), "toggled task");
        Some(&*task)
    }

    /// Validates raw input and appends a new, incomplete priority task to a
    /// user.
    ///
    /// The priority label is trimmed and lower-cased before parsing. The new
    /// task receives an identifier one greater than any in the session.
    /// Returns `Ok(None)` when the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSessionError::Priority`] for an unknown priority and
    /// [`TaskSessionError::Domain`] for an unparseable due date.
    pub fn create_priority_task(
        &mut self,
        user_id: UserId,
        request: CreatePriorityTaskRequest,
    ) -> TaskSessionResult<Option<Task>> {
        if self.user(user_id).is_none() {
            return Ok(None);
        }

        let CreatePriorityTaskRequest {
            title,
            priority,
            due_date,
        } = request;
        let normalized = priority.trim().to_lowercase();
        let parsed_priority = Priority::try_from(normalized.as_str())?;
        let parsed_due = due_date.as_deref().map(parse_due_date).transpose()?.flatten();

        let task = Task::new_priority(
            self.next_task_id(),
            user_id,
            title,
            false,
            parsed_priority,
            parsed_due,
        );
        let Some(user) = self.user_mut(user_id) else {
            return Ok(None);
        };
        user.add_task(task.clone())?;
        tracing::debug!(%user_id, task_id = %task.id(), "created priority task");
        Ok(Some(task))
    }

    fn next_task_id(&self) -> TaskId {
        self.all_tasks()
            .map(Task::id)
            .max()
            .map_or_else(|| TaskId::new(1), TaskId::next)
    }
}
