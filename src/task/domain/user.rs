//! User entity owning an ordered list of tasks.

use super::{Priority, Task, TaskDomainError, TaskId, TaskStatus, UserId, completion_rate};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A user and the tasks they own, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    tasks: Vec<Task>,
}

impl User {
    /// Creates a user with no tasks.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            tasks: Vec::new(),
        }
    }

    /// Attaches an initial task list, keeping its order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::ForeignTask`] for the first task whose owner
    /// is not this user.
    pub fn with_tasks(
        mut self,
        tasks: impl IntoIterator<Item = Task>,
    ) -> Result<Self, TaskDomainError> {
        for task in tasks {
            self.add_task(task)?;
        }
        Ok(self)
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a task. Duplicate task identifiers are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::ForeignTask`] when the task is owned by a
    /// different user.
    pub fn add_task(&mut self, task: Task) -> Result<(), TaskDomainError> {
        if task.owner_id() != self.id {
            return Err(TaskDomainError::ForeignTask {
                task_id: task.id(),
                owner_id: task.owner_id(),
                user_id: self.id,
            });
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Returns the first task with the given identifier.
    #[must_use]
    pub fn find_task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    /// Returns the first task with the given identifier for mutation.
    pub fn find_task_mut(&mut self, task_id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == task_id)
    }

    /// Returns the percentage of completed tasks, `0.0` when there are none.
    #[must_use]
    pub fn completion_rate(&self) -> f64 {
        let completed = self.tasks.iter().filter(|task| task.is_complete()).count();
        completion_rate(completed, self.tasks.len())
    }

    /// Returns tasks whose status label is exactly `status`.
    ///
    /// Any value other than `"Complete"` or `"Incomplete"` yields an empty
    /// list.
    #[must_use]
    pub fn tasks_by_status(&self, status: &str) -> Vec<&Task> {
        TaskStatus::try_from(status)
            .map(|parsed| self.tasks_with_status(parsed))
            .unwrap_or_default()
    }

    /// Returns tasks with the given completion status.
    #[must_use]
    pub fn tasks_with_status(&self, status: TaskStatus) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| status.matches(task.is_complete()))
            .collect()
    }

    /// Returns priority tasks that are overdue according to `clock`.
    #[must_use]
    pub fn overdue_tasks(&self, clock: &impl Clock) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.is_overdue_priority(clock))
            .collect()
    }

    /// Returns priority tasks whose priority label is exactly `priority`.
    ///
    /// Unknown labels yield an empty list.
    #[must_use]
    pub fn tasks_by_priority(&self, priority: &str) -> Vec<&Task> {
        Priority::try_from(priority)
            .map(|parsed| self.tasks_with_priority(parsed))
            .unwrap_or_default()
    }

    /// Returns priority tasks with the given priority.
    #[must_use]
    pub fn tasks_with_priority(&self, priority: Priority) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.priority() == Some(priority))
            .collect()
    }

    /// Returns priority tasks due strictly before `date`.
    #[must_use]
    pub fn tasks_due_before(&self, date: DateTime<Utc>) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.due_date().is_some_and(|due| due < date))
            .collect()
    }
}
