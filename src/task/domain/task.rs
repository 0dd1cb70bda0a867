//! Task entity and its plain/priority variants.

use super::{
    OVERDUE_SUFFIX, Priority, PriorityDetails, TaskDomainError, TaskId, TaskStatus, UserId,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Distinguishes plain tasks from priority tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskKind {
    /// A task with no priority or due date.
    Plain,
    /// A task with a priority level and an optional due date.
    Priority(PriorityDetails),
}

/// A unit of work owned by a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    owner_id: UserId,
    title: String,
    complete: bool,
    kind: TaskKind,
}

impl Task {
    /// Creates a plain task.
    #[must_use]
    pub fn new(id: TaskId, owner_id: UserId, title: impl Into<String>, complete: bool) -> Self {
        Self {
            id,
            owner_id,
            title: title.into(),
            complete,
            kind: TaskKind::Plain,
        }
    }

    /// Creates a priority task.
    ///
    /// The priority is already validated by its type; parsing raw input into a
    /// [`Priority`] is the caller's job.
    #[must_use]
    pub fn new_priority(
        id: TaskId,
        owner_id: UserId,
        title: impl Into<String>,
        complete: bool,
        priority: Priority,
        due_date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            owner_id,
            title: title.into(),
            complete,
            kind: TaskKind::Priority(PriorityDetails::new(priority, due_date)),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the identifier of the owning user.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replaces the task title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Returns whether the task is complete.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Returns the task variant.
    #[must_use]
    pub const fn kind(&self) -> &TaskKind {
        &self.kind
    }

    /// Returns the priority details for priority tasks.
    #[must_use]
    pub const fn priority_details(&self) -> Option<&PriorityDetails> {
        match &self.kind {
            TaskKind::Plain => None,
            TaskKind::Priority(details) => Some(details),
        }
    }

    /// Returns whether this is a priority task.
    #[must_use]
    pub const fn is_priority(&self) -> bool {
        matches!(self.kind, TaskKind::Priority(_))
    }

    /// Returns the priority level, or `None` for plain tasks.
    #[must_use]
    pub fn priority(&self) -> Option<Priority> {
        self.priority_details().map(PriorityDetails::priority)
    }

    /// Returns the due date, or `None` for plain tasks and undated priority
    /// tasks.
    #[must_use]
    pub fn due_date(&self) -> Option<DateTime<Utc>> {
        self.priority_details().and_then(PriorityDetails::due_date)
    }

    /// Flips the completion flag.
    pub const fn toggle(&mut self) {
        self.complete = !self.complete;
    }

    /// Returns the completion status, ignoring any due date.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::from_complete(self.complete)
    }

    /// Returns whether the task is overdue according to `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::UnsupportedOperation`] for plain tasks,
    /// which have no due date to be overdue against.
    pub fn is_overdue(&self, clock: &impl Clock) -> Result<bool, TaskDomainError> {
        match &self.kind {
            TaskKind::Plain => Err(TaskDomainError::UnsupportedOperation {
                operation: "is_overdue",
                task_id: self.id,
            }),
            TaskKind::Priority(details) => Ok(details.is_overdue_at(clock.utc(), self.complete)),
        }
    }

    /// Returns whether this is a priority task that is overdue according to
    /// `clock`. Plain tasks yield `false`.
    #[must_use]
    pub fn is_overdue_priority(&self, clock: &impl Clock) -> bool {
        self.priority_details()
            .is_some_and(|details| details.is_overdue_at(clock.utc(), self.complete))
    }

    /// Returns the display status label, e.g. `"Incomplete (Overdue)"`.
    #[must_use]
    pub fn status_label(&self, clock: &impl Clock) -> String {
        let base = self.status().as_str();
        if self.is_overdue_priority(clock) {
            format!("{base}{OVERDUE_SUFFIX}")
        } else {
            base.to_owned()
        }
    }
}
