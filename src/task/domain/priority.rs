//! Priority levels and due-date handling for priority tasks.

use super::{ParsePriorityError, TaskDomainError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority level of a priority task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal urgency.
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// Returns the canonical lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses an exact lowercase label.
///
/// Case folding and trimming are left to the input boundary, so `"High"` is
/// rejected here.
impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// Priority and optional due date carried by a priority task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityDetails {
    priority: Priority,
    due_date: Option<DateTime<Utc>>,
}

impl PriorityDetails {
    /// Creates priority details. The due date cannot be changed afterwards.
    #[must_use]
    pub const fn new(priority: Priority, due_date: Option<DateTime<Utc>>) -> Self {
        Self { priority, due_date }
    }

    /// Returns the priority level.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns whether a task with these details is overdue at `now`.
    ///
    /// Completed tasks and tasks without a due date are never overdue.
    #[must_use]
    pub fn is_overdue_at(&self, now: DateTime<Utc>, complete: bool) -> bool {
        self.due_date.is_some_and(|due| now > due) && !complete
    }
}

/// Parses a `YYYY-MM-DD` due date into midnight UTC of that day.
///
/// Empty or whitespace-only input yields `Ok(None)`.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidDueDate`] when the input is not a valid
/// calendar date.
pub fn parse_due_date(input: &str) -> Result<Option<DateTime<Utc>>, TaskDomainError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| TaskDomainError::InvalidDueDate(input.to_owned()))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| TaskDomainError::InvalidDueDate(input.to_owned()))?;
    Ok(Some(midnight.and_utc()))
}
