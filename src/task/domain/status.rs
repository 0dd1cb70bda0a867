//! Completion status of a task.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Suffix appended to the status label of an overdue priority task.
pub const OVERDUE_SUFFIX: &str = " (Overdue)";

/// Completion status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// The task has been completed.
    Complete,
    /// The task is still open.
    Incomplete,
}

impl TaskStatus {
    /// Returns the status for a completion flag.
    #[must_use]
    pub const fn from_complete(complete: bool) -> Self {
        if complete {
            Self::Complete
        } else {
            Self::Incomplete
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "Complete",
            Self::Incomplete => "Incomplete",
        }
    }

    /// Returns whether a task with the given completion flag has this status.
    #[must_use]
    pub const fn matches(self, complete: bool) -> bool {
        match self {
            Self::Complete => complete,
            Self::Incomplete => !complete,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Complete" => Ok(Self::Complete),
            "Incomplete" => Ok(Self::Incomplete),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}
