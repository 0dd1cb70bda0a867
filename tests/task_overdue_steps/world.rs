//! Shared world state for overdue and completion rate BDD scenarios.

use chrono::{DateTime, Utc};
use rstest::fixture;
use tasktrack::{
    clock::FixedClock,
    task::domain::{Task, User},
};

/// Scenario world for task behaviour tests.
pub struct TaskScenarioWorld {
    pub clock: FixedClock,
    pub user: Option<User>,
    pub next_task_id: u64,
    pub overdue_count: Option<usize>,
    pub completion_rate: Option<f64>,
}

impl TaskScenarioWorld {
    /// Creates a world evaluated at the Unix epoch until a step sets the time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clock: FixedClock::new(DateTime::<Utc>::UNIX_EPOCH),
            user: None,
            next_task_id: 1,
            overdue_count: None,
            completion_rate: None,
        }
    }

    /// Returns the scenario user.
    pub fn user(&self) -> Result<&User, eyre::Report> {
        self.user
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing user in scenario world"))
    }

    /// Returns the scenario user for mutation.
    pub fn user_mut(&mut self) -> Result<&mut User, eyre::Report> {
        self.user
            .as_mut()
            .ok_or_else(|| eyre::eyre!("missing user in scenario world"))
    }

    /// Finds the scenario user's task with the given title.
    pub fn task_titled(&self, title: &str) -> Result<&Task, eyre::Report> {
        self.user()?
            .tasks()
            .iter()
            .find(|task| task.title() == title)
            .ok_or_else(|| eyre::eyre!("no task titled '{title}'"))
    }

    /// Allocates the next task identifier.
    pub fn allocate_task_id(&mut self) -> u64 {
        let id = self.next_task_id;
        self.next_task_id += 1;
        id
    }
}

impl Default for TaskScenarioWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskScenarioWorld {
    TaskScenarioWorld::default()
}
