//! Application services that assemble and drive a task session.

mod loader;
mod session;

pub use loader::load_users;
pub use session::{CreatePriorityTaskRequest, TaskSession, TaskSessionError, TaskSessionResult};
