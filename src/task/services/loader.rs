//! Assembles users and their tasks from raw provider records.

use std::collections::{HashMap, HashSet};

use crate::task::{
    domain::{Task, User, UserId},
    ports::TaskSource,
};

use super::TaskSessionResult;

/// Fetches users and todos from `source` and attaches each todo to its owner.
///
/// Users keep provider order and tasks keep provider order within each user.
/// Todos that reference an unknown user are skipped.
///
/// # Errors
///
/// Returns [`super::TaskSessionError::Source`] when either fetch fails.
pub async fn load_users<S>(source: &S) -> TaskSessionResult<Vec<User>>
where
    S: TaskSource + ?Sized,
{
    let user_records = source.fetch_users().await?;
    let todo_records = source.fetch_todos().await?;

    let known: HashSet<UserId> = user_records
        .iter()
        .map(|record| UserId::new(record.id))
        .collect();

    let mut tasks_by_owner: HashMap<UserId, Vec<Task>> = HashMap::new();
    let mut task_count = 0_usize;
    for todo in todo_records {
        let owner = UserId::new(todo.user_id);
        if !known.contains(&owner) {
            tracing::debug!(
                todo_id = todo.id,
                user_id = todo.user_id,
                "skipping todo for unknown user"
            );
            continue;
        }
        task_count += 1;
        tasks_by_owner.entry(owner).or_default().push(todo.into_task());
    }

    let mut users = Vec::with_capacity(user_records.len());
    for record in user_records {
        let id = UserId::new(record.id);
        let tasks = tasks_by_owner.get(&id).cloned().unwrap_or_default();
        users.push(User::new(id, record.name, record.email).with_tasks(tasks)?);
    }

    tracing::info!(users = users.len(), tasks = task_count, "loaded task snapshot");
    Ok(users)
}
