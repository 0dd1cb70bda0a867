//! Shared fixtures for in-memory session integration tests.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rstest::fixture;
use tasktrack::{
    clock::FixedClock,
    task::{
        adapters::memory::InMemoryTaskSource,
        ports::{TodoRecord, UserRecord},
        services::TaskSession,
    },
};

/// Session type used across integration tests.
pub type TestSession = TaskSession<FixedClock>;

/// Evaluation instant for every integration test.
pub fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-06-15T09:30:00Z")
        .expect("valid RFC 3339 timestamp")
        .with_timezone(&Utc)
}

/// Provides a source shaped like the public placeholder todo provider.
#[fixture]
pub fn source() -> InMemoryTaskSource {
    let users = vec![
        UserRecord {
            id: 1,
            name: "Leanne Graham".to_owned(),
            email: "Sincere@april.biz".to_owned(),
        },
        UserRecord {
            id: 2,
            name: "Ervin Howell".to_owned(),
            email: "Shanna@melissa.tv".to_owned(),
        },
    ];
    let todos = [
        (1, 1, "delectus aut autem", false),
        (2, 1, "quis ut nam facilis et officia qui", false),
        (3, 1, "fugiat veniam minus", true),
        (21, 2, "suscipit repellat esse quibusdam voluptatem incidunt", false),
        (22, 2, "distinctio vitae autem nihil ut molestias quo", true),
    ]
    .into_iter()
    .map(|(id, user_id, title, completed)| TodoRecord {
        id,
        user_id,
        title: title.to_owned(),
        completed,
    })
    .collect();
    InMemoryTaskSource::with_records(users, todos)
}

/// Loads a session from `source` evaluated at [`now`].
pub async fn load(source: &InMemoryTaskSource) -> TestSession {
    TaskSession::load(source, Arc::new(FixedClock::new(now())))
        .await
        .expect("session loads")
}

/// Collects task identifiers in order.
pub fn ids<'a>(tasks: impl IntoIterator<Item = &'a tasktrack::task::domain::Task>) -> Vec<u64> {
    tasks.into_iter().map(|task| task.id().value()).collect()
}
