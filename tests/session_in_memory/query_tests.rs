//! Queries a user would run from the task menu.

use super::helpers::{ids, load, source};
use rstest::rstest;
use tasktrack::task::{
    adapters::memory::InMemoryTaskSource,
    domain::{UserId, calculate_statistics, group_by_user, search_tasks},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_and_incomplete_views_cover_all_tasks(source: InMemoryTaskSource) {
    let session = load(&source).await;
    let user = session.user(UserId::new(1)).expect("user 1 loaded");

    assert_eq!(ids(user.tasks_by_status("Complete")), vec![3]);
    assert_eq!(ids(user.tasks_by_status("Incomplete")), vec![1, 2]);
    assert_eq!(format!("{:.2}", user.completion_rate()), "33.33");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_is_scoped_to_the_selected_user(source: InMemoryTaskSource) {
    let session = load(&source).await;
    let user = session.user(UserId::new(2)).expect("user 2 loaded");

    assert_eq!(ids(search_tasks(user.tasks(), "AUTEM")), vec![22]);
    assert_eq!(ids(search_tasks(user.tasks(), "")), vec![21, 22]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn statistics_and_groups_span_all_users(source: InMemoryTaskSource) {
    let session = load(&source).await;

    let stats = calculate_statistics(session.all_tasks());
    assert_eq!(stats.total_count, 5);
    assert_eq!(stats.completed_count, 2);
    assert_eq!(stats.incomplete_count, 3);
    assert_eq!(format!("{:.2}", stats.completion_rate), "40.00");

    let groups = group_by_user(session.all_tasks());
    let sizes: Vec<(u64, usize)> = groups
        .iter()
        .map(|(owner, tasks)| (owner.value(), tasks.len()))
        .collect();
    assert_eq!(sizes, vec![(1, 3), (2, 2)]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_user_is_absent(source: InMemoryTaskSource) {
    let session = load(&source).await;
    assert!(session.user(UserId::new(11)).is_none());
}
