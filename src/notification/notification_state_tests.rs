//! Tests for the notification feed

use super::*;

fn note(user: &str, ref_name: &str) -> Notification {
    Notification::new(user, ref_name, Instant::now())
}

#[test]
fn test_message_format() {
    assert_eq!(note("alice", "main").message(), "alice modified main");
}

#[test]
fn test_message_names_repo_when_known() {
    let n = note("alice", "main").with_repo(Some("gitsync".to_string()));
    assert_eq!(n.message(), "alice modified main in gitsync");
}

#[test]
fn test_plain_line_without_extras() {
    assert_eq!(note("bob", "dev").plain_line(), "bob modified dev");
}

#[test]
fn test_plain_line_with_timestamp_and_revisions() {
    let n = note("carol", "feature-x")
        .with_timestamp(Some("09:05".to_string()))
        .with_revisions(Some("abc1234..def5678".to_string()));

    assert_eq!(
        n.plain_line(),
        "[09:05] carol modified feature-x (abc1234..def5678)"
    );
}

#[test]
fn test_append_assigns_increasing_sequence() {
    let mut feed = NotificationFeed::default();

    assert_eq!(feed.append(note("a", "x")), 1);
    assert_eq!(feed.append(note("b", "y")), 2);
    assert_eq!(feed.append(note("c", "z")), 3);

    let seqs: Vec<u64> = feed.iter().map(|n| n.seq).collect();
    assert_eq!(seqs, vec![1, 2, 3]);
    assert_eq!(feed.latest().unwrap().user, "c");
}

#[test]
fn test_unbounded_feed_keeps_everything() {
    let mut feed = NotificationFeed::new(None);
    for i in 0..2000 {
        feed.append(note(&format!("user{i}"), "main"));
    }

    assert_eq!(feed.len(), 2000);
    assert_eq!(feed.evicted(), 0);
}

#[test]
fn test_bounded_feed_evicts_oldest() {
    let mut feed = NotificationFeed::new(NonZeroUsize::new(2));
    feed.append(note("a", "x"));
    feed.append(note("b", "x"));
    feed.append(note("c", "x"));

    let users: Vec<&str> = feed.iter().map(|n| n.user.as_str()).collect();
    assert_eq!(users, vec!["b", "c"]);
    assert_eq!(feed.evicted(), 1);
}

#[test]
fn test_since_returns_newer_entries_only() {
    let mut feed = NotificationFeed::default();
    feed.append(note("a", "x"));
    feed.append(note("b", "x"));
    feed.append(note("c", "x"));

    let newer: Vec<&str> = feed.since(1).map(|n| n.user.as_str()).collect();
    assert_eq!(newer, vec!["b", "c"]);
    assert_eq!(feed.since(3).count(), 0);
}

#[test]
fn test_new_feed_is_empty() {
    let feed = NotificationFeed::default();
    assert!(feed.is_empty());
    assert!(feed.latest().is_none());
    assert_eq!(feed.evicted(), 0);
}

#[test]
fn test_window_returns_range_in_order() {
    let now = Instant::now();
    let mut feed = NotificationFeed::default();
    for user in ["a", "b", "c", "d"] {
        feed.append(Notification::new(user, "main", now));
    }

    let users: Vec<_> = feed.window(1..3).map(|n| n.user.as_str()).collect();
    assert_eq!(users, vec!["b", "c"]);

    // Out of range bounds are clamped
    let users: Vec<_> = feed.window(3..10).map(|n| n.user.as_str()).collect();
    assert_eq!(users, vec!["d"]);
    assert_eq!(feed.window(7..9).count(), 0);
}
