use std::collections::VecDeque;
use std::num::NonZeroUsize;
use std::time::Instant;

/// One checkout notification in the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Position in the feed's arrival order, starting at 1
    pub seq: u64,
    pub user: String,
    pub ref_name: String,
    /// Repository the ref lives in, when repository names are enabled
    pub repo: Option<String>,
    /// `HH:MM` at render time, when timestamps are enabled
    pub timestamp: Option<String>,
    /// Abbreviated `prev..current` range, when revisions are enabled
    pub revisions: Option<String>,
    pub created_at: Instant,
}

impl Notification {
    pub fn new(user: impl Into<String>, ref_name: impl Into<String>, created_at: Instant) -> Self {
        Self {
            seq: 0,
            user: user.into(),
            ref_name: ref_name.into(),
            repo: None,
            timestamp: None,
            revisions: None,
            created_at,
        }
    }

    pub fn with_timestamp(mut self, timestamp: Option<String>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_repo(mut self, repo: Option<String>) -> Self {
        self.repo = repo;
        self
    }

    pub fn with_revisions(mut self, revisions: Option<String>) -> Self {
        self.revisions = revisions;
        self
    }

    /// The notification body, e.g. `alice modified main in gitsync`
    pub fn message(&self) -> String {
        match &self.repo {
            Some(repo) => format!("{} modified {} in {}", self.user, self.ref_name, repo),
            None => format!("{} modified {}", self.user, self.ref_name),
        }
    }

    /// Single-line form used for plain output
    pub fn plain_line(&self) -> String {
        let mut line = String::new();
        if let Some(ts) = &self.timestamp {
            line.push_str(&format!("[{}] ", ts));
        }
        line.push_str(&self.message());
        if let Some(revisions) = &self.revisions {
            line.push_str(&format!(" ({})", revisions));
        }
        line
    }
}

/// Append-only container of notifications.
///
/// Unbounded unless a capacity is given, in which case the oldest entries
/// are evicted once it is exceeded.
#[derive(Debug, Clone)]
pub struct NotificationFeed {
    entries: VecDeque<Notification>,
    capacity: Option<NonZeroUsize>,
    next_seq: u64,
    evicted: u64,
}

impl NotificationFeed {
    pub fn new(capacity: Option<NonZeroUsize>) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
            next_seq: 1,
            evicted: 0,
        }
    }

    /// Append a notification as the last entry and return its sequence number
    pub fn append(&mut self, mut notification: Notification) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        notification.seq = seq;
        self.entries.push_back(notification);

        if let Some(capacity) = self.capacity {
            while self.entries.len() > capacity.get() {
                self.entries.pop_front();
                self.evicted += 1;
            }
        }

        seq
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// Entries at positions `range`, oldest first; clamped to the feed length
    pub fn window(&self, range: std::ops::Range<usize>) -> impl Iterator<Item = &Notification> {
        let end = range.end.min(self.entries.len());
        let start = range.start.min(end);
        self.entries.range(start..end)
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.entries.back()
    }

    /// Entries appended after the one with sequence number `seq`
    pub fn since(&self, seq: u64) -> impl Iterator<Item = &Notification> {
        self.entries.iter().filter(move |n| n.seq > seq)
    }

    /// Number of entries removed by the capacity limit
    pub fn evicted(&self) -> u64 {
        self.evicted
    }
}

impl Default for NotificationFeed {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
