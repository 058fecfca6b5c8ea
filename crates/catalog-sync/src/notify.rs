//! Notifications
//!
//! Transient user feedback. Every success and every failure of a resource
//! call ends up here; the UI renders the queue and dismisses notices on a
//! timer.

use std::collections::VecDeque;

use log::{info, warn};

/// Receives user-facing feedback.
pub trait NotificationSink {
    fn show_success(&mut self, message: &str);

    /// One notice per message.
    fn show_errors(&mut self, messages: &[String]);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

const DEFAULT_CAPACITY: usize = 5;

/// Bounded queue of visible notices; the oldest is dropped when full.
#[derive(Debug, Clone)]
pub struct Notifications {
    notices: VecDeque<Notice>,
    next_id: u64,
    capacity: usize,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            notices: VecDeque::new(),
            next_id: 1,
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        while self.notices.len() >= self.capacity {
            self.notices.pop_front();
        }
        self.notices.push_back(Notice {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Returns false if the notice was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|notice| notice.id != id);
        self.notices.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.notices.back()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.notices
            .iter()
            .filter(|n| n.kind == NoticeKind::Error)
            .map(|n| n.message.as_str())
    }
}

impl NotificationSink for Notifications {
    fn show_success(&mut self, message: &str) {
        info!("notice: {}", message);
        self.push(NoticeKind::Success, message);
    }

    fn show_errors(&mut self, messages: &[String]) {
        for message in messages {
            warn!("notice: {}", message);
            self.push(NoticeKind::Error, message.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_error_is_its_own_notice() {
        let mut notices = Notifications::new();
        notices.show_errors(&["a".to_string(), "b".to_string()]);
        assert_eq!(notices.len(), 2);
        assert_eq!(notices.errors().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut notices = Notifications::with_capacity(2);
        let first = notices.push(NoticeKind::Success, "one");
        notices.push(NoticeKind::Success, "two");
        notices.push(NoticeKind::Error, "three");

        assert_eq!(notices.len(), 2);
        assert!(notices.iter().all(|n| n.id != first));
        assert_eq!(notices.latest().map(|n| n.message.as_str()), Some("three"));
    }

    #[test]
    fn test_dismiss() {
        let mut notices = Notifications::new();
        let id = notices.push(NoticeKind::Success, "saved");
        assert!(notices.dismiss(id));
        assert!(!notices.dismiss(id));
        assert!(notices.is_empty());
    }
}
