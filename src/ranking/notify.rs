//! Notification surface

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{info, warn};

/// Fire-and-forget success/error channel
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn success(&self, message: &str) {
        (**self).success(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }
}

/// Sends notifications to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(notice = message, "rank notification");
    }

    fn error(&self, message: &str) {
        warn!(notice = message, "rank notification");
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

/// Keeps every notification in order, for callers that poll instead of subscribe
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.seen.lock().last().cloned()
    }

    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.seen.lock())
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.seen.lock().push(Notification::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.seen.lock().push(Notification::Error(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_order() {
        let notifier = Arc::new(RecordingNotifier::new());
        notifier.success("saved");
        notifier.error("failed");

        assert_eq!(
            notifier.last(),
            Some(Notification::Error("failed".to_string()))
        );
        assert_eq!(notifier.drain().len(), 2);
        assert!(notifier.notifications().is_empty());
    }
}
