use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use tracing::warn;

use business::domain::notifier::Notifier;

/// A user-facing message waiting to be shown.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

/// Bounded in-memory notification queue, drained by the presentation layer.
///
/// When full, the oldest notification is dropped.
pub struct QueuedNotifier {
    queue: Mutex<VecDeque<Notification>>,
    capacity: usize,
}

impl QueuedNotifier {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            queue: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Takes every pending notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.queue().drain(..).collect()
    }

    pub fn pending(&self) -> usize {
        self.queue().len()
    }

    fn queue(&self) -> MutexGuard<'_, VecDeque<Notification>> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Notifier for QueuedNotifier {
    fn error(&self, message: &str) {
        warn!(target: "storefront", component = "notification", "{}", message);

        let mut queue = self.queue();
        if queue.len() == self.capacity {
            queue.pop_front();
        }
        queue.push_back(Notification {
            message: message.to_string(),
            raised_at: Utc::now(),
        });
    }
}
