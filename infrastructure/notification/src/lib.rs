pub mod queued_notifier;

pub use queued_notifier::{Notification, QueuedNotifier};
