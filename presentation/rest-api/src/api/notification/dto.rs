use chrono::{DateTime, Utc};
use poem_openapi::Object;

use notification::Notification;

#[derive(Debug, Clone, Object)]
pub struct NotificationResponse {
    /// User-facing message
    pub message: String,
    /// When the message was raised
    pub raised_at: DateTime<Utc>,
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            message: notification.message,
            raised_at: notification.raised_at,
        }
    }
}

impl NotificationResponse {
    /// A message raised by the current request.
    pub fn raised_now(message: &str) -> Self {
        Self {
            message: message.to_string(),
            raised_at: Utc::now(),
        }
    }
}
