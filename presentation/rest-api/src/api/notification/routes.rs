use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use notification::QueuedNotifier;

use crate::api::notification::dto::NotificationResponse;
use crate::api::tags::ApiTags;

pub struct NotificationApi {
    notifications: Arc<QueuedNotifier>,
}

impl NotificationApi {
    pub fn new(notifications: Arc<QueuedNotifier>) -> Self {
        Self { notifications }
    }
}

#[OpenApi]
impl NotificationApi {
    /// Drain pending notifications
    ///
    /// Returns every user-facing message raised since the last drain, oldest first,
    /// including those already reported in a cart operation response.
    /// Each message is returned only once.
    #[oai(path = "/notifications", method = "get", tag = "ApiTags::Notifications")]
    async fn drain(&self) -> Json<Vec<NotificationResponse>> {
        Json(
            self.notifications
                .drain()
                .into_iter()
                .map(NotificationResponse::from)
                .collect(),
        )
    }
}
