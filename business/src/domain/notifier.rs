/// Sink for user-facing messages (toasts, banners, API payloads).
///
/// Fire-and-forget: implementations must not fail and nothing is acknowledged.
/// There is a single severity level.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}
