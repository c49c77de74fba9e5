/// Diagnostic logging port. Not user-facing; see [`crate::domain::notifier::Notifier`].
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
