//! Notification boundary.
//!
//! The client never renders anything itself; user-visible messages (error
//! toasts and the like) go through this trait so the host UI decides how to
//! present them and tests can record them.

/// Sink for non-blocking user-visible notifications.
pub trait Notifier: Send + Sync {
    /// Surface a failure message to the user.
    fn error(&self, message: &str);

    /// Surface an informational message to the user.
    fn info(&self, message: &str) {
        let _ = message;
    }
}

/// Notifier that drops every message (headless/test default).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn error(&self, _message: &str) {}
}
