//! User-facing notifications.
//!
//! One client operation (reading-list update) surfaces the server's error
//! message to the user synchronously before failing. [`Notifier`] is the
//! seam hosts implement to show that message in their own UI; the default
//! routes it through `tracing`.

/// Sink for messages that must reach the user directly.
pub trait Notifier: Send + Sync {
    /// Shows the message to the user. Called synchronously, before the
    /// triggering operation returns its error.
    fn notify(&self, message: &str);
}

/// Default notifier: emits the message as a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_notifier_is_object_safe() {
        let notifier: Box<dyn Notifier> = Box::new(LogNotifier);
        notifier.notify("server rejected the update");
    }
}
