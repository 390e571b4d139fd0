//! Notification port for surfacing errors to a user.
//!
//! The cart store never propagates failures to its caller; it reports them
//! through this channel instead. The rendering mechanism (toast, banner,
//! terminal) is outside this crate - the shipped adapter forwards to the log.

/// Fire-and-forget channel for human-readable error messages.
pub trait Notifier: Send + Sync {
    /// Surface an error message to the user.
    fn error(&self, message: &str);
}

/// Notifier that forwards messages to `tracing::error!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}
