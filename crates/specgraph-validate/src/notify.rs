//! Progress notifications for the operator. The pipeline reports when a
//! run starts and when it completes; failures travel as errors instead.

/// Receives human-readable progress messages.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Emits each message as an `info` level tracing event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::info!("{message}");
    }
}
