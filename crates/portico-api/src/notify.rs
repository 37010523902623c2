//! Notification seam
//!
//! Toast rendering lives in the shell; the request helpers only need a place
//! to hand user-facing messages to.

use std::sync::Arc;

pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
    fn info(&self, message: &str);
}

pub type SharedNotifier = Arc<dyn Notifier>;

/// Default notifier that routes messages into the log.
#[derive(Debug, Default, Clone)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        tracing::warn!(message = %message, "User-facing error");
    }

    fn info(&self, message: &str) {
        tracing::info!(message = %message, "User-facing notice");
    }
}
