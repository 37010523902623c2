//! Navigation seam
//!
//! Routing and the window live in the shell, outside this crate. Auth only
//! needs three movements, so they are a trait the host injects.

use std::sync::Arc;

pub trait Navigator: Send + Sync {
    /// Path the user is currently on, e.g. `/reports/monthly`.
    fn current_path(&self) -> String;

    /// Navigate to the application root.
    fn goto_root(&self);

    /// Force a full view reload.
    fn reload(&self);
}

pub type SharedNavigator = Arc<dyn Navigator>;

/// Default navigator for headless callers and tests: records the intent in
/// the log and nothing else.
#[derive(Debug, Default, Clone)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn current_path(&self) -> String {
        "/".to_string()
    }

    fn goto_root(&self) {
        tracing::info!("Navigating to application root");
    }

    fn reload(&self) {
        tracing::info!("Reloading view");
    }
}
