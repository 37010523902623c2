//! PORTICO Request helpers
//!
//! The one layer that produces user-facing results: each helper guarantees a
//! fresh token, issues the transport call and normalizes every outcome into
//! the uniform `{data}` envelope.

mod client;
mod notify;

pub use client::ApiClient;
pub use notify::{Notifier, SharedNotifier, TracingNotifier};
