//! Post-login continuation state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where to send the user after they log back in, recorded when an
/// inactivity logout interrupts them.
///
/// The store never clears this on its own; the login flow that consumes it
/// is responsible for removing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Continuation {
    /// When the interrupted session ended
    pub exp: DateTime<Utc>,
    /// Path that was active at logout time
    pub url: String,
}
