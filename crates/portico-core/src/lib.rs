//! PORTICO Core
//!
//! Central wiring for the PORTICO portal client: configuration, logging and
//! the [`Portal`] facade over session, transport, auth and request helpers.

mod config;
mod error;
mod portal;

pub use config::{Config, API_URL_ENV, SITE_TITLE_ENV};
pub use error::CoreError;
pub use portal::Portal;

// Re-export the client components
pub use portico_api::{ApiClient, Notifier, SharedNotifier, TracingNotifier};
pub use portico_auth::{
    AuthError, AuthService, Continuation, Credentials, LoggingNavigator, Navigator,
    SharedNavigator, TokenClaims,
};
pub use portico_http::{
    ApiData, ApiError, ApiErrorCode, ApiResponse, HttpClient, HttpError, AUTH_HEADER,
};
pub use portico_session::SessionStore;
pub use portico_util::{
    capitalize, format_phone_num, format_zip_code, page_title, postify, remove_by_id,
    search_filter, sort_values, Query, SortOrder,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
