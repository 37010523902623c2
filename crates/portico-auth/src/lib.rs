//! PORTICO Auth
//!
//! Token acquisition, expiry handling and the logout/continuation flow, built
//! on the session store and HTTP client. The auth service is the single
//! writer of the HTTP client's token slot.

mod claims;
mod continuation;
mod error;
mod navigator;
mod service;

pub use claims::TokenClaims;
pub use continuation::Continuation;
pub use error::AuthError;
pub use navigator::{LoggingNavigator, Navigator, SharedNavigator};
pub use service::{AuthService, Credentials, CONTINUE_KEY, INACTIVE_KEY, TOKEN_KEY};

pub type Result<T> = std::result::Result<T, AuthError>;
