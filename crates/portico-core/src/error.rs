//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] portico_http::HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] portico_auth::AuthError),

    #[error("Configuration error: {0}")]
    Config(String),
}
