//! Auth error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("HTTP error: {0}")]
    Http(#[from] portico_http::HttpError),

    #[error("malformed token: {0}")]
    MalformedToken(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
