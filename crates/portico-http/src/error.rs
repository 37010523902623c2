//! HTTP error taxonomy

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Discriminated server failure.
///
/// The upstream API only distinguishes failures by free text, so the mapping
/// from message to code happens once, here at the wire boundary. Everything
/// downstream matches on the code instead of pattern-matching strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorCode {
    /// The token's lifetime ran out; the user is logged out with a redirect.
    TokenExpired,
    /// The token itself is rejected; the view is force-reloaded.
    TokenInvalid,
    #[default]
    Other,
}

impl ApiErrorCode {
    pub fn from_message(message: &str) -> Self {
        if message.starts_with("Expired") {
            ApiErrorCode::TokenExpired
        } else if message == "Token is not valid!" {
            ApiErrorCode::TokenInvalid
        } else {
            ApiErrorCode::Other
        }
    }
}

/// A server-reported failure with its derived code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: ApiErrorCode,
    pub message: String,
}

impl ApiError {
    /// Build from a server message, deriving the code from the text.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        let code = ApiErrorCode::from_message(&message);
        Self { code, message }
    }

    /// Build a client-side failure that carries no token semantics.
    pub fn other(message: impl Into<String>) -> Self {
        Self {
            code: ApiErrorCode::Other,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error ({status}): {error}")]
    Api { status: StatusCode, error: ApiError },

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl HttpError {
    /// The structured server failure, when there is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            HttpError::Api { error, .. } => Some(error),
            _ => None,
        }
    }
}
