//! PORTICO HTTP transport
//!
//! A base-URL-bound wrapper around reqwest carrying the auth token slot,
//! plus the wire shapes the rest of the client builds on: the structured
//! server error and the uniform `{data}` response envelope.

mod client;
mod error;
mod response;

pub use client::{HttpClient, AUTH_HEADER};
pub use error::{ApiError, ApiErrorCode, HttpError};
pub use response::{ApiData, ApiResponse};

pub type Result<T> = std::result::Result<T, HttpError>;
