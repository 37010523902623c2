//! Uniform response envelope
//!
//! Every request helper resolves to `{data: T}` on success or
//! `{data: {error}}` on failure, so view code keeps a single path for both
//! outcomes.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: ApiData<T>,
}

/// Payload of an [`ApiResponse`]. The error arm is listed first so an
/// `{"error": ...}` body never falls through to a permissive `T`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiData<T> {
    Error { error: ApiError },
    Value(T),
}

impl<T> ApiResponse<T> {
    pub fn value(data: T) -> Self {
        Self {
            data: ApiData::Value(data),
        }
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            data: ApiData::Error { error },
        }
    }

    pub fn ok(&self) -> Option<&T> {
        match &self.data {
            ApiData::Value(value) => Some(value),
            ApiData::Error { .. } => None,
        }
    }

    pub fn err(&self) -> Option<&ApiError> {
        match &self.data {
            ApiData::Error { error } => Some(error),
            ApiData::Value(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.data, ApiData::Error { .. })
    }

    pub fn into_result(self) -> Result<T, ApiError> {
        match self.data {
            ApiData::Value(value) => Ok(value),
            ApiData::Error { error } => Err(error),
        }
    }
}

impl<T> From<ApiError> for ApiResponse<T> {
    fn from(error: ApiError) -> Self {
        Self::error(error)
    }
}
