//! Request helpers
//!
//! Both helpers serialize the token-freshness call before the real request:
//! a request issued earlier would go out with a stale or absent header.
//! Neither ever returns `Err` — every failure is folded into the
//! `{data: {error}}` envelope so view code keeps one path.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use portico_auth::{AuthError, AuthService};
use portico_http::{ApiError, ApiErrorCode, ApiResponse, HttpClient, HttpError};
use portico_util::postify;

use crate::notify::SharedNotifier;

const GENERIC_ERROR: &str = "Something went wrong!";

/// How a non-token failure is surfaced to the user: GET keeps the generic
/// message, POST relays what the server said.
#[derive(Clone, Copy)]
enum ErrorSurface {
    Generic,
    ServerMessage,
}

pub struct ApiClient {
    http: HttpClient,
    auth: AuthService,
    notifier: SharedNotifier,
}

impl ApiClient {
    pub fn new(http: HttpClient, auth: AuthService, notifier: SharedNotifier) -> Self {
        Self {
            http,
            auth,
            notifier,
        }
    }

    /// GET an API path, optionally with query parameters.
    pub async fn get_api<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ApiResponse<T> {
        if let Err(e) = self.auth.get_jwt(false).await {
            return self.token_refresh_failed(e);
        }

        match self.http.get(path, query).await {
            Ok(value) => self.decode(value),
            Err(e) => self.handle_failure(e, ErrorSurface::Generic),
        }
    }

    /// POST to `post/<path>` with the body flattened into URL-encoded pairs,
    /// the wire contract for every POST in the system.
    pub async fn post_api<T, B>(&self, path: &str, body: &B) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        if let Err(e) = self.auth.get_jwt(false).await {
            return self.token_refresh_failed(e);
        }

        let path = format!("post/{path}");
        match self.http.post_form(&path, &postify(body)).await {
            Ok(value) => self.decode(value),
            Err(e) => self.handle_failure(e, ErrorSurface::ServerMessage),
        }
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    fn decode<T: DeserializeOwned>(&self, value: Value) -> ApiResponse<T> {
        match serde_json::from_value(value) {
            Ok(data) => ApiResponse::value(data),
            Err(e) => {
                tracing::error!(error = %e, "Failed to decode API response");
                self.notifier.error(GENERIC_ERROR);
                ApiResponse::error(ApiError::other(format!("malformed response: {e}")))
            }
        }
    }

    /// Failure policy shared by both helpers. An invalid token is an
    /// unrecoverable client state and forces a full reload; an expired one
    /// goes through the logout flow; everything else is surfaced and wrapped.
    fn handle_failure<T>(&self, error: HttpError, surface: ErrorSurface) -> ApiResponse<T> {
        let api_error = match error.api_error() {
            Some(e) => e.clone(),
            None => {
                tracing::error!(error = %error, "Request failed without server payload");
                self.notifier.error(GENERIC_ERROR);
                return ApiResponse::error(ApiError::other(error.to_string()));
            }
        };

        match api_error.code {
            ApiErrorCode::TokenInvalid => {
                tracing::warn!("Invalid token, forcing reload");
                self.auth.navigator().reload();
            }
            ApiErrorCode::TokenExpired => {
                self.auth.is_expired(&api_error);
            }
            ApiErrorCode::Other => {
                tracing::debug!(message = %api_error.message, "API request failed");
                match surface {
                    ErrorSurface::Generic => self.notifier.error(GENERIC_ERROR),
                    ErrorSurface::ServerMessage => self.notifier.error(&api_error.message),
                }
            }
        }

        ApiResponse::error(api_error)
    }

    fn token_refresh_failed<T>(&self, error: AuthError) -> ApiResponse<T> {
        tracing::warn!(error = %error, "Token refresh failed before request");
        self.notifier.error(GENERIC_ERROR);

        let api_error = match error {
            AuthError::Http(e) => e
                .api_error()
                .cloned()
                .unwrap_or_else(|| ApiError::other(e.to_string())),
            other => ApiError::other(other.to_string()),
        };
        ApiResponse::error(api_error)
    }
}

impl Clone for ApiClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            auth: self.auth.clone(),
            notifier: SharedNotifier::clone(&self.notifier),
        }
    }
}
