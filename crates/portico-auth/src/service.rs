//! Auth service
//!
//! Drives the token lifecycle over its three states: absent, present-valid,
//! present-expired. Every outbound API call goes through [`AuthService::get_jwt`]
//! first, so the HTTP client's token slot is current even when the process
//! restarted but the session store kept the token.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use portico_http::{ApiError, ApiErrorCode, ApiResponse, HttpClient};
use portico_session::SessionStore;
use portico_util::postify;

use crate::claims::TokenClaims;
use crate::continuation::Continuation;
use crate::navigator::SharedNavigator;
use crate::Result;

/// Session store keys owned by the auth layer.
pub const TOKEN_KEY: &str = "token";
pub const INACTIVE_KEY: &str = "inactive";
pub const CONTINUE_KEY: &str = "continue";

const LOGIN_PATH: &str = "post/users/login";
const TOKEN_PATH: &str = "get/token";

const INACTIVE_MESSAGE: &str = "You have been logged out due to inactivity";

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
struct TokenGrant {
    token: String,
}

pub struct AuthService {
    http: HttpClient,
    session: SessionStore,
    navigator: SharedNavigator,
}

impl AuthService {
    pub fn new(http: HttpClient, session: SessionStore, navigator: SharedNavigator) -> Self {
        Self {
            http,
            session,
            navigator,
        }
    }

    /// POST credentials to the login endpoint and hand the envelope back to
    /// the caller. The token itself is fetched separately via [`AuthService::get_jwt`].
    pub async fn login(&self, credentials: &Credentials) -> Result<ApiResponse<Value>> {
        match self.http.post_form(LOGIN_PATH, &postify(credentials)).await {
            Ok(value) => Ok(ApiResponse::value(value)),
            Err(e) => match e.api_error() {
                Some(error) => Ok(ApiResponse::error(error.clone())),
                None => Err(e.into()),
            },
        }
    }

    /// Guarantee the HTTP client carries a current token, returning it.
    ///
    /// The cached token is reused unless `force_refresh` is set or nothing is
    /// cached; only then is the token endpoint hit. Either way the token ends
    /// up in the client's header slot.
    pub async fn get_jwt(&self, force_refresh: bool) -> Result<String> {
        let cached = self.session.get_as::<String>(TOKEN_KEY);

        let token = match cached {
            Some(token) if !force_refresh => token,
            _ => {
                let grant: TokenGrant =
                    serde_json::from_value(self.http.get(TOKEN_PATH, &[]).await?)?;
                self.session.set(TOKEN_KEY, &grant.token);
                tracing::debug!("Fetched fresh auth token");
                grant.token
            }
        };

        self.http.set_token(&token);
        Ok(token)
    }

    /// Check a server failure for an expired token, logging the user out when
    /// it is one. Returns whether a logout was triggered.
    pub fn is_expired(&self, error: &ApiError) -> bool {
        if error.code == ApiErrorCode::TokenExpired {
            tracing::info!("Auth token expired, logging out");
            self.logout(false);
            return true;
        }
        false
    }

    /// Drop the token and return to the root.
    ///
    /// An inactivity logout also records the user-facing message and the
    /// continuation target for the next login flow; a voluntary one clears
    /// any stale continuation instead.
    pub fn logout(&self, due_to_inactivity: bool) {
        self.session.remove(TOKEN_KEY);
        self.http.clear_token();

        if due_to_inactivity {
            let continuation = Continuation {
                exp: Utc::now(),
                url: self.navigator.current_path(),
            };
            self.session.set(INACTIVE_KEY, INACTIVE_MESSAGE);
            self.session.set(CONTINUE_KEY, &continuation);
            tracing::info!(url = %continuation.url, "Logged out due to inactivity");
        } else {
            self.session.remove(CONTINUE_KEY);
        }

        self.navigator.goto_root();
    }

    /// Drop the token without navigating or recording continuation state.
    /// Used when the server invalidates the session and a silent re-auth is
    /// wanted instead of a visible logout.
    pub fn reset(&self) {
        self.session.remove(TOKEN_KEY);
        self.http.clear_token();
    }

    /// Continuation recorded by the last inactivity logout, if any.
    pub fn continuation(&self) -> Option<Continuation> {
        self.session.get_as(CONTINUE_KEY)
    }

    /// Consumers clear the continuation once they have redirected.
    pub fn clear_continuation(&self) {
        self.session.remove(CONTINUE_KEY);
    }

    /// Read and clear the inactivity message for the login page.
    pub fn take_inactive_message(&self) -> Option<String> {
        let message = self.session.get_as(INACTIVE_KEY);
        self.session.remove(INACTIVE_KEY);
        message
    }

    /// Claims of the cached token. A token already past its local `exp`
    /// triggers a logout and yields nothing.
    pub fn current_user(&self) -> Option<TokenClaims> {
        let token: String = self.session.get_as(TOKEN_KEY)?;

        let claims = match TokenClaims::decode(&token) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to decode cached token");
                return None;
            }
        };

        if claims.is_expired(Utc::now()) {
            self.logout(false);
            return None;
        }

        Some(claims)
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn navigator(&self) -> &SharedNavigator {
        &self.navigator
    }
}

impl Clone for AuthService {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            session: self.session.clone(),
            navigator: SharedNavigator::clone(&self.navigator),
        }
    }
}
