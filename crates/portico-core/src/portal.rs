//! Portal facade
//!
//! Wires configuration, session store, transport, auth and request helpers
//! into one handle, the way the web shell consumed the services.

use std::sync::Arc;

use portico_api::{ApiClient, Notifier, TracingNotifier};
use portico_auth::{
    AuthService, Continuation, Credentials, LoggingNavigator, Navigator, TokenClaims,
};
use portico_http::{ApiResponse, HttpClient};
use portico_session::SessionStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::Result;

pub struct Portal {
    config: Config,
    session: SessionStore,
    http: HttpClient,
    auth: AuthService,
    api: ApiClient,
}

impl Portal {
    /// Build a portal with the default (logging-only) navigation and
    /// notification hooks.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_shell(config, Arc::new(LoggingNavigator), Arc::new(TracingNotifier))
    }

    /// Build a portal wired to the host's navigation and notification hooks.
    pub fn with_shell(
        config: Config,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let session = SessionStore::new();
        let http = HttpClient::new(config.api_url.clone())?;
        let auth = AuthService::new(http.clone(), session.clone(), navigator);
        let api = ApiClient::new(http.clone(), auth.clone(), notifier);

        tracing::info!(api_url = %config.api_url, "Portal initialized");

        Ok(Self {
            config,
            session,
            http,
            auth,
            api,
        })
    }

    /// Warm the token cache so the first real request already carries a
    /// valid header.
    pub async fn initialize(&self) -> Result<()> {
        self.auth.get_jwt(false).await?;
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    // === Auth operations ===

    pub async fn login(&self, credentials: &Credentials) -> Result<ApiResponse<Value>> {
        Ok(self.auth.login(credentials).await?)
    }

    pub async fn get_jwt(&self, force_refresh: bool) -> Result<String> {
        Ok(self.auth.get_jwt(force_refresh).await?)
    }

    pub fn logout(&self, due_to_inactivity: bool) {
        self.auth.logout(due_to_inactivity)
    }

    pub fn reset(&self) {
        self.auth.reset()
    }

    pub fn current_user(&self) -> Option<TokenClaims> {
        self.auth.current_user()
    }

    pub fn continuation(&self) -> Option<Continuation> {
        self.auth.continuation()
    }

    // === API operations ===

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ApiResponse<T> {
        self.api.get_api(path, query).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        self.api.post_api(path, body).await
    }
}
