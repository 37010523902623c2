//! Thin transport wrapper around reqwest
//!
//! One instance owns the base URL and the current auth token. The token slot
//! replaces the original module-level default-header mutation: a single
//! writer (the auth service) sets it, every outbound request reads it.

use parking_lot::RwLock;
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use url::Url;

use crate::error::{ApiError, HttpError};
use crate::Result;

/// Header carrying the bearer token on every authenticated request.
pub const AUTH_HEADER: &str = "X-Auth-Token";

pub struct HttpClient {
    inner: reqwest::Client,
    base_url: Url,
    token: Arc<RwLock<Option<String>>>,
}

impl HttpClient {
    pub fn new(base_url: Url) -> Result<Self> {
        let inner = reqwest::Client::builder().build()?;

        Ok(Self {
            inner,
            base_url,
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Replace the token sent with every subsequent request. The previous
    /// token, if any, is superseded.
    pub fn set_token(&self, token: &str) {
        *self.token.write() = Some(token.to_string());
    }

    pub fn clear_token(&self) {
        *self.token.write() = None;
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        let mut url = self.endpoint(path)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        let request = self.apply_token(self.inner.get(url));
        self.dispatch(request).await
    }

    /// POST a pre-encoded `application/x-www-form-urlencoded` body.
    pub async fn post_form(&self, path: &str, body: &str) -> Result<Value> {
        let request = self
            .apply_token(self.inner.post(self.endpoint(path)?))
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(body.to_string());
        self.dispatch(request).await
    }

    pub async fn put_form(&self, path: &str, body: &str) -> Result<Value> {
        let request = self
            .apply_token(self.inner.put(self.endpoint(path)?))
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(body.to_string());
        self.dispatch(request).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value> {
        let request = self.apply_token(self.inner.delete(self.endpoint(path)?));
        self.dispatch(request).await
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    fn apply_token(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token.read().as_deref() {
            Some(token) => request.header(AUTH_HEADER, token),
            None => request,
        }
    }

    /// Send the request and inspect the outcome. Client errors in [400, 500)
    /// pass through untouched; anything else is logged as unexpected before
    /// being returned. Failures are never suppressed here, only annotated.
    async fn dispatch(&self, request: reqwest::RequestBuilder) -> Result<Value> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "Transport failure");
                return Err(HttpError::Transport(e));
            }
        };

        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            if body.is_empty() {
                return Ok(Value::Null);
            }
            return Ok(serde_json::from_str(&body)?);
        }

        let body = response.text().await.unwrap_or_default();
        let error = parse_error_body(&body, status);

        if !expected_client_error(status) {
            tracing::error!(status = %status, error = %error, "Unexpected API failure");
        }

        Err(HttpError::Api { status, error })
    }
}

fn expected_client_error(status: StatusCode) -> bool {
    status.as_u16() >= 400 && status.as_u16() < 500
}

/// Pull the server's failure message out of the body. The API reports errors
/// as `{"error": {"message": ...}}`, with an older `{"errors": "..."}` shape
/// still in use on a few endpoints.
fn parse_error_body(body: &str, status: StatusCode) -> ApiError {
    #[derive(serde::Deserialize)]
    struct ErrorPayload {
        message: Option<String>,
    }

    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: Option<ErrorPayload>,
        errors: Option<String>,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => {
            let message = parsed
                .error
                .and_then(|e| e.message)
                .or(parsed.errors)
                .unwrap_or_else(|| format!("HTTP {status}"));
            ApiError::new(message)
        }
        Err(_) => ApiError::new(format!("HTTP {status}")),
    }
}

impl Clone for HttpClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            base_url: self.base_url.clone(),
            token: Arc::clone(&self.token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiErrorCode;
    use parking_lot::Mutex;
    use std::io;
    use std::sync::Arc;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> HttpClient {
        HttpClient::new(server.uri().parse().unwrap()).unwrap()
    }

    /// Captures this thread's log output so tests can assert on diagnostics.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn capture() -> (Self, tracing::subscriber::DefaultGuard) {
            let buffer = Self::default();
            let subscriber = tracing_subscriber::fmt()
                .with_writer(buffer.clone())
                .with_ansi(false)
                .finish();
            let guard = tracing::subscriber::set_default(subscriber);
            (buffer, guard)
        }

        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[tokio::test]
    async fn test_get_returns_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/things"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let body = client.get("things", &[]).await.unwrap();
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn test_query_params_appended() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/things"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client.get("things", &[("page", "2")]).await.unwrap();
    }

    #[tokio::test]
    async fn test_token_header_applied_and_superseded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/things"))
            .and(header(AUTH_HEADER, "second"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(null)))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client.set_token("first");
        client.set_token("second");
        client.get("things", &[]).await.unwrap();
    }

    #[tokio::test]
    async fn test_client_error_passes_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(
                serde_json::json!({"error": {"message": "No such record"}}),
            ))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let (logs, _guard) = LogBuffer::capture();
        let err = client.get("missing", &[]).await.unwrap_err();
        match err {
            HttpError::Api { status, error } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(error.code, ApiErrorCode::Other);
                assert_eq!(error.message, "No such record");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
        assert!(
            !logs.contents().contains("Unexpected API failure"),
            "client errors pass through without a diagnostic"
        );
    }

    #[tokio::test]
    async fn test_server_error_still_carries_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/boom"))
            .respond_with(ResponseTemplate::new(500).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let (logs, _guard) = LogBuffer::capture();
        let err = client.get("boom", &[]).await.unwrap_err();
        match err {
            HttpError::Api { status, error } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(error.message, "HTTP 500 Internal Server Error");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
        let captured = logs.contents();
        assert!(
            captured.contains("Unexpected API failure"),
            "server errors are annotated, got: {captured}"
        );
    }

    #[tokio::test]
    async fn test_legacy_errors_field() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/legacy"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({"errors": "Expired token"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.get("legacy", &[]).await.unwrap_err();
        assert_eq!(
            err.api_error().unwrap().code,
            ApiErrorCode::TokenExpired
        );
    }

    #[tokio::test]
    async fn test_post_form_sends_encoded_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/post/users/login"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(wiremock::matchers::body_string("a=1&b=2"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let body = client.post_form("post/users/login", "a=1&b=2").await.unwrap();
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn test_put_form() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/things/1"))
            .and(wiremock::matchers::body_string("name=new"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"updated": true})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let body = client.put_form("things/1", "name=new").await.unwrap();
        assert_eq!(body["updated"], true);
    }

    #[tokio::test]
    async fn test_empty_body_is_null() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/things/1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        assert_eq!(client.delete("things/1").await.unwrap(), Value::Null);
    }
}
