//! Bearer token payload decoding
//!
//! The token is a JWT. Only the payload segment is decoded; the server owns
//! signature validity, the client just reads `exp` and the user claims.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AuthError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Expiry, seconds since the Unix epoch
    pub exp: Option<i64>,
    /// Remaining claims (user id, name, role, ...)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl TokenClaims {
    pub fn decode(token: &str) -> Result<Self> {
        let payload = token
            .split('.')
            .nth(1)
            .ok_or_else(|| AuthError::MalformedToken("missing payload segment".to_string()))?;

        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|e| AuthError::MalformedToken(e.to_string()))?;

        Ok(serde_json::from_slice(&bytes)?)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| Utc.timestamp_opt(exp, 0).single())
    }

    /// Whether the token was already past its expiry at `now`. Tokens without
    /// an `exp` claim never expire locally.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expires_at(), Some(exp) if exp < now)
    }
}

#[cfg(test)]
pub(crate) fn encode_token(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
    format!("{header}.{payload}.sig")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_claims() {
        let token = encode_token(&json!({"exp": 1900000000, "name": "Ada", "role": "admin"}));
        let claims = TokenClaims::decode(&token).unwrap();

        assert_eq!(claims.exp, Some(1900000000));
        assert_eq!(claims.extra["name"], "Ada");
        assert_eq!(claims.extra["role"], "admin");
    }

    #[test]
    fn test_expiry_check() {
        let now = Utc::now();

        let live = TokenClaims::decode(&encode_token(&json!({"exp": now.timestamp() + 3600})))
            .unwrap();
        assert!(!live.is_expired(now));

        let stale = TokenClaims::decode(&encode_token(&json!({"exp": now.timestamp() - 3600})))
            .unwrap();
        assert!(stale.is_expired(now));
    }

    #[test]
    fn test_no_exp_never_expires() {
        let claims = TokenClaims::decode(&encode_token(&json!({"name": "Ada"}))).unwrap();
        assert!(!claims.is_expired(Utc::now()));
    }

    #[test]
    fn test_malformed_token() {
        assert!(TokenClaims::decode("no-dots-here").is_err());
        assert!(TokenClaims::decode("a.!!!.c").is_err());
    }
}
