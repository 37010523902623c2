//! POST body encoding and query-string parsing

use serde::Serialize;
use serde_json::Value;
use url::form_urlencoded;

/// Flatten a serializable value into `application/x-www-form-urlencoded`
/// key/value pairs. This is the wire encoding for every POST body in the
/// system.
///
/// Scalar values are rendered in their plain string form (no JSON quoting);
/// nulls become empty strings.
pub fn postify<T: Serialize>(values: &T) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());

    if let Ok(Value::Object(map)) = serde_json::to_value(values) {
        for (key, value) in &map {
            params.append_pair(key, &scalar_string(value));
        }
    }

    params.finish()
}

fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// A parsed query string.
///
/// One representation regardless of how many pairs the string carries, and
/// repeated keys are kept: `get` returns the first value, `all` returns every
/// value for a key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Parse `key=value&...`, tolerating a leading `?`. Keys and values are
    /// percent-decoded (the inverse of [`postify`]); pairs without an `=`
    /// become a key with an empty value, and empty segments are dropped.
    pub fn parse(input: &str) -> Self {
        let input = input.strip_prefix('?').unwrap_or(input);

        let pairs = form_urlencoded::parse(input.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        Self { pairs }
    }

    /// First value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value for `key`, in order of appearance.
    pub fn all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
