//! Tab-scoped key/value store

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory key/value store scoped to the lifetime of the client (the
/// "tab"). Clones share the same underlying map.
///
/// Structured values are stored as JSON strings; plain strings go in raw.
/// Reads are best-effort round-trips: a stored value that does not parse as
/// JSON comes back as the raw string rather than failing.
pub struct SessionStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Store a value under `name`, overwriting any previous entry.
    pub fn set<T: Serialize + ?Sized>(&self, name: &str, value: &T) {
        let raw = match serde_json::to_value(value) {
            Ok(Value::String(s)) => s,
            Ok(other) => other.to_string(),
            Err(e) => {
                tracing::warn!(name = %name, error = %e, "Failed to serialize session value");
                return;
            }
        };

        self.entries.write().insert(name.to_string(), raw);
    }

    /// Fetch a value. Stored JSON round-trips back into structured data;
    /// anything else comes back as a raw string.
    pub fn get(&self, name: &str) -> Option<Value> {
        let raw = self.entries.read().get(name).cloned()?;
        Some(serde_json::from_str(&raw).unwrap_or(Value::String(raw)))
    }

    /// Typed read on top of [`SessionStore::get`].
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        serde_json::from_value(self.get(name)?).ok()
    }

    /// Remove an entry, reporting whether one was present.
    pub fn remove(&self, name: &str) -> bool {
        self.entries.write().remove(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SessionStore {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}
