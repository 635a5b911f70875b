use std::collections::HashMap;
use std::sync::Mutex;

/// Key under which the backend bearer token is stored.
pub const TOKEN_KEY: &str = "token";

/// Credential/session storage contract. The browser app kept these values in
/// local storage; here the store is injected and only the HTTP client reads
/// it. Aggregation code receives identity as explicit parameters instead.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn clear(&self);
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: Mutex<HashMap<String, String>>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_owned(), value);
        }
    }

    fn clear(&self) {
        if let Ok(mut values) = self.values.lock() {
            values.clear();
        }
    }
}
