//! In-memory session store.
//!
//! Process-lifetime key-value state: created when a chat session starts,
//! gone when the process exits. Clones share the underlying map, so the
//! identity handle and the preference readers see the same values.

use std::sync::Arc;

use dashmap::DashMap;

use natter_core::session::SessionStore;

/// Shared in-memory [`SessionStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    entries: Arc<DashMap<String, String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.get("user_id"), None);
    }

    #[test]
    fn test_set_then_get() {
        let store = InMemorySessionStore::new();
        store.set("user_id", "anon_abc123def4".to_string());

        assert_eq!(store.get("user_id").as_deref(), Some("anon_abc123def4"));
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let store = InMemorySessionStore::new();
        store.set("user_tone", "formal".to_string());
        store.set("user_tone", "friendly".to_string());

        assert_eq!(store.get("user_tone").as_deref(), Some("friendly"));
    }

    #[test]
    fn test_clones_share_state() {
        let store = InMemorySessionStore::new();
        let clone = store.clone();

        store.set("user_id", "u1".to_string());
        assert_eq!(clone.get("user_id").as_deref(), Some("u1"));
    }
}
