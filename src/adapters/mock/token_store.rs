//! In-memory token store for testing.

use std::sync::{Arc, Mutex};

use crate::traits::{TokenStore, TokenStoreError};

/// Token store keeping the value in memory.
///
/// Clones share the same storage, so a test can keep a handle to inspect
/// what the store-under-test persisted. Each operation can be made to fail
/// for testing the swallowed-error paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
    save_should_fail: Arc<Mutex<bool>>,
    clear_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryTokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `token`.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.to_string()))),
            ..Default::default()
        }
    }

    /// Configure whether save should fail.
    pub fn set_save_should_fail(&self, should_fail: bool) {
        *self.save_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether clear should fail.
    pub fn set_clear_should_fail(&self, should_fail: bool) {
        *self.clear_should_fail.lock().unwrap() = should_fail;
    }

    /// The currently stored token, bypassing the trait.
    pub fn stored(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }
}

impl TokenStore for InMemoryTokenStore {
    fn load(&self) -> Result<Option<String>, TokenStoreError> {
        Ok(self.token.lock().unwrap().clone())
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        if *self.save_should_fail.lock().unwrap() {
            return Err(TokenStoreError::SaveFailed("mock failure".to_string()));
        }
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        if *self.clear_should_fail.lock().unwrap() {
            return Err(TokenStoreError::ClearFailed("mock failure".to_string()));
        }
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_clear() {
        let store = InMemoryTokenStore::new();
        assert_eq!(store.load().unwrap(), None);

        store.save("tok").unwrap();
        assert_eq!(store.load().unwrap(), Some("tok".to_string()));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_with_token() {
        let store = InMemoryTokenStore::with_token("seed");
        assert_eq!(store.load().unwrap(), Some("seed".to_string()));
    }

    #[test]
    fn test_failure_toggles() {
        let store = InMemoryTokenStore::with_token("seed");

        store.set_save_should_fail(true);
        assert!(store.save("other").is_err());
        assert_eq!(store.stored(), Some("seed".to_string()));

        store.set_clear_should_fail(true);
        assert!(store.clear().is_err());
        assert_eq!(store.stored(), Some("seed".to_string()));
    }

    #[test]
    fn test_clones_share_storage() {
        let store = InMemoryTokenStore::new();
        let handle = store.clone();
        store.save("tok").unwrap();
        assert_eq!(handle.stored(), Some("tok".to_string()));
    }
}
