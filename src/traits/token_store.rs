//! Session token storage trait abstraction.
//!
//! Exactly one value survives process restarts: the opaque bearer token.
//! Everything else is rebuilt in memory on each load.

/// Token storage errors.
#[derive(Debug, Clone)]
pub enum TokenStoreError {
    /// Failed to load the token
    LoadFailed(String),
    /// Failed to save the token
    SaveFailed(String),
    /// Failed to clear the token
    ClearFailed(String),
    /// Serialization/deserialization error
    Serialization(String),
}

impl std::fmt::Display for TokenStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenStoreError::LoadFailed(msg) => write!(f, "Failed to load token: {}", msg),
            TokenStoreError::SaveFailed(msg) => write!(f, "Failed to save token: {}", msg),
            TokenStoreError::ClearFailed(msg) => write!(f, "Failed to clear token: {}", msg),
            TokenStoreError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for TokenStoreError {}

/// Trait for durable storage of the session token.
///
/// The trait is synchronous: the store dispatch path that triggers
/// persistence is synchronous, and the production implementation is a small
/// local file write.
///
/// Implementations: [`crate::adapters::FileTokenStore`] for production and
/// [`crate::adapters::mock::InMemoryTokenStore`] for tests.
pub trait TokenStore: Send + Sync {
    /// Load the persisted token.
    ///
    /// Returns `Ok(None)` when no token is stored.
    fn load(&self) -> Result<Option<String>, TokenStoreError>;

    /// Persist the token, replacing any previous value.
    fn save(&self, token: &str) -> Result<(), TokenStoreError>;

    /// Remove the persisted token. Clearing an absent token is not an error.
    fn clear(&self) -> Result<(), TokenStoreError>;
}
