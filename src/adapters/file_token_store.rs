//! File-based session token storage.
//!
//! The token lives in `~/.connectsphere/session.json`. It is the only state
//! that survives a restart.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use crate::traits::{TokenStore, TokenStoreError};

const SESSION_DIR: &str = ".connectsphere";
const SESSION_FILE: &str = "session.json";

/// On-disk layout of the session file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSession {
    token: Option<String>,
}

/// Token store writing to a JSON file under the home directory.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Create a store at the default location.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn new() -> Option<Self> {
        let home = dirs::home_dir()?;
        Some(Self {
            path: home.join(SESSION_DIR).join(SESSION_FILE),
        })
    }

    /// Create a store at an explicit path. Used by tests.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the session file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, TokenStoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let file = File::open(&self.path)
            .map_err(|e| TokenStoreError::LoadFailed(e.to_string()))?;
        let reader = BufReader::new(file);
        let session: StoredSession = serde_json::from_reader(reader)
            .map_err(|e| TokenStoreError::Serialization(e.to_string()))?;
        Ok(session.token)
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| TokenStoreError::SaveFailed(e.to_string()))?;
            }
        }

        let session = StoredSession {
            token: Some(token.to_string()),
        };
        let file = File::create(&self.path)
            .map_err(|e| TokenStoreError::SaveFailed(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &session)
            .map_err(|e| TokenStoreError::Serialization(e.to_string()))?;
        writer
            .flush()
            .map_err(|e| TokenStoreError::SaveFailed(e.to_string()))
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        if !self.path.exists() {
            return Ok(());
        }
        fs::remove_file(&self.path).map_err(|e| TokenStoreError::ClearFailed(e.to_string()))
    }
}
