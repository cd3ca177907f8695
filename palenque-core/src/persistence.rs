//! State persistence
//!
//! The full application state is snapshotted to a single JSON file,
//! wrapped in a schema-versioned envelope. A blob written by an
//! incompatible build is dropped and the store starts fresh from seed
//! data instead of trying to reconcile shapes.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::AppState;

/// Version of the persisted blob layout. Bump on incompatible
/// `AppState` changes.
pub const SCHEMA_VERSION: u32 = 1;

/// Default state file name.
pub const STATE_FILE_NAME: &str = "app-storage.json";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Envelope written to disk.
#[derive(Debug, Serialize)]
struct EnvelopeRef<'a> {
    schema_version: u32,
    state: &'a AppState,
}

/// Envelope read back. `state` stays raw until the version checks out.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    schema_version: u32,
    #[serde(default)]
    state: serde_json::Value,
}

/// Loads and saves application state snapshots.
#[derive(Debug)]
pub struct StateVault {
    path: Option<PathBuf>,
}

impl StateVault {
    /// Vault backed by a file.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// In-memory vault: loads yield nothing and saves are no-ops.
    pub fn ephemeral() -> Self {
        Self { path: None }
    }

    pub fn is_ephemeral(&self) -> bool {
        self.path.is_none()
    }

    /// Read the last snapshot. `None` means "start fresh": no file
    /// yet, an unreadable blob, or a schema this build does not know.
    pub fn load(&self) -> Result<Option<AppState>, PersistenceError> {
        let Some(path) = &self.path else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)?;
        let envelope: Envelope = match serde_json::from_str(&content) {
            Ok(envelope) => envelope,
            Err(err) => {
                tracing::warn!(error = %err, "State file unreadable, starting fresh");
                return Ok(None);
            }
        };

        if envelope.schema_version != SCHEMA_VERSION {
            tracing::warn!(
                found = envelope.schema_version,
                expected = SCHEMA_VERSION,
                "Unknown state schema version, starting fresh"
            );
            return Ok(None);
        }

        match serde_json::from_value(envelope.state) {
            Ok(state) => Ok(Some(state)),
            Err(err) => {
                tracing::warn!(error = %err, "State blob does not match schema, starting fresh");
                Ok(None)
            }
        }
    }

    /// Write a snapshot, creating parent directories as needed.
    pub fn save(&self, state: &AppState) -> Result<(), PersistenceError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let envelope = EnvelopeRef {
            schema_version: SCHEMA_VERSION,
            state,
        };
        let content = serde_json::to_string_pretty(&envelope)?;
        std::fs::write(path, content)?;

        tracing::debug!(path = %path.display(), "State snapshot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let vault = StateVault::at(dir.path().join(STATE_FILE_NAME));
        assert!(vault.load().unwrap().is_none());
    }

    #[test]
    fn test_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let vault = StateVault::at(dir.path().join(STATE_FILE_NAME));

        let mut state = AppState::seeded();
        state.is_authenticated = true;
        state.favorites.push(3);
        vault.save(&state).unwrap();

        let loaded = vault.load().unwrap().unwrap();
        assert!(loaded.is_authenticated);
        assert_eq!(loaded.favorites, vec![3]);
        assert_eq!(loaded.services.len(), state.services.len());
    }

    #[test]
    fn test_unknown_schema_version_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STATE_FILE_NAME);
        std::fs::write(&path, r#"{"schema_version": 99, "state": {}}"#).unwrap();

        let vault = StateVault::at(&path);
        assert!(vault.load().unwrap().is_none());
    }

    #[test]
    fn test_garbage_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STATE_FILE_NAME);
        std::fs::write(&path, "not json at all {{{").unwrap();

        let vault = StateVault::at(&path);
        assert!(vault.load().unwrap().is_none());
    }

    #[test]
    fn test_mismatched_state_shape_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STATE_FILE_NAME);
        std::fs::write(
            &path,
            format!(r#"{{"schema_version": {SCHEMA_VERSION}, "state": {{"services": 42}}}}"#),
        )
        .unwrap();

        let vault = StateVault::at(&path);
        assert!(vault.load().unwrap().is_none());
    }

    #[test]
    fn test_ephemeral_vault() {
        let vault = StateVault::ephemeral();
        assert!(vault.is_ephemeral());
        vault.save(&AppState::seeded()).unwrap();
        assert!(vault.load().unwrap().is_none());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/state").join(STATE_FILE_NAME);
        let vault = StateVault::at(&path);
        vault.save(&AppState::seeded()).unwrap();
        assert!(path.exists());
    }
}
