//! Whitelisted state persistence.
//!
//! Only the `auth` and `ui` slices survive a restart; everything else is
//! refetched from the fleet API. The snapshot is a versioned JSON
//! document with an explicit contract: a file written by a different
//! schema version is rejected, never silently migrated.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::auth::AuthSlice;
use super::ui::UiSlice;
use super::Store;

/// Version of the snapshot schema this build reads and writes.
pub const SCHEMA_VERSION: u32 = 1;

/// Errors that can occur persisting or restoring the snapshot.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Reading or writing the snapshot file failed.
    #[error("snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be encoded or decoded.
    #[error("snapshot serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// The snapshot was written by an incompatible schema version.
    #[error("unsupported snapshot schema version {found} (this build reads {supported})")]
    UnsupportedVersion {
        /// Version found in the file.
        found: u32,
        /// Version this build supports.
        supported: u32,
    },
}

/// The persisted subset of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    /// Snapshot schema version.
    pub schema_version: u32,
    /// Session state.
    pub auth: AuthSlice,
    /// UI chrome state.
    pub ui: UiSlice,
}

impl PersistedState {
    /// Snapshot the persisted subset of a store.
    #[must_use]
    pub fn snapshot(store: &Store) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            auth: store.auth.clone(),
            ui: store.ui.clone(),
        }
    }

    /// Apply a restored snapshot onto a store.
    pub fn restore_into(self, store: &mut Store) {
        store.auth = self.auth;
        store.ui = self.ui;
    }
}

/// Write the persisted subset of `store` to `path`.
///
/// # Errors
///
/// Returns an error if encoding or writing the file fails.
pub fn save(store: &Store, path: &Path) -> Result<(), PersistenceError> {
    let snapshot = PersistedState::snapshot(store);
    let json = serde_json::to_string_pretty(&snapshot)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Read a snapshot from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded, or if it was
/// written by a different schema version.
pub fn load(path: &Path) -> Result<PersistedState, PersistenceError> {
    let json = std::fs::read_to_string(path)?;
    let snapshot: PersistedState = serde_json::from_str(&json)?;
    if snapshot.schema_version != SCHEMA_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: snapshot.schema_version,
            supported: SCHEMA_VERSION,
        });
    }
    Ok(snapshot)
}

/// Restore the persisted subset from `path` into `store`.
///
/// # Errors
///
/// Same failure modes as [`load`].
pub fn restore(store: &mut Store, path: &Path) -> Result<(), PersistenceError> {
    load(path)?.restore_into(store);
    Ok(())
}
