//! Persistent session store.
//!
//! The single read/write gateway over the persisted `access_token` /
//! `username` pair. Components never touch the file directly; they hold an
//! `Arc<SessionStore>` and go through it, which is what lets logout enforce
//! clear-all semantics in one place.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// Environment variable overriding the data directory (used by tests).
pub const ENV_DATA_DIR: &str = "MENTALWELL_DATA_DIR";

/// On-disk session shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
struct SessionData {
    access_token: Option<String>,
    username: Option<String>,
}

/// Session store backed by a TOML file, or purely in-memory for tests.
///
/// Reads are served from an in-memory copy; every mutation is written
/// through to disk before it becomes visible, so a crash never leaves a
/// half-updated session.
pub struct SessionStore {
    path: Option<PathBuf>,
    data: RwLock<SessionData>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Token value deliberately not printed.
        f.debug_struct("SessionStore")
            .field("path", &self.path)
            .field("logged_in", &self.access_token().is_some())
            .finish()
    }
}

impl SessionStore {
    /// Open the store at the platform default location.
    pub fn open_default() -> Result<Self> {
        let dir = Self::data_dir().ok_or_else(|| {
            Error::Store("no data directory available on this platform".to_string())
        })?;
        Self::open(dir.join("session.toml"))
    }

    /// Open the store at an explicit path, loading existing state if any.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let data = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            toml::from_str(&contents)
                .map_err(|e| Error::Store(format!("bad session file {}: {}", path.display(), e)))?
        } else {
            SessionData::default()
        };
        Ok(Self {
            path: Some(path),
            data: RwLock::new(data),
        })
    }

    /// A store that never touches disk. For tests and dry runs.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: RwLock::new(SessionData::default()),
        }
    }

    /// Directory holding the session file.
    fn data_dir() -> Option<PathBuf> {
        if let Ok(dir) = env::var(ENV_DATA_DIR) {
            return Some(PathBuf::from(dir));
        }
        dirs::data_dir().map(|dir| dir.join("mentalwell"))
    }

    /// The stored bearer token, if any.
    pub fn access_token(&self) -> Option<String> {
        self.read().access_token.clone()
    }

    /// The stored account email, if any.
    pub fn username(&self) -> Option<String> {
        self.read().username.clone()
    }

    /// Whether a credential pair is stored. Says nothing about expiry;
    /// that is [`super::token_is_valid`]'s job.
    pub fn is_logged_in(&self) -> bool {
        self.read().access_token.is_some()
    }

    /// Persist a fresh login: token and email together, atomically from the
    /// caller's point of view.
    pub fn save_login(&self, access_token: &str, username: &str) -> Result<()> {
        let data = SessionData {
            access_token: Some(access_token.to_string()),
            username: Some(username.to_string()),
        };
        self.write(data)?;
        debug!(username, "session saved");
        Ok(())
    }

    /// Clear the whole session. Clear-all semantics: both keys go in one
    /// write, never selectively.
    pub fn logout(&self) -> Result<()> {
        self.write(SessionData::default())?;
        debug!("session cleared");
        Ok(())
    }

    fn read(&self) -> SessionData {
        match self.data.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn write(&self, data: SessionData) -> Result<()> {
        if let Some(path) = &self.path {
            Self::persist(path, &data)?;
        }
        match self.data.write() {
            Ok(mut guard) => *guard = data,
            Err(poisoned) => *poisoned.into_inner() = data,
        }
        Ok(())
    }

    fn persist(path: &Path, data: &SessionData) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(data)
            .map_err(|e| Error::Store(format!("failed to encode session: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_store_starts_empty() {
        let store = SessionStore::in_memory();
        assert!(store.access_token().is_none());
        assert!(store.username().is_none());
    }

    #[test]
    fn save_login_sets_both_values() {
        let store = SessionStore::in_memory();
        store.save_login("tok-123", "sam@example.com").unwrap();
        assert_eq!(store.access_token().as_deref(), Some("tok-123"));
        assert_eq!(store.username().as_deref(), Some("sam@example.com"));
        assert!(store.is_logged_in());
    }

    #[test]
    fn logout_clears_both_values() {
        let store = SessionStore::in_memory();
        store.save_login("tok-123", "sam@example.com").unwrap();
        store.logout().unwrap();
        assert!(store.access_token().is_none());
        assert!(store.username().is_none());
    }

    #[test]
    fn file_store_round_trips_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");

        let store = SessionStore::open(&path).unwrap();
        store.save_login("tok-abc", "sam@example.com").unwrap();
        drop(store);

        let reopened = SessionStore::open(&path).unwrap();
        assert_eq!(reopened.access_token().as_deref(), Some("tok-abc"));
        assert_eq!(reopened.username().as_deref(), Some("sam@example.com"));
    }

    #[test]
    fn file_store_logout_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");

        let store = SessionStore::open(&path).unwrap();
        store.save_login("tok-abc", "sam@example.com").unwrap();
        store.logout().unwrap();
        drop(store);

        let reopened = SessionStore::open(&path).unwrap();
        assert!(reopened.access_token().is_none());
        assert!(reopened.username().is_none());
    }

    #[test]
    fn opening_missing_file_yields_empty_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path().join("nope.toml")).unwrap();
        assert!(store.access_token().is_none());
    }

    #[test]
    fn open_creates_parent_directories_on_first_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("session.toml");
        let store = SessionStore::open(&path).unwrap();
        store.save_login("tok", "sam@example.com").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn debug_output_does_not_leak_token() {
        let store = SessionStore::in_memory();
        store.save_login("super-secret-token", "sam@example.com").unwrap();
        let debug = format!("{store:?}");
        assert!(!debug.contains("super-secret-token"));
    }
}
