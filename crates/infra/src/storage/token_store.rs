//! File-backed token persistence
//!
//! The token lives in a small JSON key/value document under the fixed key
//! [`TOKEN_STORAGE_KEY`]. Other keys in the document are preserved.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde_json::{Map, Value};
use tasktime_core::TokenStore;
use tasktime_domain::constants::{STORAGE_FILE_NAME, TOKEN_STORAGE_KEY};
use tasktime_domain::{Result, TaskTimeError};
use tracing::{debug, warn};

use crate::errors::InfraError;

/// Default document location: `$XDG_DATA_HOME/tasktime/storage.json`, falling
/// back to `~/.local/share/tasktime/storage.json`.
pub fn default_storage_path() -> Option<PathBuf> {
    let data_home = std::env::var_os("XDG_DATA_HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| Path::new(&home).join(".local/share")))?;

    Some(data_home.join("tasktime").join(STORAGE_FILE_NAME))
}

/// Token store persisted as a JSON document on disk.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Mutex::new(()) }
    }

    /// Store at the configured path, or the default location.
    pub fn open(path: Option<PathBuf>) -> Result<Self> {
        let path = path.or_else(default_storage_path).ok_or_else(|| {
            TaskTimeError::Config("Could not determine a token storage location".into())
        })?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Map<String, Value>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => return Err(InfraError::from(err).into()),
        };

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) | Err(_) => {
                warn!(path = %self.path.display(), "storage document is corrupt; starting empty");
                Ok(Map::new())
            }
        }
    }

    fn write_document(&self, document: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(InfraError::from)?;
        }

        let contents = serde_json::to_string_pretty(document).map_err(InfraError::from)?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, contents).map_err(InfraError::from)?;
        fs::rename(&staging, &self.path).map_err(InfraError::from)?;
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>> {
        let _guard = self.lock.lock();
        let document = self.read_document()?;
        Ok(document
            .get(TOKEN_STORAGE_KEY)
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
            .map(str::to_string))
    }

    fn save(&self, token: &str) -> Result<()> {
        let _guard = self.lock.lock();
        let mut document = self.read_document()?;
        document.insert(TOKEN_STORAGE_KEY.to_string(), Value::String(token.to_string()));
        self.write_document(&document)?;
        debug!(path = %self.path.display(), "token saved");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let _guard = self.lock.lock();
        let mut document = self.read_document()?;
        if document.remove(TOKEN_STORAGE_KEY).is_none() {
            return Ok(());
        }
        self.write_document(&document)?;
        debug!(path = %self.path.display(), "token cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn store_in(dir: &TempDir) -> FileTokenStore {
        FileTokenStore::new(dir.path().join("nested").join(STORAGE_FILE_NAME))
    }

    #[test]
    fn missing_document_has_no_token() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.load().unwrap(), None);
        store.clear().unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn save_then_load_round_trips_under_fixed_key() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save("abc.def").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("abc.def"));

        let raw: Value = serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw[TOKEN_STORAGE_KEY], "abc.def");
    }

    #[test]
    fn clear_keeps_unrelated_keys() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), r#"{"token": "old", "theme": "dark"}"#).unwrap();

        store.clear().unwrap();

        assert_eq!(store.load().unwrap(), None);
        let raw: Value = serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw["theme"], "dark");
        assert!(raw.get(TOKEN_STORAGE_KEY).is_none());
    }

    #[test]
    fn corrupt_document_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{not json").unwrap();

        assert_eq!(store.load().unwrap(), None);
        store.save("fresh").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("fresh"));
    }
}
