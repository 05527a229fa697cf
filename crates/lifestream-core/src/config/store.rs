use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

use super::defaults::CONFIG_FILENAME;
use super::errors::ConfigError;
use super::types::ConfigDocument;

/// Key/value config store backed by `config.json`.
///
/// The file is read on every access and rewritten in full on every mutation.
/// Writes are not atomic: a crash mid-write can leave a truncated file,
/// which the next `load` reports as [`ConfigError::Corrupt`].
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Bind a store to `config.json` inside `dir`. Nothing is touched on disk.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(CONFIG_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Make sure the config file exists, writing the built-in defaults if it doesn't.
    pub fn ensure(&self) -> Result<PathBuf, ConfigError> {
        if !self.path.exists() {
            self.store(&ConfigDocument::default())?;
            info!(
                event = "core.config.bootstrapped",
                path = %self.path.display()
            );
        }
        Ok(self.path.clone())
    }

    pub fn load(&self) -> Result<ConfigDocument, ConfigError> {
        self.ensure()?;
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| ConfigError::Corrupt {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Look up a dotted key. Absence anywhere along the path is `Ok(None)`.
    pub fn get(&self, key: &str) -> Result<Option<Value>, ConfigError> {
        let value = self.load()?.get(key).cloned();
        debug!(
            event = "core.config.get_completed",
            key = key,
            found = value.is_some()
        );
        Ok(value)
    }

    pub fn set(&self, key: &str, value: impl Into<Value>) -> Result<(), ConfigError> {
        let mut doc = self.load()?;
        doc.set(key, value.into())?;
        self.store(&doc)?;
        info!(event = "core.config.param_set", key = key);
        Ok(())
    }

    /// Remove a dotted key if present. The file is rewritten either way.
    pub fn unset(&self, key: &str) -> Result<(), ConfigError> {
        let mut doc = self.load()?;
        let removed = doc.unset(key);
        self.store(&doc)?;
        info!(
            event = "core.config.param_unset",
            key = key,
            removed = removed.is_some()
        );
        Ok(())
    }

    /// Overwrite the file with the built-in defaults.
    ///
    /// The current content is not parsed, so this also recovers a corrupted file.
    pub fn reset(&self) -> Result<(), ConfigError> {
        self.store(&ConfigDocument::default())?;
        info!(event = "core.config.reset", path = %self.path.display());
        Ok(())
    }

    fn store(&self, doc: &ConfigDocument) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, render(doc)?)?;
        Ok(())
    }
}

/// Pretty-print with four-space indentation and a trailing newline.
fn render(doc: &ConfigDocument) -> Result<String, ConfigError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    doc.serialize(&mut serializer)
        .map_err(|e| ConfigError::SerializeFailed {
            message: e.to_string(),
        })?;

    let mut json = String::from_utf8(buf).map_err(|e| ConfigError::SerializeFailed {
        message: e.to_string(),
    })?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::{LOCAL_ENDPOINT, REMOTE_ENDPOINT};
    use serde_json::json;
    use tempfile::TempDir;

    fn store_in(temp_dir: &TempDir) -> ConfigStore {
        ConfigStore::new(temp_dir.path().join(".life-stream"))
    }

    #[test]
    fn test_new_does_not_touch_disk() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        assert!(!store.path().exists());
        assert!(store.path().ends_with(".life-stream/config.json"));
    }

    #[test]
    fn test_ensure_writes_defaults_and_creates_dir() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        let path = store.ensure().unwrap();
        assert_eq!(path, store.path());
        assert!(path.exists());

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.ends_with("}\n"));
        assert!(content.contains("    \"version\": \"0.1.0\""));
        assert!(content.contains("\"active-profile\": \"default\""));
    }

    #[test]
    fn test_bootstrap_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        store.ensure().unwrap();
        let first = fs::read(store.path()).unwrap();

        for _ in 0..3 {
            store.ensure().unwrap();
            store.load().unwrap();
        }
        assert_eq!(fs::read(store.path()).unwrap(), first);
    }

    #[test]
    fn test_ensure_keeps_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        store.set("active-profile", "local").unwrap();

        store.ensure().unwrap();
        assert_eq!(store.get("active-profile").unwrap(), Some(json!("local")));
    }

    #[test]
    fn test_load_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{ this is not json").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, ConfigError::Corrupt { .. }));
        assert!(store.get("active-profile").is_err());
    }

    #[test]
    fn test_load_wrong_shape_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), r#"{"version": "0.1.0", "params": []}"#).unwrap();

        assert!(matches!(
            store.load().unwrap_err(),
            ConfigError::Corrupt { .. }
        ));
    }

    #[test]
    fn test_set_get_round_trip_persists() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        store
            .set("profiles.staging.endpoint", "http://staging:8080")
            .unwrap();

        let reopened = store_in(&temp_dir);
        assert_eq!(
            reopened.get("profiles.staging.endpoint").unwrap(),
            Some(json!("http://staging:8080"))
        );
    }

    #[test]
    fn test_set_through_scalar_leaves_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        store.ensure().unwrap();
        let before = fs::read(store.path()).unwrap();

        let err = store.set("active-profile.name", "x").unwrap_err();
        assert!(matches!(err, ConfigError::NotAMapping { .. }));
        assert_eq!(fs::read(store.path()).unwrap(), before);
    }

    #[test]
    fn test_unset_leaf() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        store.unset("profiles.local.endpoint").unwrap();
        assert_eq!(store.get("profiles.local.endpoint").unwrap(), None);
        assert_eq!(store.get("profiles.local").unwrap(), Some(json!({})));
        assert_eq!(
            store.get("profiles.default.endpoint").unwrap(),
            Some(json!(REMOTE_ENDPOINT))
        );
    }

    #[test]
    fn test_unset_missing_key_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        store.unset("does.not.exist").unwrap();
        assert_eq!(store.get("does").unwrap(), None);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        store.set("active-profile", "ghost").unwrap();
        store.unset("profiles.default.endpoint").unwrap();
        store.set("profiles.local.endpoint", "http://elsewhere").unwrap();

        store.reset().unwrap();
        assert_eq!(store.get("active-profile").unwrap(), Some(json!("default")));
        assert_eq!(
            store.get("profiles.default.endpoint").unwrap(),
            Some(json!(REMOTE_ENDPOINT))
        );
        assert_eq!(
            store.get("profiles.local.endpoint").unwrap(),
            Some(json!(LOCAL_ENDPOINT))
        );
    }

    #[test]
    fn test_reset_recovers_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "garbage").unwrap();

        store.reset().unwrap();
        assert_eq!(store.load().unwrap(), ConfigDocument::default());
    }

    #[test]
    fn test_reset_matches_bootstrap_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        store.ensure().unwrap();
        let bootstrapped = fs::read(store.path()).unwrap();

        store.set("x", "y").unwrap();
        store.reset().unwrap();
        assert_eq!(fs::read(store.path()).unwrap(), bootstrapped);
    }
}
