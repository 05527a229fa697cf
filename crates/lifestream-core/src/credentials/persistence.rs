use std::fs;
use std::path::{Path, PathBuf};

use ini::{Ini, WriteOption};
use tracing::{debug, info};

use super::errors::CredentialsError;
use super::types::Credentials;

pub const CREDENTIALS_FILENAME: &str = "credentials";

const EMAIL_KEY: &str = "email";
const SHARD_ID_KEY: &str = "shard_id";

/// Credentials file with one section per profile name.
///
/// Sections belonging to other profiles are carried over untouched on every
/// write. There is no removal operation.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(CREDENTIALS_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Insert or replace the section for `profile`.
    pub fn store(&self, profile: &str, credentials: &Credentials) -> Result<(), CredentialsError> {
        let mut ini = self.read_ini()?.unwrap_or_default();

        ini.delete(Some(profile));
        ini.with_section(Some(profile))
            .set(EMAIL_KEY, credentials.email.as_str())
            .set(SHARD_ID_KEY, credentials.session_token.as_str());

        // configparser writes `key = value`
        let option = WriteOption {
            kv_separator: " = ",
            ..WriteOption::default()
        };
        let mut content = Vec::new();
        ini.write_to_opt(&mut content, option)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, content)?;

        info!(
            event = "core.credentials.stored",
            profile = profile,
            email = %credentials.email
        );
        Ok(())
    }

    /// Credentials for `profile`, or `None` when the file or section is absent.
    pub fn load(&self, profile: &str) -> Result<Option<Credentials>, CredentialsError> {
        let Some(ini) = self.read_ini()? else {
            debug!(event = "core.credentials.file_missing", profile = profile);
            return Ok(None);
        };

        let Some(section) = ini.section(Some(profile)) else {
            debug!(event = "core.credentials.profile_missing", profile = profile);
            return Ok(None);
        };

        let field = |key: &str| {
            section
                .get(key)
                .map(str::to_string)
                .ok_or_else(|| CredentialsError::Corrupt {
                    path: self.path.display().to_string(),
                    message: format!("section [{}]: missing key `{}`", profile, key),
                })
        };

        Ok(Some(Credentials::new(field(EMAIL_KEY)?, field(SHARD_ID_KEY)?)))
    }

    fn read_ini(&self) -> Result<Option<Ini>, CredentialsError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let ini = Ini::load_from_str(&content).map_err(|e| CredentialsError::Corrupt {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Some(ini))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp_dir: &TempDir) -> CredentialStore {
        CredentialStore::new(temp_dir.path().join(".life-stream"))
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        assert_eq!(store.load("default").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_store_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        let creds = Credentials::new("a@b.com", "xyz");

        store.store("local", &creds).unwrap();
        assert_eq!(store.load("local").unwrap(), Some(creds));
        assert_eq!(store.load("default").unwrap(), None);
    }

    #[test]
    fn test_profile_isolation() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        let a = Credentials::new("a@example.com", "token-a");
        let b = Credentials::new("b@example.com", "token-b");

        store.store("default", &a).unwrap();
        store.store("local", &b).unwrap();

        let reopened = store_in(&temp_dir);
        assert_eq!(reopened.load("default").unwrap(), Some(a));
        assert_eq!(reopened.load("local").unwrap(), Some(b));
    }

    #[test]
    fn test_store_overwrites_same_profile() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        store
            .store("default", &Credentials::new("old@example.com", "old"))
            .unwrap();
        store
            .store("default", &Credentials::new("new@example.com", "new"))
            .unwrap();

        assert_eq!(
            store.load("default").unwrap(),
            Some(Credentials::new("new@example.com", "new"))
        );
        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content.matches("[default]").count(), 1);
    }

    #[test]
    fn test_file_format_uses_shard_id() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        store
            .store("default", &Credentials::new("a@b.com", "xyz"))
            .unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("[default]"));
        assert!(content.contains("email = a@b.com"));
        assert!(content.contains("shard_id = xyz"));
        assert!(!content.contains('"'));
    }

    #[test]
    fn test_load_configparser_output() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        // Exactly what Python's configparser writes
        fs::write(
            store.path(),
            "[default]\nemail = a@b.com\nshard_id = xyz\n\n[local]\nemail = c@d.com\nshard_id = 42\n\n",
        )
        .unwrap();

        assert_eq!(
            store.load("default").unwrap(),
            Some(Credentials::new("a@b.com", "xyz"))
        );
        assert_eq!(
            store.load("local").unwrap(),
            Some(Credentials::new("c@d.com", "42"))
        );

        store
            .store("default", &Credentials::new("new@b.com", "abc"))
            .unwrap();
        assert_eq!(
            store.load("default").unwrap(),
            Some(Credentials::new("new@b.com", "abc"))
        );
        assert_eq!(
            store.load("local").unwrap(),
            Some(Credentials::new("c@d.com", "42"))
        );
    }

    #[test]
    fn test_load_quoted_values() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(
            store.path(),
            "[default]\nemail = \"a@b.com\"\nshard_id = \"xyz\"\n",
        )
        .unwrap();

        assert_eq!(
            store.load("default").unwrap(),
            Some(Credentials::new("a@b.com", "xyz"))
        );
    }

    #[test]
    fn test_store_preserves_foreign_sections() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(
            store.path(),
            "[legacy]\nemail = old@example.com\nshard_id = 1\nnote = keep me\n",
        )
        .unwrap();

        store
            .store("default", &Credentials::new("a@b.com", "xyz"))
            .unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("note = keep me"));
        assert_eq!(
            store.load("legacy").unwrap(),
            Some(Credentials::new("old@example.com", "1"))
        );
    }

    #[test]
    fn test_load_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "[default\nemail = ").unwrap();

        let err = store.load("default").unwrap_err();
        assert!(matches!(err, CredentialsError::Corrupt { .. }));
    }

    #[test]
    fn test_load_section_missing_token_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "[default]\nemail = a@b.com\n").unwrap();

        let err = store.load("default").unwrap_err();
        assert!(err.to_string().contains("section [default]"));
        assert!(err.to_string().contains("shard_id"));
    }

    #[test]
    fn test_store_on_corrupt_file_fails_without_overwriting() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "[default\nemail = a@b.com\n").unwrap();

        let result = store.store("default", &Credentials::new("a@b.com", "xyz"));
        assert!(result.is_err());
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "[default\nemail = a@b.com\n"
        );
    }
}
