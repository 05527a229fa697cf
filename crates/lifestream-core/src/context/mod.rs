//! Per-process context handed to every command handler.
//!
//! Built once in `main`. Holds the two stores bound to the configuration
//! directory and exposes the profile-scoped lookups commands need.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::error;

use crate::config::{ConfigError, ConfigStore};
use crate::credentials::{CredentialStore, Credentials, CredentialsError};
use crate::errors::LifeStreamError;
use crate::profiles::{self, ProfileError};

pub const CONFIG_DIR_NAME: &str = ".life-stream";
pub const CONFIG_DIR_ENV: &str = "LIFE_STREAM_HOME";

#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Credentials(#[from] CredentialsError),
}

impl LifeStreamError for ContextError {
    fn error_code(&self) -> &'static str {
        match self {
            ContextError::Profile(e) => e.error_code(),
            ContextError::Credentials(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            ContextError::Profile(e) => e.is_user_error(),
            ContextError::Credentials(e) => e.is_user_error(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppContext {
    dir: PathBuf,
    pub config: ConfigStore,
    pub credentials: CredentialStore,
}

impl AppContext {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            config: ConfigStore::new(&dir),
            credentials: CredentialStore::new(&dir),
            dir,
        }
    }

    /// Context rooted at [`default_config_dir`].
    pub fn from_env() -> Self {
        Self::new(default_config_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn active_profile(&self) -> Result<String, ProfileError> {
        profiles::active_profile(&self.config)
    }

    pub fn resolve_endpoint(&self) -> Result<String, ProfileError> {
        profiles::active_endpoint(&self.config)
    }

    pub fn resolve_credentials(&self, profile: &str) -> Result<Option<Credentials>, CredentialsError> {
        self.credentials.load(profile)
    }

    pub fn store_credentials(
        &self,
        profile: &str,
        credentials: &Credentials,
    ) -> Result<(), CredentialsError> {
        self.credentials.store(profile, credentials)
    }

    /// Credentials of the active profile; `None` means not logged in.
    pub fn active_credentials(&self) -> Result<Option<Credentials>, ContextError> {
        let profile = self.active_profile()?;
        Ok(self.resolve_credentials(&profile)?)
    }

    /// Store credentials under the active profile.
    pub fn store_active_credentials(&self, credentials: &Credentials) -> Result<(), ContextError> {
        let profile = self.active_profile()?;
        self.store_credentials(&profile, credentials)?;
        Ok(())
    }

    pub fn get_param(&self, key: &str) -> Result<Option<Value>, ConfigError> {
        self.config.get(key)
    }

    pub fn set_param(&self, key: &str, value: impl Into<Value>) -> Result<(), ConfigError> {
        self.config.set(key, value)
    }

    pub fn unset_param(&self, key: &str) -> Result<(), ConfigError> {
        self.config.unset(key)
    }

    pub fn reset_params(&self) -> Result<(), ConfigError> {
        self.config.reset()
    }
}

/// `$LIFE_STREAM_HOME` if set and non-empty, otherwise `~/.life-stream`.
///
/// Falls back to `./.life-stream` when the home directory cannot be determined.
pub fn default_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV)
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }

    match dirs::home_dir() {
        Some(home) => home.join(CONFIG_DIR_NAME),
        None => {
            error!(
                event = "core.context.home_dir_not_found",
                fallback = ".",
                "Could not determine home directory - using current directory as fallback"
            );
            PathBuf::from(".").join(CONFIG_DIR_NAME)
        }
    }
}
