use crate::config::ConfigError;
use crate::errors::LifeStreamError;

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Active profile is not set (key '{key}')")]
    ProfileNotConfigured { key: String },

    #[error("Endpoint is not set for the key: {key}")]
    EndpointNotConfigured { key: String },

    #[error("Failed to read config: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}

impl LifeStreamError for ProfileError {
    fn error_code(&self) -> &'static str {
        match self {
            ProfileError::ProfileNotConfigured { .. } => "PROFILE_NOT_CONFIGURED",
            ProfileError::EndpointNotConfigured { .. } => "ENDPOINT_NOT_CONFIGURED",
            ProfileError::Config { source } => source.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            ProfileError::ProfileNotConfigured { .. }
            | ProfileError::EndpointNotConfigured { .. } => true,
            ProfileError::Config { source } => source.is_user_error(),
        }
    }
}
