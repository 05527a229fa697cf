use crate::errors::LifeStreamError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file '{path}' is corrupted: {message}")]
    Corrupt { path: String, message: String },

    #[error("Cannot set '{key}': '{segment}' already holds a value that is not a mapping")]
    NotAMapping { key: String, segment: String },

    #[error("Failed to serialize config: {message}")]
    SerializeFailed { message: String },

    #[error("IO error on config file: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl LifeStreamError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Corrupt { .. } => "CONFIG_CORRUPT",
            ConfigError::NotAMapping { .. } => "CONFIG_NOT_A_MAPPING",
            ConfigError::SerializeFailed { .. } => "CONFIG_SERIALIZE_FAILED",
            ConfigError::Io { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            ConfigError::Corrupt { .. } | ConfigError::NotAMapping { .. } => true,
            ConfigError::SerializeFailed { .. } | ConfigError::Io { .. } => false,
        }
    }
}
