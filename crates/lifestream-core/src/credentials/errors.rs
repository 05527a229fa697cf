use crate::errors::LifeStreamError;

#[derive(Debug, thiserror::Error)]
pub enum CredentialsError {
    #[error("Credentials file '{path}' is corrupted: {message}")]
    Corrupt { path: String, message: String },

    #[error("IO error on credentials file: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl LifeStreamError for CredentialsError {
    fn error_code(&self) -> &'static str {
        match self {
            CredentialsError::Corrupt { .. } => "CREDENTIALS_CORRUPT",
            CredentialsError::Io { .. } => "CREDENTIALS_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, CredentialsError::Corrupt { .. })
    }
}
