use crate::errors::LifeStreamError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Failed to build HTTP client: {source}")]
    ClientBuildFailed { source: reqwest::Error },

    #[error("Request '{operation}' failed: {source}")]
    Transport {
        operation: &'static str,
        source: reqwest::Error,
    },

    #[error("Request '{operation}' returned HTTP {status}")]
    UnexpectedStatus { operation: &'static str, status: u16 },

    #[error("Request '{operation}' returned an unreadable body: {message}")]
    InvalidResponse {
        operation: &'static str,
        message: String,
    },
}

impl LifeStreamError for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            ApiError::ClientBuildFailed { .. } => "API_CLIENT_BUILD_FAILED",
            ApiError::Transport { .. } => "API_TRANSPORT_ERROR",
            ApiError::UnexpectedStatus { .. } => "API_UNEXPECTED_STATUS",
            ApiError::InvalidResponse { .. } => "API_INVALID_RESPONSE",
        }
    }

    fn is_user_error(&self) -> bool {
        // 401/403 mean the stored session token was rejected
        matches!(
            self,
            ApiError::UnexpectedStatus {
                status: 401 | 403,
                ..
            }
        )
    }
}
