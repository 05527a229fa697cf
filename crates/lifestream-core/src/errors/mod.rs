use std::error::Error;

/// Base trait for all application errors
pub trait LifeStreamError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether the user can fix this by editing config or logging in again
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type LifeStreamResult<T> = Result<T, Box<dyn LifeStreamError>>;
