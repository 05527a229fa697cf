use std::fmt;

/// Identity and session token for one profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    /// Opaque token issued at login/registration, sent as `X-ShardId`.
    /// Stored under the `shard_id` key.
    pub session_token: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, session_token: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            session_token: session_token.into(),
        }
    }
}

// Display leaves the token out so credentials can be logged safely.
impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credentials(email: {})", self.email)
    }
}
