//! lifestream-core: Core library for the life-stream journaling CLI
//!
//! Owns everything that touches local state and the remote service. The
//! CLI crate only parses arguments and prints.
//!
//! # Main Entry Points
//!
//! - [`context`] - Per-process context with profile-scoped lookups
//! - [`config`] - Dotted-key config store (`config.json`)
//! - [`credentials`] - Per-profile credentials file
//! - [`profiles`] - Active profile and endpoint resolution
//! - [`api`] - Blocking HTTP client for the journal service

pub mod api;
pub mod config;
pub mod context;
pub mod credentials;
pub mod errors;
pub mod events;
pub mod logging;
pub mod profiles;

// Re-export commonly used types at crate root for convenience
pub use api::{ApiClient, ApiError, Entry, FetchFilter};
pub use config::{ConfigDocument, ConfigError, ConfigStore};
pub use context::{AppContext, ContextError};
pub use credentials::{CredentialStore, Credentials, CredentialsError};
pub use errors::{LifeStreamError, LifeStreamResult};
pub use profiles::ProfileError;

// Re-export logging initialization
pub use logging::init_logging;
