//! Active profile and endpoint resolution.
//!
//! Nothing here is cached or persisted: every call re-reads the config store.

pub mod errors;
pub mod resolver;

pub use errors::ProfileError;
pub use resolver::{active_endpoint, active_profile};
