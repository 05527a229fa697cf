//! Per-profile credentials kept apart from the general config.
//!
//! Stored at `<config dir>/credentials` as an INI file with one section per
//! profile, the layout Python's `configparser` reads and writes:
//!
//! ```ini
//! [default]
//! email = me@example.com
//! shard_id = 6f1c...
//! ```

pub mod errors;
pub mod persistence;
pub mod types;

pub use errors::CredentialsError;
pub use persistence::CredentialStore;
pub use types::Credentials;
