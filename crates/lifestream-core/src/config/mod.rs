//! # Configuration Store
//!
//! JSON document at `<config dir>/config.json` holding a free-form `params`
//! tree addressed with dotted keys.
//!
//! ```json
//! {
//!     "version": "0.1.0",
//!     "params": {
//!         "active-profile": "default",
//!         "profiles": {
//!             "default": { "endpoint": "http://api.lifestream.176.102.64.189.xip.io" },
//!             "local": { "endpoint": "http://localhost:8080" }
//!         }
//!     }
//! }
//! ```
//!
//! ```rust,no_run
//! use lifestream_core::config::ConfigStore;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = ConfigStore::new("/home/me/.life-stream");
//!     store.set("profiles.staging.endpoint", "https://staging.example.com")?;
//!     let endpoint = store.get("profiles.staging.endpoint")?;
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod errors;
pub mod store;
pub mod types;

pub use defaults::{ACTIVE_PROFILE_KEY, endpoint_key};
pub use errors::ConfigError;
pub use store::ConfigStore;
pub use types::ConfigDocument;
