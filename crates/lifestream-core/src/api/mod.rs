//! Blocking client for the life-stream HTTP API.
//!
//! Each call is a single request; nothing is retried or queued.

pub mod client;
pub mod errors;
pub mod types;

pub use client::{ApiClient, SHARD_ID_HEADER};
pub use errors::ApiError;
pub use types::{Entry, FetchFilter};
