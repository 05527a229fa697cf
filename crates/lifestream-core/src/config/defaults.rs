//! Built-in configuration written on first use and by `reset`.

use serde_json::{Map, Value, json};

use crate::config::types::ConfigDocument;

pub const CONFIG_FILENAME: &str = "config.json";
pub const CONFIG_VERSION: &str = "0.1.0";

pub const ACTIVE_PROFILE_KEY: &str = "active-profile";
pub const DEFAULT_PROFILE: &str = "default";
pub const LOCAL_PROFILE: &str = "local";

pub const REMOTE_ENDPOINT: &str = "http://api.lifestream.176.102.64.189.xip.io";
pub const LOCAL_ENDPOINT: &str = "http://localhost:8080";

/// Dotted key of a profile's endpoint, e.g. `profiles.local.endpoint`.
pub fn endpoint_key(profile: &str) -> String {
    format!("profiles.{}.endpoint", profile)
}

impl Default for ConfigDocument {
    fn default() -> Self {
        let mut params = Map::new();
        params.insert(ACTIVE_PROFILE_KEY.to_string(), json!(DEFAULT_PROFILE));
        params.insert(
            "profiles".to_string(),
            json!({
                DEFAULT_PROFILE: { "endpoint": REMOTE_ENDPOINT },
                LOCAL_PROFILE: { "endpoint": LOCAL_ENDPOINT },
            }),
        );

        Self {
            version: CONFIG_VERSION.to_string(),
            params,
        }
    }
}
