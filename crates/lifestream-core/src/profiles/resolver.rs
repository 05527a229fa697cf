use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{ACTIVE_PROFILE_KEY, ConfigDocument, ConfigStore, endpoint_key};

use super::errors::ProfileError;

/// Name of the active profile (`params.active-profile`).
///
/// # Errors
/// [`ProfileError::ProfileNotConfigured`] when the key is absent, empty or not a string.
pub fn active_profile(config: &ConfigStore) -> Result<String, ProfileError> {
    let doc = config.load()?;
    profile_in(&doc)
}

/// Endpoint of the active profile (`params.profiles.<profile>.endpoint`).
///
/// # Errors
/// [`ProfileError::EndpointNotConfigured`] naming the dotted key that was looked up.
pub fn active_endpoint(config: &ConfigStore) -> Result<String, ProfileError> {
    let doc = config.load()?;
    let profile = profile_in(&doc)?;
    let key = endpoint_key(&profile);

    match non_empty_str(doc.get(&key)) {
        Some(endpoint) => {
            debug!(
                event = "core.profiles.endpoint_resolved",
                profile = %profile,
                endpoint = endpoint
            );
            Ok(endpoint.to_string())
        }
        None => {
            warn!(event = "core.profiles.endpoint_missing", key = %key);
            Err(ProfileError::EndpointNotConfigured { key })
        }
    }
}

fn profile_in(doc: &ConfigDocument) -> Result<String, ProfileError> {
    non_empty_str(doc.get(ACTIVE_PROFILE_KEY))
        .map(str::to_string)
        .ok_or_else(|| {
            warn!(event = "core.profiles.active_profile_missing");
            ProfileError::ProfileNotConfigured {
                key: ACTIVE_PROFILE_KEY.to_string(),
            }
        })
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}
