use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A journal entry as returned by the stream endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    #[serde(default)]
    pub raw: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Epoch milliseconds.
    pub created_at: i64,
    /// Everything else the server sent (attributes, owner, ...), kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AuthRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthResponse {
    pub shard_id: String,
}

/// Body of a rejected login.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct AuthFailure {
    #[serde(default)]
    pub code: Value,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SaveRequest<'a> {
    pub payload: &'a str,
    pub created_at: Option<i64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateRequest<'a> {
    pub payload: &'a str,
}

/// Filters for listing entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchFilter {
    /// Only entries from the last N days. Zero or negative means unbounded.
    pub days: Option<i64>,
    pub tags: Vec<String>,
    /// Attribute keys an entry must carry.
    pub attrs: Vec<String>,
}

impl FetchFilter {
    /// Build a filter from comma-separated tag and attribute lists.
    pub fn new(days: Option<i64>, tags: Option<&str>, attrs: Option<&str>) -> Self {
        Self {
            days,
            tags: split_list(tags),
            attrs: split_list(attrs),
        }
    }

    /// Lower time bound in epoch milliseconds, relative to `now`.
    pub fn after_millis(&self, now: DateTime<Utc>) -> Option<i64> {
        self.days
            .filter(|days| *days > 0)
            .map(|days| (now - Duration::days(days)).timestamp_millis())
    }

    /// Query parameters with `tags` and `attrs` repeated once per value.
    pub fn query_pairs(&self, now: DateTime<Utc>) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(after) = self.after_millis(now) {
            pairs.push(("after", after.to_string()));
        }
        pairs.extend(self.tags.iter().map(|tag| ("tags", tag.clone())));
        pairs.extend(self.attrs.iter().map(|attr| ("attrs", attr.clone())));
        pairs
    }
}

fn split_list(list: Option<&str>) -> Vec<String> {
    list.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
