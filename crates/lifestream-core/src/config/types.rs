use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::ConfigError;

/// The on-disk config document.
///
/// `params` is an untyped tree addressed with dotted keys such as
/// `profiles.local.endpoint`. Only mappings are descended into; any other
/// value is a leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Informational only, never compared against the crate version.
    pub version: String,
    pub params: Map<String, Value>,
}

/// Split a dotted key into its parent segments and the terminal segment.
fn split_key(key: &str) -> (Vec<&str>, &str) {
    match key.rsplit_once('.') {
        Some((parents, leaf)) => (parents.split('.').collect(), leaf),
        None => (Vec::new(), key),
    }
}

impl ConfigDocument {
    /// Resolve a dotted key.
    ///
    /// Returns `None` when any segment is missing, including when an
    /// intermediate segment holds a scalar instead of a mapping.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let (parents, leaf) = split_key(key);
        let mut node = &self.params;
        for segment in parents {
            node = node.get(segment)?.as_object()?;
        }
        node.get(leaf)
    }

    /// Set a dotted key, creating missing intermediate mappings.
    ///
    /// An intermediate that already holds a scalar is never replaced; the
    /// call fails with [`ConfigError::NotAMapping`] and leaves the tree as it was.
    pub fn set(&mut self, key: &str, value: Value) -> Result<(), ConfigError> {
        let (parents, leaf) = split_key(key);
        let mut node = &mut self.params;
        for (depth, segment) in parents.iter().enumerate() {
            let child = node
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            node = match child {
                Value::Object(map) => map,
                _ => {
                    return Err(ConfigError::NotAMapping {
                        key: key.to_string(),
                        segment: parents[..=depth].join("."),
                    });
                }
            };
        }
        node.insert(leaf.to_string(), value);
        Ok(())
    }

    /// Remove the terminal value of a dotted key, returning it if it was present.
    ///
    /// Siblings and parent mappings are kept, even when left empty.
    pub fn unset(&mut self, key: &str) -> Option<Value> {
        let (parents, leaf) = split_key(key);
        let mut node = &mut self.params;
        for segment in parents {
            node = node.get_mut(segment)?.as_object_mut()?;
        }
        node.shift_remove(leaf)
    }
}
