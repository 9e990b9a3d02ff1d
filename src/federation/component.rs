use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Versioned snapshot of one manageable entity's attributes.
///
/// This is the value type of the monitoring region: the federation cycle
/// captures an entity's attributes into one of these, publishes it under
/// the entity's name, and on the next cycle compares the fresh capture
/// against the last published one to decide whether a republish is needed
/// at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FederationComponent {
    entity_type: String,
    version: u64,
    attributes: HashMap<String, Value>,
}

impl FederationComponent {
    /// Create an empty snapshot for an entity of the given type.
    pub fn new(entity_type: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            version: 0,
            attributes: HashMap::new(),
        }
    }

    /// Type of the manageable entity this snapshot describes.
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// Version of this snapshot, bumped on every [`refresh`](Self::refresh).
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Read one attribute, or `None` if it was never captured.
    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.attributes.get(attribute)
    }

    /// Set one attribute, returning the previous value if any.
    pub fn set(&mut self, attribute: impl Into<String>, value: Value) -> Option<Value> {
        self.attributes.insert(attribute.into(), value)
    }

    /// All captured attributes, keyed by attribute name.
    pub fn attributes(&self) -> &HashMap<String, Value> {
        &self.attributes
    }

    /// Replace the whole attribute set with a fresh capture and bump the
    /// version.
    pub fn refresh(&mut self, attributes: HashMap<String, Value>) {
        self.attributes = attributes;
        self.version += 1;
    }

    /// Whether this snapshot's attribute state differs from `previous`.
    ///
    /// Compares attribute content only, not versions, so two captures of
    /// identical state compare equal even when taken cycles apart.
    pub fn state_changed_from(&self, previous: &Self) -> bool {
        self.attributes != previous.attributes
    }
}
