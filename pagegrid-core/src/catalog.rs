//! Component catalog for the page builder
//!
//! A leaf node in the layout tree holds only a reference; the actual
//! configured component lives here. An instance is created when a
//! palette item is dropped into the tree, referenced by exactly one
//! leaf, and logically destroyed when its leaf is removed.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::layout::types::ComponentId;

/// A palette entry: the component type a user can drag into the page.
///
/// Definitions carry no identity; an instance (with a fresh id) is
/// minted on every drop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDefinition {
    /// The component type, e.g. `"image"` or `"paragraph"`.
    pub kind: String,
    /// Default configuration copied onto new instances.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub default_config: serde_json::Value,
}

impl ComponentDefinition {
    /// Creates a definition with no default configuration.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            default_config: serde_json::Value::Null,
        }
    }

    /// Sets the default configuration.
    #[must_use]
    pub fn with_config(mut self, config: serde_json::Value) -> Self {
        self.default_config = config;
        self
    }
}

/// A configured component placed on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentInstance {
    /// Unique identifier, referenced by exactly one leaf in the tree.
    pub id: ComponentId,
    /// The component type this instance was minted from.
    pub kind: String,
    /// Instance configuration; opaque to the layout engine.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub config: serde_json::Value,
    /// Timestamp when the instance was created.
    pub created_at: DateTime<Utc>,
}

impl ComponentInstance {
    /// Mints an instance of the given definition under a fresh id.
    #[must_use]
    pub fn from_definition(id: ComponentId, definition: &ComponentDefinition) -> Self {
        Self {
            id,
            kind: definition.kind.clone(),
            config: definition.default_config.clone(),
            created_at: Utc::now(),
        }
    }
}

/// The set of component instances owned by one project, keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentCatalog {
    components: HashMap<ComponentId, ComponentInstance>,
}

impl ComponentCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            components: HashMap::new(),
        }
    }

    /// Builds a catalog from a flat list of instances.
    #[must_use]
    pub fn from_instances(instances: Vec<ComponentInstance>) -> Self {
        Self {
            components: instances
                .into_iter()
                .map(|instance| (instance.id, instance))
                .collect(),
        }
    }

    /// Inserts an instance, replacing any previous instance under the
    /// same id.
    pub fn insert(&mut self, instance: ComponentInstance) {
        self.components.insert(instance.id, instance);
    }

    /// Returns the instance with the given id, if present.
    #[must_use]
    pub fn get(&self, id: ComponentId) -> Option<&ComponentInstance> {
        self.components.get(&id)
    }

    /// Removes and returns the instance with the given id.
    pub fn remove(&mut self, id: ComponentId) -> Option<ComponentInstance> {
        self.components.remove(&id)
    }

    /// Returns true if the catalog holds an instance with the given id.
    #[must_use]
    pub fn contains(&self, id: ComponentId) -> bool {
        self.components.contains_key(&id)
    }

    /// Returns the number of instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns all instances in unspecified order.
    #[must_use]
    pub fn instances(&self) -> Vec<&ComponentInstance> {
        self.components.values().collect()
    }

    /// Returns all instances by value, for snapshotting.
    #[must_use]
    pub fn to_instances(&self) -> Vec<ComponentInstance> {
        self.components.values().cloned().collect()
    }
}
