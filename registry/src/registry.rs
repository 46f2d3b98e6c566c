//! The Registry - immutable schema lookup.

use crate::schema::Schema;
use std::collections::HashMap;

/// Runtime lookup of resolved schema descriptors, including synthesized
/// through-entities. Immutable after construction.
#[derive(Debug)]
pub struct Registry {
    /// Schemas by entity name.
    schemas: HashMap<String, Schema>,
}

impl Registry {
    pub(crate) fn new(schemas: HashMap<String, Schema>) -> Self {
        Self { schemas }
    }

    /// Get a schema by entity name.
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    /// Check if an entity name is known.
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// All schemas, declared and synthesized.
    pub fn schemas(&self) -> impl Iterator<Item = &Schema> {
        self.schemas.values()
    }

    /// All entity names.
    pub fn entity_names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(|s| s.as_str())
    }

    /// Number of schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// True if no schemas are registered.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
