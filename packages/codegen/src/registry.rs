use crate::descriptor::Entity;
use crate::error::GenerateResult;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// File suffix of descriptor files picked up from a directory
pub const DESCRIPTOR_SUFFIX: &str = ".trigger.json";

/// Ordered, append-only collection of entity descriptors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    #[serde(default)]
    entities: Vec<Entity>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity. Attribute names are expected to be unique; repeats
    /// are logged but not rejected.
    pub fn register(&mut self, entity: Entity) {
        for name in entity.duplicate_attribute_names() {
            warn!(entity = %entity.name, attribute = %name, "Duplicate attribute name");
        }
        self.entities.push(entity);
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Parse a descriptor document, registering its entities in order
    pub fn from_json(source: &str) -> GenerateResult<Self> {
        let parsed: Registry = serde_json::from_str(source)?;
        let mut registry = Registry::new();
        for entity in parsed.entities {
            registry.register(entity);
        }
        Ok(registry)
    }

    /// Load a descriptor file from disk
    pub fn load(path: &Path) -> GenerateResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json(&source)
    }
}
