//! Schema registry
//!
//! Stores built schemas keyed by type name. This is the metadata-provider
//! boundary: an application registers its types once, then hands out shared
//! schema handles wherever instances are created.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::instance::Instance;
use crate::schema::TypeSchema;

/// Registry of type schemas, keyed by type name.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: RwLock<FxHashMap<String, Arc<TypeSchema>>>,
}

impl SchemaRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema under its type name, replacing any previous entry.
    /// Returns the shared handle.
    pub fn register(&self, schema: TypeSchema) -> Arc<TypeSchema> {
        let schema = Arc::new(schema);
        self.schemas
            .write()
            .insert(schema.name().to_string(), Arc::clone(&schema));
        schema
    }

    /// Get a schema by type name
    pub fn get(&self, name: &str) -> Option<Arc<TypeSchema>> {
        self.schemas.read().get(name).cloned()
    }

    /// Check if a type name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.read().contains_key(name)
    }

    /// Create a null-initialized instance of a registered type
    pub fn instantiate(&self, name: &str) -> Option<Instance> {
        self.get(name).map(|schema| Instance::new(&schema))
    }

    /// Number of registered schemas
    pub fn len(&self) -> usize {
        self.schemas.read().len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.schemas.read().is_empty()
    }
}
