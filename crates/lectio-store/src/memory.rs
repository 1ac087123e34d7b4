//! In-memory content store.

use std::collections::HashMap;

use async_trait::async_trait;
use lectio_core::{Error, Result};

use crate::traits::ContentStore;

/// Content store holding resources in a map.
///
/// Used by tests and by callers that embed their lesson set directly in
/// the binary.
///
/// # Example
///
/// ```rust
/// use lectio_store::MemoryStore;
///
/// let store = MemoryStore::new()
///     .with_resource("intro.md", "---\nslug: intro\n---\nBody");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    resources: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource, builder-style.
    pub fn with_resource(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.resources.insert(name.into(), content.into());
        self
    }

    /// Add a resource in place.
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.resources.insert(name.into(), content.into());
    }

    /// Number of resources held.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether the store holds no resources.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.resources.contains_key(name))
    }

    async fn read(&self, name: &str) -> Result<String> {
        self.resources
            .get(name)
            .cloned()
            .ok_or_else(|| Error::not_found(name))
    }

    async fn list(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.resources.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

// ============================================================================
// Tests
// ============================================================================
