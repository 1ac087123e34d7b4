//! Ordered lesson catalog.

use std::sync::Arc;

use lectio_core::Result;

use crate::loader::LessonLoader;
use crate::metadata::LessonMetadata;

/// Builds the ordered catalog of lesson metadata.
///
/// Enumerates the store, loads every lesson through the [`LessonLoader`],
/// and returns the surviving metadata sorted ascending by `order`. The sort
/// is stable and the store enumeration is lexicographic, so entries with
/// equal `order` appear in slug order — catalog output is deterministic
/// regardless of how the backend happens to enumerate.
///
/// Per-resource failures are absorbed by the loader and simply reduce the
/// result set; the catalog favors availability over completeness. An empty
/// store yields an empty catalog, not an error.
pub struct CatalogBuilder {
    loader: Arc<LessonLoader>,
}

impl CatalogBuilder {
    /// Create a catalog builder over the given loader.
    pub fn new(loader: Arc<LessonLoader>) -> Self {
        Self { loader }
    }

    /// The loader this builder loads through.
    pub fn loader(&self) -> &LessonLoader {
        &self.loader
    }

    /// Build the catalog: every valid lesson's metadata, sorted by `order`.
    ///
    /// The catalog is rebuilt from the store on every call; nothing is
    /// cached here.
    pub async fn build(&self) -> Result<Vec<LessonMetadata>> {
        let names = self.loader.store().list().await?;

        let mut entries = Vec::new();
        for name in &names {
            let Some(slug) = self.loader.slug_of(name) else {
                log::debug!("Skipping non-lesson resource: {name}");
                continue;
            };
            if let Some(doc) = self.loader.load(slug).await {
                entries.push(doc.metadata);
            }
        }

        entries.sort_by_key(|m| m.order);
        Ok(entries)
    }
}

impl std::fmt::Debug for CatalogBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogBuilder").finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
