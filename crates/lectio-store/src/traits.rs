//! Storage abstraction trait.

use async_trait::async_trait;
use lectio_core::Result;

/// Read-only access to a flat namespace of named text resources.
///
/// Implementations must be cheap to query: `exists` and `read` are expected
/// to complete quickly or fail fast. No operation mutates the store.
///
/// # Example
///
/// ```rust,ignore
/// let store = FsStore::new("/data/lessons");
/// if store.exists("queries.md").await? {
///     let text = store.read("queries.md").await?;
/// }
/// ```
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Check whether a resource with the given name exists.
    async fn exists(&self, name: &str) -> Result<bool>;

    /// Read the full text of the named resource.
    ///
    /// Returns [`Error::NotFound`](lectio_core::Error::NotFound) if the
    /// resource does not exist.
    async fn read(&self, name: &str) -> Result<String>;

    /// List all resource names in the store, sorted lexicographically.
    ///
    /// The sorted order makes enumeration deterministic, which downstream
    /// consumers rely on for stable tie-breaking.
    async fn list(&self) -> Result<Vec<String>>;
}
