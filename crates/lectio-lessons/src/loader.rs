//! Lesson loading from a content store.

use std::sync::Arc;

use lectio_store::ContentStore;

use crate::metadata::LessonDocument;

/// Default resource extension for lesson files.
pub const DEFAULT_EXTENSION: &str = "md";

/// Loads lessons from a [`ContentStore`] by slug.
///
/// The loader maps a slug to its resource name (`<slug>.<ext>`), reads the
/// resource, and parses it into a [`LessonDocument`]. Every per-resource
/// failure — missing resource, unreadable resource, malformed document —
/// is absorbed into `None` with a warning. Callers only ever distinguish
/// "found and valid" from "not available".
///
/// The loader holds no cache: each call re-reads the store.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use lectio_lessons::LessonLoader;
/// use lectio_store::MemoryStore;
///
/// # tokio_test::block_on(async {
/// let store = MemoryStore::new()
///     .with_resource("intro.md", "---\nslug: intro\norder: 1\ntitle: Intro\n---\nBody");
/// let loader = LessonLoader::new(Arc::new(store));
///
/// assert!(loader.load("intro").await.is_some());
/// assert!(loader.load("missing").await.is_none());
/// # });
/// ```
pub struct LessonLoader {
    store: Arc<dyn ContentStore>,
    extension: String,
}

impl LessonLoader {
    /// Create a loader over the given store with the default `.md` extension.
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self {
            store,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Use a different resource extension (without the dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// The store this loader reads from.
    pub fn store(&self) -> &dyn ContentStore {
        self.store.as_ref()
    }

    /// Map a slug to its resource name. Deterministic and injective.
    pub fn resource_name(&self, slug: &str) -> String {
        format!("{slug}.{}", self.extension)
    }

    /// Derive the slug from a resource name, if the name carries this
    /// loader's extension.
    pub fn slug_of<'a>(&self, resource_name: &'a str) -> Option<&'a str> {
        let dotted = resource_name.strip_suffix(&self.extension)?;
        let slug = dotted.strip_suffix('.')?;
        (!slug.is_empty()).then_some(slug)
    }

    /// Load a lesson by slug.
    ///
    /// Never raises: a missing resource is a normal, representable outcome,
    /// and read or parse failures degrade to `None` after a warning.
    pub async fn load(&self, slug: &str) -> Option<LessonDocument> {
        let name = self.resource_name(slug);

        match self.store.exists(&name).await {
            Ok(true) => {}
            Ok(false) => {
                log::warn!("Lesson resource not found: {name}");
                return None;
            }
            Err(e) => {
                log::warn!("Failed to check lesson resource {name}: {e}");
                return None;
            }
        }

        let text = match self.store.read(&name).await {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Failed to read lesson resource {name}: {e}");
                return None;
            }
        };

        match LessonDocument::parse(&text) {
            Ok(doc) => Some(doc),
            Err(e) => {
                log::warn!("Failed to parse lesson resource {name}: {e}");
                None
            }
        }
    }
}

impl std::fmt::Debug for LessonLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LessonLoader")
            .field("extension", &self.extension)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
