//! Slug normalization utilities.
//!
//! Provides functions for normalizing lesson identifiers to consistent
//! kebab-case form. Used by the content store and catalog builder wherever
//! stable lookup keys are needed.

use std::path::Path;

/// Normalize a slug to lowercase kebab-case.
///
/// Performs the following transformations:
/// 1. Trims leading/trailing whitespace
/// 2. Converts to lowercase
/// 3. Replaces underscores with hyphens
/// 4. Collapses runs of whitespace into single hyphens
///
/// # Examples
///
/// ```
/// use lectio_core::util::ids::normalize_slug;
///
/// assert_eq!(normalize_slug("Getting Started"), "getting-started");
/// assert_eq!(normalize_slug("error_handling"), "error-handling");
/// assert_eq!(normalize_slug("  Batched   Queries  "), "batched-queries");
/// ```
pub fn normalize_slug(slug: &str) -> String {
    slug.trim()
        .to_lowercase()
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join("-")
}

/// Derive a slug from a file path's stem.
///
/// Extracts the file stem (filename without extension) and normalizes it.
/// Returns `None` if the path has no file stem.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use lectio_core::util::ids::slug_from_path;
///
/// assert_eq!(
///     slug_from_path(Path::new("/data/lessons/Getting_Started.md")),
///     Some("getting-started".to_string())
/// );
/// assert_eq!(slug_from_path(Path::new("/")), None);
/// ```
pub fn slug_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(normalize_slug)
}
