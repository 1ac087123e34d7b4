//! Slug and path utilities.

pub mod ids;

pub use ids::{normalize_slug, slug_from_path};
