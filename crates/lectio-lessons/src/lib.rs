//! Typed lesson documents, loader, and ordered catalog.
//!
//! This crate is the lesson domain on top of the generic pieces:
//! [`lectio_content`] splits raw text into fields and body,
//! [`lectio_store`] provides the resources, and this crate turns them into
//! typed [`LessonDocument`]s and an ordered catalog of [`LessonMetadata`].
//!
//! # Pipeline
//!
//! ```text
//! ContentStore ──▶ LessonLoader ──▶ LessonDocument
//!        │               │
//!        └── CatalogBuilder ──▶ Vec<LessonMetadata>  (sorted by order)
//! ```
//!
//! The loader absorbs every per-resource failure into absence: callers see
//! "found and valid" or "not available", never the reason. The catalog
//! inherits this — a corrupt lesson never breaks the listing of the others.

pub mod catalog;
pub mod loader;
pub mod metadata;

#[cfg(test)]
mod proptests;

pub use catalog::CatalogBuilder;
pub use loader::LessonLoader;
pub use metadata::{LessonDocument, LessonMetadata};
