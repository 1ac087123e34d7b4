//! Typed lesson records.
//!
//! [`LessonMetadata`] and [`LessonDocument`] are transient value objects:
//! reconstructed fresh from the underlying text on every request, never
//! mutated, never cached here.

use lectio_content::{RawDocument, compose_frontmatter, split_frontmatter};
use lectio_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Metadata for a single lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonMetadata {
    /// Unique identifier, also the lookup key and part of the resource name.
    pub slug: String,
    /// Display position in the catalog. Not required to be unique or
    /// contiguous.
    pub order: i64,
    /// Human-readable title, free-form.
    pub title: String,
}

/// A fully parsed lesson: metadata plus body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonDocument {
    /// The lesson's metadata block, typed.
    pub metadata: LessonMetadata,
    /// Everything after the metadata block, trimmed.
    pub body: String,
}

impl LessonDocument {
    /// Parse a lesson from its raw text form.
    ///
    /// Splits the frontmatter block and enforces the record invariant:
    /// `slug`, `order`, and `title` must all be present and well-formed.
    ///
    /// The `order` field is parsed loosely at the text level (a non-numeric
    /// value does not raise there), but a record without a numeric `order`
    /// is invalid here and fails with
    /// [`Error::MalformedDocument`](lectio_core::Error::MalformedDocument).
    pub fn parse(raw_text: &str) -> Result<Self> {
        let raw = split_frontmatter(raw_text)?;
        Self::from_raw(&raw)
    }

    /// Build a typed document from an already-split [`RawDocument`].
    pub fn from_raw(raw: &RawDocument<'_>) -> Result<Self> {
        let slug = raw
            .get("slug")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::malformed("missing 'slug' field"))?;
        let title = raw
            .get("title")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::malformed("missing 'title' field"))?;
        let order = raw
            .get_i64("order")
            .ok_or_else(|| Error::malformed("missing or non-numeric 'order' field"))?;

        Ok(Self {
            metadata: LessonMetadata {
                slug: slug.to_string(),
                order,
                title: title.to_string(),
            },
            body: raw.body().to_string(),
        })
    }

    /// Serialize back to the two-delimiter text form.
    ///
    /// Round-trips with [`LessonDocument::parse`].
    pub fn to_markdown(&self) -> String {
        let order = self.metadata.order.to_string();
        compose_frontmatter(
            &[
                ("slug", &self.metadata.slug),
                ("order", &order),
                ("title", &self.metadata.title),
            ],
            &self.body,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Parsing tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_parse_valid_lesson() {
        let text = "---\nslug: a\norder: 1\ntitle: T\n---\n\nBody text";
        let doc = LessonDocument::parse(text).unwrap();

        assert_eq!(doc.metadata.slug, "a");
        assert_eq!(doc.metadata.order, 1);
        assert_eq!(doc.metadata.title, "T");
        assert_eq!(doc.body, "Body text");
    }

    #[test]
    fn test_parse_extra_fields_ignored() {
        let text = "---\nslug: a\norder: 1\ntitle: T\nauthor: Someone\n---\nBody";
        let doc = LessonDocument::parse(text).unwrap();
        assert_eq!(doc.metadata.slug, "a");
    }

    #[test]
    fn test_parse_missing_slug() {
        let text = "---\norder: 1\ntitle: T\n---\nBody";
        let err = LessonDocument::parse(text).unwrap_err();
        assert!(err.to_string().contains("slug"));
    }

    #[test]
    fn test_parse_missing_title() {
        let text = "---\nslug: a\norder: 1\n---\nBody";
        let err = LessonDocument::parse(text).unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_parse_missing_order() {
        let text = "---\nslug: a\ntitle: T\n---\nBody";
        assert!(LessonDocument::parse(text).is_err());
    }

    // Policy pin: the text-level parse of `order` is loose, but a record
    // whose `order` is non-numeric never becomes a valid lesson.
    #[test]
    fn test_parse_non_numeric_order_is_invalid() {
        let text = "---\nslug: a\norder: first\ntitle: T\n---\nBody";
        let err = LessonDocument::parse(text).unwrap_err();
        assert!(err.to_string().contains("order"));
    }

    #[test]
    fn test_parse_missing_closing_delimiter() {
        let text = "---\nslug: a\norder: 1\ntitle: T\n\nBody";
        assert!(LessonDocument::parse(text).is_err());
    }

    #[test]
    fn test_parse_stray_line_ignored() {
        let with_stray = "---\nslug: a\nstray line here\norder: 1\ntitle: T\n---\nBody";
        let without = "---\nslug: a\norder: 1\ntitle: T\n---\nBody";
        assert_eq!(
            LessonDocument::parse(with_stray).unwrap(),
            LessonDocument::parse(without).unwrap()
        );
    }

    // ------------------------------------------------------------------------
    // Serialization tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_to_markdown_round_trips() {
        let doc = LessonDocument {
            metadata: LessonMetadata {
                slug: "queries".to_string(),
                order: 2,
                title: "Queries: The Basics".to_string(),
            },
            body: "# Queries\n\nFetch data with a query.".to_string(),
        };

        let text = doc.to_markdown();
        let parsed = LessonDocument::parse(&text).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_to_markdown_negative_order() {
        let doc = LessonDocument {
            metadata: LessonMetadata {
                slug: "pre".to_string(),
                order: -1,
                title: "Prelude".to_string(),
            },
            body: "Body".to_string(),
        };
        let parsed = LessonDocument::parse(&doc.to_markdown()).unwrap();
        assert_eq!(parsed.metadata.order, -1);
    }
}
