//! Frontmatter extraction from lesson files.
//!
//! Frontmatter is metadata at the start of a lesson file, delimited by `---`:
//!
//! ```markdown
//! ---
//! slug: getting-started
//! order: 1
//! title: Getting Started
//! ---
//!
//! # Getting Started
//!
//! The body of the lesson starts here.
//! ```
//!
//! The block is a fixed two-part structure: an opening delimiter line, zero
//! or more `key: value` lines, a closing delimiter line, then the body.
//! A file that does not match this shape fails with
//! [`Error::MalformedDocument`](lectio_core::Error::MalformedDocument) —
//! there is no partial recovery, because a lesson without its metadata block
//! is not a lesson.

use lectio_core::{Error, Result};

/// The three-character frontmatter delimiter, on its own line.
pub const DELIMITER: &str = "---";

/// Result of splitting a lesson file into metadata fields and body.
///
/// Fields borrow from the input text; keys and values are trimmed slices
/// in their original order. Duplicate keys are kept — [`RawDocument::get`]
/// returns the first occurrence.
#[derive(Debug, Clone)]
pub struct RawDocument<'a> {
    fields: Vec<(&'a str, &'a str)>,
    body: &'a str,
}

impl<'a> RawDocument<'a> {
    /// Get the value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    /// Get the value for a key parsed as an integer.
    ///
    /// Loose by contract: a missing key or a non-numeric value yields
    /// `None`, never an error. Callers that require a number enforce that
    /// at their own layer.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key)?.parse().ok()
    }

    /// All metadata fields, trimmed, in original order.
    pub fn fields(&self) -> &[(&'a str, &'a str)] {
        &self.fields
    }

    /// The body content after the closing delimiter, trimmed of leading and
    /// trailing whitespace.
    pub fn body(&self) -> &'a str {
        self.body
    }
}

/// Split a lesson file into its frontmatter fields and body.
///
/// The text must begin with a `---` line, followed by zero or more
/// `key: value` lines, a second `---` line, and the body. Each metadata
/// line is split at the **first** `:`; key and value are trimmed. Lines
/// with no `:` are silently ignored.
///
/// # Errors
///
/// Returns [`Error::MalformedDocument`](lectio_core::Error::MalformedDocument)
/// when the two delimiter lines cannot be matched.
///
/// # Example
///
/// ```rust
/// use lectio_content::split_frontmatter;
///
/// let content = "---\nslug: queries\norder: 2\ntitle: Queries\n---\n\n# Queries";
/// let doc = split_frontmatter(content).unwrap();
/// assert_eq!(doc.get("title"), Some("Queries"));
/// assert_eq!(doc.body(), "# Queries");
///
/// assert!(split_frontmatter("# No frontmatter").is_err());
/// ```
pub fn split_frontmatter(content: &str) -> Result<RawDocument<'_>> {
    // Opening delimiter must be the entire first line
    let after_open = match content.find('\n') {
        Some(pos) if content[..pos].trim_end_matches('\r') == DELIMITER => &content[pos + 1..],
        _ => {
            return Err(Error::malformed(
                "document does not start with a frontmatter delimiter line",
            ));
        }
    };

    let mut fields = Vec::new();
    let mut rest = after_open;

    loop {
        let (line, next) = match rest.find('\n') {
            Some(pos) => (&rest[..pos], Some(&rest[pos + 1..])),
            None => (rest, None),
        };
        let line = line.trim_end_matches('\r');

        if line == DELIMITER {
            return Ok(RawDocument {
                fields,
                body: next.unwrap_or("").trim(),
            });
        }

        match line.split_once(':') {
            Some((key, value)) => fields.push((key.trim(), value.trim())),
            None if line.trim().is_empty() => {}
            None => log::debug!("Ignoring frontmatter line without ':': {line:?}"),
        }

        match next {
            Some(n) => rest = n,
            None => return Err(Error::malformed("missing closing frontmatter delimiter")),
        }
    }
}

/// Compose frontmatter fields and a body back into the two-delimiter form.
///
/// The inverse of [`split_frontmatter`] for well-behaved inputs: keys and
/// values must be single-line, and keys must not contain `:`. The body is
/// written trimmed, separated from the closing delimiter by a blank line.
///
/// # Example
///
/// ```rust
/// use lectio_content::{compose_frontmatter, split_frontmatter};
///
/// let text = compose_frontmatter(&[("slug", "intro"), ("order", "1")], "Body");
/// let doc = split_frontmatter(&text).unwrap();
/// assert_eq!(doc.get("slug"), Some("intro"));
/// assert_eq!(doc.body(), "Body");
/// ```
pub fn compose_frontmatter(fields: &[(&str, &str)], body: &str) -> String {
    let mut out = String::new();
    out.push_str(DELIMITER);
    out.push('\n');
    for (key, value) in fields {
        out.push_str(key);
        out.push_str(": ");
        out.push_str(value);
        out.push('\n');
    }
    out.push_str(DELIMITER);
    out.push('\n');
    out.push('\n');
    out.push_str(body.trim());
    out.push('\n');
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Basic splitting tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_split_valid_frontmatter() {
        let content = "---\nslug: getting-started\norder: 1\ntitle: Getting Started\n---\n\n# Welcome";
        let doc = split_frontmatter(content).unwrap();

        assert_eq!(doc.get("slug"), Some("getting-started"));
        assert_eq!(doc.get("order"), Some("1"));
        assert_eq!(doc.get("title"), Some("Getting Started"));
        assert_eq!(doc.body(), "# Welcome");
    }

    #[test]
    fn test_split_trims_keys_and_values() {
        let content = "---\n  slug :  intro  \n---\nBody";
        let doc = split_frontmatter(content).unwrap();
        assert_eq!(doc.get("slug"), Some("intro"));
    }

    #[test]
    fn test_split_at_first_colon_only() {
        let content = "---\ntitle: Queries: The Basics\n---\nBody";
        let doc = split_frontmatter(content).unwrap();
        assert_eq!(doc.get("title"), Some("Queries: The Basics"));
    }

    #[test]
    fn test_split_empty_block() {
        let content = "---\n---\n\nBody content";
        let doc = split_frontmatter(content).unwrap();
        assert!(doc.fields().is_empty());
        assert_eq!(doc.body(), "Body content");
    }

    #[test]
    fn test_split_empty_body() {
        let content = "---\nslug: intro\n---";
        let doc = split_frontmatter(content).unwrap();
        assert_eq!(doc.get("slug"), Some("intro"));
        assert_eq!(doc.body(), "");
    }

    #[test]
    fn test_split_body_trimmed() {
        let content = "---\nslug: intro\n---\n\n\n  Body text  \n\n";
        let doc = split_frontmatter(content).unwrap();
        assert_eq!(doc.body(), "Body text");
    }

    // ------------------------------------------------------------------------
    // Failure tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_split_no_opening_delimiter() {
        let err = split_frontmatter("# Just Markdown\n\nNo frontmatter.").unwrap_err();
        assert!(err.to_string().contains("Malformed document"));
    }

    #[test]
    fn test_split_no_closing_delimiter() {
        let content = "---\nslug: broken\norder: 3\n\nNo closing delimiter";
        let err = split_frontmatter(content).unwrap_err();
        assert!(err.to_string().contains("closing"));
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_frontmatter("").is_err());
    }

    #[test]
    fn test_split_only_opening_delimiter() {
        assert!(split_frontmatter("---").is_err());
        assert!(split_frontmatter("---\n").is_err());
    }

    #[test]
    fn test_split_delimiter_with_trailing_text_not_matched() {
        // "----" is not a delimiter line, so the block never closes
        let content = "---\nslug: x\n----\nBody";
        assert!(split_frontmatter(content).is_err());
    }

    // ------------------------------------------------------------------------
    // Lenient decoding tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_lines_without_colon_are_ignored() {
        let with_stray = "---\nslug: a\njust a stray line\ntitle: T\n---\nBody";
        let without = "---\nslug: a\ntitle: T\n---\nBody";

        let doc1 = split_frontmatter(with_stray).unwrap();
        let doc2 = split_frontmatter(without).unwrap();
        assert_eq!(doc1.fields(), doc2.fields());
        assert_eq!(doc1.body(), doc2.body());
    }

    #[test]
    fn test_blank_lines_in_block_ignored() {
        let content = "---\nslug: a\n\ntitle: T\n---\nBody";
        let doc = split_frontmatter(content).unwrap();
        assert_eq!(doc.fields().len(), 2);
    }

    #[test]
    fn test_get_i64_loose() {
        let content = "---\norder: 7\nbad: seven\n---\nBody";
        let doc = split_frontmatter(content).unwrap();
        assert_eq!(doc.get_i64("order"), Some(7));
        assert_eq!(doc.get_i64("bad"), None);
        assert_eq!(doc.get_i64("missing"), None);
    }

    #[test]
    fn test_get_i64_negative() {
        let content = "---\norder: -2\n---\nBody";
        let doc = split_frontmatter(content).unwrap();
        assert_eq!(doc.get_i64("order"), Some(-2));
    }

    #[test]
    fn test_duplicate_keys_first_wins() {
        let content = "---\ntitle: First\ntitle: Second\n---\nBody";
        let doc = split_frontmatter(content).unwrap();
        assert_eq!(doc.get("title"), Some("First"));
        assert_eq!(doc.fields().len(), 2);
    }

    // ------------------------------------------------------------------------
    // Edge cases
    // ------------------------------------------------------------------------

    #[test]
    fn test_split_crlf_line_endings() {
        let content = "---\r\nslug: intro\r\norder: 1\r\n---\r\nBody";
        let doc = split_frontmatter(content).unwrap();
        assert_eq!(doc.get("slug"), Some("intro"));
        assert_eq!(doc.get_i64("order"), Some(1));
        assert_eq!(doc.body(), "Body");
    }

    #[test]
    fn test_split_dashes_in_body() {
        let content = "---\nslug: intro\n---\nBody with --- dashes in it";
        let doc = split_frontmatter(content).unwrap();
        assert!(doc.body().contains("--- dashes"));
    }

    #[test]
    fn test_split_unicode() {
        let content = "---\nslug: ongaku\ntitle: 音楽理論\n---\n\n本文";
        let doc = split_frontmatter(content).unwrap();
        assert_eq!(doc.get("title"), Some("音楽理論"));
        assert_eq!(doc.body(), "本文");
    }

    // ------------------------------------------------------------------------
    // compose_frontmatter tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_compose_round_trips() {
        let fields = [("slug", "intro"), ("order", "1"), ("title", "Intro")];
        let text = compose_frontmatter(&fields, "# Intro\n\nWelcome.");
        let doc = split_frontmatter(&text).unwrap();

        assert_eq!(doc.fields(), &fields[..]);
        assert_eq!(doc.body(), "# Intro\n\nWelcome.");
    }

    #[test]
    fn test_compose_empty_fields() {
        let text = compose_frontmatter(&[], "Body");
        let doc = split_frontmatter(&text).unwrap();
        assert!(doc.fields().is_empty());
        assert_eq!(doc.body(), "Body");
    }

    #[test]
    fn test_compose_empty_body() {
        let text = compose_frontmatter(&[("slug", "x")], "");
        let doc = split_frontmatter(&text).unwrap();
        assert_eq!(doc.body(), "");
    }
}
