//! Frontmatter splitting and composition for lesson files.
//!
//! This crate provides the text-level half of lesson parsing. It knows
//! nothing about lessons themselves — it splits a delimited metadata block
//! from a body and hands back raw key/value pairs.
//!
//! # Design Philosophy
//!
//! **Generic utilities, domain-specific types.** This crate returns raw
//! trimmed string pairs; the lesson crate defines its own metadata struct
//! and converts from the raw form. The metadata block is a fixed two-part
//! structure of `key: value` lines, not a markup language, so it is decoded
//! by hand rather than through a YAML or TOML parser.
//!
//! # Example
//!
//! ```rust
//! use lectio_content::split_frontmatter;
//!
//! let content = "---\nslug: intro\norder: 1\ntitle: Intro\n---\n\nBody";
//! let doc = split_frontmatter(content).unwrap();
//!
//! assert_eq!(doc.get("slug"), Some("intro"));
//! assert_eq!(doc.get_i64("order"), Some(1));
//! assert_eq!(doc.body(), "Body");
//! ```

pub mod frontmatter;

// Re-export key types and functions
pub use frontmatter::{DELIMITER, RawDocument, compose_frontmatter, split_frontmatter};
