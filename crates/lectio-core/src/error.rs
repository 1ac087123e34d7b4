//! Error types for Lectio.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for Lectio operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur across the Lectio crates.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A lesson document does not match the required two-delimiter shape.
    ///
    /// Raised only by the frontmatter splitter and the typed-metadata
    /// conversion; never escapes the lesson loader.
    #[error("Malformed document: {reason}")]
    MalformedDocument {
        /// What about the structure could not be matched.
        reason: String,
    },

    /// A named resource has no backing entry in the content store.
    #[error("Resource not found: {name}")]
    NotFound {
        /// Resource name that was requested.
        name: String,
    },

    /// I/O error with the path that produced it.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path involved in the failed operation.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A store or server operation failed for a reason other than the above.
    #[error("Operation failed: {0}")]
    Operation(String),
}

impl Error {
    /// Create a [`Error::MalformedDocument`] with the given reason.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedDocument {
            reason: reason.into(),
        }
    }

    /// Create a [`Error::NotFound`] for the given resource name.
    pub fn not_found(name: impl Into<String>) -> Self {
        Error::NotFound { name: name.into() }
    }

    /// Create an [`Error::Io`] carrying the path the operation touched.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an [`Error::Operation`] with the given message.
    pub fn operation(message: impl Into<String>) -> Self {
        Error::Operation(message.into())
    }

    /// Returns `true` for errors that represent an absent or unusable
    /// resource rather than a caller mistake.
    ///
    /// The lesson loader treats all of these as absence.
    pub fn is_absence(&self) -> bool {
        matches!(
            self,
            Error::NotFound { .. } | Error::MalformedDocument { .. } | Error::Io { .. }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
