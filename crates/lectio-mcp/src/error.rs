//! Error conversion for MCP responses.

use lectio_core::Error;
use rmcp::model::ErrorData;

/// Extension trait converting [`lectio_core::Error`] into MCP error data.
///
/// Absence-class errors (missing resource, malformed document) map to the
/// resource-not-found error code so that consumers see one uniform
/// not-found outcome; everything else is an internal error.
pub trait McpErrorExt {
    /// Convert into an [`ErrorData`] suitable for an MCP response.
    fn into_mcp_error(self) -> ErrorData;
}

impl McpErrorExt for Error {
    fn into_mcp_error(self) -> ErrorData {
        match &self {
            Error::NotFound { .. } | Error::MalformedDocument { .. } => {
                ErrorData::resource_not_found(self.to_string(), None)
            }
            _ => ErrorData::internal_error(self.to_string(), None),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
