//! MCP tools for the lesson catalog.
//!
//! Provides `LessonTools`, which defines the `list_lessons`, `get_lesson`,
//! and `health` tools and dispatches them against an injected
//! [`LessonLoader`] and [`CatalogBuilder`].

use std::sync::Arc;

use lectio_core::Error;
use lectio_lessons::{CatalogBuilder, LessonDocument, LessonLoader, LessonMetadata};
use rmcp::model::{CallToolResult, Content, ErrorData, Tool};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::McpErrorExt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn json_schema(value: Value) -> Arc<serde_json::Map<String, Value>> {
    match value {
        Value::Object(map) => Arc::new(map),
        _ => Arc::new(serde_json::Map::new()),
    }
}

fn make_tool(name: &str, description: &str, schema: Value) -> Tool {
    Tool::new(name.to_string(), description.to_string(), json_schema(schema))
}

fn serialize_response<T: Serialize>(value: &T) -> Result<CallToolResult, ErrorData> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| ErrorData::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ---------------------------------------------------------------------------
// Argument types
// ---------------------------------------------------------------------------

/// Arguments for the `get_lesson` tool.
#[derive(Debug, Deserialize)]
pub struct GetLessonArgs {
    /// Slug of the lesson to fetch.
    pub slug: String,
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response from the `list_lessons` tool.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListLessonsResponse {
    /// Number of lessons in the catalog.
    pub total: usize,
    /// Catalog entries, sorted by display order.
    pub lessons: Vec<LessonMetadata>,
}

/// Response from the `get_lesson` tool.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LessonResponse {
    /// Lesson slug.
    pub slug: String,
    /// Display order.
    pub order: i64,
    /// Lesson title.
    pub title: String,
    /// Lesson body text.
    pub body: String,
}

impl From<LessonDocument> for LessonResponse {
    fn from(doc: LessonDocument) -> Self {
        Self {
            slug: doc.metadata.slug,
            order: doc.metadata.order,
            title: doc.metadata.title,
            body: doc.body,
        }
    }
}

/// Response from the `health` tool.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Server status ("healthy").
    pub status: String,
    /// Server name.
    pub server_name: String,
    /// Server version.
    pub version: String,
    /// Number of registered tools.
    pub tool_count: usize,
    /// Number of lessons currently in the catalog.
    pub lesson_count: usize,
}

// ---------------------------------------------------------------------------
// LessonTools
// ---------------------------------------------------------------------------

/// MCP tools over the lesson pipeline.
///
/// Generates three tools:
/// - `list_lessons` — the ordered catalog
/// - `get_lesson` — one full lesson document by slug
/// - `health` — server status, tool count, lesson count
///
/// The loader and catalog builder are injected at construction; the tools
/// hold no state of their own and re-read the store on every call.
pub struct LessonTools {
    loader: Arc<LessonLoader>,
    catalog: CatalogBuilder,
}

impl LessonTools {
    /// Create lesson tools over the given loader.
    pub fn new(loader: Arc<LessonLoader>) -> Self {
        Self {
            catalog: CatalogBuilder::new(Arc::clone(&loader)),
            loader,
        }
    }

    /// Definitions of all tools this set provides.
    pub fn tools(&self) -> Vec<Tool> {
        vec![
            make_tool(
                "list_lessons",
                "List all lessons in display order",
                json!({
                    "type": "object",
                    "properties": {}
                }),
            ),
            make_tool(
                "get_lesson",
                "Get a single lesson by slug",
                json!({
                    "type": "object",
                    "properties": {
                        "slug": {
                            "type": "string",
                            "description": "Slug of the lesson to fetch"
                        }
                    },
                    "required": ["slug"]
                }),
            ),
            make_tool(
                "health",
                "Check server health and status",
                json!({
                    "type": "object",
                    "properties": {}
                }),
            ),
        ]
    }

    /// Handle `list_lessons`: build and return the catalog.
    pub async fn handle_list_lessons(&self) -> Result<CallToolResult, ErrorData> {
        let lessons = self
            .catalog
            .build()
            .await
            .map_err(McpErrorExt::into_mcp_error)?;

        serialize_response(&ListLessonsResponse {
            total: lessons.len(),
            lessons,
        })
    }

    /// Handle `get_lesson`: load one lesson by slug.
    ///
    /// An absent or invalid lesson produces a resource-not-found error;
    /// the caller cannot tell which it was.
    pub async fn handle_get_lesson(&self, args: Value) -> Result<CallToolResult, ErrorData> {
        let args: GetLessonArgs = serde_json::from_value(args)
            .map_err(|e| ErrorData::invalid_params(e.to_string(), None))?;

        match self.loader.load(&args.slug).await {
            Some(doc) => serialize_response(&LessonResponse::from(doc)),
            None => Err(Error::not_found(&args.slug).into_mcp_error()),
        }
    }

    /// Handle `health`: report server metadata and catalog size.
    pub async fn handle_health(
        &self,
        server_name: &str,
        version: &str,
    ) -> Result<CallToolResult, ErrorData> {
        let lesson_count = self
            .catalog
            .build()
            .await
            .map(|lessons| lessons.len())
            .unwrap_or(0);

        serialize_response(&HealthResponse {
            status: "healthy".to_string(),
            server_name: server_name.to_string(),
            version: version.to_string(),
            tool_count: self.tools().len(),
            lesson_count,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
