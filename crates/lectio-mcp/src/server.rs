//! MCP server handler for the lesson catalog.

use rmcp::ServerHandler;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, ErrorData, Implementation, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use serde_json::Value;

use crate::tools::LessonTools;

/// Server metadata reported to MCP clients.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server name.
    pub name: String,
    /// Server version.
    pub version: String,
    /// Optional instructions shown to clients.
    pub instructions: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "lectio".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            instructions: Some(
                "Lesson catalog server. Use list_lessons for the ordered catalog \
                 and get_lesson to fetch one lesson by slug."
                    .to_string(),
            ),
        }
    }
}

/// MCP server over a [`LessonTools`] set.
///
/// The tools (and through them the loader and store) are injected at
/// construction — the composition root wires everything together once at
/// startup and hands the finished server to the transport.
pub struct LessonServer {
    tools: LessonTools,
    config: ServerConfig,
}

impl LessonServer {
    /// Create a server over the given tools and metadata.
    pub fn new(tools: LessonTools, config: ServerConfig) -> Self {
        Self { tools, config }
    }

    /// Dispatch a tool call by name.
    async fn dispatch(&self, name: &str, args: Value) -> Result<CallToolResult, ErrorData> {
        match name {
            "list_lessons" => self.tools.handle_list_lessons().await,
            "get_lesson" => self.tools.handle_get_lesson(args).await,
            "health" => {
                self.tools
                    .handle_health(&self.config.name, &self.config.version)
                    .await
            }
            other => Err(ErrorData::invalid_params(
                format!("Unknown tool: {other}"),
                None,
            )),
        }
    }
}

impl ServerHandler for LessonServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::new(ServerCapabilities::builder().enable_tools().build());
        info.server_info =
            Implementation::new(self.config.name.clone(), self.config.version.clone());
        info.instructions = self.config.instructions.clone();
        info
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            tools: self.tools.tools(),
            ..Default::default()
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let args = request
            .arguments
            .map(Value::Object)
            .unwrap_or(Value::Null);
        self.dispatch(&request.name, args).await
    }
}

// ============================================================================
// Tests
// ============================================================================
