//! MCP server infrastructure for the Lectio lesson catalog.
//!
//! Exposes the two read operations of the lesson pipeline as MCP tools,
//! plus a built-in health check:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       lectio-mcp                           │
//! ├────────────────────────────────────────────────────────────┤
//! │  LessonTools — tool definitions and dispatch               │
//! │  ├── list_lessons — the ordered catalog                    │
//! │  ├── get_lesson — one full document by slug                │
//! │  └── health — server status and lesson count               │
//! ├────────────────────────────────────────────────────────────┤
//! │  LessonServer — rmcp ServerHandler over stdio              │
//! │  ServerConfig — server metadata (name, version)            │
//! ├────────────────────────────────────────────────────────────┤
//! │  McpErrorExt — lectio_core::Error → rmcp::ErrorData        │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing slug and a corrupt lesson file produce the same
//! not-found error: consumers never learn the reason a lesson is
//! unavailable, only that it is.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use lectio_lessons::LessonLoader;
//! use lectio_mcp::{LessonServer, LessonTools, ServerConfig};
//! use lectio_store::FsStore;
//! use rmcp::{ServiceExt, transport::stdio};
//!
//! let store = Arc::new(FsStore::new("content/lessons"));
//! let loader = Arc::new(LessonLoader::new(store));
//! let server = LessonServer::new(LessonTools::new(loader), ServerConfig::default());
//!
//! let service = server.serve(stdio()).await?;
//! service.waiting().await?;
//! ```

pub mod error;
pub mod server;
pub mod tools;

// Re-exports — server
pub use server::{LessonServer, ServerConfig};

// Re-exports — tools
pub use tools::{GetLessonArgs, HealthResponse, LessonResponse, LessonTools, ListLessonsResponse};

// Re-exports — error
pub use error::McpErrorExt;
