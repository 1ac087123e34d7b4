//! Lectio MCP server entry point.
//!
//! Composition root: builds the store, loader, and tools explicitly and
//! injects them into the server before handing it to the stdio transport.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};

use lectio_lessons::LessonLoader;
use lectio_mcp::{LessonServer, LessonTools, ServerConfig};
use lectio_store::FsStore;

/// Lectio MCP server - lesson catalog over stdio
#[derive(Parser, Debug)]
#[command(name = "lectio-mcp")]
#[command(about = "Serve a lesson catalog over the Model Context Protocol", long_about = None)]
struct Args {
    /// Directory containing lesson files
    #[arg(long, env = "LECTIO_CONTENT_DIR", default_value = "content/lessons")]
    content_dir: PathBuf,

    /// Lesson file extension, without the dot
    #[arg(long, env = "LECTIO_EXTENSION", default_value = "md")]
    extension: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Stdout carries the MCP transport; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,lectio=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let store = Arc::new(FsStore::new(&args.content_dir));
    let loader = Arc::new(LessonLoader::new(store).with_extension(&args.extension));
    let server = LessonServer::new(LessonTools::new(loader), ServerConfig::default());

    tracing::info!(
        content_dir = %args.content_dir.display(),
        extension = %args.extension,
        "Starting lesson catalog server"
    );

    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    tracing::info!("Lesson catalog server stopped");
    Ok(())
}
