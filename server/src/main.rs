//! Responder HTTP server
//!
//! Serves the question store over HTTP. All questions and answers live in a
//! single JSON document on disk.
//!
//! Usage:
//!   responder --port 3000 --storage questions.json

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use anyhow::{Context, Result};
use clap::Parser;
use responder_server::build_router;
use responder_store::{QuestionStore, StoreConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "responder")]
#[command(about = "Question and answer store over HTTP")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Address to bind
    #[arg(short, long, default_value = "0.0.0.0")]
    bind: String,

    /// Path to the questions document
    #[arg(short, long, default_value = "questions.json")]
    storage: PathBuf,

    /// Write the document as indented JSON
    #[arg(long)]
    pretty: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    info!("Responder starting...");
    ensure_document(&args.storage).await?;

    let store = Arc::new(QuestionStore::with_config(
        StoreConfig::new(&args.storage).with_pretty(args.pretty),
    ));
    let question_count = store
        .question_count()
        .await
        .context("Failed to load questions document")?;
    info!(
        "Loaded {} questions from {:?}",
        question_count, args.storage
    );

    let app = build_router(store);
    let listener = tokio::net::TcpListener::bind(format!("{}:{}", args.bind, args.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", args.bind, args.port))?;
    info!("Responder app listening on port {}", args.port);
    axum::serve(listener, app).await.context("HTTP server failed")?;
    Ok(())
}

/// Creates an empty document at `path` if nothing is there yet.
async fn ensure_document(path: &Path) -> Result<()> {
    if tokio::fs::try_exists(path)
        .await
        .with_context(|| format!("Failed to inspect {:?}", path))?
    {
        return Ok(());
    }
    info!("Creating empty questions document at {:?}", path);
    tokio::fs::write(path, "[]")
        .await
        .with_context(|| format!("Failed to create {:?}", path))
}
