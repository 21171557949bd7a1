//! SceneVault development document server.
//!
//! Serves the HTTP document API used by the `http` scene store backend,
//! keeping every record in memory. Records are lost on restart.
//!
//! Usage:
//!   scenevault-server --port 4000 --prefix /whiteboards

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use scenevault_server::{build_router, DEFAULT_PREFIX};
use scenevault_store::MemorySceneStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scenevault-server")]
#[command(about = "SceneVault development document server")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "4000")]
    port: u16,

    /// Path the document API is mounted under
    #[arg(long, default_value = DEFAULT_PREFIX)]
    prefix: String,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", args.host, args.port))?;

    let app = build_router(Arc::new(MemorySceneStore::new()), &args.prefix);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(address = %addr, prefix = %args.prefix, "document server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("document server failed")?;

    info!("document server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}
