//! CLI command implementations

use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::store::Store;

use super::args::Command;
use super::errors::CliResult;

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve {
            host,
            port,
            database,
        } => serve(host, port, database),
    }
}

/// Open the store, then run the HTTP server until shutdown
pub fn serve(host: Option<String>, port: Option<u16>, database: PathBuf) -> CliResult<()> {
    init_tracing();

    let mut config = HttpServerConfig::default();
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    config.database = database;

    let rt = tokio::runtime::Runtime::new()?;

    rt.block_on(async {
        let store = Store::open(&config.database).await?;
        tracing::info!(database = %config.database.display(), "store opened");

        let server = HttpServer::with_config(config, Arc::new(store));
        server.start().await?;
        Ok(())
    })
}

/// Install the global tracing subscriber.
///
/// Honors RUST_LOG; defaults to info.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
