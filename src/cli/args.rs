//! CLI argument definitions using clap
//!
//! Commands:
//! - shopd serve [--host <addr>] [--port <port>] [--database <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// shopd - a minimal commerce service
#[derive(Parser, Debug)]
#[command(name = "shopd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Host to bind to (overrides the default "0.0.0.0")
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides the default 8000)
        #[arg(long)]
        port: Option<u16>,

        /// Path of the SQLite database file
        #[arg(long, default_value = "shopd.db")]
        database: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
