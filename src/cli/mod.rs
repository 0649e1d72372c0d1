//! CLI module for rollcall
//!
//! Provides the command-line interface:
//! - init: create the database and schema
//! - serve: boot the HTTP server

mod args;
mod errors;

pub use args::{Cli, Command, DEFAULT_DATABASE};
pub use errors::{CliError, CliResult};

use clap::Parser;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::service::StudentService;
use crate::store::StudentStore;

/// Parse arguments and dispatch to the selected command
pub async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().init();

    match cli.command {
        Command::Init { database } => init(&database).await,
        Command::Serve { database, port } => serve(&database, port).await,
    }
}

/// Create the database and initialize its schema
async fn init(database: &str) -> CliResult<()> {
    StudentStore::open(database).await?;
    println!("Initialized student database at {database}");
    Ok(())
}

/// Open the store and serve the HTTP API
async fn serve(database: &str, port: u16) -> CliResult<()> {
    let store = StudentStore::open(database).await?;
    tracing::info!(database, "opened student store");

    let service = StudentService::new(store);
    let server = HttpServer::new(HttpServerConfig::with_port(port), service);
    server.start().await?;
    Ok(())
}
