//! CLI argument definitions using clap
//!
//! Commands:
//! - rollcall init --database <url>
//! - rollcall serve --database <url> --port <port>

use clap::{Parser, Subcommand};

/// Default database URL
pub const DEFAULT_DATABASE: &str = "sqlite:students.db";

/// rollcall - a student records REST service
#[derive(Parser, Debug)]
#[command(name = "rollcall")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the student database and initialize its schema
    Init {
        /// Database URL
        #[arg(long, default_value = DEFAULT_DATABASE)]
        database: String,
    },

    /// Start the HTTP server
    Serve {
        /// Database URL
        #[arg(long, default_value = DEFAULT_DATABASE)]
        database: String,

        /// Port to listen on
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
}
