//! rollcall entry point
//!
//! Parses CLI arguments, dispatches to the selected command, prints errors
//! to stderr, and exits non-zero on failure. All logic lives in the CLI
//! module.

use rollcall::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
