//! command-bridge: editor commands with placeholder substitution.
//!
//! This is the main entry point for the `command-bridge` CLI. It installs
//! logging, parses arguments, dispatches to the appropriate command handler,
//! and handles errors with proper exit codes.

mod bridge;
mod cli;
mod commands;
pub mod config;
pub mod editor;
pub mod environment;
pub mod error;
pub mod exit_codes;
pub mod forwarders;
pub mod host;
pub mod memory;
pub mod placeholder;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `debug` or
/// `command_bridge::host=trace`.
const LOG_ENV: &str = "COMMAND_BRIDGE_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse_args();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
