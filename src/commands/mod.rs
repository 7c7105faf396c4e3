//! Command implementations for command-bridge.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command runs against a `SystemHost` built from
//! the loaded configuration.

mod context;
mod invoke;
mod resolve;
mod run;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::Result;
use crate::host::SystemHost;

/// Dispatch a command to its implementation.
///
/// Loads configuration first, so a broken config file fails every command
/// with a configuration error.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    let host = SystemHost::new(config);

    match cli.command {
        Command::Resolve(args) => resolve::cmd_resolve(host, args),
        Command::Invoke(args) => invoke::cmd_invoke(host, args),
        Command::Run(args) => run::cmd_run(host, args),
    }
}
