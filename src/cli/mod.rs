//! CLI argument parsing for command-bridge.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::editor::Position;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// command-bridge: run editor commands with placeholder substitution.
///
/// Templates may contain tokens such as `{file}`, `{lineNumber}`,
/// `{selectionOrWord}`, or `{memory:name}`. Tokens are replaced from the
/// editor context given on the command line and from values stored with
/// `remember`.
#[derive(Parser, Debug)]
#[command(name = "command-bridge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file to load instead of the default location.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for command-bridge.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a template and print the result.
    Resolve(ResolveArgs),

    /// Run one command with a JSON argument object.
    ///
    /// COMMAND is a full id such as `command-bridge.exec` or a bare name
    /// such as `exec`.
    Invoke(InvokeArgs),

    /// Run a YAML session script.
    ///
    /// All commands in the script share one memory store, so values saved
    /// with `remember` are visible to later commands.
    Run(RunArgs),
}

/// Editor context flags shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct ContextArgs {
    /// Path of the active document.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Document text. Read from `--file` when omitted.
    #[arg(long)]
    pub text: Option<String>,

    /// Cursor position, one-based.
    #[arg(long, value_name = "LINE:COL")]
    pub cursor: Option<Position>,

    /// Selection anchor, one-based. Defaults to the cursor.
    #[arg(long, value_name = "LINE:COL")]
    pub anchor: Option<Position>,

    /// Workspace folder. Defaults to the current directory.
    #[arg(long, value_name = "DIR")]
    pub workspace: Option<PathBuf>,
}

/// Arguments for the `resolve` command.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Template to resolve.
    pub template: String,

    #[command(flatten)]
    pub context: ContextArgs,
}

/// Arguments for the `invoke` command.
#[derive(Args, Debug)]
pub struct InvokeArgs {
    /// Command id or bare command name.
    pub command: String,

    /// Argument object as JSON.
    #[arg(long, default_value = "{}")]
    pub args: String,

    #[command(flatten)]
    pub context: ContextArgs,
}

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the session script.
    pub script: PathBuf,

    #[command(flatten)]
    pub context: ContextArgs,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_resolve_with_context() {
        let cli = Cli::try_parse_from([
            "command-bridge",
            "resolve",
            "{fileBasename}:{lineNumber}",
            "--file",
            "src/main.rs",
            "--cursor",
            "3:5",
        ])
        .unwrap();

        let Command::Resolve(args) = cli.command else {
            panic!("Expected Resolve command");
        };
        assert_eq!(args.template, "{fileBasename}:{lineNumber}");
        assert_eq!(args.context.file, Some(PathBuf::from("src/main.rs")));
        assert_eq!(args.context.cursor, Some(Position::new(2, 4)));
        assert_eq!(args.context.anchor, None);
    }

    #[test]
    fn parse_invoke_defaults_to_empty_args() {
        let cli = Cli::try_parse_from(["command-bridge", "invoke", "createTerminal"]).unwrap();
        let Command::Invoke(args) = cli.command else {
            panic!("Expected Invoke command");
        };
        assert_eq!(args.command, "createTerminal");
        assert_eq!(args.args, "{}");
    }

    #[test]
    fn parse_invoke_with_args() {
        let cli = Cli::try_parse_from([
            "command-bridge",
            "invoke",
            "command-bridge.exec",
            "--args",
            r#"{"command":"ls"}"#,
        ])
        .unwrap();
        let Command::Invoke(args) = cli.command else {
            panic!("Expected Invoke command");
        };
        assert_eq!(args.args, r#"{"command":"ls"}"#);
    }

    #[test]
    fn parse_run_with_global_config() {
        let cli = Cli::try_parse_from([
            "command-bridge",
            "run",
            "session.yaml",
            "--config",
            "/etc/bridge.yaml",
            "--workspace",
            "/work",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("/etc/bridge.yaml")));
        let Command::Run(args) = cli.command else {
            panic!("Expected Run command");
        };
        assert_eq!(args.script, PathBuf::from("session.yaml"));
        assert_eq!(args.context.workspace, Some(PathBuf::from("/work")));
    }

    #[test]
    fn parse_rejects_bad_position() {
        let result = Cli::try_parse_from(["command-bridge", "resolve", "x", "--cursor", "0:1"]);
        assert!(result.is_err());
    }
}
