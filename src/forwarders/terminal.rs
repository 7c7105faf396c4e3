//! `createTerminal` forwarder and terminal-close handling.

use crate::error::Result;
use crate::host::{
    FOCUS_FIRST_EDITOR_GROUP, ShellArgs, Terminal, TerminalHost, TerminalLocation,
    TerminalOptions, WorkbenchHost,
};
use crate::placeholder::{Resolver, expand_tilde};

/// Resolve the string fields of terminal options.
///
/// `cwd` has its leading `~` expanded before placeholders are substituted.
/// `name`, `message`, `shellPath`, each shell argument, and each environment
/// value are resolved; `null` environment values are dropped. Everything
/// else is copied through.
pub fn resolve_terminal_options(resolver: &Resolver<'_>, options: TerminalOptions) -> TerminalOptions {
    let home = &resolver.environment().home;

    let cwd = options
        .cwd
        .as_deref()
        .map(|cwd| resolver.resolve(&expand_tilde(cwd, home)));

    let env = options.env.as_ref().map(|env| {
        env.iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .map(|v| (key.clone(), Some(resolver.resolve(v))))
            })
            .collect()
    });

    let shell_args = options.shell_args.as_ref().map(|args| match args {
        ShellArgs::Line(line) => ShellArgs::Line(resolver.resolve(line)),
        ShellArgs::List(list) => ShellArgs::List(resolver.resolve_all(list)),
    });

    TerminalOptions {
        cwd,
        env,
        message: resolver.resolve_opt(options.message.as_deref()),
        name: resolver.resolve_opt(options.name.as_deref()),
        shell_args,
        shell_path: resolver.resolve_opt(options.shell_path.as_deref()),
        ..options
    }
}

/// Create a terminal from resolved options.
pub fn create_terminal<H: TerminalHost>(
    host: &H,
    resolver: &Resolver<'_>,
    options: TerminalOptions,
) -> Result<Terminal> {
    let resolved = resolve_terminal_options(resolver, options);
    host.create_terminal(&resolved)?;
    Ok(Terminal::new(resolved))
}

/// React to a terminal closing: terminals that lived in the editor area hand
/// focus back to the first editor group.
///
/// Returns whether focus was moved.
pub fn on_terminal_closed<H: WorkbenchHost>(host: &H, terminal: &Terminal) -> Result<bool> {
    if terminal.location() != Some(TerminalLocation::Editor) {
        return Ok(false);
    }
    host.execute_command(FOCUS_FIRST_EDITOR_GROUP)?;
    Ok(true)
}
