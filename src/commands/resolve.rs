//! Implementation of the `command-bridge resolve` command.

use super::context::{ContextSpec, environment};
use crate::bridge::CommandBridge;
use crate::cli::ResolveArgs;
use crate::error::Result;
use crate::host::Host;

/// Execute the `command-bridge resolve` command.
///
/// Prints the template with every placeholder replaced. The memory store is
/// empty, so `{memory:..}` tokens resolve to nothing.
pub fn cmd_resolve<H: Host>(host: H, args: ResolveArgs) -> Result<()> {
    let bridge = CommandBridge::new(host, environment(args.context.workspace.as_deref()));
    let spec = ContextSpec::from_args(&args.context);
    println!("{}", resolve_template(&bridge, &args.template, &spec));
    Ok(())
}

fn resolve_template<H: Host>(bridge: &CommandBridge<H>, template: &str, spec: &ContextSpec) -> String {
    let editor = spec.editor_context();
    bridge.resolve(template, editor.as_ref())
}
