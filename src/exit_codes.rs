//! Exit code constants for the command-bridge CLI.
//!
//! - 0: Success
//! - 1: User error (bad arguments, unknown command, malformed script)
//! - 2: Configuration error
//! - 3: Host operation failure (terminal, shell, clipboard, document)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unknown command id, or malformed session script.
pub const USER_ERROR: i32 = 1;

/// Configuration file could not be read, parsed, or validated.
pub const CONFIG_ERROR: i32 = 2;

/// A host capability failed to carry out a forwarded request.
pub const HOST_FAILURE: i32 = 3;
