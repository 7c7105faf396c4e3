//! Error types for command-bridge.
//!
//! Uses thiserror for derive macros. Missing editor context and unknown
//! placeholder tokens are never errors; only argument decoding, configuration,
//! session scripts, and host operations can fail.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for command-bridge operations.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Caller supplied arguments that could not be decoded or routed.
    #[error("{0}")]
    InvalidArguments(String),

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A host capability (terminal, shell, clipboard, document) failed.
    #[error("{0}")]
    Host(String),

    /// A session script could not be read or parsed.
    #[error("Script error: {0}")]
    Script(String),
}

impl BridgeError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            BridgeError::InvalidArguments(_) => exit_codes::USER_ERROR,
            BridgeError::Script(_) => exit_codes::USER_ERROR,
            BridgeError::Config(_) => exit_codes::CONFIG_ERROR,
            BridgeError::Host(_) => exit_codes::HOST_FAILURE,
        }
    }
}

/// Result type alias for command-bridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;
