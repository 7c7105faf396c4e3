//! Configuration model for command-bridge.
//!
//! This module defines the `Config` struct that represents
//! `<config_dir>/command-bridge/config.yaml`. It supports forward-compatible
//! YAML parsing (unknown fields are preserved), defaults for every field,
//! and validation of external command lines.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use operations::default_config_path;
