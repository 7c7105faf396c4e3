//! Default values for configuration fields.

/// Program used to run `exec` commands.
pub(crate) fn default_shell() -> String {
    if cfg!(windows) {
        "cmd".to_string()
    } else {
        "sh".to_string()
    }
}

/// Arguments placed before the command text when running `exec` commands.
pub(crate) fn default_shell_args() -> Vec<String> {
    if cfg!(windows) {
        vec!["/C".to_string()]
    } else {
        vec!["-c".to_string()]
    }
}

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "command-bridge";

/// Config file name inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.yaml";
