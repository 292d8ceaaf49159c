//! Error types for qcompass
//!
//! Conversion itself never fails: unparseable input is the normal empty state.
//! These errors cover the layers around it (configuration, interactive input).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for qcompass operations
pub type QcompassResult<T> = Result<T, QcompassError>;

/// Main error type for qcompass operations
#[derive(Error, Debug)]
pub enum QcompassError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be deserialized
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Explicitly requested config file does not exist
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Interactive input that names no known command
    #[error("unknown command '{input}' - type 'help' for a list of commands")]
    UnknownCommand { input: String },

    /// Interactive command that takes no argument was given one
    #[error("'{command}' takes no argument (got '{argument}')")]
    UnexpectedArgument {
        command: &'static str,
        argument: String,
    },
}
