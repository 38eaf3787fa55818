use thiserror::Error;

/// Errors that can occur while parsing and validating a snapshot document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("Failed to parse snapshot JSON: {0}")]
    Json(String),

    #[error("Branch at position {index} of line '{line}' has {found} members, expected exactly 2")]
    BranchArity {
        line: String,
        index: usize,
        found: usize,
    },

    #[error("Element at position {index} of line '{line}' is neither a step nor a branch")]
    NotAnElement { line: String, index: usize },
}

/// Errors that can occur while fetching a snapshot from a monitor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PollError {
    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Monitor answered with HTTP status {0}")]
    Status(u16),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Errors raised by a clipboard sink.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard is unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur when loading the viewer configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
