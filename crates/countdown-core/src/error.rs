//! Core error types for countdown-core.
//!
//! The time model and the progress renderer are total functions and never
//! fail. Errors only come out of the edges: persistence backends,
//! configuration files and validation of user-supplied targets.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for countdown-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Persistence backend errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Background ticker panicked or was aborted
    #[error("Ticker task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Errors raised by a [`KeyValueStore`](crate::storage::KeyValueStore) backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the SQLite store
    #[error("Failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(#[from] rusqlite::Error),

    /// Reading or writing the backing file failed
    #[error("Failed to access {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backing file holds something other than a JSON object of strings
    #[error("Corrupt store at {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Stored value could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed URL handed to the query-string store
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDir(#[source] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Validation errors for user-supplied countdown targets.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Input did not match any accepted date/time format
    #[error("Invalid timestamp '{input}': expected RFC 3339, 'YYYY-MM-DD HH:MM[:SS]' or 'YYYY-MM-DD'")]
    InvalidTimestamp { input: String },

    /// Event name is blank after trimming
    #[error("Event name must not be empty")]
    EmptyEventName,

    /// Target is not strictly after the current instant
    #[error("Target {target} is not in the future (now: {now})")]
    TargetNotInFuture { target: String, now: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
