//! Error types for procall

use thiserror::Error;

/// Core error type raised by drivers and core utilities
#[derive(Error, Debug)]
pub enum ProcallError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Driver error: {0}")]
    Driver(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Options parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for procall core operations
pub type Result<T> = std::result::Result<T, ProcallError>;
