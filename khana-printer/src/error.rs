//! Error types for the printer library

use thiserror::Error;

/// Printer error types
#[derive(Debug, Error)]
pub enum PrintError {
    /// Network connection error
    #[error("Connection failed: {0}")]
    Connection(String),

    /// IO error during printing
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Timeout waiting for printer
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Invalid printer configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// The print surface (spool file) could not be created
    #[error("Print surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// The system print command exited with an error
    #[error("Print command failed: {0}")]
    CommandFailed(String),
}

/// Result type for printer operations
pub type PrintResult<T> = Result<T, PrintError>;
