//! Error types for Dialect
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using DialectError
pub type Result<T> = std::result::Result<T, DialectError>;

/// Unified error type for Dialect operations
#[derive(Debug, Error)]
pub enum DialectError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("Transport error: {0}")]
    Transport(String),

    /// Failure to open the connection; the message is user-facing as-is
    #[error("{0}")]
    Connect(String),

    #[error("Not connected to payment client")]
    NotConnected,

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
