//! Error types shared across the printadm crates
//!
//! The client deliberately performs no recovery, retry or translation of
//! remote errors: a fault raised by the application server is carried to the
//! caller exactly as the server reported it, and transport failures surface
//! unmodified. The types here cover only what can go wrong locally.

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Central error type for the core crate
#[derive(Error, Debug)]
pub enum CoreError {
    /// Wire protocol errors (malformed XML-RPC payloads)
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors produced while encoding or decoding XML-RPC payloads
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// The payload is not a well-formed XML-RPC document
    #[error("malformed XML-RPC payload: {reason}")]
    Malformed { reason: String },

    /// An element appeared where a different one was required
    #[error("unexpected element <{found}> where <{expected}> was required")]
    UnexpectedElement { expected: String, found: String },

    /// A scalar element held text that does not parse as its type
    #[error("invalid <{kind}> value {text:?}")]
    InvalidScalar { kind: String, text: String },

    /// The document ended before an element was closed
    #[error("unterminated element <{name}>")]
    Unterminated { name: String },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("invalid configuration value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    /// Configuration file error
    #[error("configuration file error: {reason}")]
    FileError { reason: String },

    /// Validation failed
    #[error("configuration validation failed: {reason}")]
    ValidationFailed { reason: String },
}

// Convenience constructors for common error cases
impl CoreError {
    pub fn protocol<S: Into<String>>(reason: S) -> Self {
        Self::Protocol(ProtocolError::Malformed {
            reason: reason.into(),
        })
    }

    pub fn config<S: Into<String>>(reason: S) -> Self {
        Self::Config(ConfigError::ValidationFailed {
            reason: reason.into(),
        })
    }
}
