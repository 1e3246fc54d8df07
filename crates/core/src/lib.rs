//! # Printadm Core Library
//!
//! This crate provides the pieces shared by the printadm client library and
//! command-line tool: the XML-RPC wire codec, connection configuration and
//! logging infrastructure.
//!
//! ## Key Components
//!
//! - **XML-RPC**: Untyped value model plus the request encoder and response
//!   decoder for the application server's `/rpc/api/xmlrpc` endpoint
//! - **Configuration**: Connection settings (host, port, TLS, verbosity,
//!   timeout) with TOML file loading and environment overrides
//! - **Logging**: Structured logging setup built on `tracing`
//!
//! ## Architecture
//!
//! The wire protocol is plain request-response: every call is a single
//! blocking HTTP POST carrying one XML-RPC method call, answered by one
//! XML-RPC method response. There is no session state and no framing beyond
//! what HTTP provides, which keeps the codec small and easy to test.

pub mod config;
pub mod error;
pub mod logging;
pub mod xmlrpc;

// Re-export commonly used types
pub use config::{PrintadmConfig, ServerConfig};
pub use error::{ConfigError, CoreError, ProtocolError, Result};
pub use logging::{LogFormat, LogLevel, LoggerBuilder, LoggingConfig};
pub use xmlrpc::{Fault, Value};
