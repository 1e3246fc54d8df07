//! Client-side library for the print server's XML-RPC administration API
//!
//! The entry point is [`ServerProxy`], which holds connection settings and
//! hands out [`ServerSession`]s. A session is a scoped connection: every
//! administrative operation is a method on it, each one a single blocking
//! round trip, and the underlying transport is released when the session is
//! dropped (or explicitly with [`ServerSession::close`]).
//!
//! ```no_run
//! use printadm_client::ServerProxy;
//! use printadm_core::ServerConfig;
//!
//! # fn main() -> Result<(), printadm_client::ClientError> {
//! let proxy = ServerProxy::new(ServerConfig::default());
//! let mut session = proxy.connect()?;
//! let total = session.get_total_users("auth-token")?;
//! println!("user accounts: {:?}", total);
//! # Ok(())
//! # }
//! ```
//!
//! Sessions are not meant to be shared between threads; each concurrent
//! caller should obtain its own session from the proxy. The proxy itself is
//! cheap and reusable for any number of acquisitions.

pub mod ops;
pub mod proxy;
pub mod transport;

use printadm_core::error::ProtocolError;
use printadm_core::xmlrpc::Fault;

/// Error types for the client
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// The transport could not complete the round trip. Carries the HTTP
    /// client's error unmodified.
    #[error("transport error: {0}")]
    Transport(#[from] Box<ureq::Error>),

    /// The server answered with a fault; code and message are verbatim.
    #[error(transparent)]
    Fault(#[from] Fault),

    /// The response was not a well-formed XML-RPC payload.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// I/O error outside the HTTP layer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ureq::Error> for ClientError {
    fn from(err: ureq::Error) -> Self {
        ClientError::Transport(Box::new(err))
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

pub use proxy::{ServerProxy, ServerSession};
pub use transport::{HttpTransport, Transport};
