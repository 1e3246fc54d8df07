//! The command proxy and its scoped sessions

use crate::transport::{HttpTransport, Transport};
use crate::Result;
use printadm_core::config::ServerConfig;
use printadm_core::xmlrpc::Value;
use tracing::debug;

/// Wire-side namespace every operation name is qualified with.
const API_NAMESPACE: &str = "api";

/// A proxy for the application server's administrative XML-RPC interface.
///
/// The proxy holds connection settings only; it opens nothing itself.
/// Every [`connect`] call yields an independent [`ServerSession`], and the
/// proxy stays usable for further acquisitions afterwards.
///
/// [`connect`]: ServerProxy::connect
#[derive(Debug, Clone)]
pub struct ServerProxy {
    config: ServerConfig,
}

impl ServerProxy {
    /// Create a proxy from connection settings. Nothing is validated and
    /// nothing is dialled; construction cannot fail.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Create a proxy for the given host and port with the remaining
    /// settings at their defaults.
    pub fn with_address<S: Into<String>>(host: S, port: u16) -> Self {
        Self::new(ServerConfig::new(host, port))
    }

    /// The connection settings this proxy dials with.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Open a session against the configured endpoint.
    ///
    /// Each call produces an independent session; sessions are not shared
    /// between threads, so concurrent callers should each acquire their own.
    pub fn connect(&self) -> Result<ServerSession> {
        debug!("opening admin session to {}", self.config.endpoint_url());
        Ok(ServerSession::with_transport(Box::new(HttpTransport::new(
            &self.config,
        ))))
    }
}

/// A live, scoped connection to the server's procedure namespace.
///
/// All administrative operations are methods on this type (see the
/// [`ops`](crate::ops) module for the catalogue, grouped by domain). The
/// session releases its transport when dropped; release failures during drop
/// are swallowed. Use [`close`](ServerSession::close) instead of drop when
/// the release outcome matters.
pub struct ServerSession {
    transport: Option<Box<dyn Transport>>,
}

impl ServerSession {
    /// Build a session over an already-constructed transport.
    ///
    /// [`ServerProxy::connect`] is the usual way in; this constructor exists
    /// so tests and embedders can supply their own [`Transport`].
    pub fn with_transport(transport: Box<dyn Transport>) -> Self {
        Self {
            transport: Some(transport),
        }
    }

    /// Forward one operation to the server and return its result untouched.
    ///
    /// `params` must already be in the operation's wire order, including
    /// `Value::Nil` entries for omitted optionals.
    pub(crate) fn invoke(&mut self, operation: &str, params: Vec<Value>) -> Result<Value> {
        let method = format!("{}.{}", API_NAMESPACE, operation);
        let transport = self
            .transport
            .as_mut()
            .expect("transport is present until close or drop");
        transport.call(&method, &params)
    }

    /// Release the session, reporting any failure from the transport.
    ///
    /// Dropping the session releases it too, but swallows errors; closing
    /// explicitly is the way to observe them.
    pub fn close(mut self) -> Result<()> {
        match self.transport.take() {
            Some(mut transport) => transport.close(),
            None => Ok(()),
        }
    }
}

impl Drop for ServerSession {
    fn drop(&mut self) {
        if let Some(mut transport) = self.transport.take() {
            if let Err(err) = transport.close() {
                // Best-effort release: the caller's work is already done or
                // already failed, so a close error must not propagate.
                debug!("ignoring error while releasing admin session: {}", err);
            }
        }
    }
}
