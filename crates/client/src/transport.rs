//! Transport layer for the admin client
//!
//! The [`Transport`] trait is the seam between the forwarding catalogue and
//! the wire: a session drives whatever transport it was built with, and
//! tests substitute a recording stub for the real HTTP transport.

use crate::Result;
use printadm_core::config::ServerConfig;
use printadm_core::xmlrpc::{self, Value};
use tracing::{debug, trace};

/// A connection capable of carrying XML-RPC calls to the server.
///
/// Implementations perform one blocking round trip per [`call`] and release
/// whatever they hold in [`close`]. `close` is invoked exactly once over the
/// life of a session; failures during an implicit close (session drop) are
/// logged and swallowed by the session, never surfaced.
///
/// [`call`]: Transport::call
/// [`close`]: Transport::close
pub trait Transport: Send {
    /// Invoke `method` with the given fixed-arity parameter list and return
    /// the server's result value.
    fn call(&mut self, method: &str, params: &[Value]) -> Result<Value>;

    /// Release the underlying connection.
    fn close(&mut self) -> Result<()>;
}

/// Blocking HTTP(S) transport posting to the server's XML-RPC endpoint.
pub struct HttpTransport {
    agent: ureq::Agent,
    endpoint: String,
    verbose: bool,
}

impl HttpTransport {
    /// Build a transport for the endpoint described by `config`.
    ///
    /// The configured call timeout (if any) is applied to the whole round
    /// trip; without one the agent's defaults apply.
    pub fn new(config: &ServerConfig) -> Self {
        let agent_config = ureq::config::Config::builder()
            .timeout_global(config.timeout())
            .build();
        Self {
            agent: ureq::Agent::new_with_config(agent_config),
            endpoint: config.endpoint_url(),
            verbose: config.verbose,
        }
    }

    /// The endpoint URL this transport posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    fn call(&mut self, method: &str, params: &[Value]) -> Result<Value> {
        let body = xmlrpc::encode_request(method, params);
        if self.verbose {
            debug!(target: "printadm::wire", %method, request = %body, "sending XML-RPC request");
        } else {
            trace!(target: "printadm::wire", %method, "sending XML-RPC request");
        }

        let mut response = self
            .agent
            .post(&self.endpoint)
            .header("Content-Type", "text/xml")
            .send(body.as_bytes())?;
        let text = response.body_mut().read_to_string()?;

        if self.verbose {
            debug!(target: "printadm::wire", %method, response = %text, "received XML-RPC response");
        }

        match xmlrpc::decode_response(&text)? {
            Ok(value) => Ok(value),
            Err(fault) => Err(fault.into()),
        }
    }

    fn close(&mut self) -> Result<()> {
        // Dropping the agent tears down its pooled connections; there is no
        // explicit shutdown in the HTTP client.
        Ok(())
    }
}
