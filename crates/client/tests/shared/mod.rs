//! Shared test utilities for the client integration tests
#![allow(dead_code)] // not every test binary uses every helper

use printadm_client::transport::Transport;
use printadm_client::{ClientError, Result};
use printadm_core::xmlrpc::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Everything a stub transport observed over its life.
#[derive(Default)]
pub struct CallLog {
    /// Each forwarded call: full wire method name and the parameter list
    /// exactly as it would go on the wire.
    pub calls: Vec<(String, Vec<Value>)>,
    /// How many times `close` ran.
    pub close_count: usize,
}

/// An in-memory transport standing in for the remote server.
///
/// Records every call into a shared [`CallLog`] and answers from a queue of
/// canned values (or `true` once the queue runs dry). Close failures can be
/// injected to exercise the session's release behaviour.
pub struct StubTransport {
    log: Arc<Mutex<CallLog>>,
    responses: VecDeque<Value>,
    fail_call: bool,
    fail_close: bool,
}

impl StubTransport {
    pub fn new(log: Arc<Mutex<CallLog>>) -> Self {
        Self {
            log,
            responses: VecDeque::new(),
            fail_call: false,
            fail_close: false,
        }
    }

    /// Queue canned responses, served in order.
    pub fn with_responses<I: IntoIterator<Item = Value>>(mut self, responses: I) -> Self {
        self.responses = responses.into_iter().collect();
        self
    }

    /// Make every `call` fail with an I/O error.
    pub fn with_failing_call(mut self) -> Self {
        self.fail_call = true;
        self
    }

    /// Make `close` fail with an I/O error.
    pub fn with_failing_close(mut self) -> Self {
        self.fail_close = true;
        self
    }
}

impl Transport for StubTransport {
    fn call(&mut self, method: &str, params: &[Value]) -> Result<Value> {
        let mut log = self.log.lock().unwrap();
        log.calls.push((method.to_string(), params.to_vec()));
        if self.fail_call {
            return Err(ClientError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "injected call failure",
            )));
        }
        Ok(self.responses.pop_front().unwrap_or(Value::Bool(true)))
    }

    fn close(&mut self) -> Result<()> {
        let mut log = self.log.lock().unwrap();
        log.close_count += 1;
        if self.fail_close {
            Err(ClientError::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "injected close failure",
            )))
        } else {
            Ok(())
        }
    }
}

/// Fresh log + stub pair.
pub fn recording_stub() -> (Arc<Mutex<CallLog>>, StubTransport) {
    let log = Arc::new(Mutex::new(CallLog::default()));
    let stub = StubTransport::new(Arc::clone(&log));
    (log, stub)
}
