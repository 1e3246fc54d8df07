//! # XML-RPC wire format
//!
//! This module implements exactly the slice of XML-RPC the application
//! server speaks: one method call per HTTP POST, answered by one method
//! response that is either a single result value or a fault.
//!
//! ## Message Flow
//!
//! ```text
//! Client → Server: <methodCall> with methodName + fixed-arity <params>
//! Server → Client: <methodResponse> with one <param>, or a <fault>
//! ```
//!
//! Two properties of the admin API shape the implementation:
//!
//! - Every call has a fixed arity. Optional parameters the caller omitted
//!   are still placed on the wire, as `<nil/>`, never dropped. The decoder
//!   likewise accepts `<nil/>` anywhere a value may appear.
//! - Results are untyped from the client's perspective. The decoder hands
//!   back a [`Value`] tree and callers coerce what they need.
//!
//! A fault reported by the server is carried verbatim as a [`Fault`]; the
//! client adds nothing and hides nothing.

mod decode;
mod encode;
mod value;

pub use decode::decode_response;
pub use encode::encode_request;
pub use value::Value;

use thiserror::Error;

/// A fault reported by the remote server in response to a call.
///
/// The code and message are exactly what the server put in the fault
/// struct; the client performs no translation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("server fault {code}: {message}")]
pub struct Fault {
    /// The server-assigned fault code
    pub code: i32,
    /// The server-supplied fault message
    pub message: String,
}

/// The decoded body of a method response: the result value on success, or
/// the fault the server raised.
pub type MethodResponse = std::result::Result<Value, Fault>;
