//! # The operation catalogue
//!
//! One method per remote operation, grouped by the entity it administers:
//!
//! - [`users`]: user accounts, balances, lookups and account selection
//! - [`groups`]: group membership, quotas and per-group balance operations
//! - [`accounts`]: shared accounts and their access lists
//! - [`printers`]: printer queues, properties, costs and SNMP settings
//! - [`devices`]: device settings and SNMP configuration
//! - [`server`]: admin rights, server configuration, sync, backup, reports
//!
//! Every method marshals its parameters in the exact positional order the
//! remote procedure expects — which for a handful of operations is *not*
//! the order of the method signature — and returns the server's result as
//! an untyped [`Value`](printadm_core::xmlrpc::Value). Parameters are never
//! validated locally: the server is the sole authority, and an unexpected
//! enum string or unknown name travels to it unchanged. Omitted optional
//! parameters are forwarded as nil so every call keeps its fixed arity.
//!
//! Methods are written out explicitly rather than generated; a reviewer can
//! check each parameter list against the server's API reference line by
//! line, and the compiler keeps the arities honest.

pub mod accounts;
pub mod devices;
pub mod groups;
pub mod printers;
pub mod server;
pub mod users;

use printadm_core::xmlrpc::Value;

/// Recommended starting offset for the paged listing operations.
pub const DEFAULT_OFFSET: i32 = 0;

/// Recommended page size for the paged listing operations. Batching in
/// groups of 1000 keeps transfers efficient on large installations.
pub const DEFAULT_LIMIT: i32 = 1000;

/// Marshal `[name, value]` pairs for the property batch setters.
pub(crate) fn name_value_pairs(pairs: &[(&str, &str)]) -> Value {
    Value::Array(
        pairs
            .iter()
            .map(|(name, value)| Value::Array(vec![Value::from(*name), Value::from(*value)]))
            .collect(),
    )
}
