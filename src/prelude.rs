//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use ln_connection_string::prelude::*;
//!
//! let conn = ConnectionString::parse(
//!     "0200000000a3eff613189ca6c4070c89206ad658e286751eca1f29262948247a5f@127.0.0.1:9735"
//! ).unwrap();
//! assert_eq!(conn.host_kind(), HostKind::Ipv4);
//! ```
//!
//! Builder state markers (`Empty`, `HasPubkey`, `Ready`) are intentionally
//! excluded as they are implementation details.

pub use crate::{
    // Core types
    Address, ConnectionString, Host, HostKind, HostPortSplit, PublicKey,
    // Builder and options
    ConnectionStringBuilder, ParseOptions,
    // Errors
    ParseError, ParseErrorKind,
    // Functions
    parse_address, parse_address_with, parse_connection_string, parse_connection_string_with,
    parse_host, parse_port, parse_pubkey, split_host_and_port,
};
