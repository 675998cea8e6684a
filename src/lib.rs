//! Parser and validator for node connection strings.
//!
//! A connection string addresses a network peer by its public key and
//! network location:
//!
//! ```text
//! <pubkey>@<host>[:<port>]
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use ln_connection_string::{ConnectionString, HostKind};
//!
//! let conn = ConnectionString::parse(
//!     "0200000000a3eff613189ca6c4070c89206ad658e286751eca1f29262948247a5f@[2001:db8::1]:9735"
//! ).unwrap();
//!
//! assert_eq!(conn.host_str(), "2001:db8::1");
//! assert_eq!(conn.host_kind(), HostKind::Ipv6);
//! assert_eq!(conn.port(), Some(9735));
//! ```
//!
//! The individual stages are available on their own:
//!
//! ```rust
//! use ln_connection_string::{parse_host, parse_port, split_host_and_port, HostKind};
//!
//! let split = split_host_and_port("swiss-reign.ch:9735").unwrap();
//! assert_eq!(parse_host(split.host).unwrap().kind(), HostKind::Domain);
//! assert_eq!(parse_port(split.port).unwrap(), Some(9735));
//! ```
//!
//! # Hosts
//!
//! | Kind | Form |
//! |------|------|
//! | `ipv4` | four decimal octets, each 0-255 |
//! | `ipv6` | 8 hex groups, or `::` compressed (brackets required to add a port) |
//! | `torv3` | 56 lowercase base32 characters + `.onion` |
//! | `domain` | 2+ DNS labels, 253 characters max, not an IPv4 literal |
//!
//! A compressed IPv6 address without brackets is ambiguous (`2001:db8::1:9735`
//! may or may not end in a port) and is always rejected with
//! [`ParseErrorKind::InvalidIpv6`].
//!
//! # Errors
//!
//! Every failure is a [`ParseError`] whose [`ParseErrorKind`] is a stable
//! code; branch on the kind, not on the message.
//!
//! # Grammar Specification
//!
//! See `grammar.abnf` at the crate root for the complete formal grammar.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod address;
mod builder;
mod connection_string;
mod constants;
mod error;
mod grammar;
mod host;
#[cfg(kani)]
mod kani_impls;
mod options;
mod port;
pub mod prelude;
mod pubkey;
mod split;

pub use address::{Address, parse_address, parse_address_with};
pub use builder::{ConnectionStringBuilder, Empty, HasPubkey, Ready};
pub use connection_string::{
    ConnectionString, parse_connection_string, parse_connection_string_with,
};
pub use constants::{
    IPV6_GROUPS, MAX_DNS_DOMAIN_LENGTH, MAX_DNS_LABEL_LENGTH, MAX_PORT, MIN_PORT,
    PUBKEY_BYTE_LENGTH, PUBKEY_HEX_LENGTH, PUBKEY_SEPARATOR, TORV3_ADDRESS_LENGTH, TORV3_SUFFIX,
};
pub use error::{ParseError, ParseErrorKind};
pub use host::{Host, HostKind, parse_host};
pub use options::ParseOptions;
pub use port::parse_port;
pub use pubkey::{PublicKey, parse_pubkey};
pub use split::{HostPortSplit, split_host_and_port};
