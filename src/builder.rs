//! Typestate builder for constructing [`ConnectionString`] instances.
//!
//! This module provides a builder that uses phantom types to enforce
//! at compile-time that the public key is set before the host.

use std::marker::PhantomData;

use crate::address::Address;
use crate::connection_string::ConnectionString;
use crate::error::ParseError;
use crate::host::Host;
use crate::pubkey::PublicKey;

/// Marker: No components set yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

/// Marker: Public key has been set.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasPubkey;

/// Marker: Public key and host are set, ready to build.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ready;

/// A typestate builder for constructing [`ConnectionString`] instances.
///
/// The public key must be set first, then the host. The port is optional
/// and can be set once the builder is [`Ready`].
///
/// # Examples
///
/// ```
/// use ln_connection_string::{ConnectionStringBuilder, HostKind};
///
/// let conn = ConnectionStringBuilder::new()
///     .try_pubkey("0200000000a3eff613189ca6c4070c89206ad658e286751eca1f29262948247a5f")?
///     .try_host("2001:db8::1")?
///     .port(9735)
///     .build()?;
///
/// assert_eq!(conn.host_kind(), HostKind::Ipv6);
/// assert_eq!(
///     conn.to_string(),
///     "0200000000a3eff613189ca6c4070c89206ad658e286751eca1f29262948247a5f@[2001:db8::1]:9735"
/// );
/// # Ok::<(), ln_connection_string::ParseError>(())
/// ```
///
/// # Compile-Time Safety
///
/// ```compile_fail
/// use ln_connection_string::ConnectionStringBuilder;
///
/// // Error: cannot call build() without a public key and host
/// let conn = ConnectionStringBuilder::new().build();
/// ```
#[derive(Debug, Clone)]
pub struct ConnectionStringBuilder<State = Empty> {
    pubkey: Option<PublicKey>,
    host: Option<Host>,
    port: Option<u16>,
    _state: PhantomData<State>,
}

impl ConnectionStringBuilder<Empty> {
    /// Creates a new builder in the initial state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pubkey: None,
            host: None,
            port: None,
            _state: PhantomData,
        }
    }

    /// Sets the public key and advances to the [`HasPubkey`] state.
    #[must_use]
    pub fn pubkey(self, pubkey: PublicKey) -> ConnectionStringBuilder<HasPubkey> {
        ConnectionStringBuilder {
            pubkey: Some(pubkey),
            host: self.host,
            port: self.port,
            _state: PhantomData,
        }
    }

    /// Parses and sets the public key from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` with `InvalidPubkey` if the string is not a valid
    /// public key.
    pub fn try_pubkey(self, s: &str) -> Result<ConnectionStringBuilder<HasPubkey>, ParseError> {
        let pubkey = PublicKey::parse(s)?;
        Ok(self.pubkey(pubkey))
    }
}

impl Default for ConnectionStringBuilder<Empty> {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionStringBuilder<HasPubkey> {
    /// Sets the host and advances to the [`Ready`] state.
    #[must_use]
    pub fn host(self, host: Host) -> ConnectionStringBuilder<Ready> {
        ConnectionStringBuilder {
            pubkey: self.pubkey,
            host: Some(host),
            port: self.port,
            _state: PhantomData,
        }
    }

    /// Parses and sets the host from a string.
    ///
    /// The host is given without brackets or port.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` with `InvalidHost` if the string matches no host
    /// grammar.
    pub fn try_host(self, s: &str) -> Result<ConnectionStringBuilder<Ready>, ParseError> {
        let host = Host::parse(s)?;
        Ok(self.host(host))
    }
}

impl ConnectionStringBuilder<Ready> {
    /// Sets the port.
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Builds the connection string.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` with `InvalidPort` if the port is 0.
    ///
    /// # Panics
    ///
    /// Never; the typestate guarantees the public key and host are set.
    pub fn build(self) -> Result<ConnectionString, ParseError> {
        // The only way to reach Ready is through `pubkey` then `host`.
        let pubkey = self.pubkey.expect("pubkey set in HasPubkey state");
        let host = self.host.expect("host set in Ready state");
        let address = Address::new(host, self.port)?;
        Ok(ConnectionString::new(pubkey, address))
    }
}
