//! Main connection string type.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::address::Address;
use crate::constants::PUBKEY_SEPARATOR;
use crate::error::{ParseError, ParseErrorKind};
use crate::host::{Host, HostKind};
use crate::options::ParseOptions;
use crate::pubkey::PublicKey;

/// A parsed and validated node connection string.
///
/// # Structure
///
/// ```text
/// <pubkey>@<host>[:<port>]
/// ```
///
/// where the host is an IPv4 literal, an IPv6 literal (bracketed, or bare
/// and uncompressed), a Tor v3 onion host or a domain name.
///
/// # Examples
///
/// ```
/// use ln_connection_string::{ConnectionString, HostKind};
///
/// let conn = ConnectionString::parse(
///     "0200000000a3eff613189ca6c4070c89206ad658e286751eca1f29262948247a5f@127.0.0.1:9000"
/// ).unwrap();
/// assert_eq!(conn.host_str(), "127.0.0.1");
/// assert_eq!(conn.host_kind(), HostKind::Ipv4);
/// assert_eq!(conn.port(), Some(9000));
/// assert_eq!(
///     conn.pubkey().as_str(),
///     "0200000000a3eff613189ca6c4070c89206ad658e286751eca1f29262948247a5f"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionString {
    pubkey: PublicKey,
    address: Address,
}

impl ConnectionString {
    /// Parses a connection string with default options.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The input does not contain exactly one `@` (`InvalidAts`)
    /// - The part before `@` is not a valid public key (`InvalidPubkey`)
    /// - The part after `@` is not a valid address (`InvalidHost`,
    ///   `InvalidIpv6` or `InvalidPort`)
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(input, &ParseOptions::default())
    }

    /// Parses a connection string with the given options.
    ///
    /// # Errors
    ///
    /// As [`ConnectionString::parse`], plus `InvalidPort` when
    /// [`ParseOptions::port_mandatory`] is set and no port is present.
    pub fn parse_with(input: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        Self::parse_inner(input, options).inspect_err(|e| {
            debug!(
                input,
                code = e.kind.code(),
                reason = e.reason,
                "rejected connection string"
            );
        })
    }

    fn parse_inner(input: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        let mut parts = input.split(PUBKEY_SEPARATOR);
        let (Some(pubkey_str), Some(address_str), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ParseError::new(
                input,
                ParseErrorKind::InvalidAts,
                "expected exactly one '@' between public key and address",
            ));
        };

        let pubkey = PublicKey::parse(pubkey_str)?;
        let address = Address::parse_inner(address_str, options)?;

        Ok(Self { pubkey, address })
    }

    /// Creates a connection string from validated parts.
    #[must_use]
    pub const fn new(pubkey: PublicKey, address: Address) -> Self {
        Self { pubkey, address }
    }

    /// Returns the public key.
    #[must_use]
    pub const fn pubkey(&self) -> &PublicKey {
        &self.pubkey
    }

    /// Returns the address.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    /// Returns the host.
    #[must_use]
    pub const fn host(&self) -> &Host {
        self.address.host()
    }

    /// Returns the host text, without brackets.
    #[must_use]
    pub fn host_str(&self) -> &str {
        self.address.host_str()
    }

    /// Returns the grammar the host matched.
    #[must_use]
    pub const fn host_kind(&self) -> HostKind {
        self.address.host_kind()
    }

    /// Returns the port, if specified.
    #[must_use]
    pub const fn port(&self) -> Option<u16> {
        self.address.port()
    }

    /// Splits into public key and address.
    #[must_use]
    pub fn into_parts(self) -> (PublicKey, Address) {
        (self.pubkey, self.address)
    }
}

/// Parses a connection string.
///
/// # Errors
///
/// See [`ConnectionString::parse`].
pub fn parse_connection_string(connection_string: &str) -> Result<ConnectionString, ParseError> {
    ConnectionString::parse(connection_string)
}

/// Parses a connection string with the given options.
///
/// # Errors
///
/// See [`ConnectionString::parse_with`].
pub fn parse_connection_string_with(
    connection_string: &str,
    options: &ParseOptions,
) -> Result<ConnectionString, ParseError> {
    ConnectionString::parse_with(connection_string, options)
}

impl fmt::Display for ConnectionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{PUBKEY_SEPARATOR}{}", self.pubkey, self.address)
    }
}

impl FromStr for ConnectionString {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ConnectionString {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ConnectionString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ConnectionString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
