//! Network address: a validated host with an optional port.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::constants::MIN_PORT;
use crate::error::ParseError;
use crate::host::{Host, HostKind};
use crate::options::ParseOptions;
use crate::port::parse_port;
use crate::split::HostPortSplit;

/// A validated `host[:port]` address.
///
/// # Examples
///
/// ```
/// use ln_connection_string::{Address, HostKind};
///
/// let addr = Address::parse("127.0.0.1:300").unwrap();
/// assert_eq!(addr.host_str(), "127.0.0.1");
/// assert_eq!(addr.host_kind(), HostKind::Ipv4);
/// assert_eq!(addr.port(), Some(300));
///
/// let addr = Address::parse("[2001:db8::1]:9735").unwrap();
/// assert_eq!(addr.to_string(), "[2001:db8::1]:9735");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address {
    host: Host,
    port: Option<u16>,
}

impl Address {
    /// Parses an address with default options.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the host and port cannot be split apart, the
    /// host matches no grammar, or the port is out of range.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(input, &ParseOptions::default())
    }

    /// Parses an address with the given options.
    ///
    /// # Errors
    ///
    /// As [`Address::parse`], plus `InvalidPort` when
    /// [`ParseOptions::port_mandatory`] is set and no port is present.
    pub fn parse_with(input: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        Self::parse_inner(input, options).inspect_err(|e| {
            debug!(input, code = e.kind.code(), reason = e.reason, "rejected address");
        })
    }

    pub(crate) fn parse_inner(input: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        let split = HostPortSplit::parse(input)?;
        let host = Host::parse(split.host)?;
        let port = parse_port(split.port)?;

        if options.port_mandatory && port.is_none() {
            return Err(ParseError::port(input, "port is required"));
        }

        Ok(Self { host, port })
    }

    /// Creates an address from a validated host and an optional port.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` with `InvalidPort` if the port is 0.
    pub fn new(host: Host, port: Option<u16>) -> Result<Self, ParseError> {
        if let Some(p) = port {
            check_port(p)?;
        }
        Ok(Self { host, port })
    }

    /// Returns the host.
    #[must_use]
    pub const fn host(&self) -> &Host {
        &self.host
    }

    /// Returns the host text, without brackets.
    #[must_use]
    pub fn host_str(&self) -> &str {
        self.host.as_str()
    }

    /// Returns the grammar the host matched.
    #[must_use]
    pub const fn host_kind(&self) -> HostKind {
        self.host.kind()
    }

    /// Returns the port, if specified.
    #[must_use]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns a new address with the given port.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` with `InvalidPort` if the port is 0.
    pub fn with_port(&self, port: u16) -> Result<Self, ParseError> {
        Self::new(self.host.clone(), Some(port))
    }

    /// Returns a new address without a port.
    #[must_use]
    pub fn without_port(&self) -> Self {
        Self {
            host: self.host.clone(),
            port: None,
        }
    }
}

fn check_port(port: u16) -> Result<(), ParseError> {
    if port < MIN_PORT {
        return Err(ParseError::port(
            &port.to_string(),
            "port must be between 1 and 65535",
        ));
    }
    Ok(())
}

/// Parses an address into its host, host kind and port.
///
/// # Errors
///
/// See [`Address::parse`].
pub fn parse_address(address: &str) -> Result<Address, ParseError> {
    Address::parse(address)
}

/// Parses an address with the given options.
///
/// # Errors
///
/// See [`Address::parse_with`].
pub fn parse_address_with(address: &str, options: &ParseOptions) -> Result<Address, ParseError> {
    Address::parse_with(address, options)
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.host.kind() {
            HostKind::Ipv6 => write!(f, "[{}]", self.host)?,
            _ => write!(f, "{}", self.host)?,
        }
        match self.port {
            Some(p) => write!(f, ":{p}"),
            None => Ok(()),
        }
    }
}

impl FromStr for Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Address {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
