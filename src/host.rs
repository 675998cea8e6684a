//! Host classification.
//!
//! A host candidate is matched against the IPv4, IPv6, Tor v3 and domain
//! grammars in that order; the first full match fixes its [`HostKind`].

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::grammar;

/// The grammar a validated host matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HostKind {
    /// An IPv4 literal (e.g., "127.0.0.1")
    Ipv4,
    /// An IPv6 literal without brackets (e.g., "2001:db8::1")
    Ipv6,
    /// A Tor v3 onion host (56 base32 characters plus ".onion")
    Torv3,
    /// A DNS domain name with at least two labels (e.g., "swiss-reign.ch")
    Domain,
}

impl HostKind {
    /// Returns the stable lowercase name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
            Self::Torv3 => "torv3",
            Self::Domain => "domain",
        }
    }
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HostKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ipv4" => Ok(Self::Ipv4),
            "ipv6" => Ok(Self::Ipv6),
            "torv3" => Ok(Self::Torv3),
            "domain" => Ok(Self::Domain),
            _ => Err(ParseError::host(s, "unknown host kind")),
        }
    }
}

/// A validated host.
///
/// The host text is kept exactly as given; IPv6 hosts are stored without
/// brackets.
///
/// # Examples
///
/// ```
/// use ln_connection_string::{Host, HostKind};
///
/// let host = Host::parse("swiss-reign.ch").unwrap();
/// assert_eq!(host.as_str(), "swiss-reign.ch");
/// assert_eq!(host.kind(), HostKind::Domain);
///
/// let host = Host::parse("2001:db8::1").unwrap();
/// assert_eq!(host.kind(), HostKind::Ipv6);
/// assert_eq!(host.to_string(), "2001:db8::1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Host {
    value: String,
    kind: HostKind,
}

impl Host {
    /// Parses and classifies a host.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` with `InvalidHost` if the input matches none of
    /// the IPv4, IPv6, Tor v3 or domain grammars.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let kind = Self::classify(input)
            .ok_or_else(|| ParseError::host(input, "not an IPv4, IPv6, Tor v3 or domain host"))?;

        Ok(Self {
            value: input.to_string(),
            kind,
        })
    }

    fn classify(input: &str) -> Option<HostKind> {
        if grammar::is_ipv4(input) {
            Some(HostKind::Ipv4)
        } else if grammar::is_ipv6(input) {
            Some(HostKind::Ipv6)
        } else if grammar::is_torv3(input) {
            Some(HostKind::Torv3)
        } else if grammar::is_domain(input) {
            Some(HostKind::Domain)
        } else {
            None
        }
    }

    /// Returns the host text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the grammar this host matched.
    #[must_use]
    pub const fn kind(&self) -> HostKind {
        self.kind
    }
}

/// Parses and classifies a host candidate.
///
/// # Errors
///
/// See [`Host::parse`].
pub fn parse_host(host: &str) -> Result<Host, ParseError> {
    Host::parse(host)
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for Host {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Host {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl TryFrom<&str> for Host {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HostKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HostKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Host {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Host {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
