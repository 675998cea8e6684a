//! Error types for connection string parsing.

use std::fmt;

/// Errors that can occur when parsing a connection string or one of its parts.
///
/// The [`kind`](Self::kind) is the stable, machine-checkable code; the
/// [`reason`](Self::reason) is human-readable and may change between releases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
    /// Human-readable explanation
    pub reason: &'static str,
}

/// Specific parsing error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// Host is not an IPv4, IPv6, Tor v3 address or domain name, or the
    /// host/port boundary is malformed
    InvalidHost,
    /// Compressed IPv6 literal without square brackets; the port cannot be
    /// told apart from the last group
    InvalidIpv6,
    /// Port is not a decimal integer between 1 and 65535
    InvalidPort,
    /// Public key is not 66 hex characters starting with `02` or `03`
    InvalidPubkey,
    /// The `@` separator is missing or present more than once
    InvalidAts,
}

impl ParseErrorKind {
    /// Returns the stable error code string.
    ///
    /// # Examples
    ///
    /// ```
    /// use ln_connection_string::ParseErrorKind;
    ///
    /// assert_eq!(ParseErrorKind::InvalidAts.code(), "invalidAts");
    /// ```
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidHost => "invalidHost",
            Self::InvalidIpv6 => "invalidIpv6",
            Self::InvalidPort => "invalidPort",
            Self::InvalidPubkey => "invalidPubkey",
            Self::InvalidAts => "invalidAts",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl ParseError {
    pub(crate) fn new(input: &str, kind: ParseErrorKind, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            kind,
            reason,
        }
    }

    pub(crate) fn host(input: &str, reason: &'static str) -> Self {
        Self::new(input, ParseErrorKind::InvalidHost, reason)
    }

    pub(crate) fn port(input: &str, reason: &'static str) -> Self {
        Self::new(input, ParseErrorKind::InvalidPort, reason)
    }

    /// Returns the error code.
    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            ParseErrorKind::InvalidHost => "invalid host",
            ParseErrorKind::InvalidIpv6 => "invalid IPv6 host",
            ParseErrorKind::InvalidPort => "invalid port",
            ParseErrorKind::InvalidPubkey => "invalid public key",
            ParseErrorKind::InvalidAts => "invalid connection string",
        };
        write!(f, "{what} '{}': {}", self.input, self.reason)
    }
}

impl std::error::Error for ParseError {}
