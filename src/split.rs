//! Splitting an address into host and port candidates.
//!
//! Rules, in precedence order:
//!
//! 1. `[content]` optionally followed by `:port` always wins.
//! 2. With at most one colon, the colon (if any) separates host and port.
//! 3. With several colons and no `::`, the input is an uncompressed IPv6
//!    literal: 8 groups, or 9 groups where the last one is the port.
//! 4. With several colons and a `::`, the port cannot be told apart from the
//!    last group, so the input is refused with `InvalidIpv6`.

use tracing::trace;

use crate::constants::IPV6_GROUPS;
use crate::error::{ParseError, ParseErrorKind};

/// Unvalidated host and port substrings of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostPortSplit<'a> {
    /// Host candidate, brackets removed
    pub host: &'a str,
    /// Port candidate, if the address carries one
    pub port: Option<&'a str>,
}

impl<'a> HostPortSplit<'a> {
    /// Splits an address into host and port candidates.
    ///
    /// Neither candidate is validated beyond the structure needed to find the
    /// boundary between them.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - A bracketed host is unterminated or followed by anything but `:port`
    ///   (`InvalidHost`)
    /// - The address ends with a bare colon (`InvalidHost`)
    /// - An uncompressed IPv6 address has fewer than 8 or more than 9 groups
    ///   (`InvalidHost`)
    /// - A compressed IPv6 address is given without brackets (`InvalidIpv6`)
    ///
    /// # Examples
    ///
    /// ```
    /// use ln_connection_string::HostPortSplit;
    ///
    /// let split = HostPortSplit::parse("127.0.0.1:300").unwrap();
    /// assert_eq!(split.host, "127.0.0.1");
    /// assert_eq!(split.port, Some("300"));
    ///
    /// let split = HostPortSplit::parse("[2001:db8::8888]:9735").unwrap();
    /// assert_eq!(split.host, "2001:db8::8888");
    /// assert_eq!(split.port, Some("9735"));
    /// ```
    pub fn parse(input: &'a str) -> Result<Self, ParseError> {
        if let Some(rest) = input.strip_prefix('[') {
            return Self::split_bracketed(input, rest);
        }

        let colons = input.bytes().filter(|&b| b == b':').count();
        let split = if colons <= 1 {
            match input.split_once(':') {
                Some((host, port)) => Self {
                    host,
                    port: Some(port),
                },
                None => Self {
                    host: input,
                    port: None,
                },
            }
        } else if !input.contains("::") {
            Self::split_uncompressed_ipv6(input, colons)?
        } else {
            trace!(input, "compressed IPv6 address without brackets");
            return Err(ParseError::new(
                input,
                ParseErrorKind::InvalidIpv6,
                "compressed IPv6 host must be enclosed in square brackets",
            ));
        };

        if split.port == Some("") {
            return Err(ParseError::host(input, "address ends with a bare colon"));
        }
        Ok(split)
    }

    fn split_bracketed(input: &'a str, rest: &'a str) -> Result<Self, ParseError> {
        let (host, after) = rest
            .split_once(']')
            .ok_or_else(|| ParseError::host(input, "missing closing bracket"))?;

        if after.is_empty() {
            return Ok(Self { host, port: None });
        }

        match after.strip_prefix(':') {
            Some("") => Err(ParseError::host(input, "address ends with a bare colon")),
            Some(port) => Ok(Self {
                host,
                port: Some(port),
            }),
            None => Err(ParseError::host(
                input,
                "expected ':' after closing bracket",
            )),
        }
    }

    fn split_uncompressed_ipv6(input: &'a str, colons: usize) -> Result<Self, ParseError> {
        let groups = colons + 1;
        if groups == IPV6_GROUPS {
            Ok(Self {
                host: input,
                port: None,
            })
        } else if groups == IPV6_GROUPS + 1 {
            let (host, port) = input
                .rsplit_once(':')
                .ok_or_else(|| ParseError::host(input, "malformed IPv6 address"))?;
            Ok(Self {
                host,
                port: Some(port),
            })
        } else {
            Err(ParseError::host(
                input,
                "IPv6 address must have 8 groups, optionally followed by a port",
            ))
        }
    }
}

/// Splits an address into host and port candidates.
///
/// # Errors
///
/// See [`HostPortSplit::parse`].
pub fn split_host_and_port(address: &str) -> Result<HostPortSplit<'_>, ParseError> {
    HostPortSplit::parse(address)
}
