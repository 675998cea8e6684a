//! Parser configuration.

/// Strictness options for address and connection string parsing.
///
/// The default accepts everything the plain `parse` functions accept.
///
/// # Examples
///
/// ```
/// use ln_connection_string::{ConnectionString, ParseErrorKind, ParseOptions};
///
/// let options = ParseOptions::new().port_mandatory(true);
/// let err = ConnectionString::parse_with(
///     "0200000000a3eff613189ca6c4070c89206ad658e286751eca1f29262948247a5f@swiss-reign.ch",
///     &options,
/// )
/// .unwrap_err();
/// assert_eq!(err.kind(), ParseErrorKind::InvalidPort);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ParseOptions {
    /// Reject addresses that do not carry a port
    pub port_mandatory: bool,
}

impl ParseOptions {
    /// Creates the default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            port_mandatory: false,
        }
    }

    /// Sets whether a port must be present.
    #[must_use]
    pub const fn port_mandatory(mut self, port_mandatory: bool) -> Self {
        self.port_mandatory = port_mandatory;
        self
    }
}
