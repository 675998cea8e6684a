//! Node public key.

use std::fmt;
use std::str::FromStr;

use crate::constants::PUBKEY_BYTE_LENGTH;
use crate::error::{ParseError, ParseErrorKind};
use crate::grammar;

/// A validated hex-encoded compressed public key.
///
/// Exactly 66 hex characters starting with `02` or `03`. Only the encoding is
/// checked; whether the key is a point on the curve is not.
///
/// # Examples
///
/// ```
/// use ln_connection_string::PublicKey;
///
/// let key = PublicKey::parse(
///     "0200000000a3eff613189ca6c4070c89206ad658e286751eca1f29262948247a5f"
/// ).unwrap();
/// assert!(key.is_even_y());
/// assert_eq!(key.to_bytes()[0], 0x02);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PublicKey {
    hex: String,
    bytes: [u8; PUBKEY_BYTE_LENGTH],
}

impl PublicKey {
    /// Parses a public key.
    ///
    /// Hex digits may be in either case; the input is kept as given.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` with `InvalidPubkey` if the input is not 66 hex
    /// characters or does not start with `02` or `03`.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let invalid = || {
            ParseError::new(
                input,
                ParseErrorKind::InvalidPubkey,
                "expected 66 hex characters starting with 02 or 03",
            )
        };
        if !grammar::is_pubkey(input) {
            return Err(invalid());
        }

        let mut bytes = [0u8; PUBKEY_BYTE_LENGTH];
        hex::decode_to_slice(input, &mut bytes).map_err(|_| invalid())?;

        Ok(Self {
            hex: input.to_string(),
            bytes,
        })
    }

    /// Returns the hex string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.hex
    }

    /// Returns the 33 key bytes.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; PUBKEY_BYTE_LENGTH] {
        self.bytes
    }

    /// Returns true if the key carries the `02` (even y) prefix.
    #[must_use]
    pub const fn is_even_y(&self) -> bool {
        self.bytes[0] == 0x02
    }
}

/// Validates a public key.
///
/// # Errors
///
/// See [`PublicKey::parse`].
pub fn parse_pubkey(pubkey: &str) -> Result<PublicKey, ParseError> {
    PublicKey::parse(pubkey)
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

impl FromStr for PublicKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PublicKey {
    fn as_ref(&self) -> &str {
        &self.hex
    }
}

impl TryFrom<&str> for PublicKey {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PublicKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.hex)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PublicKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
