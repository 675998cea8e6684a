//! Constants for connection string validation.

/// Length of a hex-encoded compressed public key.
pub const PUBKEY_HEX_LENGTH: usize = 66;

/// Length of a compressed public key in bytes.
pub const PUBKEY_BYTE_LENGTH: usize = 33;

/// Length of a v3 onion address without the `.onion` suffix.
pub const TORV3_ADDRESS_LENGTH: usize = 56;

/// The onion host suffix.
pub const TORV3_SUFFIX: &str = ".onion";

/// DNS label maximum length.
pub const MAX_DNS_LABEL_LENGTH: usize = 63;

/// DNS domain maximum length.
pub const MAX_DNS_DOMAIN_LENGTH: usize = 253;

/// Number of 16-bit groups in an uncompressed IPv6 literal.
pub const IPV6_GROUPS: usize = 8;

/// Lowest accepted port.
pub const MIN_PORT: u16 = 1;

/// Highest accepted port.
pub const MAX_PORT: u16 = 65535;

/// Separator between the public key and the address.
pub const PUBKEY_SEPARATOR: char = '@';
