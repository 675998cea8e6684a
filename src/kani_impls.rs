//! Kani proof harnesses for the port and public key validators.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{ParseErrorKind, PublicKey, parse_port};

const HEX_CHARS: &[u8] = b"0123456789abcdefABCDEF";

fn arbitrary_hex_char() -> u8 {
    let idx: usize = kani::any();
    HEX_CHARS[idx % HEX_CHARS.len()]
}

/// Every non-zero port survives a decimal round trip.
#[kani::proof]
#[kani::unwind(7)]
fn port_accepts_all_nonzero() {
    let port: u16 = kani::any();
    kani::assume(port != 0);
    let text = port.to_string();
    assert_eq!(parse_port(Some(text.as_str())), Ok(Some(port)));
}

/// Port zero is always rejected.
#[kani::proof]
fn port_rejects_zero() {
    let err = parse_port(Some("0")).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidPort);
}

/// A well-formed key is accepted and its first byte matches the prefix.
#[kani::proof]
#[kani::unwind(68)]
fn pubkey_prefix_matches_first_byte() {
    let odd: bool = kani::any();
    let mut bytes = [b'0'; 66];
    bytes[1] = if odd { b'3' } else { b'2' };
    for b in &mut bytes[2..] {
        *b = arbitrary_hex_char();
    }
    let Ok(text) = std::str::from_utf8(&bytes) else {
        return;
    };
    let key = PublicKey::parse(text).expect("valid key by construction");
    assert_eq!(key.is_even_y(), !odd);
    assert_eq!(key.to_bytes()[0], if odd { 0x03 } else { 0x02 });
}

/// Any other leading byte is rejected.
#[kani::proof]
#[kani::unwind(68)]
fn pubkey_rejects_other_prefixes() {
    let second: u8 = kani::any();
    kani::assume(second != b'2' && second != b'3');
    let mut bytes = [b'0'; 66];
    bytes[1] = second;
    if let Ok(text) = std::str::from_utf8(&bytes) {
        let err = PublicKey::parse(text).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidPubkey);
    }
}
