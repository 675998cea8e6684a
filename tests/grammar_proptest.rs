//! Property-based tests validating the parser against the ABNF grammar.
//!
//! These tests generate random valid inputs according to grammar constraints
//! and verify the parser accepts them, ensuring parser-grammar conformance.

use std::net::Ipv6Addr;

use proptest::prelude::*;

use ln_connection_string::{
    Address, ConnectionString, HostKind, MAX_DNS_DOMAIN_LENGTH, ParseErrorKind, PublicKey,
    parse_host, parse_port,
};

/// Strategies for generating valid grammar-conformant inputs.
mod strategies {
    use super::*;

    /// Tor v3 base32 alphabet
    const BASE32_LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz234567";

    /// Hex digits in both cases
    const HEX: &[u8] = b"0123456789abcdefABCDEF";

    /// Valid alphanumeric characters for DNS labels
    const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    /// Valid characters for DNS labels (alphanumeric + hyphen)
    const DNS_LABEL_CHARS: &[u8] =
        b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-";

    /// Letters only, for top-level labels
    const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

    fn chars_from(alphabet: &'static [u8], len: usize) -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(alphabet.to_vec()), len..=len)
            .prop_map(|chars| chars.into_iter().map(char::from).collect())
    }

    /// Generate a valid DNS label (1-20 chars, alphanumeric + inner hyphens)
    pub fn dns_label() -> impl Strategy<Value = String> {
        (1..=20usize).prop_flat_map(|len| {
            if len == 1 {
                chars_from(ALPHANUMERIC, 1).boxed()
            } else {
                (
                    chars_from(ALPHANUMERIC, 1),
                    chars_from(DNS_LABEL_CHARS, len - 2),
                    chars_from(ALPHANUMERIC, 1),
                )
                    .prop_map(|(f, m, l)| format!("{f}{m}{l}"))
                    .boxed()
            }
        })
    }

    /// Generate a valid domain name (1-3 labels plus a letter-only TLD)
    pub fn domain() -> impl Strategy<Value = String> {
        (
            prop::collection::vec(dns_label(), 1..=3),
            (2..=6usize).prop_flat_map(|len| chars_from(LETTERS, len)),
        )
            .prop_map(|(labels, tld)| format!("{}.{tld}", labels.join(".")))
            .prop_filter("domain too long", |d| d.len() <= MAX_DNS_DOMAIN_LENGTH)
    }

    /// Generate a valid IPv4 address
    pub fn ipv4() -> impl Strategy<Value = String> {
        (0u8..=255, 0u8..=255, 0u8..=255, 0u8..=255)
            .prop_map(|(a, b, c, d)| format!("{a}.{b}.{c}.{d}"))
    }

    /// Generate a valid IPv6 address in full, uncompressed form
    pub fn ipv6_full() -> impl Strategy<Value = String> {
        prop::collection::vec(0u16..=0xffff, 8).prop_map(|groups| {
            groups
                .iter()
                .map(|g| format!("{g:x}"))
                .collect::<Vec<_>>()
                .join(":")
        })
    }

    /// Generate a valid IPv6 address in the canonical (usually compressed) form
    pub fn ipv6_canonical() -> impl Strategy<Value = String> {
        any::<[u16; 8]>().prop_map(|g| Ipv6Addr::from(g).to_string())
    }

    /// Generate a compressed IPv6 address (contains `::`)
    pub fn ipv6_compressed() -> impl Strategy<Value = String> {
        (0..=7usize)
            .prop_flat_map(|explicit| (0..=explicit).prop_map(move |head| (head, explicit - head)))
            .prop_flat_map(|(head, tail)| {
                (
                    prop::collection::vec(0u16..=0xffff, head..=head),
                    prop::collection::vec(0u16..=0xffff, tail..=tail),
                )
            })
            .prop_map(|(head, tail)| {
                let join = |groups: Vec<u16>| {
                    groups
                        .iter()
                        .map(|g| format!("{g:x}"))
                        .collect::<Vec<_>>()
                        .join(":")
                };
                format!("{}::{}", join(head), join(tail))
            })
    }

    /// Generate a valid Tor v3 onion host
    pub fn torv3() -> impl Strategy<Value = String> {
        chars_from(BASE32_LOWER, 56).prop_map(|name| format!("{name}.onion"))
    }

    /// Generate a valid public key
    pub fn pubkey() -> impl Strategy<Value = String> {
        (prop::sample::select(vec!["02", "03"]), chars_from(HEX, 64))
            .prop_map(|(prefix, body)| format!("{prefix}{body}"))
    }

    /// Generate a valid address (host in any form plus optional port)
    pub fn address() -> impl Strategy<Value = String> {
        fn port() -> impl Strategy<Value = String> {
            prop::option::of(1u16..=65535)
                .prop_map(|p| p.map(|p| format!(":{p}")).unwrap_or_default())
        }

        prop_oneof![
            (domain(), port()).prop_map(|(h, p)| format!("{h}{p}")),
            (ipv4(), port()).prop_map(|(h, p)| format!("{h}{p}")),
            (torv3(), port()).prop_map(|(h, p)| format!("{h}{p}")),
            (ipv6_full(), port()).prop_map(|(h, p)| format!("{h}{p}")),
            (ipv6_canonical(), port()).prop_map(|(h, p)| format!("[{h}]{p}")),
            (ipv6_compressed(), port()).prop_map(|(h, p)| format!("[{h}]{p}")),
        ]
    }

    /// Generate a valid complete connection string
    pub fn connection_string() -> impl Strategy<Value = String> {
        (pubkey(), address()).prop_map(|(k, a)| format!("{k}@{a}"))
    }
}

mod host_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn valid_ipv4_is_echoed(ip in ipv4()) {
            let host = parse_host(&ip).unwrap();
            prop_assert_eq!(host.kind(), HostKind::Ipv4);
            prop_assert_eq!(host.as_str(), ip.as_str());
        }

        #[test]
        fn valid_ipv6_parses(ip in ipv6_full()) {
            prop_assert_eq!(parse_host(&ip).unwrap().kind(), HostKind::Ipv6);
        }

        #[test]
        fn canonical_ipv6_parses(ip in ipv6_canonical()) {
            prop_assert_eq!(parse_host(&ip).unwrap().kind(), HostKind::Ipv6);
        }

        #[test]
        fn valid_torv3_parses(onion in torv3()) {
            prop_assert_eq!(parse_host(&onion).unwrap().kind(), HostKind::Torv3);
        }

        #[test]
        fn valid_domains_parse(d in domain()) {
            let host = parse_host(&d);
            prop_assert!(host.is_ok(), "Failed to parse domain: {}", d);
            prop_assert_eq!(host.unwrap().kind(), HostKind::Domain);
        }

        #[test]
        fn single_labels_are_rejected(label in dns_label()) {
            let result = parse_host(&label);
            prop_assert!(result.is_err(), "Accepted single label: {}", label);
        }
    }
}

mod address_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn valid_addresses_parse(addr in address()) {
            let result = Address::parse(&addr);
            prop_assert!(result.is_ok(), "Failed to parse address: {}", addr);
        }

        #[test]
        fn bare_compressed_ipv6_is_ambiguous(ip in ipv6_compressed(), port in 1u16..=65535) {
            let bare = Address::parse(&ip).unwrap_err();
            prop_assert_eq!(bare.kind, ParseErrorKind::InvalidIpv6);
            let with_port = Address::parse(&format!("{ip}:{port}")).unwrap_err();
            prop_assert_eq!(with_port.kind, ParseErrorKind::InvalidIpv6);
        }

        #[test]
        fn bracketed_compressed_ipv6_parses(ip in ipv6_compressed(), port in 1u16..=65535) {
            let addr = Address::parse(&format!("[{ip}]:{port}")).unwrap();
            prop_assert_eq!(addr.host_str(), ip.as_str());
            prop_assert_eq!(addr.port(), Some(port));
        }
    }
}

mod port_tests {
    use super::*;

    proptest! {
        #[test]
        fn ports_in_range_parse(port in 1u16..=65535) {
            prop_assert_eq!(parse_port(Some(port.to_string().as_str())).unwrap(), Some(port));
        }

        #[test]
        fn ports_above_range_fail(port in 65536u64..) {
            let err = parse_port(Some(port.to_string().as_str())).unwrap_err();
            prop_assert_eq!(err.kind, ParseErrorKind::InvalidPort);
        }

        #[test]
        fn signed_ports_fail(port in 1u16..=65535) {
            for sign in ["-", "+"] {
                let err = parse_port(Some(format!("{sign}{port}").as_str())).unwrap_err();
                prop_assert_eq!(err.kind, ParseErrorKind::InvalidPort);
            }
        }
    }
}

mod pubkey_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #[test]
        fn valid_pubkeys_parse(key in pubkey()) {
            let parsed = PublicKey::parse(&key).unwrap();
            prop_assert_eq!(parsed.as_str(), key.as_str());
        }

        #[test]
        fn truncated_pubkeys_fail(key in pubkey(), cut in 1usize..66) {
            let err = PublicKey::parse(&key[..66 - cut]).unwrap_err();
            prop_assert_eq!(err.kind, ParseErrorKind::InvalidPubkey);
        }
    }
}

mod full_connection_string_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn valid_connection_strings_parse(conn in connection_string()) {
            let result = ConnectionString::parse(&conn);
            prop_assert!(result.is_ok(), "Failed to parse connection string: {}", conn);
        }

        #[test]
        fn roundtrip_parse_serialize(conn in connection_string()) {
            let parsed = ConnectionString::parse(&conn).unwrap();
            let serialized = parsed.to_string();
            let reparsed = ConnectionString::parse(&serialized).unwrap();
            prop_assert_eq!(parsed, reparsed);
        }

        #[test]
        fn extra_at_is_rejected(conn in connection_string()) {
            let err = ConnectionString::parse(&format!("{conn}@")).unwrap_err();
            prop_assert_eq!(err.kind, ParseErrorKind::InvalidAts);
        }

        #[test]
        fn arbitrary_input_never_panics(s in any::<String>()) {
            let _ = ConnectionString::parse(&s);
        }
    }
}
