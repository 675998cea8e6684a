//! Matchers for the textual grammars of a connection string.
//!
//! Every matcher is an exact, whole-input predicate. The formal grammar is
//! written out in `grammar.abnf` at the crate root:
//!
//! ```abnf
//! connection-string = pubkey "@" address
//! address           = ( "[" host "]" / host ) [ ":" port ]
//! host              = ipv4-address / ipv6-address / torv3-host / domain
//! ```
//!
//! The matchers do no allocation and hold no state.

use crate::constants::{
    IPV6_GROUPS, MAX_DNS_DOMAIN_LENGTH, MAX_DNS_LABEL_LENGTH, PUBKEY_HEX_LENGTH,
    TORV3_ADDRESS_LENGTH, TORV3_SUFFIX,
};

/// Four dot-separated decimal octets, each at most 255.
pub(crate) fn is_ipv4(s: &str) -> bool {
    let mut octets = 0;
    for octet in s.split('.') {
        if !is_octet(octet) {
            return false;
        }
        octets += 1;
    }
    octets == 4
}

fn is_octet(s: &str) -> bool {
    if s.is_empty() || s.len() > 3 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    s.bytes()
        .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'))
        <= 255
}

/// Eight colon-separated hex groups, or one `::` eliding at least one group.
///
/// The final 32 bits may be written as a dotted IPv4 literal.
pub(crate) fn is_ipv6(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }

    let Some(idx) = s.find("::") else {
        return count_groups(s, true) == Some(IPV6_GROUPS);
    };

    let head = &s[..idx];
    let tail = &s[idx + 2..];
    if tail.contains("::") {
        return false;
    }

    let head_groups = if head.is_empty() {
        Some(0)
    } else {
        count_groups(head, false)
    };
    let tail_groups = if tail.is_empty() {
        Some(0)
    } else {
        count_groups(tail, true)
    };

    match (head_groups, tail_groups) {
        (Some(h), Some(t)) => h + t < IPV6_GROUPS,
        _ => false,
    }
}

/// Counts the 16-bit groups in a `::`-free run, `None` if any group is malformed.
fn count_groups(s: &str, allow_ipv4_tail: bool) -> Option<usize> {
    let mut count = 0;
    let mut parts = s.split(':').peekable();
    while let Some(part) = parts.next() {
        let is_last = parts.peek().is_none();
        if is_last && allow_ipv4_tail && part.contains('.') {
            if !is_ipv4(part) {
                return None;
            }
            count += 2;
        } else if is_hex_group(part) {
            count += 1;
        } else {
            return None;
        }
    }
    Some(count)
}

fn is_hex_group(s: &str) -> bool {
    (1..=4).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// 56 lowercase base32 characters followed by `.onion`.
pub(crate) fn is_torv3(s: &str) -> bool {
    let Some(name) = s.strip_suffix(TORV3_SUFFIX) else {
        return false;
    };
    name.len() == TORV3_ADDRESS_LENGTH
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || (b'2'..=b'7').contains(&b))
}

/// At least two DNS labels separated by single dots.
///
/// The last label may not be all digits, so no dotted-quad string is a domain.
pub(crate) fn is_domain(s: &str) -> bool {
    if s.is_empty() || s.len() > MAX_DNS_DOMAIN_LENGTH {
        return false;
    }

    let mut labels = 0;
    let mut last = "";
    for label in s.split('.') {
        if !is_dns_label(label) {
            return false;
        }
        labels += 1;
        last = label;
    }

    labels >= 2 && !last.bytes().all(|b| b.is_ascii_digit())
}

fn is_dns_label(s: &str) -> bool {
    !s.is_empty()
        && s.len() <= MAX_DNS_LABEL_LENGTH
        && !s.starts_with('-')
        && !s.ends_with('-')
        && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

/// One or more ASCII decimal digits, nothing else.
pub(crate) fn is_port_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// 66 hex characters starting with `02` or `03`.
pub(crate) fn is_pubkey(s: &str) -> bool {
    s.len() == PUBKEY_HEX_LENGTH
        && (s.starts_with("02") || s.starts_with("03"))
        && s.bytes().all(|b| b.is_ascii_hexdigit())
}
