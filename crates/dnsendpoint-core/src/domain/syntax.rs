//! Generic syntax checkers the field checks delegate to.
//!
//! Both return the list of violation messages, empty when the value is
//! valid. Callers decide how many of them to surface.

use std::net::{IpAddr, Ipv4Addr};
use std::sync::LazyLock;

use regex::Regex;

const DNS1123_SUBDOMAIN_FMT: &str =
    r"[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*";
const DNS1123_SUBDOMAIN_ERROR_MSG: &str = "a lowercase RFC 1123 subdomain must consist of lower case alphanumeric characters, '-' or '.', and must start and end with an alphanumeric character";

// This is a subdomain's max length in DNS (RFC 1123)
pub const DNS1123_SUBDOMAIN_MAX_LENGTH: usize = 253;
pub const DNS1123_LABEL_MAX_LENGTH: usize = 63;

const INVALID_IP_MSG: &str = "must be a valid IP address, (e.g. 10.9.8.7 or 2001:db8::ffff)";

static DNS1123_SUBDOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{DNS1123_SUBDOMAIN_FMT}$"))
        .expect("DNS-1123 subdomain pattern is a valid regex")
});

/// Check `value` against RFC 1123 subdomain rules.
pub fn is_dns1123_subdomain(value: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if value.len() > DNS1123_SUBDOMAIN_MAX_LENGTH {
        errors.push(max_len_error(DNS1123_SUBDOMAIN_MAX_LENGTH));
    }
    if value
        .split('.')
        .any(|label| label.len() > DNS1123_LABEL_MAX_LENGTH)
    {
        errors.push(format!(
            "each label must be no more than {DNS1123_LABEL_MAX_LENGTH} characters"
        ));
    }
    if !DNS1123_SUBDOMAIN_RE.is_match(value) {
        errors.push(regex_error(
            DNS1123_SUBDOMAIN_ERROR_MSG,
            DNS1123_SUBDOMAIN_FMT,
            "example.com",
        ));
    }

    errors
}

/// Check that `value` is an IPv4 or IPv6 address literal.
///
/// IPv4 octets may carry leading zeros (`010.001.002.003`), matching the
/// lenient parsing Kubernetes applies to IP fields.
pub fn is_valid_ip(value: &str) -> Vec<String> {
    if value.parse::<IpAddr>().is_ok() || parse_ipv4_sloppy(value).is_some() {
        return Vec::new();
    }
    vec![INVALID_IP_MSG.to_owned()]
}

/// Dotted-quad IPv4 with four decimal octets, leading zeros allowed.
fn parse_ipv4_sloppy(value: &str) -> Option<Ipv4Addr> {
    let mut parts = value.split('.');
    let mut octets = [0_u8; 4];
    for octet in &mut octets {
        let part = parts.next()?;
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *octet = part.parse().ok()?;
    }
    match parts.next() {
        None => Some(Ipv4Addr::from(octets)),
        Some(_) => None,
    }
}

fn max_len_error(length: usize) -> String {
    format!("must be no more than {length} characters")
}

fn regex_error(msg: &str, fmt: &str, example: &str) -> String {
    format!("{msg} (e.g. '{example}', regex used for validation is '{fmt}')")
}
