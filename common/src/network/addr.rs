//! # Dotted-Quad Codec
//!
//! Conversion between the textual IPv4 form `"a.b.c.d"` and its packed
//! 32-bit integer, plus the validation the interactive prompts lean on.
//!
//! The integer form orders addresses the way an operator expects
//! (`10.0.0.9 < 10.0.0.10 < 10.0.1.0`), which is what makes contiguous
//! range enumeration a plain integer walk.

use std::net::Ipv4Addr;

use thiserror::Error;

/// Reasons a dotted-quad string is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddrError {
    #[error("expected four dot-separated octets, found {0}")]
    OctetCount(usize),
    #[error("'{0}' is not a decimal number in 0-255")]
    BadOctet(String),
}

/// Parses dotted-quad text into an address.
///
/// Accepts plain decimal octets, including zero-padded forms such as
/// `"010.0.0.1"`; the padding disappears in the canonical `Display` form.
/// Signs, empty groups and anything non-decimal are rejected.
pub fn parse(text: &str) -> Result<Ipv4Addr, AddrError> {
    let groups: Vec<&str> = text.split('.').collect();
    if groups.len() != 4 {
        return Err(AddrError::OctetCount(groups.len()));
    }

    let mut octets = [0u8; 4];
    for (slot, group) in octets.iter_mut().zip(&groups) {
        *slot = parse_octet(group)?;
    }

    Ok(Ipv4Addr::from(octets))
}

fn parse_octet(group: &str) -> Result<u8, AddrError> {
    if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddrError::BadOctet(group.to_string()));
    }
    group
        .parse::<u8>()
        .map_err(|_| AddrError::BadOctet(group.to_string()))
}

/// Whether `text` is a well-formed dotted quad.
pub fn validate(text: &str) -> bool {
    parse(text).is_ok()
}

/// Big-endian packing of the four octets.
pub fn to_u32(addr: Ipv4Addr) -> u32 {
    u32::from(addr)
}

/// Inverse of [`to_u32`]; defined for the whole 32-bit space.
pub fn from_u32(value: u32) -> Ipv4Addr {
    Ipv4Addr::from(value)
}
