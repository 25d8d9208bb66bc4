use std::fmt;
use std::net::Ipv4Addr;

use thiserror::Error;

/// Raised when a range is requested with its endpoints inverted.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("start address {start} is above end address {end}")]
pub struct RangeError {
    pub start: Ipv4Addr,
    pub end: Ipv4Addr,
}

/// An inclusive, ascending span of IPv4 addresses.
///
/// Construction enforces start <= end, so a range always holds at least
/// one address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl Ipv4Range {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Result<Self, RangeError> {
        if u32::from(start_addr) > u32::from(end_addr) {
            return Err(RangeError {
                start: start_addr,
                end: end_addr,
            });
        }
        Ok(Self {
            start_addr,
            end_addr,
        })
    }

    /// Number of addresses covered, both endpoints included.
    ///
    /// Held in a u64 because the full 32-bit space is one past `u32::MAX`.
    pub fn len(&self) -> u64 {
        u64::from(u32::from(self.end_addr)) - u64::from(u32::from(self.start_addr)) + 1
    }

    /// Walks every address from start to end in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Ipv4Addr> {
        let start: u32 = self.start_addr.into();
        let end: u32 = self.end_addr.into();
        (start..=end).map(Ipv4Addr::from)
    }
}

impl fmt::Display for Ipv4Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start_addr, self.end_addr)
    }
}
