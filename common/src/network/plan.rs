use std::net::Ipv4Addr;

use thiserror::Error;

/// Widest subnet prefix an IPv4 address can carry.
pub const MAX_PREFIX_LEN: u8 = 32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("prefix length {0} is above /32")]
    PrefixTooLong(u8),
}

/// One or two DNS servers, primary first.
///
/// The arity lives in the type so downstream code never re-validates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DnsServers {
    pub primary: Ipv4Addr,
    pub secondary: Option<Ipv4Addr>,
}

impl DnsServers {
    pub fn as_vec(&self) -> Vec<Ipv4Addr> {
        match self.secondary {
            Some(secondary) => vec![self.primary, secondary],
            None => vec![self.primary],
        }
    }
}

/// Settings applied alongside the address range: subnet width, the optional
/// default gateway and the adapter's DNS servers.
///
/// Lives for a single run; the OS network stack is the only persistent
/// store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressPlan {
    pub prefix_len: u8,
    pub gateway: Option<Ipv4Addr>,
    pub dns: DnsServers,
}

impl AddressPlan {
    pub fn new(
        prefix_len: u8,
        gateway: Option<Ipv4Addr>,
        dns: DnsServers,
    ) -> Result<Self, PlanError> {
        if prefix_len > MAX_PREFIX_LEN {
            return Err(PlanError::PrefixTooLong(prefix_len));
        }
        Ok(Self {
            prefix_len,
            gateway,
            dns,
        })
    }
}
