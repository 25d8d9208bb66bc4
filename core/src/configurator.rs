//! The central **abstraction** for adapter configuration.
//!
//! Every OS mutation and query goes through [`AdapterConfigurator`], so the
//! codec, range and batch logic stay pure and testable without a real
//! network stack underneath.
//!
//! **Architectural Note:**
//! High-level modules should strictly depend on this abstraction rather than
//! a concrete binding; the [`crate::os`] module picks the platform driver
//! and nothing else needs to know which one it got.

use std::net::Ipv4Addr;

use rangr_common::network::adapter::Adapter;
use rangr_common::network::plan::DnsServers;

/// IPv4 state currently held by an adapter, as reported by the OS.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdapterState {
    /// Address and prefix-length pairs.
    pub addresses: Vec<(Ipv4Addr, u8)>,
    pub dns_servers: Vec<Ipv4Addr>,
}

/// Driver for one adapter's IPv4 configuration.
pub trait AdapterConfigurator {
    /// Removes existing IPv4 addresses, default routes and DNS servers.
    ///
    /// Callers treat a failure here as non-fatal; assignment proceeds
    /// against whatever state the adapter is left in.
    fn clear(&self, adapter: &Adapter) -> anyhow::Result<()>;

    /// Binds one address; the default gateway rides along when given.
    fn assign(
        &self,
        adapter: &Adapter,
        addr: Ipv4Addr,
        prefix_len: u8,
        gateway: Option<Ipv4Addr>,
    ) -> anyhow::Result<()>;

    /// Replaces the adapter's DNS server list.
    fn set_dns(&self, adapter: &Adapter, servers: &DnsServers) -> anyhow::Result<()>;

    /// Reads back the adapter's IPv4 state for display.
    fn current(&self, adapter: &Adapter) -> anyhow::Result<AdapterState>;
}
