//! Sequential batch assignment of an address range to one adapter.

use std::net::Ipv4Addr;

use rangr_common::network::adapter::Adapter;
use rangr_common::network::plan::AddressPlan;
use rangr_common::network::range::Ipv4Range;
use tracing::{error, warn};

use crate::configurator::AdapterConfigurator;

/// A single address the OS refused, with the driver's reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignFailure {
    pub addr: Ipv4Addr,
    pub reason: String,
}

/// Tally of one batch run.
///
/// `assigned + failures.len()` always equals the range length.
#[derive(Debug, Default)]
pub struct ApplyReport {
    pub assigned: u64,
    pub failures: Vec<AssignFailure>,
    /// DNS is a single call with its own error channel; it neither counts
    /// against the address tally nor blocks it.
    pub dns_error: Option<String>,
}

impl ApplyReport {
    pub fn total(&self) -> u64 {
        self.assigned + self.failures.len() as u64
    }

    pub fn all_assigned(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Walks the range in ascending order, binding every address to the adapter.
///
/// The first address carries the default gateway, and the DNS servers are
/// set once right after it; later addresses only extend the adapter's
/// address list. A refused address is recorded and the walk moves on, so
/// one bad assignment cannot strand the rest of the range. Nothing is
/// retried.
///
/// `on_step` fires after every attempt with the address and whether it
/// stuck, which is all a progress display needs.
pub fn assign_range(
    driver: &dyn AdapterConfigurator,
    adapter: &Adapter,
    range: &Ipv4Range,
    plan: &AddressPlan,
    on_step: Option<&dyn Fn(Ipv4Addr, bool)>,
) -> ApplyReport {
    let mut report = ApplyReport::default();

    for (position, addr) in range.iter().enumerate() {
        let first = position == 0;
        let gateway = if first { plan.gateway } else { None };

        let stuck = match driver.assign(adapter, addr, plan.prefix_len, gateway) {
            Ok(()) => {
                report.assigned += 1;
                true
            }
            Err(e) => {
                error!("Failed to assign {addr}: {e:#}");
                report.failures.push(AssignFailure {
                    addr,
                    reason: format!("{e:#}"),
                });
                false
            }
        };

        if first {
            if let Err(e) = driver.set_dns(adapter, &plan.dns) {
                warn!("Failed to set DNS servers: {e:#}");
                report.dns_error = Some(format!("{e:#}"));
            }
        }

        if let Some(step) = on_step {
            step(addr, stuck);
        }
    }

    report
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
