#![cfg(test)]
use std::cell::{Cell, RefCell};
use std::net::Ipv4Addr;

use rangr_common::network::adapter::Adapter;
use rangr_common::network::addr;
use rangr_common::network::plan::{AddressPlan, DnsServers};
use rangr_common::network::range::Ipv4Range;
use rangr_core::apply;
use rangr_core::configurator::{AdapterConfigurator, AdapterState};

/// Behaves like a tiny OS network stack: `clear` wipes it, `assign`
/// accumulates, `current` reads it back.
#[derive(Default)]
struct InMemoryDriver {
    refuse: Vec<Ipv4Addr>,
    state: RefCell<AdapterState>,
    gateways: RefCell<Vec<Ipv4Addr>>,
    cleared: Cell<u32>,
}

impl AdapterConfigurator for InMemoryDriver {
    fn clear(&self, _adapter: &Adapter) -> anyhow::Result<()> {
        *self.state.borrow_mut() = AdapterState::default();
        self.cleared.set(self.cleared.get() + 1);
        Ok(())
    }

    fn assign(
        &self,
        _adapter: &Adapter,
        addr: Ipv4Addr,
        prefix_len: u8,
        gateway: Option<Ipv4Addr>,
    ) -> anyhow::Result<()> {
        if self.refuse.contains(&addr) {
            anyhow::bail!("the object already exists");
        }
        self.state.borrow_mut().addresses.push((addr, prefix_len));
        if let Some(gateway) = gateway {
            self.gateways.borrow_mut().push(gateway);
        }
        Ok(())
    }

    fn set_dns(&self, _adapter: &Adapter, servers: &DnsServers) -> anyhow::Result<()> {
        self.state.borrow_mut().dns_servers = servers.as_vec();
        Ok(())
    }

    fn current(&self, _adapter: &Adapter) -> anyhow::Result<AdapterState> {
        Ok(self.state.borrow().clone())
    }
}

fn test_adapter() -> Adapter {
    Adapter {
        index: 12,
        name: "eth0".to_string(),
        description: "Ethernet".to_string(),
        mac: None,
        ips: Vec::new(),
    }
}

/// Builds the range and plan the way the interactive collector does: from
/// operator-typed text, validated up front.
fn collect(
    start: &str,
    end: &str,
    prefix_len: u8,
    gateway: Option<&str>,
    primary: &str,
    secondary: Option<&str>,
) -> anyhow::Result<(Ipv4Range, AddressPlan)> {
    let range = Ipv4Range::new(addr::parse(start)?, addr::parse(end)?)?;
    let gateway = gateway.map(addr::parse).transpose()?;
    let dns = DnsServers {
        primary: addr::parse(primary)?,
        secondary: secondary.map(addr::parse).transpose()?,
    };
    Ok((range, AddressPlan::new(prefix_len, gateway, dns)?))
}

#[test]
fn whole_pipeline_lands_in_the_driver_state() {
    let driver = InMemoryDriver::default();
    let adapter = test_adapter();
    let (range, plan) = collect(
        "10.103.35.100",
        "10.103.35.103",
        24,
        Some("10.103.35.1"),
        "10.103.1.10",
        Some("10.103.1.11"),
    )
    .unwrap();

    driver.clear(&adapter).unwrap();
    let report = apply::assign_range(&driver, &adapter, &range, &plan, None);

    assert_eq!(report.assigned, 4);
    assert!(report.all_assigned());
    assert!(report.dns_error.is_none());

    let state = driver.current(&adapter).unwrap();
    let listed: Vec<String> = state
        .addresses
        .iter()
        .map(|(addr, prefix_len)| format!("{addr}/{prefix_len}"))
        .collect();
    assert_eq!(
        listed,
        [
            "10.103.35.100/24",
            "10.103.35.101/24",
            "10.103.35.102/24",
            "10.103.35.103/24",
        ]
    );

    // the gateway landed exactly once, with the first address
    assert_eq!(*driver.gateways.borrow(), ["10.103.35.1".parse::<Ipv4Addr>().unwrap()]);
    assert_eq!(
        state.dns_servers,
        [
            "10.103.1.10".parse::<Ipv4Addr>().unwrap(),
            "10.103.1.11".parse().unwrap(),
        ]
    );
    assert_eq!(driver.cleared.get(), 1);
}

#[test]
fn refused_address_leaves_the_rest_configured() {
    let driver = InMemoryDriver {
        refuse: vec!["10.103.35.101".parse().unwrap()],
        ..Default::default()
    };
    let adapter = test_adapter();
    let (range, plan) = collect(
        "10.103.35.100",
        "10.103.35.103",
        24,
        None,
        "10.103.1.10",
        None,
    )
    .unwrap();

    let report = apply::assign_range(&driver, &adapter, &range, &plan, None);

    assert_eq!(report.assigned, 3);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.assigned + report.failures.len() as u64, range.len());

    let state = driver.current(&adapter).unwrap();
    let assigned: Vec<Ipv4Addr> = state.addresses.iter().map(|(addr, _)| *addr).collect();
    assert_eq!(
        assigned,
        [
            "10.103.35.100".parse::<Ipv4Addr>().unwrap(),
            "10.103.35.102".parse().unwrap(),
            "10.103.35.103".parse().unwrap(),
        ]
    );
}

#[test]
fn operator_typed_text_is_validated_before_anything_runs() {
    // inverted endpoints never reach the driver
    assert!(collect("10.0.0.5", "10.0.0.1", 24, None, "1.1.1.1", None).is_err());
    // and neither does a malformed gateway
    assert!(collect("10.0.0.1", "10.0.0.5", 24, Some("not-a-gateway"), "1.1.1.1", None).is_err());
}
