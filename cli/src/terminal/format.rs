use colored::*;
use pnet::ipnetwork::IpNetwork;
use rangr_common::network::adapter::Adapter;
use rangr_core::configurator::AdapterState;

use crate::terminal::{colors, print};

/// Prints one adapter as an indexed tree entry.
pub fn print_adapter(adapter: &Adapter, idx: usize) {
    print::tree_head(idx, adapter.display_name());

    let mut pairs: Vec<(String, ColoredString)> = vec![(
        "Index".to_string(),
        adapter.index.to_string().color(colors::ACCENT),
    )];
    if adapter.display_name() != adapter.name {
        pairs.push(("Device".to_string(), adapter.name.clone().normal()));
    }
    pairs.extend(nets_to_pairs(&adapter.ips));
    if let Some(mac_addr) = adapter.mac {
        pairs.push((
            "MAC".to_string(),
            mac_addr.to_string().color(colors::MAC_ADDR),
        ));
    }

    print::as_tree_one_level(pairs);
}

fn nets_to_pairs(ips: &[IpNetwork]) -> Vec<(String, ColoredString)> {
    ips.iter()
        .filter_map(|ip_network| match ip_network {
            IpNetwork::V4(ipv4_network) => {
                let address: ColoredString =
                    ipv4_network.ip().to_string().color(colors::IPV4_ADDR);
                let prefix: ColoredString =
                    ipv4_network.prefix().to_string().color(colors::IPV4_PREFIX);
                let value: ColoredString =
                    format!("{address}/{prefix}").color(colors::SEPARATOR);
                Some(("IPv4".to_string(), value))
            }
            // only IPv4 state is managed here
            IpNetwork::V6(_) => None,
        })
        .collect()
}

/// Key/value rows for the state the OS reports back.
pub fn state_to_pairs(state: &AdapterState) -> Vec<(String, ColoredString)> {
    let mut pairs: Vec<(String, ColoredString)> = state
        .addresses
        .iter()
        .map(|(addr, prefix_len)| {
            let address: ColoredString = addr.to_string().color(colors::IPV4_ADDR);
            let prefix: ColoredString = prefix_len.to_string().color(colors::IPV4_PREFIX);
            let value: ColoredString = format!("{address}/{prefix}").color(colors::SEPARATOR);
            ("IPv4".to_string(), value)
        })
        .collect();
    if pairs.is_empty() {
        pairs.push(("IPv4".to_string(), "none".dimmed()));
    }

    if state.dns_servers.is_empty() {
        pairs.push(("DNS".to_string(), "none".dimmed()));
    } else {
        for server in &state.dns_servers {
            pairs.push(("DNS".to_string(), server.to_string().color(colors::IPV4_ADDR)));
        }
    }

    pairs
}
