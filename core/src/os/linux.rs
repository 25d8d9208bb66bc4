use std::net::Ipv4Addr;
use std::process::Command;

use anyhow::Context;
use rangr_common::network::adapter::Adapter;
use rangr_common::network::plan::DnsServers;
use tracing::trace;

use crate::configurator::{AdapterConfigurator, AdapterState};
use super::parse_addr_prefix;

/// Drives the Linux IPv4 stack through iproute2, with DNS handed to
/// systemd-resolved via resolvectl.
pub struct IpCommandDriver;

fn run(program: &str, args: &[&str]) -> anyhow::Result<String> {
    trace!("{program} {}", args.join(" "));
    let output = Command::new(program)
        .args(args)
        .output()
        .with_context(|| format!("failed to spawn {program}"))?;

    if !output.status.success() {
        anyhow::bail!(
            "{program} {} exited with {:?}: {}",
            args.join(" "),
            output.status.code(),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

impl AdapterConfigurator for IpCommandDriver {
    fn clear(&self, adapter: &Adapter) -> anyhow::Result<()> {
        run("ip", &["-4", "addr", "flush", "dev", &adapter.name])?;
        run("resolvectl", &["dns", &adapter.name, ""]).map(drop)
    }

    fn assign(
        &self,
        adapter: &Adapter,
        addr: Ipv4Addr,
        prefix_len: u8,
        gateway: Option<Ipv4Addr>,
    ) -> anyhow::Result<()> {
        let cidr = format!("{addr}/{prefix_len}");
        run("ip", &["addr", "add", &cidr, "dev", &adapter.name])?;

        if let Some(gateway) = gateway {
            let via = gateway.to_string();
            run(
                "ip",
                &["route", "replace", "default", "via", &via, "dev", &adapter.name],
            )?;
        }
        Ok(())
    }

    fn set_dns(&self, adapter: &Adapter, servers: &DnsServers) -> anyhow::Result<()> {
        let servers: Vec<String> = servers
            .as_vec()
            .iter()
            .map(ToString::to_string)
            .collect();
        let mut args = vec!["dns", adapter.name.as_str()];
        args.extend(servers.iter().map(String::as_str));
        run("resolvectl", &args).map(drop)
    }

    fn current(&self, adapter: &Adapter) -> anyhow::Result<AdapterState> {
        let stdout = run("ip", &["-4", "-o", "addr", "show", "dev", &adapter.name])?;

        let mut state = AdapterState::default();
        // one line per address: "2: eth0  inet 10.0.0.1/24 brd ... scope global ..."
        for line in stdout.lines() {
            let mut tokens = line.split_whitespace();
            while let Some(token) = tokens.next() {
                if token == "inet" {
                    if let Some(pair) = tokens.next().and_then(parse_addr_prefix) {
                        state.addresses.push(pair);
                    }
                    break;
                }
            }
        }

        // "Link 2 (eth0): 1.1.1.1 8.8.8.8" -- absent entirely when resolved
        // is not managing the link, which is not an error worth surfacing
        if let Ok(stdout) = run("resolvectl", &["dns", &adapter.name]) {
            if let Some((_, list)) = stdout.split_once(':') {
                state
                    .dns_servers
                    .extend(list.split_whitespace().filter_map(|s| s.parse::<Ipv4Addr>().ok()));
            }
        }

        Ok(state)
    }
}
