use std::net::Ipv4Addr;
use std::os::windows::process::CommandExt;
use std::process::{Command, Stdio};

use anyhow::Context;
use rangr_common::network::adapter::Adapter;
use rangr_common::network::plan::DnsServers;
use tracing::trace;

use crate::configurator::{AdapterConfigurator, AdapterState};
use super::parse_addr_prefix;

const CREATE_NO_WINDOW: u32 = 0x08000000;

/// Drives the Windows IPv4 stack through the Net* PowerShell cmdlets.
///
/// Adapters are addressed by interface index, which is stable for the
/// lifetime of a run; names are only for humans.
pub struct PowershellDriver;

fn run(script: &str) -> anyhow::Result<String> {
    trace!("powershell: {script}");
    let output = Command::new("powershell")
        .creation_flags(CREATE_NO_WINDOW)
        .args([
            "-NoProfile",
            "-NonInteractive",
            "-NoLogo",
            "-WindowStyle",
            "Hidden",
            "-Command",
            script,
        ])
        .stdin(Stdio::null())
        .output()
        .context("failed to spawn powershell")?;

    if !output.status.success() {
        anyhow::bail!(
            "powershell exited with {:?}: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

impl AdapterConfigurator for PowershellDriver {
    fn clear(&self, adapter: &Adapter) -> anyhow::Result<()> {
        let script = format!(
            "Remove-NetIPAddress -InterfaceIndex {idx} -AddressFamily IPv4 \
                 -Confirm:$false -ErrorAction SilentlyContinue; \
             Remove-NetRoute -InterfaceIndex {idx} -AddressFamily IPv4 \
                 -Confirm:$false -ErrorAction SilentlyContinue; \
             Set-DnsClientServerAddress -InterfaceIndex {idx} -ResetServerAddresses",
            idx = adapter.index
        );
        run(&script).map(drop)
    }

    fn assign(
        &self,
        adapter: &Adapter,
        addr: Ipv4Addr,
        prefix_len: u8,
        gateway: Option<Ipv4Addr>,
    ) -> anyhow::Result<()> {
        let mut script = format!(
            "New-NetIPAddress -InterfaceIndex {} -IPAddress {} -PrefixLength {} \
             -AddressFamily IPv4",
            adapter.index, addr, prefix_len
        );
        if let Some(gateway) = gateway {
            script.push_str(&format!(" -DefaultGateway {gateway}"));
        }
        script.push_str(" -ErrorAction Stop | Out-Null");
        run(&script).map(drop)
    }

    fn set_dns(&self, adapter: &Adapter, servers: &DnsServers) -> anyhow::Result<()> {
        let list = servers
            .as_vec()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<String>>()
            .join("','");
        let script = format!(
            "Set-DnsClientServerAddress -InterfaceIndex {} -ServerAddresses ('{}') \
             -ErrorAction Stop",
            adapter.index, list
        );
        run(&script).map(drop)
    }

    fn current(&self, adapter: &Adapter) -> anyhow::Result<AdapterState> {
        let script = format!(
            "Get-NetIPAddress -InterfaceIndex {idx} -AddressFamily IPv4 \
                 -ErrorAction SilentlyContinue | \
                 ForEach-Object {{ \"addr $($_.IPAddress)/$($_.PrefixLength)\" }}; \
             (Get-DnsClientServerAddress -InterfaceIndex {idx} -AddressFamily IPv4).ServerAddresses | \
                 ForEach-Object {{ \"dns $_\" }}",
            idx = adapter.index
        );
        let stdout = run(&script)?;

        let mut state = AdapterState::default();
        for line in stdout.lines() {
            let line = line.trim();
            if let Some(token) = line.strip_prefix("addr ") {
                if let Some((addr, prefix_len)) = parse_addr_prefix(token) {
                    state.addresses.push((addr, prefix_len));
                }
            } else if let Some(token) = line.strip_prefix("dns ") {
                if let Ok(server) = token.parse() {
                    state.dns_servers.push(server);
                }
            }
        }
        Ok(state)
    }
}
