use std::net::Ipv4Addr;

use colored::*;
use tracing::warn;

use rangr_common::network::adapter::{self, Adapter};
use rangr_common::network::plan::{AddressPlan, DnsServers};
use rangr_common::network::range::Ipv4Range;
use rangr_common::success;
use rangr_core::apply::{self, ApplyReport};
use rangr_core::os;

use crate::rprint;
use crate::terminal::{colors, format, print, progress, prompt};

/// The full interactive pipeline: pick an adapter, collect a validated
/// range and plan, confirm, then clear and batch-assign.
pub fn assign() -> anyhow::Result<()> {
    let adapters = adapter::active_adapters()?;
    if adapters.is_empty() {
        anyhow::bail!("no active network adapters found");
    }

    let adapter = prompt::select_adapter(&adapters)?;
    rprint!();

    // malformed text re-prompts above; an inverted range is fatal here
    let start_addr = prompt::ipv4("Start address")?;
    let end_addr = prompt::ipv4("End address")?;
    let range = Ipv4Range::new(start_addr, end_addr)?;

    let prefix_len = prompt::prefix_len("Prefix length (0-32)")?;
    let gateway = prompt::optional_ipv4("Default gateway (empty to skip)")?;
    let primary = prompt::ipv4("Primary DNS")?;
    let secondary = prompt::optional_ipv4("Secondary DNS (empty to skip)")?;
    let plan = AddressPlan::new(prefix_len, gateway, DnsServers { primary, secondary })?;

    rprint!();
    print_summary(&adapter, &range, &plan);
    rprint!();

    if !prompt::confirm("Apply this configuration?")? {
        success!("Cancelled, nothing was changed");
        return Ok(());
    }

    let driver = os::system()?;

    if let Err(e) = driver.clear(&adapter) {
        warn!("Could not clear the existing configuration: {e:#}");
    }

    let bar = progress::batch_bar(range.len());
    let on_step = |addr: Ipv4Addr, stuck: bool| {
        if !stuck {
            bar.println(format!("{} {addr} was refused", "[-]".red().bold()));
        }
        bar.inc(1);
    };
    let report = apply::assign_range(driver.as_ref(), &adapter, &range, &plan, Some(&on_step));
    bar.finish_and_clear();

    report_outcome(&report);

    match driver.current(&adapter) {
        Ok(state) => {
            rprint!();
            print::header("resulting configuration");
            print::tree_head(adapter.index as usize, adapter.display_name());
            print::as_tree_one_level(format::state_to_pairs(&state));
        }
        Err(e) => warn!("Could not read back the adapter state: {e:#}"),
    }

    print::end_of_program();
    Ok(())
}

fn print_summary(adapter: &Adapter, range: &Ipv4Range, plan: &AddressPlan) {
    print::aligned_line("Adapter", adapter.display_name().to_string());
    print::aligned_line("Range", range.to_string().color(colors::IPV4_ADDR));
    print::aligned_line("Addresses", range.len().to_string().color(colors::ACCENT));
    print::aligned_line(
        "Prefix length",
        format!("/{}", plan.prefix_len).color(colors::IPV4_PREFIX),
    );
    print::aligned_line("Gateway", optional(plan.gateway));
    print::aligned_line(
        "Primary DNS",
        plan.dns.primary.to_string().color(colors::IPV4_ADDR),
    );
    print::aligned_line("Secondary DNS", optional(plan.dns.secondary));
}

fn optional(addr: Option<Ipv4Addr>) -> ColoredString {
    match addr {
        Some(addr) => addr.to_string().color(colors::IPV4_ADDR),
        None => "none".dimmed(),
    }
}

fn report_outcome(report: &ApplyReport) {
    let assigned: ColoredString = format!("{} assigned", report.assigned).bold().green();
    let failed: ColoredString = format!("{} failed", report.failures.len()).bold().red();

    print::fat_separator();
    print::centerln(&format!("{assigned}, {failed}"));

    if report.all_assigned() {
        success!("All {} addresses were assigned", report.assigned);
    } else {
        warn!(
            "{} of {} addresses were assigned",
            report.assigned,
            report.total()
        );
    }
    if report.dns_error.is_some() {
        warn!("DNS servers were not applied");
    }
}
