//! Command-backed drivers for the platforms the tool knows how to drive.
//!
//! Each platform lives in its own module behind `cfg(target_os = ...)`;
//! [`system`] hands out the right one without leaking which it is.

use std::net::Ipv4Addr;

use crate::configurator::AdapterConfigurator;

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "windows")]
mod windows;

/// The configuration driver for the running platform.
pub fn system() -> anyhow::Result<Box<dyn AdapterConfigurator>> {
    #[cfg(target_os = "windows")]
    return Ok(Box::new(windows::PowershellDriver));

    #[cfg(target_os = "linux")]
    return Ok(Box::new(linux::IpCommandDriver));

    #[cfg(not(any(target_os = "windows", target_os = "linux")))]
    anyhow::bail!("static IPv4 configuration is not supported on this platform")
}

/// Splits `"a.b.c.d/nn"` into its address and prefix length.
#[allow(dead_code)]
fn parse_addr_prefix(token: &str) -> Option<(Ipv4Addr, u8)> {
    let (addr, prefix_len) = token.split_once('/')?;
    Some((addr.parse().ok()?, prefix_len.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_address_and_prefix() {
        assert_eq!(
            parse_addr_prefix("10.103.35.100/24"),
            Some(("10.103.35.100".parse().unwrap(), 24))
        );
    }

    #[test]
    fn rejects_tokens_without_a_prefix() {
        assert_eq!(parse_addr_prefix("10.103.35.100"), None);
        assert_eq!(parse_addr_prefix("10.103.35.100/abc"), None);
        assert_eq!(parse_addr_prefix("fe80::1/64"), None);
    }
}
