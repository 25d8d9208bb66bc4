use pnet::datalink::{self, NetworkInterface};
use pnet::ipnetwork::IpNetwork;
use pnet::util::MacAddr;
use tracing::debug;

/// One configurable network interface, frozen at selection time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adapter {
    /// OS interface index.
    pub index: u32,
    /// System name ("eth0", or a GUID string on Windows).
    pub name: String,
    /// Human-readable name, where the OS provides one.
    pub description: String,
    pub mac: Option<MacAddr>,
    /// Networks currently bound to the interface.
    pub ips: Vec<IpNetwork>,
}

impl Adapter {
    pub fn from_interface(interface: &NetworkInterface) -> Self {
        Self {
            index: interface.index,
            name: interface.name.clone(),
            description: interface.description.clone(),
            mac: interface.mac,
            ips: interface.ips.clone(),
        }
    }

    /// The name worth showing to an operator.
    pub fn display_name(&self) -> &str {
        if self.description.is_empty() {
            &self.name
        } else {
            &self.description
        }
    }
}

/// Enumerates the adapters that can take IPv4 configuration right now.
///
/// Keeps interfaces that are operationally up and not loopback, in OS
/// order. An interface without addresses still qualifies; assigning to a
/// blank adapter is the common case here.
pub fn active_adapters() -> anyhow::Result<Vec<Adapter>> {
    let adapters: Vec<Adapter> = datalink::interfaces()
        .iter()
        .filter(|interface| is_configurable(interface))
        .map(Adapter::from_interface)
        .collect();

    debug!("Identified {} configurable adapter(s)", adapters.len());
    Ok(adapters)
}

fn is_configurable(interface: &NetworkInterface) -> bool {
    interface.is_up() && !interface.is_loopback()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    const IFF_UP: u32 = 1;
    const IFF_BROADCAST: u32 = 1 << 1;
    const IFF_LOOPBACK: u32 = 1 << 3;

    fn create_mock_interface(
        name: &str,
        description: &str,
        ips: Vec<IpNetwork>,
        flags: u32,
    ) -> NetworkInterface {
        NetworkInterface {
            name: name.to_string(),
            description: description.to_string(),
            index: 11,
            mac: Some(MacAddr(0x1, 0x2, 0x3, 0x4, 0x5, 0x6)),
            ips,
            flags,
        }
    }

    #[test]
    fn up_interface_is_configurable() {
        let interface =
            create_mock_interface("eth0", "", Vec::new(), IFF_UP | IFF_BROADCAST);
        assert!(is_configurable(&interface));
    }

    #[test]
    fn down_interface_is_not_configurable() {
        let interface = create_mock_interface("eth1", "", Vec::new(), IFF_BROADCAST);
        assert!(!is_configurable(&interface));
    }

    #[test]
    fn loopback_interface_is_not_configurable() {
        let interface =
            create_mock_interface("lo", "", Vec::new(), IFF_UP | IFF_LOOPBACK);
        assert!(!is_configurable(&interface));
    }

    #[test]
    fn interface_without_addresses_is_still_configurable() {
        let interface = create_mock_interface("eth2", "", Vec::new(), IFF_UP);
        assert!(is_configurable(&interface));
    }

    #[test]
    fn display_name_prefers_the_description() {
        let gui_named = create_mock_interface(
            "{9CE9F9F0-0000-0000-0000-000000000001}",
            "Ethernet 2",
            Vec::new(),
            IFF_UP,
        );
        assert_eq!(Adapter::from_interface(&gui_named).display_name(), "Ethernet 2");

        let bare = create_mock_interface("eth0", "", Vec::new(), IFF_UP);
        assert_eq!(Adapter::from_interface(&bare).display_name(), "eth0");
    }
}
