//! Network interfaces and traffic counters.

use std::net::IpAddr;

use peekfetch_models::{Fields, Section, SectionKind, TreeItem};
use sysinfo::Networks;

use crate::format::format_bytes;

/// One interface address with its prefix length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address {
    /// IP address.
    pub addr: IpAddr,
    /// Prefix length.
    pub prefix: u8,
}

/// An interface, decoupled from sysinfo for formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interface {
    /// Interface name.
    pub name: String,
    /// MAC address, if not all zeros.
    pub mac: Option<String>,
    /// Assigned addresses.
    pub addresses: Vec<Address>,
}

/// Totals across all interfaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Traffic {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub packets_sent: u64,
    pub packets_recv: u64,
    pub errors_in: u64,
    pub errors_out: u64,
}

/// Collects the Network section.
pub fn collect() -> Section {
    let networks = Networks::new_with_refreshed_list();
    let mut interfaces = Vec::new();
    let mut traffic = Traffic::default();

    for (name, data) in networks.iter() {
        let mac = data.mac_address();
        interfaces.push(Interface {
            name: name.clone(),
            mac: (!mac.is_unspecified()).then(|| mac.to_string()),
            addresses: data
                .ip_networks()
                .iter()
                .map(|net| Address {
                    addr: net.addr,
                    prefix: net.prefix,
                })
                .collect(),
        });

        traffic.bytes_sent += data.total_transmitted();
        traffic.bytes_recv += data.total_received();
        traffic.packets_sent += data.total_packets_transmitted();
        traffic.packets_recv += data.total_packets_received();
        traffic.errors_in += data.total_errors_on_received();
        traffic.errors_out += data.total_errors_on_transmitted();
    }

    // Backed by a hash map; sort for a stable display order.
    interfaces.sort_by(|a, b| a.name.cmp(&b.name));

    build_section(&interfaces, (!interfaces.is_empty()).then_some(traffic))
}

/// Builds the Network section.
///
/// Loopback interfaces and interfaces without addresses are skipped.
pub fn build_section(interfaces: &[Interface], traffic: Option<Traffic>) -> Section {
    let mut items: Vec<TreeItem> = interfaces
        .iter()
        .filter(|iface| !iface.name.starts_with("lo") && !iface.addresses.is_empty())
        .enumerate()
        .map(|(i, iface)| TreeItem::new(format!("Interface {}", i + 1), interface_fields(iface)))
        .collect();

    if let Some(traffic) = traffic {
        items.push(TreeItem::new("Statistics", traffic_fields(&traffic)));
    }

    Section::tree(SectionKind::Network, items)
}

fn interface_fields(iface: &Interface) -> Fields {
    let mut fields = Fields::new().with("Name", iface.name.as_str());

    if let Some(mac) = &iface.mac {
        fields.insert("MAC", mac.as_str());
    }

    if let Some(v4) = iface.addresses.iter().find(|a| a.addr.is_ipv4()) {
        fields.insert("IPv4", v4.addr.to_string());
        fields.insert("Subnet", format!("/{}", v4.prefix));
    }

    if let Some(v6) = iface
        .addresses
        .iter()
        .find(|a| a.addr.is_ipv6() && !a.addr.is_loopback())
    {
        fields.insert("IPv6", v6.addr.to_string());
    }

    fields
}

fn traffic_fields(traffic: &Traffic) -> Fields {
    let mut fields = Fields::new()
        .with("Total Bytes Sent", format_bytes(traffic.bytes_sent))
        .with("Total Bytes Recv", format_bytes(traffic.bytes_recv))
        .with("Total Packets Sent", traffic.packets_sent.to_string())
        .with("Total Packets Recv", traffic.packets_recv.to_string());

    if traffic.errors_in > 0 || traffic.errors_out > 0 {
        fields.insert(
            "Errors",
            format!("In: {}, Out: {}", traffic.errors_in, traffic.errors_out),
        );
    }

    fields
}
