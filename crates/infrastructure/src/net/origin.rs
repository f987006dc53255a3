//! Self-message filtering.
//!
//! Multicast loopback delivers our own queries back to us; the receive
//! path drops any datagram whose source address belongs to this host.

use std::net::IpAddr;

/// Decides whether a datagram source address is one of ours.
pub trait OriginFilter: Send + Sync {
    fn is_local(&self, addr: IpAddr) -> bool;
}

/// Checks the source against the host's current interface addresses.
pub struct HostOriginFilter;

impl OriginFilter for HostOriginFilter {
    fn is_local(&self, addr: IpAddr) -> bool {
        if addr.is_loopback() {
            return true;
        }

        // When enumeration fails we can't tell; claiming "remote" risks
        // processing a self-sent packet, claiming "local" would silently
        // drop genuine responses.
        match if_addrs::get_if_addrs() {
            Ok(interfaces) => interfaces.iter().any(|iface| iface.ip() == addr),
            Err(_) => false,
        }
    }
}
