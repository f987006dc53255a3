use std::fmt;
use std::net::{IpAddr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};

/// Port all mDNS traffic uses, queries and responses alike.
pub const MDNS_PORT: u16 = 5353;

/// A local unicast address usable as a query source, tagged with the
/// interface that owns it. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkAddress {
    pub ip: IpAddr,
    pub port: u16,
    /// Owning interface name, kept for diagnostics.
    pub zone: Option<String>,
    /// Owning interface index; the bind scope for link-local IPv6.
    pub scope_id: u32,
}

impl NetworkAddress {
    pub fn new(ip: IpAddr, zone: impl Into<String>, scope_id: u32) -> Self {
        Self {
            ip,
            port: MDNS_PORT,
            zone: Some(zone.into()),
            scope_id,
        }
    }

    pub fn is_ipv4(&self) -> bool {
        self.ip.is_ipv4()
    }

    /// The address this source binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        match self.ip {
            IpAddr::V4(ip) => SocketAddr::V4(SocketAddrV4::new(ip, self.port)),
            IpAddr::V6(ip) => {
                SocketAddr::V6(SocketAddrV6::new(ip, self.port, 0, self.scope_id))
            }
        }
    }
}

impl fmt::Display for NetworkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.zone {
            Some(zone) => write!(f, "{}@{}", self.ip, zone),
            None => write!(f, "{}", self.ip),
        }
    }
}

/// fe80::/10, the only IPv6 scope mDNS sources may use.
pub fn is_link_local_v6(ip: &Ipv6Addr) -> bool {
    (ip.segments()[0] & 0xffc0) == 0xfe80
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn socket_addr_carries_scope_for_v6() {
        let addr = NetworkAddress::new("fe80::1".parse::<IpAddr>().unwrap(), "eth0", 7);
        match addr.socket_addr() {
            SocketAddr::V6(v6) => {
                assert_eq!(v6.scope_id(), 7);
                assert_eq!(v6.port(), MDNS_PORT);
            }
            SocketAddr::V4(_) => panic!("expected a v6 socket address"),
        }
    }

    #[test]
    fn socket_addr_v4_ignores_scope() {
        let addr = NetworkAddress::new(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 10)), "eth0", 7);
        assert_eq!(addr.socket_addr().port(), MDNS_PORT);
        assert!(addr.is_ipv4());
    }

    #[test]
    fn display_includes_zone() {
        let addr = NetworkAddress::new(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 10)), "wlan0", 3);
        assert_eq!(addr.to_string(), "192.0.2.10@wlan0");
    }

    #[test]
    fn link_local_detection() {
        assert!(is_link_local_v6(&"fe80::1".parse().unwrap()));
        assert!(is_link_local_v6(&"febf::1".parse().unwrap()));
        assert!(!is_link_local_v6(&"fec0::1".parse().unwrap()));
        assert!(!is_link_local_v6(&"2001:db8::1".parse().unwrap()));
        assert!(!is_link_local_v6(&"::1".parse().unwrap()));
    }
}
