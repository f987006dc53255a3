//! mDNS socket setup.
//!
//! All sockets are built with `socket2` so address reuse can be enabled
//! before bind: several mDNS processes may share port 5353 on one host,
//! and one mquery run binds it once per source address.

use mquery_domain::{InterfaceId, LookupError, NetworkAddress, MDNS_PORT};
use socket2::{Domain, Protocol, Socket, Type};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};
use tokio::net::UdpSocket;

/// The IPv4 mDNS group.
pub const MDNS_GROUP_V4: Ipv4Addr = Ipv4Addr::new(224, 0, 0, 251);

/// The IPv6 mDNS group, link scope.
pub const MDNS_GROUP_V6: Ipv6Addr = Ipv6Addr::new(0xff02, 0, 0, 0, 0, 0, 0, 0xfb);

/// Opens the unicast query socket for one source address.
///
/// Bound to `ip:5353`, reuse enabled, and with the multicast egress
/// interface pinned to the address's own interface so queries leave
/// through the interface that owns the source.
pub fn bind_source_socket(source: &NetworkAddress) -> Result<UdpSocket, LookupError> {
    let bind_addr = source.socket_addr();

    let setup = || -> std::io::Result<UdpSocket> {
        let socket = new_reuse_socket(&bind_addr)?;
        socket.bind(&bind_addr.into())?;

        match source.ip {
            IpAddr::V4(ip) => socket.set_multicast_if_v4(&ip)?,
            IpAddr::V6(_) => socket.set_multicast_if_v6(source.scope_id)?,
        }

        into_tokio(socket)
    };

    setup().map_err(|e| LookupError::SocketSetup {
        address: source.to_string(),
        reason: e.to_string(),
    })
}

/// Opens the IPv4 multicast listener for one interface and joins the
/// mDNS group on it, addressed by one of the interface's own addresses.
///
/// Group-joined sockets bind the wildcard address; binding the group
/// address directly is not portable.
pub fn bind_multicast_v4(iface: &InterfaceId, join_ip: Ipv4Addr) -> Result<UdpSocket, LookupError> {
    let setup = || -> std::io::Result<UdpSocket> {
        let bind_addr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, MDNS_PORT));
        let socket = new_reuse_socket(&bind_addr)?;
        socket.bind(&bind_addr.into())?;
        socket.join_multicast_v4(&MDNS_GROUP_V4, &join_ip)?;
        into_tokio(socket)
    };

    setup().map_err(|e| LookupError::SocketSetup {
        address: format!("{}:{}", iface.name, MDNS_PORT),
        reason: e.to_string(),
    })
}

/// Opens the IPv6 multicast listener for one interface; the group join
/// is addressed by interface index.
pub fn bind_multicast_v6(iface: &InterfaceId) -> Result<UdpSocket, LookupError> {
    let setup = || -> std::io::Result<UdpSocket> {
        let bind_addr =
            SocketAddr::V6(SocketAddrV6::new(Ipv6Addr::UNSPECIFIED, MDNS_PORT, 0, 0));
        let socket = new_reuse_socket(&bind_addr)?;
        socket.set_only_v6(true)?;
        socket.bind(&bind_addr.into())?;
        socket.join_multicast_v6(&MDNS_GROUP_V6, iface.index)?;
        into_tokio(socket)
    };

    setup().map_err(|e| LookupError::SocketSetup {
        address: format!("{}:{}", iface.name, MDNS_PORT),
        reason: e.to_string(),
    })
}

/// The multicast group-and-port a source socket transmits to. IPv6
/// targets carry the source's scope id so the kernel picks the right
/// link instead of a default zone.
pub fn multicast_target(source: &NetworkAddress) -> SocketAddr {
    match source.ip {
        IpAddr::V4(_) => SocketAddr::V4(SocketAddrV4::new(MDNS_GROUP_V4, MDNS_PORT)),
        IpAddr::V6(_) => SocketAddr::V6(SocketAddrV6::new(
            MDNS_GROUP_V6,
            MDNS_PORT,
            0,
            source.scope_id,
        )),
    }
}

fn new_reuse_socket(addr: &SocketAddr) -> std::io::Result<Socket> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    Ok(socket)
}

fn into_tokio(socket: Socket) -> std::io::Result<UdpSocket> {
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    UdpSocket::from_std(std_socket)
}
