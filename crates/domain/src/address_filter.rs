//! Source address and interface filtering.
//!
//! Decides which local addresses may originate mDNS queries and which
//! interfaces get a multicast listener. Pure logic over
//! [`InterfaceAddr`] entries; enumeration lives in the infrastructure
//! crate.

use crate::errors::LookupError;
use crate::interface::{InterfaceAddr, InterfaceId, InterfaceSelection};
use crate::network_address::{is_link_local_v6, NetworkAddress};
use std::net::IpAddr;

/// Filters the live interface-address list down to usable query sources.
///
/// Rules:
/// - `interface`, when set, restricts to that interface by name; no match
///   is an error.
/// - Loopback addresses are rejected unconditionally.
/// - IPv4 addresses are accepted as-is; IPv6 only when link-local.
/// - `allow_v4` / `allow_v6` gate whole families.
/// - An interface enters the selection at most once per family, and only
///   if one of its addresses survived.
///
/// An empty result is an error: the session has nothing to send from.
pub fn filter_sources(
    addrs: &[InterfaceAddr],
    interface: Option<&str>,
    allow_v4: bool,
    allow_v6: bool,
) -> Result<(Vec<NetworkAddress>, InterfaceSelection), LookupError> {
    let candidates: Vec<&InterfaceAddr> = match interface {
        Some(name) => {
            let matched: Vec<_> = addrs.iter().filter(|a| a.name == name).collect();
            if matched.is_empty() {
                return Err(LookupError::UnknownInterface(name.to_string()));
            }
            matched
        }
        None => addrs.iter().collect(),
    };

    let mut sources = Vec::new();
    let mut selection = InterfaceSelection::default();

    for entry in candidates {
        if !usable(entry.ip, allow_v4, allow_v6) {
            continue;
        }

        sources.push(NetworkAddress::new(
            entry.ip,
            entry.name.clone(),
            entry.index,
        ));

        let id = InterfaceId {
            name: entry.name.clone(),
            index: entry.index,
        };
        let family = if entry.ip.is_ipv4() {
            &mut selection.v4
        } else {
            &mut selection.v6
        };
        if !family.contains(&id) {
            family.push(id);
        }
    }

    if sources.is_empty() {
        return Err(LookupError::NoUsableAddress);
    }

    Ok((sources, selection))
}

fn usable(ip: IpAddr, allow_v4: bool, allow_v6: bool) -> bool {
    if ip.is_loopback() {
        // Loopback addresses cannot carry mDNS.
        return false;
    }
    match ip {
        IpAddr::V4(_) => allow_v4,
        IpAddr::V6(v6) => allow_v6 && is_link_local_v6(&v6),
    }
}
