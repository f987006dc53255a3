//! Live interface enumeration.
//!
//! Converts the `if-addrs` view of the system into domain
//! [`InterfaceAddr`] entries, which is all the filtering logic in
//! `mquery-domain` wants to see.

use mquery_domain::{InterfaceAddr, LookupError};

/// Returns one entry per (interface, address) pair currently configured
/// on the host. Interfaces without an index (rare, platform-dependent)
/// are reported with index 0, which disables scoped IPv6 binds on them.
pub fn system_interface_addrs() -> Result<Vec<InterfaceAddr>, LookupError> {
    let interfaces = if_addrs::get_if_addrs()
        .map_err(|e| LookupError::InterfaceEnumeration(e.to_string()))?;

    Ok(interfaces
        .into_iter()
        .map(|iface| {
            let index = iface.index.unwrap_or(0);
            InterfaceAddr::new(iface.name.clone(), index, iface.ip())
        })
        .collect())
}
