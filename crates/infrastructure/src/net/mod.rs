pub mod ifaddrs;
pub mod origin;
pub mod socket;

pub use ifaddrs::system_interface_addrs;
pub use origin::{HostOriginFilter, OriginFilter};
pub use socket::{bind_multicast_v4, bind_multicast_v6, bind_source_socket};
