//! mquery Domain Layer
pub mod address_filter;
pub mod config;
pub mod errors;
pub mod interface;
pub mod lookup_request;
pub mod network_address;
pub mod record_class;
pub mod record_type;
pub mod session_config;

pub use address_filter::filter_sources;
pub use config::{CliOverrides, Config};
pub use errors::LookupError;
pub use interface::{InterfaceAddr, InterfaceId, InterfaceSelection};
pub use lookup_request::LookupRequest;
pub use network_address::{NetworkAddress, MDNS_PORT};
pub use record_class::RecordClass;
pub use record_type::RecordType;
pub use session_config::SessionConfig;
