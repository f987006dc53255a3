use crate::config::Config;
use crate::lookup_request::LookupRequest;
use std::time::Duration;

/// Everything one query session needs, resolved from config plus the
/// command line. Immutable for the session's lifetime.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub request: LookupRequest,
    /// Restrict discovery to this interface name.
    pub interface: Option<String>,
    pub ipv4: bool,
    pub ipv6: bool,
    pub transmit_period: Duration,
    pub transmit_count: u32,
}

impl SessionConfig {
    pub fn new(request: LookupRequest, interface: Option<String>, config: &Config) -> Self {
        Self {
            request,
            interface,
            ipv4: config.query.ipv4,
            ipv6: config.query.ipv6,
            transmit_period: Duration::from_millis(config.query.transmit_period_ms),
            transmit_count: config.query.transmit_count,
        }
    }
}
