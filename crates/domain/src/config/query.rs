use serde::{Deserialize, Serialize};

/// Defaults for the query session. Family flags both default to off here;
/// [`Config::load`](super::Config::load) turns IPv4 on when nothing else
/// enabled a family.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryDefaults {
    #[serde(default)]
    pub ipv4: bool,

    #[serde(default)]
    pub ipv6: bool,

    /// Interval between query retransmissions, in milliseconds.
    #[serde(default = "default_transmit_period_ms")]
    pub transmit_period_ms: u64,

    /// How many times the query is transmitted before the session ends.
    #[serde(default = "default_transmit_count")]
    pub transmit_count: u32,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            ipv4: false,
            ipv6: false,
            transmit_period_ms: default_transmit_period_ms(),
            transmit_count: default_transmit_count(),
        }
    }
}

fn default_transmit_period_ms() -> u64 {
    250
}

fn default_transmit_count() -> u32 {
    10
}
