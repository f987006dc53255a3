use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum LookupError {
    #[error("Can't get list of network interfaces: {0}")]
    InterfaceEnumeration(String),

    #[error("Unknown network interface: \"{0}\"")]
    UnknownInterface(String),

    #[error("No local IP addresses found")]
    NoUsableAddress,

    #[error("Failed to open socket on {address}: {reason}")]
    SocketSetup { address: String, reason: String },

    #[error("Invalid domain name: \"{0}\"")]
    InvalidDomainName(String),

    #[error("{domain}: failed to serialize query: {reason}")]
    QuestionSerialization { domain: String, reason: String },

    #[error("invalid type: \"{0}\"")]
    InvalidRecordType(String),

    #[error("invalid class: \"{0}\"")]
    InvalidRecordClass(String),
}
