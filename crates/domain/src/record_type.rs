use crate::errors::LookupError;
use std::fmt;
use std::str::FromStr;

/// Query types accepted on the command line.
///
/// Trimmed to what an mDNS lookup can usefully ask for: the basic record
/// set, the service-discovery types (PTR/SRV/TXT), NSEC (mDNS negative
/// responses), HINFO, and ANY (the service-enumeration wildcard).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    ANY,
    CNAME,
    HINFO,
    MX,
    NS,
    NSEC,
    PTR,
    SOA,
    SRV,
    TXT,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::ANY => "ANY",
            RecordType::CNAME => "CNAME",
            RecordType::HINFO => "HINFO",
            RecordType::MX => "MX",
            RecordType::NS => "NS",
            RecordType::NSEC => "NSEC",
            RecordType::PTR => "PTR",
            RecordType::SOA => "SOA",
            RecordType::SRV => "SRV",
            RecordType::TXT => "TXT",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::PTR => 12,
            RecordType::HINFO => 13,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
            RecordType::SRV => 33,
            RecordType::NSEC => 47,
            RecordType::ANY => 255,
        }
    }
}

impl Default for RecordType {
    fn default() -> Self {
        RecordType::A
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "ANY" => Ok(RecordType::ANY),
            "CNAME" => Ok(RecordType::CNAME),
            "HINFO" => Ok(RecordType::HINFO),
            "MX" => Ok(RecordType::MX),
            "NS" => Ok(RecordType::NS),
            "NSEC" => Ok(RecordType::NSEC),
            "PTR" => Ok(RecordType::PTR),
            "SOA" => Ok(RecordType::SOA),
            "SRV" => Ok(RecordType::SRV),
            "TXT" => Ok(RecordType::TXT),
            _ => Err(LookupError::InvalidRecordType(s.to_string())),
        }
    }
}
