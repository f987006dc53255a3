use crate::errors::LookupError;
use std::fmt;
use std::str::FromStr;

/// Query classes accepted on the command line. mDNS traffic is IN in
/// practice, but the wire format allows the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordClass {
    IN,
    CH,
    HS,
    NONE,
    ANY,
}

impl RecordClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordClass::IN => "IN",
            RecordClass::CH => "CH",
            RecordClass::HS => "HS",
            RecordClass::NONE => "NONE",
            RecordClass::ANY => "ANY",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordClass::IN => 1,
            RecordClass::CH => 3,
            RecordClass::HS => 4,
            RecordClass::NONE => 254,
            RecordClass::ANY => 255,
        }
    }
}

impl Default for RecordClass {
    fn default() -> Self {
        RecordClass::IN
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordClass {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IN" => Ok(RecordClass::IN),
            "CH" => Ok(RecordClass::CH),
            "HS" => Ok(RecordClass::HS),
            "NONE" => Ok(RecordClass::NONE),
            "ANY" => Ok(RecordClass::ANY),
            _ => Err(LookupError::InvalidRecordClass(s.to_string())),
        }
    }
}
