//! Mapping between `mquery_domain` record types/classes and their
//! `hickory_proto` counterparts. Lives in one place so the domain crate
//! stays free of the DNS library.

use hickory_proto::rr::{DNSClass, RecordType as HickoryRecordType};
use mquery_domain::{RecordClass, RecordType};

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building queries)
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::ANY => HickoryRecordType::ANY,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::HINFO => HickoryRecordType::HINFO,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::NSEC => HickoryRecordType::NSEC,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::SRV => HickoryRecordType::SRV,
            RecordType::TXT => HickoryRecordType::TXT,
        }
    }

    /// Convert domain RecordClass → hickory DNSClass
    pub fn class_to_hickory(record_class: &RecordClass) -> DNSClass {
        match record_class {
            RecordClass::IN => DNSClass::IN,
            RecordClass::CH => DNSClass::CH,
            RecordClass::HS => DNSClass::HS,
            RecordClass::NONE => DNSClass::NONE,
            RecordClass::ANY => DNSClass::ANY,
        }
    }
}
