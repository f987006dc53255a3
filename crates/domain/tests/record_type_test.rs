use mquery_domain::{LookupError, RecordClass, RecordType};
use std::str::FromStr;

#[test]
fn record_type_parses_case_insensitively() {
    assert_eq!(RecordType::from_str("a").unwrap(), RecordType::A);
    assert_eq!(RecordType::from_str("ptr").unwrap(), RecordType::PTR);
    assert_eq!(RecordType::from_str("Srv").unwrap(), RecordType::SRV);
    assert_eq!(RecordType::from_str("ANY").unwrap(), RecordType::ANY);
}

#[test]
fn record_type_rejects_unknown() {
    let err = RecordType::from_str("AXFR").unwrap_err();
    assert!(matches!(err, LookupError::InvalidRecordType(s) if s == "AXFR"));
}

#[test]
fn record_type_wire_codes() {
    assert_eq!(RecordType::A.to_u16(), 1);
    assert_eq!(RecordType::PTR.to_u16(), 12);
    assert_eq!(RecordType::TXT.to_u16(), 16);
    assert_eq!(RecordType::AAAA.to_u16(), 28);
    assert_eq!(RecordType::SRV.to_u16(), 33);
    assert_eq!(RecordType::NSEC.to_u16(), 47);
    assert_eq!(RecordType::ANY.to_u16(), 255);
}

#[test]
fn record_type_display_roundtrip() {
    for ty in [
        RecordType::A,
        RecordType::AAAA,
        RecordType::ANY,
        RecordType::CNAME,
        RecordType::HINFO,
        RecordType::MX,
        RecordType::NS,
        RecordType::NSEC,
        RecordType::PTR,
        RecordType::SOA,
        RecordType::SRV,
        RecordType::TXT,
    ] {
        assert_eq!(RecordType::from_str(&ty.to_string()).unwrap(), ty);
    }
}

#[test]
fn record_class_parses_and_defaults() {
    assert_eq!(RecordClass::default(), RecordClass::IN);
    assert_eq!(RecordClass::from_str("in").unwrap(), RecordClass::IN);
    assert_eq!(RecordClass::from_str("ch").unwrap(), RecordClass::CH);
    assert_eq!(RecordClass::from_str("ANY").unwrap(), RecordClass::ANY);
    assert!(matches!(
        RecordClass::from_str("XX"),
        Err(LookupError::InvalidRecordClass(_))
    ));
}

#[test]
fn record_class_wire_codes() {
    assert_eq!(RecordClass::IN.to_u16(), 1);
    assert_eq!(RecordClass::CH.to_u16(), 3);
    assert_eq!(RecordClass::HS.to_u16(), 4);
    assert_eq!(RecordClass::NONE.to_u16(), 254);
    assert_eq!(RecordClass::ANY.to_u16(), 255);
}
