#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType};
use hickory_proto::rr::rdata::{A, OPT, TXT};
use hickory_proto::rr::{DNSClass, Name, RData, Record};
use std::collections::HashMap;
use std::str::FromStr;

pub fn a_record(name: &str, ip: [u8; 4]) -> Record {
    let name = Name::from_str(name).unwrap();
    let mut record = Record::from_rdata(name, 120, RData::A(A::new(ip[0], ip[1], ip[2], ip[3])));
    record.set_dns_class(DNSClass::IN);
    record
}

pub fn txt_record(name: &str, value: &str) -> Record {
    let name = Name::from_str(name).unwrap();
    let mut record = Record::from_rdata(name, 120, RData::TXT(TXT::new(vec![value.to_string()])));
    record.set_dns_class(DNSClass::IN);
    record
}

pub fn opt_record() -> Record {
    Record::from_rdata(Name::root(), 0, RData::OPT(OPT::new(HashMap::new())))
}

/// Sets the mDNS cache-flush/unicast-response overlay bit.
pub fn cache_flush(mut record: Record) -> Record {
    record.set_mdns_cache_flush(true);
    record
}

pub fn response(answer: &[Record], authority: &[Record], additional: &[Record]) -> Message {
    let mut message = Message::new();
    message.set_message_type(MessageType::Response);
    for record in answer {
        message.add_answer(record.clone());
    }
    for record in authority {
        message.add_name_server(record.clone());
    }
    for record in additional {
        message.add_additional(record.clone());
    }
    message
}

/// Serializes and re-parses, so records carry exactly what the wire
/// carries.
pub fn roundtrip(message: &Message) -> Message {
    Message::from_vec(&message.to_vec().unwrap()).unwrap()
}
