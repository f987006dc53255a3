//! The aggregation-to-report pipeline, end to end, without sockets:
//! wire bytes in, dig-style text out.

use hickory_proto::op::{Message, MessageType, Query};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType};
use mquery_infrastructure::dns::ResponseAggregator;
use mquery_infrastructure::report::render;
use std::str::FromStr;

fn response_bytes(host: &str, ip: [u8; 4], cache_flush: bool) -> Vec<u8> {
    let name = Name::from_str(host).unwrap();
    let mut record = Record::from_rdata(name, 120, RData::A(A::new(ip[0], ip[1], ip[2], ip[3])));
    record.set_dns_class(DNSClass::IN);
    record.set_mdns_cache_flush(cache_flush);

    let mut message = Message::new();
    message
        .set_message_type(MessageType::Response)
        .add_answer(record);
    message.to_vec().unwrap()
}

#[test]
fn responses_flow_into_a_rendered_report() {
    let aggregator = ResponseAggregator::new();

    // The same datagram arriving through two sockets, one copy with the
    // unicast-response bit set on the wire.
    let plain = response_bytes("printer.local.", [192, 0, 2, 1], false);
    let flagged = response_bytes("printer.local.", [192, 0, 2, 1], true);
    aggregator.ingest(&Message::from_vec(&plain).unwrap());
    aggregator.ingest(&Message::from_vec(&flagged).unwrap());

    let (answer, authority, additional) = aggregator.snapshot();
    assert_eq!(answer.len(), 1);
    assert!(!answer[0].mdns_cache_flush());

    let question = Query::query(Name::from_str("printer.local.").unwrap(), RecordType::A);
    let mut out = Vec::new();
    render(
        &mut out,
        std::slice::from_ref(&question),
        &answer,
        &authority,
        &additional,
    )
    .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with(";; QUESTION PSEUDOSECTION:\n;printer.local.\tIN\tA\n"));
    assert!(text.contains(";; ANSWER SECTION:\n"));
    assert!(text.contains("printer.local."));
    assert!(text.contains("192.0.2.1"));
    assert!(!text.contains(";; AUTHORITY SECTION:"));
    assert!(!text.contains(";; ADDITIONAL SECTION:"));
    assert!(text.ends_with("\n\n"));
}

#[test]
fn empty_lookup_renders_nothing() {
    let aggregator = ResponseAggregator::new();
    let (answer, authority, additional) = aggregator.snapshot();

    let mut out = Vec::new();
    render(&mut out, &[], &answer, &authority, &additional).unwrap();
    assert!(out.is_empty());
}
