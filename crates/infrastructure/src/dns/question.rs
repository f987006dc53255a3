//! Query message construction.
//!
//! Builds the single question a session transmits and serializes it to
//! wire format once, up front.

use super::record_map::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::Name;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use mquery_domain::{LookupError, LookupRequest};
use std::str::FromStr;

/// Builds mDNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build the query message for `request` and serialize it.
    ///
    /// The question name is the qualified domain (see [`qualify_domain`]),
    /// the id is random, and recursion-desired stays clear — mDNS never
    /// recurses. Returns the query for later report rendering together
    /// with the bytes to transmit.
    pub fn build(request: &LookupRequest) -> Result<(Query, Vec<u8>), LookupError> {
        let fqdn = qualify_domain(&request.domain);
        let name = Name::from_str(&fqdn)
            .map_err(|_| LookupError::InvalidDomainName(request.domain.to_string()))?;

        let mut query = Query::query(name, RecordTypeMapper::to_hickory(&request.record_type));
        query.set_query_class(RecordTypeMapper::class_to_hickory(&request.record_class));

        let mut message = Message::new();
        message
            .set_id(fastrand::u16(..))
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(false)
            .add_query(query.clone());

        let bytes = Self::serialize(&message, &request.domain)?;
        Ok((query, bytes))
    }

    fn serialize(message: &Message, domain: &str) -> Result<Vec<u8>, LookupError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message
            .emit(&mut encoder)
            .map_err(|e| LookupError::QuestionSerialization {
                domain: domain.to_string(),
                reason: e.to_string(),
            })?;

        Ok(buf)
    }
}

/// Qualifies a user-supplied domain for mDNS.
///
/// Single-label names get the `.local.` suffix; multi-label names only
/// gain the root dot. The trailing dot is ignored when counting labels,
/// so `"foo."` qualifies the same way `"foo"` does.
pub fn qualify_domain(domain: &str) -> String {
    let trimmed = domain.strip_suffix('.').unwrap_or(domain);
    let labels = trimmed.split('.').filter(|label| !label.is_empty()).count();

    if labels < 2 {
        format!("{trimmed}.local.")
    } else {
        format!("{trimmed}.")
    }
}
