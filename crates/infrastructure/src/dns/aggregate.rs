//! Concurrent response aggregation.
//!
//! Receivers on every socket feed parsed messages into one aggregator;
//! the three record sections are deduplicated as they grow, and the
//! final report reads a copied-out snapshot.

use hickory_proto::op::Message;
use hickory_proto::rr::{Record, RecordType};
use std::sync::Mutex;

#[derive(Default)]
struct Sections {
    answer: Vec<Record>,
    authority: Vec<Record>,
    additional: Vec<Record>,
}

/// Collects answer/authority/additional records across all receivers.
///
/// One exclusive lock serializes ingest and snapshot; it is never held
/// across a socket operation. Each section accumulates independently and
/// deduplicates only against itself, first occurrence winning.
#[derive(Default)]
pub struct ResponseAggregator {
    sections: Mutex<Sections>,
}

impl ResponseAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one parsed response message into the sections.
    pub fn ingest(&self, message: &Message) {
        let mut sections = self.sections.lock().unwrap_or_else(|e| e.into_inner());

        append_deduped(&mut sections.answer, message.answers());
        append_deduped(&mut sections.authority, message.name_servers());
        append_deduped(&mut sections.additional, message.additionals());
    }

    /// Returns independent copies of the current sections, in
    /// (answer, authority, additional) order. The aggregator's own
    /// storage is never aliased by the result.
    pub fn snapshot(&self) -> (Vec<Record>, Vec<Record>, Vec<Record>) {
        let sections = self.sections.lock().unwrap_or_else(|e| e.into_inner());
        (
            sections.answer.clone(),
            sections.authority.clone(),
            sections.additional.clone(),
        )
    }
}

/// Appends `data` to `section`, skipping OPT pseudo-records and records
/// already present (structural equality).
fn append_deduped(section: &mut Vec<Record>, data: &[Record]) {
    for record in data {
        // OPT pseudo-records carry EDNS plumbing, not lookup results,
        // and their text rendering is unreliable.
        if record.record_type() == RecordType::OPT {
            continue;
        }

        // mDNS reuses the top bit of the class field as the
        // "unicast response" flag; stored records are class-pure.
        let mut copy = record.clone();
        copy.set_mdns_cache_flush(false);

        if !section.contains(&copy) {
            section.push(copy);
        }
    }
}
