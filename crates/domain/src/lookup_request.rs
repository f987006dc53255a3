use crate::record_class::RecordClass;
use crate::record_type::RecordType;
use std::sync::Arc;

/// The single (name, type, class) question a session asks.
#[derive(Debug, Clone)]
pub struct LookupRequest {
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub record_class: RecordClass,
}

impl LookupRequest {
    pub fn new(
        domain: impl Into<Arc<str>>,
        record_type: RecordType,
        record_class: RecordClass,
    ) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            record_class,
        }
    }
}
