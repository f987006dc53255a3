//! mquery Infrastructure Layer
//!
//! Everything that touches the outside world: interface enumeration,
//! socket setup, DNS message handling via `hickory-proto`, the query
//! session itself, and the dig-style report renderer.

pub mod dns;
pub mod net;
pub mod report;
