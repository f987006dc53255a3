//! Session-level tests. Anything that needs a real multicast-capable
//! network is `#[ignore]`d; the rest drives the session far enough to
//! observe its error paths without touching the wire.

use mquery_domain::config::{CliOverrides, Config};
use mquery_domain::{LookupError, LookupRequest, RecordClass, RecordType, SessionConfig};
use mquery_infrastructure::dns::{QuerySession, ResponseAggregator};
use std::sync::Arc;
use std::time::{Duration, Instant};

fn session_config(
    domain: &str,
    interface: Option<String>,
    period_ms: u64,
    count: u32,
) -> SessionConfig {
    let overrides = CliOverrides {
        transmit_period_ms: Some(period_ms),
        transmit_count: Some(count),
        ..Default::default()
    };
    let config = Config::load(None, overrides).unwrap();
    let request = LookupRequest::new(domain, RecordType::A, RecordClass::IN);
    SessionConfig::new(request, interface, &config)
}

#[tokio::test]
async fn unknown_interface_aborts_the_session() {
    let config = session_config("foo", Some("mq-missing0".to_string()), 50, 1);
    let aggregator = Arc::new(ResponseAggregator::new());
    let session = QuerySession::new(config, aggregator);

    match session.run().await {
        Err(LookupError::UnknownInterface(name)) => assert_eq!(name, "mq-missing0"),
        other => panic!("expected UnknownInterface, got {other:?}"),
    }
}

#[tokio::test]
async fn failed_session_leaves_sections_empty() {
    let config = session_config("foo", Some("mq-missing0".to_string()), 50, 1);
    let aggregator = Arc::new(ResponseAggregator::new());
    let session = QuerySession::new(config, aggregator.clone());

    let _ = session.run().await;

    let (answer, authority, additional) = aggregator.snapshot();
    assert!(answer.is_empty());
    assert!(authority.is_empty());
    assert!(additional.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires a multicast-capable network interface"]
async fn full_session_transmits_and_returns_on_time() {
    let config = session_config("mquery-e2e-probe", None, 100, 3);
    let aggregator = Arc::new(ResponseAggregator::new());
    let session = QuerySession::new(config, aggregator);

    let started = Instant::now();
    let question = session.run().await.unwrap();
    let elapsed = started.elapsed();

    // Qualified single label, and a session bounded by count × period
    // plus teardown slack.
    assert_eq!(question.name().to_string(), "mquery-e2e-probe.local.");
    assert!(elapsed >= Duration::from_millis(300), "returned after {elapsed:?}");
    assert!(elapsed < Duration::from_secs(5), "took {elapsed:?}");
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires a multicast-capable network interface"]
async fn sessions_are_repeatable_within_one_process() {
    let aggregator = Arc::new(ResponseAggregator::new());

    for _ in 0..2 {
        let config = session_config("mquery-e2e-probe", None, 50, 1);
        let session = QuerySession::new(config, aggregator.clone());
        session.run().await.unwrap();
    }
}
