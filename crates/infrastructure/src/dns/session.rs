//! The query session.
//!
//! Owns the whole lifecycle of one mDNS lookup: source/interface
//! discovery, socket setup, one receiver task per socket, the
//! fixed-count retransmit loop, and deterministic teardown.

use crate::dns::aggregate::ResponseAggregator;
use crate::dns::question::MessageBuilder;
use crate::net::origin::{HostOriginFilter, OriginFilter};
use crate::net::socket::{
    bind_multicast_v4, bind_multicast_v6, bind_source_socket, multicast_target,
};
use crate::net::system_interface_addrs;
use hickory_proto::op::{Message, Query};
use mquery_domain::{filter_sources, LookupError, SessionConfig};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// One mDNS lookup session.
///
/// The aggregator is supplied by the caller, so the collected sections
/// outlive the session and several sessions can share one process.
pub struct QuerySession {
    config: SessionConfig,
    aggregator: Arc<ResponseAggregator>,
    origin: Arc<dyn OriginFilter>,
}

impl QuerySession {
    pub fn new(config: SessionConfig, aggregator: Arc<ResponseAggregator>) -> Self {
        Self {
            config,
            aggregator,
            origin: Arc::new(HostOriginFilter),
        }
    }

    /// Replaces the host origin filter; tests inject stubs here.
    pub fn with_origin_filter(mut self, origin: Arc<dyn OriginFilter>) -> Self {
        self.origin = origin;
        self
    }

    /// Runs the session to completion and returns the question that was
    /// transmitted, for report rendering.
    ///
    /// Receivers are running before the first transmission, so no
    /// response can be lost to a send/listen race. The session length is
    /// `transmit_count × transmit_period` plus teardown.
    pub async fn run(&self) -> Result<Query, LookupError> {
        let addrs = system_interface_addrs()?;
        let (sources, selection) = filter_sources(
            &addrs,
            self.config.interface.as_deref(),
            self.config.ipv4,
            self.config.ipv6,
        )?;

        for source in &sources {
            debug!(address = %source, "using local IP address");
        }
        for iface in &selection.v4 {
            debug!(interface = %iface.name, "using IPv4 interface");
        }
        for iface in &selection.v6 {
            debug!(interface = %iface.name, "using IPv6 interface");
        }

        // One unicast socket per source address; these also transmit.
        let mut query_sockets = Vec::with_capacity(sources.len());
        for source in &sources {
            let socket = Arc::new(bind_source_socket(source)?);
            query_sockets.push((socket, multicast_target(source)));
        }

        // One multicast listener per selected interface.
        let mut listen_sockets = Vec::new();
        for iface in &selection.v4 {
            // The selection only contains interfaces that contributed a
            // source of the matching family.
            let join_ip = sources.iter().find_map(|s| match s.ip {
                IpAddr::V4(ip) if s.scope_id == iface.index => Some(ip),
                _ => None,
            });
            if let Some(join_ip) = join_ip {
                listen_sockets.push(Arc::new(bind_multicast_v4(iface, join_ip)?));
            }
        }
        for iface in &selection.v6 {
            listen_sockets.push(Arc::new(bind_multicast_v6(iface)?));
        }

        // Receivers start before the first packet goes out.
        let token = CancellationToken::new();
        let mut receivers = JoinSet::new();
        for (socket, _) in &query_sockets {
            self.spawn_receiver(&mut receivers, socket.clone(), token.clone());
        }
        for socket in &listen_sockets {
            self.spawn_receiver(&mut receivers, socket.clone(), token.clone());
        }

        let built = MessageBuilder::build(&self.config.request);
        let (query, payload) = match built {
            Ok(pair) => pair,
            Err(e) => {
                token.cancel();
                while receivers.join_next().await.is_some() {}
                return Err(e);
            }
        };

        transmit_rounds(
            &query_sockets,
            &payload,
            self.config.transmit_count,
            self.config.transmit_period,
        )
        .await;

        // Cancellation is the receivers' only termination signal; it
        // must precede the join-wait.
        token.cancel();
        while receivers.join_next().await.is_some() {}

        Ok(query)
    }

    fn spawn_receiver(
        &self,
        receivers: &mut JoinSet<()>,
        socket: Arc<UdpSocket>,
        token: CancellationToken,
    ) {
        let aggregator = self.aggregator.clone();
        let origin = self.origin.clone();
        receivers.spawn(async move {
            receive_loop(socket, aggregator, origin, token).await;
        });
    }
}

/// Repeats the serialized query on every unicast socket, `count` rounds
/// with a `period` pause after each (including the last, so the receive
/// window stays open one full period past the final transmission).
async fn transmit_rounds(
    targets: &[(Arc<UdpSocket>, SocketAddr)],
    payload: &[u8],
    count: u32,
    period: Duration,
) {
    for _ in 0..count {
        for (socket, target) in targets {
            if let Err(e) = socket.send_to(payload, *target).await {
                debug!(target = %target, error = %e, "query transmit failed");
            }
        }
        tokio::time::sleep(period).await;
    }
}

/// Per-socket receiver: parses inbound datagrams and feeds them to the
/// aggregator until cancelled. Self-sent datagrams and malformed
/// messages are dropped; transient receive errors never end the loop.
async fn receive_loop(
    socket: Arc<UdpSocket>,
    aggregator: Arc<ResponseAggregator>,
    origin: Arc<dyn OriginFilter>,
    token: CancellationToken,
) {
    let mut buf = vec![0u8; 65536];

    loop {
        let (len, from) = tokio::select! {
            _ = token.cancelled() => return,
            received = socket.recv_from(&mut buf) => match received {
                Ok(pair) => pair,
                Err(e) => {
                    trace!(error = %e, "receive error");
                    continue;
                }
            },
        };

        // Multicast loopback hands us our own queries back.
        if origin.is_local(from.ip()) {
            continue;
        }

        trace!(bytes = len, from = %from, "datagram received");

        match Message::from_vec(&buf[..len]) {
            Ok(message) => aggregator.ingest(&message),
            Err(e) => trace!(from = %from, error = %e, "invalid message received"),
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;
