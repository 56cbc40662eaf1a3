use std::net::SocketAddr;

use tokio::{
    net::UdpSocket,
    sync::{broadcast, mpsc, oneshot},
};
use tracing::{debug, info, warn};

use crate::{adif, command, config::BridgeConfig, mapper, types::ContestProfile};

use super::{events::BridgeEvent, sink::QsoSink};

/// Largest datagram the inbound protocol produces.
const MAX_DATAGRAM: usize = 1024;

/// Errors surfaced by the bridge runtime.
#[derive(Debug)]
pub enum BridgeError {
    /// Binding the inbound socket failed; no further work is possible.
    Bind(std::io::Error),
    /// The bridge loop is gone.
    ChannelClosed,
}

enum Command {
    Shutdown { resp: oneshot::Sender<()> },
}

/// Control handle for a running bridge.
#[derive(Clone)]
pub struct BridgeHandle {
    cmd_tx: mpsc::Sender<Command>,
    events_tx: broadcast::Sender<BridgeEvent>,
    local_addr: SocketAddr,
}

impl BridgeHandle {
    /// Subscribes to the bridge event stream.
    pub fn subscribe(&self) -> broadcast::Receiver<BridgeEvent> {
        self.events_tx.subscribe()
    }

    /// Address the inbound socket actually bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Requests a clean shutdown and waits for the loop to stop.
    ///
    /// The inbound socket is released before this returns.
    pub async fn shutdown(&self) -> Result<(), BridgeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Shutdown { resp: tx })
            .await
            .map_err(|_| BridgeError::ChannelClosed)?;
        rx.await.map_err(|_| BridgeError::ChannelClosed)
    }
}

/// Binds the inbound socket and spawns the bridge loop.
///
/// Bind failure is fatal and reported to the caller; everything after
/// that is handled inside the loop. One message is processed at a
/// time: receive, parse, map, encode, deliver, then block on the next
/// datagram. Delivery failure drops the current message and the loop
/// keeps listening.
pub async fn spawn_bridge<S: QsoSink>(
    config: BridgeConfig,
    sink: S,
) -> Result<BridgeHandle, BridgeError> {
    let socket = UdpSocket::bind(config.wsjtx.addr())
        .await
        .map_err(BridgeError::Bind)?;
    let local_addr = socket.local_addr().map_err(BridgeError::Bind)?;

    let (cmd_tx, mut cmd_rx) = mpsc::channel::<Command>(8);
    let (events_tx, _) = broadcast::channel::<BridgeEvent>(64);
    let events_tx_loop = events_tx.clone();

    tokio::spawn(async move {
        let mut sink = sink;
        let profile = config.station.profile();
        let mut buf = [0u8; MAX_DATAGRAM];

        info!(addr = %local_addr, "waiting for log entries");

        loop {
            tokio::select! {
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(Command::Shutdown { resp }) => {
                            let _ = resp.send(());
                            break;
                        }
                        None => break,
                    }
                }
                received = socket.recv_from(&mut buf) => {
                    match received {
                        Ok((len, peer)) => {
                            debug!(%peer, len, "datagram received");
                            let _ = events_tx_loop.send(BridgeEvent::Received { bytes: len });
                            process_datagram(&buf[..len], &config, profile, &mut sink, &events_tx_loop)
                                .await;
                        }
                        Err(err) => {
                            warn!(error = %err, "inbound receive failed");
                        }
                    }
                }
            }
        }

        info!("bridge stopped");
    });

    Ok(BridgeHandle {
        cmd_tx,
        events_tx,
        local_addr,
    })
}

async fn process_datagram<S: QsoSink>(
    datagram: &[u8],
    config: &BridgeConfig,
    profile: ContestProfile,
    sink: &mut S,
    events_tx: &broadcast::Sender<BridgeEvent>,
) {
    let raw = adif::parse_record(datagram);
    debug!(tags = raw.len(), "log entry parsed");

    let qso = mapper::map_record(&raw, &config.station);
    let insert = command::insert_command(&qso, profile);

    match sink.deliver(&insert, command::REFRESH_COMMAND).await {
        Ok(()) => {
            info!(call = %qso.call, points = qso.points, "QSO forwarded");
            let _ = events_tx.send(BridgeEvent::Forwarded {
                call: qso.call,
                points: qso.points,
            });
        }
        Err(err) => {
            warn!(error = ?err, "failed to reach logging server, entry dropped");
            let _ = events_tx.send(BridgeEvent::ForwardFailed {
                reason: format!("{err:?}"),
            });
        }
    }
}
