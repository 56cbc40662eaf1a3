//! Outbound delivery seam.

use std::future::Future;
use std::time::Duration;

use tokio::{io::AsyncWriteExt, net::TcpStream, time::timeout};

use crate::config::{BridgeConfig, Endpoint};

/// Errors surfaced while delivering one QSO downstream.
#[derive(Debug)]
pub enum SinkError {
    /// The connect attempt did not finish inside the timeout.
    ConnectTimeout,
    /// Connecting or writing failed.
    Io(std::io::Error),
}

impl From<std::io::Error> for SinkError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Destination for encoded commands, injected into the bridge loop.
///
/// Each call delivers both command strings for one processed message;
/// a failed delivery drops that message only.
pub trait QsoSink: Send + 'static {
    /// Delivers the insert command followed by the refresh command.
    fn deliver(
        &mut self,
        insert: &str,
        refresh: &str,
    ) -> impl Future<Output = Result<(), SinkError>> + Send;
}

/// Production sink: one fresh TCP connection per processed message, so
/// no message depends on a previously open connection succeeding.
#[derive(Debug, Clone)]
pub struct TcpDirectSink {
    endpoint: Endpoint,
    connect_timeout: Duration,
    refresh_delay: Duration,
}

impl TcpDirectSink {
    /// Builds the sink from bridge configuration.
    pub fn from_config(config: &BridgeConfig) -> Self {
        Self {
            endpoint: config.n3fjp.clone(),
            connect_timeout: Duration::from_millis(config.connect_timeout_ms),
            refresh_delay: Duration::from_millis(config.refresh_delay_ms),
        }
    }
}

impl QsoSink for TcpDirectSink {
    async fn deliver(&mut self, insert: &str, refresh: &str) -> Result<(), SinkError> {
        let mut stream = timeout(self.connect_timeout, TcpStream::connect(self.endpoint.addr()))
            .await
            .map_err(|_| SinkError::ConnectTimeout)??;
        stream.write_all(insert.as_bytes()).await?;

        // Give the server time to process the insert before the refresh.
        tokio::time::sleep(self.refresh_delay).await;
        stream.write_all(refresh.as_bytes()).await?;
        stream.flush().await?;
        Ok(())
    }
}
