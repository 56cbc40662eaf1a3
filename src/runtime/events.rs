//! Bridge event stream payloads.

/// Events emitted from the single-writer bridge loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeEvent {
    /// A datagram arrived on the inbound socket.
    Received {
        /// Datagram size in bytes.
        bytes: usize,
    },
    /// A QSO was delivered downstream.
    Forwarded {
        /// Contacted call sign.
        call: String,
        /// Points credited.
        points: u32,
    },
    /// Delivery failed and the message was dropped.
    ForwardFailed {
        /// Failure description.
        reason: String,
    },
}
