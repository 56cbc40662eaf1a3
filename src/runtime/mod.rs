//! Single-writer bridge loop, delivery seam, and event stream.

/// Bridge loop and control handle.
pub mod bridge;
/// Event stream types emitted by the bridge.
pub mod events;
/// Outbound delivery trait and TCP implementation.
pub mod sink;
