//! WSJT-X to N3FJP logging bridge.
//!
//! Listens for ADIF "QSO logged" datagrams on UDP, reshapes each
//! record for the configured contest, scores it, and forwards it to an
//! N3FJP logging server over TCP. Nothing is persisted; every message
//! is parsed, mapped, encoded, and delivered independently.
//!
//! # Examples
//!
//! Pure pipeline from datagram to command string:
//! ```
//! use adifbridge::{adif, command, config::StationConfig, mapper};
//!
//! let station = StationConfig {
//!     operator: "W3DJS".to_string(),
//!     name: "Dave".to_string(),
//!     initials: "DS".to_string(),
//!     county: "Washington".to_string(),
//!     class: "1D".to_string(),
//!     section: "MDC".to_string(),
//!     contest: String::new(),
//!     computer_name: "shack".to_string(),
//! };
//!
//! let datagram = b"<call:5>K1ABC<band:3>20m<mode:3>FT8<tx_pwr:3>100<eor>";
//! let raw = adif::parse_record(datagram);
//! let qso = mapper::map_record(&raw, &station);
//! assert_eq!(qso.band, "20");
//! assert_eq!(qso.points, 4);
//!
//! let cmd = command::insert_command(&qso, station.profile());
//! assert!(cmd.contains("<fldCall>K1ABC</fldCall>"));
//! ```
//!
//! Runtime usage against live sockets:
//! ```no_run
//! use adifbridge::{
//!     config::BridgeConfig,
//!     runtime::{bridge::spawn_bridge, sink::TcpDirectSink},
//! };
//!
//! # #[tokio::main]
//! # async fn main() {
//! let config = BridgeConfig::load("adifbridge.toml").expect("load config");
//! let sink = TcpDirectSink::from_config(&config);
//! let handle = spawn_bridge(config, sink).await.expect("bind listener");
//! handle.shutdown().await.expect("shutdown");
//! # }
//! ```
#![deny(missing_docs)]

/// ADIF tagged-record decoding.
pub mod adif;
/// N3FJP command encoding.
pub mod command;
/// Configuration file loading.
pub mod config;
/// Raw-tag to canonical-record mapping.
pub mod mapper;
/// QSO domain record.
pub mod qso;
/// Bridge runtime, delivery sink, and events.
pub mod runtime;
/// Contest point calculation.
pub mod score;
/// Shared contest-session types.
pub mod types;
