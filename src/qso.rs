//! Canonical QSO record assembled from one inbound datagram.

use serde::{Deserialize, Serialize};

use crate::config::StationConfig;

/// Fully mapped representation of one logged contact.
///
/// Constructed fresh from station defaults for every inbound message,
/// populated by the field mapper, and consumed exactly once by the
/// command encoder. Never persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QsoRecord {
    /// Computer name reported to the logging server.
    pub computer_name: String,
    /// Operating call sign.
    pub operator: String,
    /// Operator name.
    pub op_name: String,
    /// Operator initials.
    pub initials: String,
    /// Station county.
    pub county: String,
    /// Contest class sent.
    pub class_sent: String,
    /// Contest class received.
    pub class_recv: String,
    /// Contest section sent.
    pub section_sent: String,
    /// Contest section received.
    pub section_recv: String,
    /// Contacted station call sign.
    pub call: String,
    /// Contacted operator name.
    pub name_recv: String,
    /// QSO date, `YYYY/MM/DD`.
    pub date: String,
    /// Start time, `HH:MM`.
    pub time_on: String,
    /// End time, `HH:MM`.
    pub time_off: String,
    /// Band with the unit suffix stripped, e.g. `"20"`.
    pub band: String,
    /// Emission mode as reported.
    pub mode: String,
    /// Frequency as reported.
    pub freq: String,
    /// Transmit power in watts.
    pub power: f64,
    /// Signal report sent.
    pub rst_sent: String,
    /// Signal report received.
    pub rst_recv: String,
    /// Grid square sent.
    pub grid_sent: String,
    /// Grid square received.
    pub grid_recv: String,
    /// Free-text comment.
    pub comments: String,
    /// Computed contest points.
    pub points: u32,
}

impl QsoRecord {
    /// Builds a record holding only the configured station defaults.
    pub fn from_defaults(station: &StationConfig) -> Self {
        Self {
            computer_name: station.computer_name.clone(),
            operator: station.operator.clone(),
            op_name: station.name.clone(),
            initials: station.initials.clone(),
            county: station.county.clone(),
            class_sent: station.class.clone(),
            section_sent: station.section.clone(),
            ..Self::default()
        }
    }
}
