//! Shared contest-session primitives.

use serde::{Deserialize, Serialize};

/// Contest identifier that selects the field-day exchange rules.
pub const FIELD_DAY_ID: &str = "FD";

/// Session-level template selection for exchange routing and encoding.
///
/// Derived once from configuration; field day substitutes class/section
/// for conventional signal reports in the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ContestProfile {
    /// Ordinary logging with RST exchanges.
    #[default]
    General,
    /// ARRL Field Day.
    FieldDay,
}

impl ContestProfile {
    /// Derives the profile from a configured contest identifier.
    pub fn from_contest_id(id: &str) -> Self {
        if id == FIELD_DAY_ID {
            Self::FieldDay
        } else {
            Self::General
        }
    }
}
