//! ADIF tagged-record decoding.
//!
//! WSJT-X and FLDigi broadcast one `<tag:length>value` record per
//! logged QSO. Only the tags in [`RECOGNIZED_TAGS`] are extracted;
//! anything else in the datagram is ignored.

/// Byte scanner for `<tag:length>value` sequences.
pub mod scanner;

use hashbrown::HashMap;

use self::scanner::TagScanner;

/// Tags extracted from an inbound record, in scan order.
pub const RECOGNIZED_TAGS: [&str; 20] = [
    "call",
    "gridsquare",
    "mode",
    "rst_sent",
    "rst_rcvd",
    "qso_date",
    "time_on",
    "qso_date_off",
    "time_off",
    "band",
    "freq",
    "station_callsign",
    "my_gridsquare",
    "tx_pwr",
    "comment",
    "name",
    "operator",
    "stx",
    "srx",
    "state",
];

/// Raw tag-to-value mapping decoded from one datagram.
///
/// A tag absent from the wire is absent here; a zero-length tag is
/// present with an empty value. Discarded after mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: HashMap<String, String>,
}

impl RawRecord {
    /// Looks up a decoded tag value.
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.fields.get(tag).map(String::as_str)
    }

    /// Number of tags decoded.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no recognized tag was decoded.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Decodes every recognized tag present in `buf`.
///
/// Tags may appear in any order in the buffer and are located
/// independently; a malformed occurrence is treated as not present
/// without affecting the remaining tags.
pub fn parse_record(buf: &[u8]) -> RawRecord {
    let scanner = TagScanner::new(buf);
    let mut fields = HashMap::new();
    for tag in RECOGNIZED_TAGS {
        if let Some((value, _)) = scanner.find_tag(tag) {
            fields.insert(tag.to_string(), value);
        }
    }
    RawRecord { fields }
}
