//! N3FJP API command encoding.
//!
//! Two insert templates share one field-ordering table: the field-day
//! variant omits the RST pair, the general variant includes it. Both
//! carry class/section to match the server's fixed field schema.

use crate::{qso::QsoRecord, types::ContestProfile};

/// Log-view refresh command, sent after every insert.
pub const REFRESH_COMMAND: &str = "<CMD><CHECKLOG></CMD>\r\n";

/// Encodes the duplicate-excluding insert command for one QSO.
///
/// Every field appears as an open/close tag pair inside a single
/// `<CMD><ADDDIRECT>` envelope that asks the server to stay open for
/// further commands. Blank record fields encode as empty tag pairs,
/// never omitted tags. Encoding the same record twice yields
/// byte-identical output.
pub fn insert_command(qso: &QsoRecord, profile: ContestProfile) -> String {
    let mut out = String::with_capacity(512);
    out.push_str("<CMD><ADDDIRECT><EXCLUDEDUPES>TRUE</EXCLUDEDUPES>\n<STAYOPEN>TRUE</STAYOPEN>");
    for (tag, value) in ordered_fields(qso) {
        if profile == ContestProfile::FieldDay && is_rst_field(tag) {
            continue;
        }
        out.push('\n');
        out.push('<');
        out.push_str(tag);
        out.push('>');
        out.push_str(&value);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
    out.push_str("</CMD>\r\n");
    out
}

/// Field values in the server's schema order, shared by both variants.
fn ordered_fields(qso: &QsoRecord) -> [(&'static str, String); 22] {
    [
        ("fldComputerName", qso.computer_name.clone()),
        ("fldOperator", qso.operator.clone()),
        ("fldNameS", qso.op_name.clone()),
        ("fldInitials", qso.initials.clone()),
        ("fldCountyS", qso.county.clone()),
        ("fldCall", qso.call.clone()),
        ("fldNameR", qso.name_recv.clone()),
        ("fldDateStr", qso.date.clone()),
        ("fldTimeOnStr", qso.time_on.clone()),
        ("fldTimeOffStr", qso.time_off.clone()),
        ("fldBand", qso.band.clone()),
        ("fldMode", qso.mode.clone()),
        ("fldFrequency", qso.freq.clone()),
        ("fldPower", qso.power.to_string()),
        ("fldRstR", qso.rst_recv.clone()),
        ("fldRstS", qso.rst_sent.clone()),
        ("fldGridR", qso.grid_recv.clone()),
        ("fldGridS", qso.grid_sent.clone()),
        ("fldComments", qso.comments.clone()),
        ("fldPoints", qso.points.to_string()),
        ("fldClass", qso.class_recv.clone()),
        ("fldSection", qso.section_recv.clone()),
    ]
}

fn is_rst_field(tag: &str) -> bool {
    matches!(tag, "fldRstR" | "fldRstS")
}
