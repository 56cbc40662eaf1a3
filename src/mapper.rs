//! Raw tag mapping into a canonical QSO record.

use crate::{
    adif::RawRecord,
    config::StationConfig,
    qso::QsoRecord,
    score,
    types::ContestProfile,
};

/// Canonical report substituted when the mode carries no real RST.
const PSK_REPORT: &str = "599";

/// Maps one decoded record onto station defaults.
///
/// Wire values win over configured defaults for the operating call
/// sign and the transmitted grid; every other field fills a blank left
/// by [`QsoRecord::from_defaults`]. A missing tag is not an error and
/// leaves its field at the reset value.
pub fn map_record(raw: &RawRecord, station: &StationConfig) -> QsoRecord {
    let profile = station.profile();
    let mut qso = QsoRecord::from_defaults(station);

    if let Some(v) = raw.get("call") {
        qso.call = v.to_string();
    }
    if let Some(v) = raw.get("gridsquare") {
        qso.grid_recv = v.to_string();
    }
    if let Some(v) = raw.get("mode") {
        qso.mode = v.to_string();
    }

    // Field day exchanges class/section in place of signal reports.
    match profile {
        ContestProfile::FieldDay => {
            if let Some(v) = raw.get("rst_sent") {
                qso.class_sent = v.to_string();
            }
            if let Some(v) = raw.get("rst_rcvd") {
                qso.class_recv = v.to_string();
            }
        }
        ContestProfile::General => {
            if let Some(v) = raw.get("rst_sent") {
                qso.rst_sent = v.to_string();
            }
            if let Some(v) = raw.get("rst_rcvd") {
                qso.rst_recv = v.to_string();
            }
        }
    }

    if let Some(v) = raw.get("qso_date") {
        qso.date = format_date(v);
    }
    if let Some(v) = raw.get("time_on") {
        qso.time_on = format_time(v);
    }
    if let Some(v) = raw.get("time_off") {
        qso.time_off = format_time(v);
    }
    if let Some(v) = raw.get("band") {
        qso.band = strip_band_unit(v).to_string();
    }
    if let Some(v) = raw.get("freq") {
        qso.freq = v.to_string();
    }
    if let Some(v) = raw.get("station_callsign") {
        qso.operator = v.to_string();
    }
    if let Some(v) = raw.get("my_gridsquare") {
        qso.grid_sent = v.to_string();
    }
    if let Some(v) = raw.get("tx_pwr") {
        qso.power = v.trim().parse().unwrap_or(0.0);
    }
    if let Some(v) = raw.get("comment") {
        qso.comments = v.to_string();
    }
    if let Some(v) = raw.get("name") {
        qso.name_recv = v.to_string();
    }
    if let Some(v) = raw.get("operator") {
        qso.operator = v.to_string();
    }
    if let Some(v) = raw.get("state") {
        qso.section_recv = v.to_string();
    }

    // FLDigi reports no real RST on PSK.
    if qso.mode == "PSK" {
        qso.rst_sent = PSK_REPORT.to_string();
        qso.rst_recv = PSK_REPORT.to_string();
    }

    qso.points = score::points(&qso.mode, qso.power);
    qso
}

/// `YYYYMMDD` becomes `YYYY/MM/DD`; anything else passes through.
fn format_date(raw: &str) -> String {
    if raw.len() == 8 && raw.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}/{}/{}", &raw[0..4], &raw[4..6], &raw[6..8])
    } else {
        raw.to_string()
    }
}

/// `HHMM` becomes `HH:MM`; anything else passes through.
fn format_time(raw: &str) -> String {
    if raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}:{}", &raw[0..2], &raw[2..4])
    } else {
        raw.to_string()
    }
}

/// Drops the unit suffix from band values like `"20m"` or `"40M"`.
fn strip_band_unit(raw: &str) -> &str {
    match raw.bytes().position(|b| b.eq_ignore_ascii_case(&b'm')) {
        Some(pos) => &raw[..pos],
        None => raw,
    }
}
