use adifbridge::{adif, config::StationConfig, mapper, qso::QsoRecord};

fn station(contest: &str) -> StationConfig {
    StationConfig {
        operator: "W3DJS".to_string(),
        name: "Dave".to_string(),
        initials: "DS".to_string(),
        county: "Washington".to_string(),
        class: "1D".to_string(),
        section: "MDC".to_string(),
        contest: contest.to_string(),
        computer_name: "shack".to_string(),
    }
}

fn map(datagram: &[u8], contest: &str) -> QsoRecord {
    mapper::map_record(&adif::parse_record(datagram), &station(contest))
}

#[test]
fn date_is_reformatted_with_slashes() {
    let qso = map(b"<qso_date:8>20230615", "");
    assert_eq!(qso.date, "2023/06/15");
}

#[test]
fn times_are_reformatted_with_colon() {
    let qso = map(b"<time_on:4>1347<time_off:4>1352", "");
    assert_eq!(qso.time_on, "13:47");
    assert_eq!(qso.time_off, "13:52");
}

#[test]
fn nonconforming_date_passes_through() {
    let qso = map(b"<qso_date:6>230615", "");
    assert_eq!(qso.date, "230615");
}

#[test]
fn band_unit_suffix_is_stripped() {
    assert_eq!(map(b"<band:3>40m", "").band, "40");
    assert_eq!(map(b"<band:3>40M", "").band, "40");
}

#[test]
fn band_without_suffix_passes_through_whole() {
    assert_eq!(map(b"<band:2>40", "").band, "40");
}

#[test]
fn field_day_routes_reports_to_class() {
    let qso = map(b"<rst_sent:2>3A<rst_rcvd:2>2B", "FD");

    assert_eq!(qso.class_sent, "3A");
    assert_eq!(qso.class_recv, "2B");
    assert_eq!(qso.rst_sent, "");
    assert_eq!(qso.rst_recv, "");
}

#[test]
fn general_routes_reports_to_rst() {
    let qso = map(b"<rst_sent:3>-10<rst_rcvd:2>-8", "");

    assert_eq!(qso.rst_sent, "-10");
    assert_eq!(qso.rst_recv, "-8");
    assert_eq!(qso.class_sent, "1D");
    assert_eq!(qso.class_recv, "");
}

#[test]
fn psk_forces_canonical_reports() {
    let qso = map(b"<mode:3>PSK<rst_sent:3>-10<rst_rcvd:2>-8", "");

    assert_eq!(qso.rst_sent, "599");
    assert_eq!(qso.rst_recv, "599");
}

#[test]
fn psk_forces_reports_even_without_report_tags() {
    let qso = map(b"<mode:3>PSK", "");

    assert_eq!(qso.rst_sent, "599");
    assert_eq!(qso.rst_recv, "599");
}

#[test]
fn wire_call_sign_overrides_configured_operator() {
    let qso = map(b"<station_callsign:5>N0CAL", "");
    assert_eq!(qso.operator, "N0CAL");
}

#[test]
fn operator_tag_overrides_configured_operator() {
    let qso = map(b"<operator:4>K9XY", "");
    assert_eq!(qso.operator, "K9XY");
}

#[test]
fn wire_grid_overrides_transmitted_grid() {
    let qso = map(b"<my_gridsquare:4>FM19<gridsquare:4>FN42", "");

    assert_eq!(qso.grid_sent, "FM19");
    assert_eq!(qso.grid_recv, "FN42");
}

#[test]
fn state_maps_to_received_section() {
    let qso = map(b"<state:2>MD", "");
    assert_eq!(qso.section_recv, "MD");
}

#[test]
fn absent_power_defaults_to_zero() {
    let qso = map(b"<mode:3>SSB", "");

    assert_eq!(qso.power, 0.0);
    assert_eq!(qso.points, 1);
}

#[test]
fn unparsable_power_defaults_to_zero() {
    let qso = map(b"<tx_pwr:3>abc", "");
    assert_eq!(qso.power, 0.0);
}

#[test]
fn missing_tags_leave_station_defaults() {
    let qso = map(b"", "");

    assert_eq!(qso.operator, "W3DJS");
    assert_eq!(qso.op_name, "Dave");
    assert_eq!(qso.initials, "DS");
    assert_eq!(qso.county, "Washington");
    assert_eq!(qso.class_sent, "1D");
    assert_eq!(qso.section_sent, "MDC");
    assert_eq!(qso.call, "");
    assert_eq!(qso.comments, "");
}

#[test]
fn points_are_computed_during_mapping() {
    let qso = map(b"<mode:3>FT8<tx_pwr:3>100", "");
    assert_eq!(qso.points, 4);
}
