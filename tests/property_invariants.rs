use proptest::prelude::*;

use adifbridge::{adif, command, config::StationConfig, mapper};

const VALUE_TAGS: [&str; 8] = [
    "call",
    "gridsquare",
    "mode",
    "comment",
    "name",
    "state",
    "freq",
    "band",
];

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

proptest! {
    #[test]
    fn declared_length_is_always_honored(
        values in prop::collection::vec("[A-Za-z0-9 ./+-]{0,24}", 1..8),
    ) {
        let mut datagram = String::new();
        for (tag, value) in VALUE_TAGS.iter().zip(&values) {
            datagram.push_str(&format!("<{tag}:{}>{value}", value.len()));
        }

        let raw = adif::parse_record(datagram.as_bytes());
        for (tag, value) in VALUE_TAGS.iter().zip(&values) {
            prop_assert_eq!(raw.get(tag), Some(value.as_str()));
        }
    }

    #[test]
    fn parser_never_panics_on_arbitrary_bytes(
        buf in prop::collection::vec(any::<u8>(), 0..300),
    ) {
        let _ = adif::parse_record(&buf);
    }

    #[test]
    fn parsing_is_idempotent_on_arbitrary_bytes(
        buf in prop::collection::vec(any::<u8>(), 0..300),
    ) {
        prop_assert_eq!(adif::parse_record(&buf), adif::parse_record(&buf));
    }

    #[test]
    fn pipeline_is_deterministic(
        buf in prop::collection::vec(any::<u8>(), 0..300),
        field_day in any::<bool>(),
    ) {
        let station = station(if field_day { "FD" } else { "" });
        let profile = station.profile();

        let encode = |bytes: &[u8]| {
            let qso = mapper::map_record(&adif::parse_record(bytes), &station);
            command::insert_command(&qso, profile)
        };

        prop_assert_eq!(encode(&buf), encode(&buf));
    }
}
