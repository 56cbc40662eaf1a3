//! Contest point calculation.

const DIGITAL_MODES: [&str; 14] = [
    "FT4", "FT8", "DATA", "RTTY", "JT4", "JT9", "JT65", "QRA64", "ISCAT", "MSK144", "WSPR",
    "MFSK", "PSK", "PSK31",
];

/// Computes the point value for one contact.
///
/// Digital/weak-signal modes double the base multiplier; the power
/// bracket is evaluated in order and the first match wins. Pure and
/// deterministic: identical inputs always yield identical points.
pub fn points(mode: &str, power: f64) -> u32 {
    let mode_mult = if DIGITAL_MODES.contains(&mode) { 2 } else { 1 };

    let power_mult = if power == 0.0 {
        1
    } else if power <= 5.0 {
        5
    } else if power <= 150.0 {
        2
    } else {
        1
    };

    mode_mult * power_mult
}
