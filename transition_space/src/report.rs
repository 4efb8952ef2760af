//! Text output for the demonstration binary
//!
//! Numbers are written in scientific notation with a signed exponent of at
//! least two digits (`9.98e-01`, `1.00e+09`).

use crate::volume::{space_volume_from_energy_diff_ev, space_volume_from_frequency};

/// Format `value` in scientific notation with `digits` digits after the point.
pub fn sci(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let formatted = format!("{value:.digits$e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.abs())
        }
        None => formatted,
    }
}

/// Report lines for a transition given by its energy gap (eV)
pub fn energy_report(energy_diff_ev: f64) -> [String; 2] {
    let volume = space_volume_from_energy_diff_ev(energy_diff_ev);
    [
        format!("Energy difference: {} eV", sci(energy_diff_ev, 2)),
        format!("Estimated space volume: {} m³", sci(volume, 2)),
    ]
}

/// Report lines for radiation given by its frequency (Hz)
pub fn frequency_report(frequency: f64) -> [String; 2] {
    let volume = space_volume_from_frequency(frequency);
    [
        format!("Frequency: {} Hz", sci(frequency, 2)),
        format!("Estimated space volume: {} m³", sci(volume, 2)),
    ]
}
