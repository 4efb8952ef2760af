//! Transition Space Demonstration
//!
//! Prints the estimated space volume for two sample inputs:
//! - a 1 µeV energy gap between two electron states
//! - a 1 GHz radio-frequency photon
//!
//! Set `RUST_LOG=trace` to see the intermediate quantities.

use transition_space::{report, Transition};

/// 1 µeV transition
const SAMPLE_ENERGY_EV: f64 = 1e-6;
/// 1 GHz
const SAMPLE_FREQUENCY_HZ: f64 = 1e9;

fn main() {
    common::logging::init();
    log::info!("estimating transition space for the sample inputs");

    let transition = Transition::from_energy_diff_ev(SAMPLE_ENERGY_EV);
    log::debug!("{transition:?}");
    for line in report::energy_report(SAMPLE_ENERGY_EV) {
        println!("{line}");
    }

    println!();

    let transition = Transition::from_frequency(SAMPLE_FREQUENCY_HZ);
    log::debug!("{transition:?}");
    for line in report::frequency_report(SAMPLE_FREQUENCY_HZ) {
        println!("{line}");
    }

    log::info!("done");
}
