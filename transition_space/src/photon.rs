//! Photon conversions
//!
//! Planck's relation E = h·f and the dispersion relation λ = c/f in vacuum.

use crate::constants::{EV_TO_JOULE, PLANCK_CONSTANT_J_S, SPEED_OF_LIGHT_M_S};

/// Frequency (Hz) of the photon carrying an energy gap given in eV.
///
/// Keeps the sign of the input; zero maps to zero.
pub fn frequency_from_energy_diff_ev(energy_diff_ev: f64) -> f64 {
    let energy_joules = energy_diff_ev * EV_TO_JOULE;
    energy_joules / PLANCK_CONSTANT_J_S
}

/// Wavelength (m) of radiation at the given frequency (Hz).
///
/// A zero frequency divides by zero: `+0.0` gives `+inf`, `-0.0` gives `-inf`.
pub fn wavelength_from_frequency(frequency: f64) -> f64 {
    SPEED_OF_LIGHT_M_S / frequency
}

/// Photon energy (eV) at the given frequency (Hz). Inverse of
/// [`frequency_from_energy_diff_ev`].
pub fn energy_ev_from_frequency(frequency: f64) -> f64 {
    frequency * PLANCK_CONSTANT_J_S / EV_TO_JOULE
}
