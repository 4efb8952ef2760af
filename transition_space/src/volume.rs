//! Volume estimates
//!
//! The photon is approximated as a sphere whose diameter equals its
//! wavelength. Both entry points funnel into [`sphere_volume_from_wavelength`].

use std::f64::consts::PI;

use crate::photon::{frequency_from_energy_diff_ev, wavelength_from_frequency};

/// Volume (m³) of a sphere with diameter `wavelength` (m).
///
/// A negative wavelength yields a negative volume and an infinite one an
/// infinite volume; neither is clamped.
pub fn sphere_volume_from_wavelength(wavelength: f64) -> f64 {
    let radius = wavelength / 2.0;
    (4.0 / 3.0) * PI * radius.powi(3)
}

/// Space volume (m³) for a transition with the given energy gap (eV).
pub fn space_volume_from_energy_diff_ev(energy_diff_ev: f64) -> f64 {
    let frequency = frequency_from_energy_diff_ev(energy_diff_ev);
    space_volume_from_frequency(frequency)
}

/// Space volume (m³) for radiation at the given frequency (Hz).
pub fn space_volume_from_frequency(frequency: f64) -> f64 {
    let wavelength = wavelength_from_frequency(frequency);
    sphere_volume_from_wavelength(wavelength)
}
