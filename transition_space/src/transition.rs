//! A single transition with every intermediate quantity of the conversion

use crate::error::{require_positive, TransitionResult};
use crate::photon::{energy_ev_from_frequency, frequency_from_energy_diff_ev, wavelength_from_frequency};
use crate::volume::sphere_volume_from_wavelength;

/// Photon emitted by an electron transition, with its estimated space volume
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Energy gap between the two electron states (eV)
    pub energy_ev: f64,
    /// Photon frequency (Hz)
    pub frequency_hz: f64,
    /// Photon wavelength (m)
    pub wavelength_m: f64,
    /// Radius of the sphere whose diameter is the wavelength (m)
    pub radius_m: f64,
    /// Sphere volume (m³)
    pub volume_m3: f64,
}

impl Transition {
    /// Build from an energy gap in eV. No validation.
    pub fn from_energy_diff_ev(energy_diff_ev: f64) -> Self {
        let frequency = frequency_from_energy_diff_ev(energy_diff_ev);
        Self::build(energy_diff_ev, frequency)
    }

    /// Build from a photon frequency in Hz. No validation.
    pub fn from_frequency(frequency: f64) -> Self {
        Self::build(energy_ev_from_frequency(frequency), frequency)
    }

    /// Like [`Transition::from_energy_diff_ev`], but rejects energy gaps that
    /// are not finite and strictly positive.
    pub fn try_from_energy_diff_ev(energy_diff_ev: f64) -> TransitionResult<Self> {
        require_positive("energy difference", energy_diff_ev)
            .map(Self::from_energy_diff_ev)
            .inspect_err(|err| log::debug!("rejected transition: {err}"))
    }

    /// Like [`Transition::from_frequency`], but rejects frequencies that are
    /// not finite and strictly positive.
    pub fn try_from_frequency(frequency: f64) -> TransitionResult<Self> {
        require_positive("frequency", frequency)
            .map(Self::from_frequency)
            .inspect_err(|err| log::debug!("rejected transition: {err}"))
    }

    fn build(energy_ev: f64, frequency_hz: f64) -> Self {
        let wavelength_m = wavelength_from_frequency(frequency_hz);
        let volume_m3 = sphere_volume_from_wavelength(wavelength_m);
        log::trace!(
            "E = {energy_ev} eV, f = {frequency_hz} Hz, λ = {wavelength_m} m, V = {volume_m3} m³"
        );

        Self {
            energy_ev,
            frequency_hz,
            wavelength_m,
            radius_m: wavelength_m / 2.0,
            volume_m3,
        }
    }

    /// Sphere diameter, which the model takes to be the wavelength
    pub fn diameter_m(&self) -> f64 {
        self.wavelength_m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransitionError;
    use crate::volume::{space_volume_from_energy_diff_ev, space_volume_from_frequency};

    #[test]
    fn energy_path_matches_free_function() {
        let t = Transition::from_energy_diff_ev(1e-6);
        assert_eq!(t.energy_ev, 1e-6);
        assert_eq!(t.frequency_hz, frequency_from_energy_diff_ev(1e-6));
        assert_eq!(t.volume_m3, space_volume_from_energy_diff_ev(1e-6));
        assert_eq!(t.radius_m * 2.0, t.diameter_m());
    }

    #[test]
    fn frequency_path_matches_free_function() {
        let t = Transition::from_frequency(1e9);
        assert_eq!(t.frequency_hz, 1e9);
        assert_eq!(t.wavelength_m, 0.299792458);
        assert_eq!(t.volume_m3, space_volume_from_frequency(1e9));

        // 1 GHz is roughly 4.1357 µeV
        assert!((t.energy_ev - 4.135_667_696e-6).abs() / 4.135_667_696e-6 < 1e-9);
    }

    #[test]
    fn unchecked_constructors_pass_degenerate_input_through() {
        let zero = Transition::from_frequency(0.0);
        assert_eq!(zero.wavelength_m, f64::INFINITY);
        assert_eq!(zero.volume_m3, f64::INFINITY);

        let negative = Transition::from_energy_diff_ev(-1e-6);
        assert!(negative.volume_m3 < 0.0);
    }

    #[test]
    fn checked_constructors_accept_physical_input() {
        assert_eq!(
            Transition::try_from_frequency(1e9),
            Ok(Transition::from_frequency(1e9))
        );
        assert_eq!(
            Transition::try_from_energy_diff_ev(1e-6),
            Ok(Transition::from_energy_diff_ev(1e-6))
        );
    }

    #[test]
    fn checked_constructors_reject_non_physical_input() {
        assert_eq!(
            Transition::try_from_frequency(0.0),
            Err(TransitionError::NonPositive { quantity: "frequency", value: 0.0 })
        );
        assert_eq!(
            Transition::try_from_energy_diff_ev(-1.0),
            Err(TransitionError::NonPositive { quantity: "energy difference", value: -1.0 })
        );
        assert_eq!(
            Transition::try_from_frequency(f64::INFINITY),
            Err(TransitionError::NonFinite { quantity: "frequency", value: f64::INFINITY })
        );
    }
}
