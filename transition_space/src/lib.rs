//! Electron Transition Space Estimates
//!
//! This crate estimates the "space" occupied by an electron transition that
//! emits a photon, using a short chain of closed-form conversions:
//!
//! - **Photon**: energy gap (eV) to frequency via E = h·f, frequency to wavelength via λ = c/f
//! - **Volume**: volume of a sphere whose diameter is the wavelength, V = 4/3·π·(λ/2)³
//! - **Transition**: every intermediate quantity of one conversion, bundled
//! - **Report**: the formatted lines printed by the demonstration binary
//!
//! None of the conversions validate their input. Zero and negative values
//! flow straight through IEEE-754 arithmetic, so a zero frequency gives an
//! infinite volume and a negative one gives a negative volume. The checked
//! constructors on [`Transition`] are the only place inputs are rejected.

pub mod error;
pub mod photon;
pub mod report;
pub mod transition;
pub mod volume;

pub use common::constants;
pub use error::{TransitionError, TransitionResult};
pub use photon::{energy_ev_from_frequency, frequency_from_energy_diff_ev, wavelength_from_frequency};
pub use transition::Transition;
pub use volume::{space_volume_from_energy_diff_ev, space_volume_from_frequency, sphere_volume_from_wavelength};
