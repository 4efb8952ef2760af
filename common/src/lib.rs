//! Common utilities for the transition space estimator
//!
//! This crate provides the SI physical constants and the logging setup shared
//! by the estimator library and its demonstration binary.

pub mod logging;

/// Physical constants in SI units
pub mod constants {
    /// Planck constant in J·s (exact by SI definition)
    pub const PLANCK_CONSTANT_J_S: f64 = 6.62607015e-34;

    /// Speed of light in m/s (exact by SI definition)
    pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;

    /// Electron mass in kg.
    ///
    /// Not used by any of the current conversions; kept as a reference value.
    pub const ELECTRON_MASS_KG: f64 = 9.10938356e-31;

    /// Joules per electronvolt (exact by SI definition)
    pub const EV_TO_JOULE: f64 = 1.602176634e-19;
}
