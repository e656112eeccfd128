//! Configuration Error Type
//!
//! The running loop has no failure modes by contract: analog reads always
//! return a value and report lines are fire-and-forget, so the sampling
//! path never produces an error. The one fallible operation in the crate
//! is accepting a configuration, and this module is that whole surface.
//!
//! Errors stay `Copy` with inline data only, matching the constraint that
//! nothing in this crate heap-allocates.

use thiserror_no_std::Error;

/// Result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Rejected monitor configuration.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Error threshold configured above the warning threshold.
    #[error("error level {error_volts} V is above warning level {warning_volts} V")]
    ThresholdOrder {
        /// Configured warning trigger voltage.
        warning_volts: f32,
        /// Configured error trigger voltage.
        error_volts: f32,
    },

    /// A/D full-scale value of zero cannot scale anything.
    #[error("A/D full-scale value must be non-zero")]
    ZeroAdScale,

    /// Reference voltage must be a positive number.
    #[error("reference voltage {supply_volts} V must be positive")]
    BadReference {
        /// Configured reference voltage.
        supply_volts: f32,
    },

    /// A zero report period would fire on every loop iteration.
    #[error("report periods must be non-zero")]
    ZeroPeriod,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ThresholdOrder {
                warning_volts,
                error_volts,
            } => defmt::write!(
                fmt,
                "error level {} V is above warning level {} V",
                error_volts,
                warning_volts
            ),
            Self::ZeroAdScale => defmt::write!(fmt, "A/D full-scale value must be non-zero"),
            Self::BadReference { supply_volts } => {
                defmt::write!(fmt, "reference voltage {} V must be positive", supply_volts)
            }
            Self::ZeroPeriod => defmt::write!(fmt, "report periods must be non-zero"),
        }
    }
}
