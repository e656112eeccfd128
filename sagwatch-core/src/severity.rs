//! Severity classification of sampled voltages
//!
//! Severity is a domain signal, not a software error: a sagging supply is
//! reported faster and annotated, never treated as a fault that aborts
//! anything. Within one reporting window severity only ever rises; the
//! window reset is the sole way back to `Normal`.

use crate::constants::defaults::{DEFAULT_ERROR_LEVEL_VOLTS, DEFAULT_WARNING_LEVEL_VOLTS};

/// Escalation level derived from the window's minimum voltage.
///
/// Totally ordered: `Normal < Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Severity {
    /// Supply is healthy.
    #[default]
    Normal = 0,
    /// The window minimum sagged to the warning threshold.
    Warning = 1,
    /// The window minimum sagged to the error threshold.
    Error = 2,
}

impl Severity {
    /// Annotation appended to report lines.
    ///
    /// A tier's marker can only appear when that tier's threshold is
    /// configured, because severity is unreachable otherwise.
    pub const fn marker(&self) -> &'static str {
        match self {
            Severity::Normal => "",
            Severity::Warning => " ??",
            Severity::Error => " !!!!",
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Severity {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Severity::Normal => defmt::write!(fmt, "normal"),
            Severity::Warning => defmt::write!(fmt, "warning"),
            Severity::Error => defmt::write!(fmt, "error"),
        }
    }
}

/// Warning/error trigger voltages.
///
/// `None` disables a tier entirely: severity can never reach it, its
/// marker never prints, and its report period is never selected.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thresholds {
    /// Warn when a sample voltage drops to this level.
    pub warning_volts: Option<f32>,
    /// Flag an error when a sample voltage drops to this level.
    pub error_volts: Option<f32>,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warning_volts: Some(DEFAULT_WARNING_LEVEL_VOLTS),
            error_volts: Some(DEFAULT_ERROR_LEVEL_VOLTS),
        }
    }
}

impl Thresholds {
    /// Both tiers disabled; severity stays `Normal` forever.
    pub const fn disabled() -> Self {
        Self {
            warning_volts: None,
            error_volts: None,
        }
    }

    /// Classify one sample voltage.
    ///
    /// The error check runs first and wins; a sample can never trigger
    /// both tiers in the same evaluation. Boundaries are inclusive.
    pub fn classify(&self, volts: f32) -> Severity {
        if let Some(error) = self.error_volts {
            if volts <= error {
                return Severity::Error;
            }
        }
        if let Some(warning) = self.warning_volts {
            if volts <= warning {
                return Severity::Warning;
            }
        }
        Severity::Normal
    }
}
