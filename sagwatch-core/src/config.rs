//! Monitor configuration
//!
//! The whole tunable surface is one explicit value handed to the monitor
//! at construction; there are no feature flags to juggle. An absent
//! threshold keeps that severity tier unreachable.
//!
//! Configuration is checked once, up front. After that the loop runs with
//! no error paths at all.

use crate::constants::defaults::{
    DEFAULT_AD_MAX, DEFAULT_CHANNEL_NAME, DEFAULT_ERROR_PERIOD_MS, DEFAULT_REPORT_PERIOD_MS,
    DEFAULT_SUPPLY_VOLTS, DEFAULT_WARNING_PERIOD_MS,
};
use crate::errors::{ConfigError, ConfigResult};
use crate::severity::{Severity, Thresholds};

/// A/D converter calibration: full-scale value and reference voltage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdcCalibration {
    /// Full-scale conversion value on this chip.
    pub ad_max: u16,
    /// Reference voltage corresponding to full scale.
    pub supply_volts: f32,
}

impl AdcCalibration {
    /// Convert a raw conversion result to volts.
    ///
    /// Pure function of the raw value and the two calibration constants;
    /// voltages are derived on demand and never stored.
    pub fn volts(&self, raw: u16) -> f32 {
        raw as f32 / self.ad_max as f32 * self.supply_volts
    }
}

impl Default for AdcCalibration {
    fn default() -> Self {
        Self {
            ad_max: DEFAULT_AD_MAX,
            supply_volts: DEFAULT_SUPPLY_VOLTS,
        }
    }
}

/// Unit shown on report lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReportUnit {
    /// Raw A/D counts.
    AdCounts,
    /// Volts, to two decimal places.
    Volts,
}

impl ReportUnit {
    /// Human-readable name used in the startup banner.
    pub const fn describe(&self) -> &'static str {
        match self {
            ReportUnit::AdCounts => "A/D value",
            ReportUnit::Volts => "voltage",
        }
    }
}

/// Report cadence per severity tier, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportPeriods {
    /// Cadence while the window is healthy.
    pub normal_ms: u64,
    /// Cadence once a warning has been seen this window.
    pub warning_ms: u64,
    /// Cadence once an error has been seen this window.
    pub error_ms: u64,
}

impl ReportPeriods {
    /// Period active for the given severity.
    pub fn for_severity(&self, severity: Severity) -> u64 {
        match severity {
            Severity::Normal => self.normal_ms,
            Severity::Warning => self.warning_ms,
            Severity::Error => self.error_ms,
        }
    }
}

impl Default for ReportPeriods {
    fn default() -> Self {
        Self {
            normal_ms: DEFAULT_REPORT_PERIOD_MS,
            warning_ms: DEFAULT_WARNING_PERIOD_MS,
            error_ms: DEFAULT_ERROR_PERIOD_MS,
        }
    }
}

/// Complete monitor configuration.
///
/// All tunables live here; there is no runtime configuration loading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonitorConfig {
    /// Channel name echoed in the startup banner, e.g. `"A1"`.
    pub channel_name: &'static str,
    /// Unit shown on report lines.
    pub unit: ReportUnit,
    /// Append the window's sample count to each report line.
    pub count_samples: bool,
    /// Severity trigger voltages.
    pub thresholds: Thresholds,
    /// Report cadence per severity tier.
    pub periods: ReportPeriods,
    /// A/D scale and reference.
    pub calibration: AdcCalibration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            channel_name: DEFAULT_CHANNEL_NAME,
            unit: ReportUnit::Volts,
            count_samples: false,
            thresholds: Thresholds::default(),
            periods: ReportPeriods::default(),
            calibration: AdcCalibration::default(),
        }
    }
}

impl MonitorConfig {
    /// Check the configuration for contradictions.
    ///
    /// Runs once at monitor construction. Rejects an error threshold above
    /// the warning threshold, a zero A/D scale, a non-positive reference,
    /// and zero report periods.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.calibration.ad_max == 0 {
            return Err(ConfigError::ZeroAdScale);
        }
        // Also catches NaN.
        if !(self.calibration.supply_volts > 0.0) {
            return Err(ConfigError::BadReference {
                supply_volts: self.calibration.supply_volts,
            });
        }
        if let (Some(warning), Some(error)) =
            (self.thresholds.warning_volts, self.thresholds.error_volts)
        {
            if error > warning {
                return Err(ConfigError::ThresholdOrder {
                    warning_volts: warning,
                    error_volts: error,
                });
            }
        }
        if self.periods.normal_ms == 0 || self.periods.warning_ms == 0 || self.periods.error_ms == 0
        {
            return Err(ConfigError::ZeroPeriod);
        }
        Ok(())
    }
}
