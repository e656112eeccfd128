//! Default Tunables
//!
//! Stock values for a 3.3 V board watching a 10-bit converter. Ports
//! override them through [`MonitorConfig`](crate::config::MonitorConfig);
//! nothing is read from the environment at runtime.

use super::time::MS_PER_SECOND;

/// Analog channel name echoed in the startup banner.
pub const DEFAULT_CHANNEL_NAME: &str = "A1";

/// Full-scale A/D conversion value.
///
/// Divisor for a 10-bit converter. Derived voltages depend on this value,
/// so changing it recalibrates every threshold comparison.
pub const DEFAULT_AD_MAX: u16 = 1024;

/// A/D reference voltage.
///
/// The supply rail on a 3.3 V board.
pub const DEFAULT_SUPPLY_VOLTS: f32 = 3.3;

/// Warn when a sample voltage drops to this level.
pub const DEFAULT_WARNING_LEVEL_VOLTS: f32 = 3.0;

/// Flag an error when a sample voltage drops to this level.
pub const DEFAULT_ERROR_LEVEL_VOLTS: f32 = 2.89;

/// Report period while the window is healthy (milliseconds).
pub const DEFAULT_REPORT_PERIOD_MS: u64 = 4 * MS_PER_SECOND;

/// Report period once a warning has been seen (milliseconds).
pub const DEFAULT_WARNING_PERIOD_MS: u64 = MS_PER_SECOND;

/// Report period once an error has been seen (milliseconds).
pub const DEFAULT_ERROR_PERIOD_MS: u64 = 200;

/// Operating brightness for the status pixel.
///
/// Addressable LEDs at full drive are blinding on a desk; 32/255 is
/// comfortable indoors. The startup self-test still flashes at full.
pub const DEFAULT_LED_BRIGHTNESS: u8 = 32;
