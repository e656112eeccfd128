//! Core monitoring engine for sagwatch
//!
//! Watches one analog channel for supply-voltage sag: every loop iteration
//! folds a fresh A/D conversion into a running minimum, the minimum is
//! classified against warning/error thresholds, and a report line goes out
//! over a serial channel at a cadence that tightens as severity rises.
//! The extended variant also colors a single status pixel.
//!
//! Key constraints:
//! - No heap allocation anywhere in the loop
//! - Single thread of control; the loop polls a millisecond clock instead
//!   of sleeping
//! - Hardware (A/D converter, serial port, LED strand) stays behind traits
//!
//! ```no_run
//! use sagwatch_core::{AnalogSource, Monitor, MonitorConfig, ReportSink};
//! use sagwatch_core::time::SystemClock;
//!
//! struct Adc;
//! impl AnalogSource for Adc {
//!     fn read(&mut self) -> u16 {
//!         // One hardware conversion goes here.
//!         1000
//!     }
//! }
//!
//! struct Uart;
//! impl ReportSink for Uart {
//!     fn write_line(&mut self, line: &str) {
//!         println!("{}", line);
//!     }
//! }
//!
//! let mut monitor = Monitor::new(MonitorConfig::default(), Adc, Uart, SystemClock::new())
//!     .expect("default config is valid");
//! monitor.start();
//! monitor.run();
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod constants;
pub mod errors;
pub mod hal;
pub mod indicator;
pub mod monitor;
pub mod report;
pub mod severity;
pub mod time;
pub mod window;

// Public API
pub use config::{AdcCalibration, MonitorConfig, ReportPeriods, ReportUnit};
pub use errors::{ConfigError, ConfigResult};
pub use hal::{AnalogSource, PixelStrand, ReportSink};
pub use indicator::{NoPixel, Rgb, StatusIndicator};
pub use monitor::Monitor;
pub use severity::{Severity, Thresholds};
pub use window::ReadingWindow;

/// Crate version, for banners and diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
