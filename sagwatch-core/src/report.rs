//! Report line and banner rendering
//!
//! A report line carries the window minimum in the configured unit, the
//! optional sample count in parentheses, and the severity marker.
//! Rendering is generic over
//! `core::fmt::Write` so the loop can target a fixed stack buffer and
//! tests can target a `String`.

use core::fmt::{self, Write};

use heapless::String;

use crate::config::{MonitorConfig, ReportUnit};
use crate::hal::ReportSink;
use crate::severity::Severity;

/// Capacity for one rendered line.
///
/// The worst-case report line (5-digit raw value, 10-digit count, error
/// marker) is under 30 bytes.
pub const MAX_LINE_LEN: usize = 48;

/// Name the monitor announces itself under.
const BANNER_TAG: &str = "sagwatch";

/// Render one report line for the window minimum.
///
/// Raw mode writes the bare count, voltage mode writes two decimals and a
/// `V` suffix. The severity marker comes last; `Error` wins over `Warning`
/// by construction since a window carries a single severity.
pub fn write_report_line<W: Write>(
    out: &mut W,
    config: &MonitorConfig,
    min_raw: u16,
    samples: u32,
    severity: Severity,
) -> fmt::Result {
    match config.unit {
        ReportUnit::AdCounts => write!(out, "{}", min_raw)?,
        ReportUnit::Volts => write!(out, "{:.2} V", config.calibration.volts(min_raw))?,
    }

    if config.count_samples {
        write!(out, " ({})", samples)?;
    }

    out.write_str(severity.marker())
}

/// Emit the startup banner: a leading blank line, the channel/unit line,
/// then one line per configured threshold with the voltage to two
/// decimals.
pub fn write_banner<S: ReportSink>(sink: &mut S, config: &MonitorConfig) {
    let mut line: String<MAX_LINE_LEN> = String::new();

    sink.write_line("");

    // Overflow only truncates the line; the sink is lossy by contract.
    let _ = write!(
        line,
        "{}: log min {} on pin {}.",
        BANNER_TAG,
        config.unit.describe(),
        config.channel_name
    );
    sink.write_line(&line);

    if let Some(error) = config.thresholds.error_volts {
        line.clear();
        let _ = write!(line, "Highlight errors below {:.2} V.", error);
        sink.write_line(&line);
    }

    if let Some(warning) = config.thresholds.warning_volts {
        line.clear();
        let _ = write!(line, "Warn below {:.2} V.", warning);
        sink.write_line(&line);
    }
}
