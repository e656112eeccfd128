//! Collaborator traits
//!
//! The monitor core never touches hardware. These traits are the seams to
//! the platform: an A/D converter, a line-oriented serial port, and (for
//! the extended variant) a single-pixel addressable LED strand. Keep them
//! simple - implementations should be thin shims over the platform HAL.

use crate::indicator::Rgb;

/// One analog input channel.
pub trait AnalogSource {
    /// Run one conversion and return the raw result.
    ///
    /// Treated as synchronous and always successful. The monitor accepts
    /// whatever comes back, out-of-range values included.
    fn read(&mut self) -> u16;
}

/// Line-oriented text output.
pub trait ReportSink {
    /// Write one line; the transport adds the terminator.
    ///
    /// Fire-and-forget: no acknowledgement, no backpressure. If the
    /// channel is momentarily unavailable the line is simply lost.
    fn write_line(&mut self, line: &str);
}

/// Single-pixel addressable LED strand.
pub trait PixelStrand {
    /// Set global strand brightness.
    fn set_brightness(&mut self, level: u8);

    /// Stage a color on the pixel.
    fn set_pixel(&mut self, color: Rgb);

    /// Push staged state out to the hardware.
    fn flush(&mut self);
}
