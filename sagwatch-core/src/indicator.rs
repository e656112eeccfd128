//! Severity indicator on a single RGB pixel
//!
//! The extended monitor variant colors one addressable LED by the severity
//! of each emitted report: blue while healthy, gold after a warning, red
//! after an error. Construction flashes violet-red at full brightness as a
//! self-test before settling at the operating brightness.
//!
//! The fade tick is a reserved hook. It keeps its own cadence bookkeeping
//! but draws nothing yet.

use crate::constants::{defaults::DEFAULT_LED_BRIGHTNESS, time::FADE_TICK_MS};
use crate::hal::PixelStrand;
use crate::severity::Severity;
use crate::time::Timestamp;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Healthy supply.
    pub const BLUE: Self = Self::new(0, 0, 255);
    /// A warning was seen this window.
    pub const GOLD: Self = Self::new(255, 180, 0);
    /// An error was seen this window.
    pub const RED: Self = Self::new(255, 0, 0);
    /// Startup self-test flash.
    pub const VIOLET_RED: Self = Self::new(199, 21, 133);

    /// Construct a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Severity> for Rgb {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Normal => Rgb::BLUE,
            Severity::Warning => Rgb::GOLD,
            Severity::Error => Rgb::RED,
        }
    }
}

/// Driver for the status pixel.
pub struct StatusIndicator<P: PixelStrand> {
    strand: P,
    last_fade_tick: Timestamp,
}

impl<P: PixelStrand> StatusIndicator<P> {
    /// Take ownership of the strand and run the startup self-test: one
    /// immediate full-brightness violet-red flash, then settle at the
    /// operating brightness. The flash stays visible until the first
    /// report recolors the pixel.
    pub fn new(mut strand: P, now: Timestamp) -> Self {
        strand.set_brightness(u8::MAX);
        strand.set_pixel(Rgb::VIOLET_RED);
        strand.flush();
        strand.set_brightness(DEFAULT_LED_BRIGHTNESS);

        Self {
            strand,
            last_fade_tick: now,
        }
    }

    /// Recolor the pixel for the severity just reported.
    ///
    /// Invoked at report-emission instants only, never continuously.
    pub fn refresh(&mut self, severity: Severity) {
        self.strand.set_pixel(Rgb::from(severity));
        self.strand.flush();
    }

    /// Periodic animation tick.
    ///
    /// Currently a visible no-op. The timestamp still advances on each
    /// firing so the interval check stays meaningful once a fade-out
    /// animation lands here.
    pub fn fade_tick(&mut self, now: Timestamp) {
        if now.saturating_sub(self.last_fade_tick) > FADE_TICK_MS {
            self.last_fade_tick = now;
        }
    }

    /// Timestamp of the last fade tick firing.
    pub fn last_fade_tick(&self) -> Timestamp {
        self.last_fade_tick
    }
}

/// Inert strand for builds without a status LED.
///
/// The plain monitor variant uses this as its pixel type, so absence of an
/// indicator just skips the refresh call.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPixel;

impl PixelStrand for NoPixel {
    fn set_brightness(&mut self, _level: u8) {}
    fn set_pixel(&mut self, _color: Rgb) {}
    fn flush(&mut self) {}
}
