//! The monitor loop driver
//!
//! One `Monitor` owns the whole system state: the configuration, the
//! single reading window, and the platform collaborators. Control flow per
//! iteration: sample once, give the indicator its tick, then check whether
//! the active report period has elapsed.
//!
//! Sampling rate is deliberately not fixed. One conversion happens per
//! `tick`, so density is whatever the caller's loop achieves; imposing a
//! timer here would change the windowed-minimum statistics.

use heapless::String;

use crate::config::MonitorConfig;
use crate::errors::ConfigResult;
use crate::hal::{AnalogSource, PixelStrand, ReportSink};
use crate::indicator::{NoPixel, StatusIndicator};
use crate::report::{self, MAX_LINE_LEN};
use crate::time::{Clock, Timestamp};
use crate::window::ReadingWindow;

/// Single-channel voltage-sag monitor.
///
/// Generic over its collaborators so firmware, host rigs, and tests all
/// drive the same core. The pixel type defaults to [`NoPixel`]; the
/// extended variant plugs a real strand in via
/// [`with_indicator`](Monitor::with_indicator).
pub struct Monitor<A, S, C, P = NoPixel>
where
    A: AnalogSource,
    S: ReportSink,
    C: Clock,
    P: PixelStrand,
{
    config: MonitorConfig,
    source: A,
    sink: S,
    clock: C,
    window: ReadingWindow,
    indicator: Option<StatusIndicator<P>>,
}

impl<A, S, C> Monitor<A, S, C>
where
    A: AnalogSource,
    S: ReportSink,
    C: Clock,
{
    /// Build the plain variant, without a status LED.
    ///
    /// Fails only on a contradictory configuration; once constructed, the
    /// loop has no error paths.
    pub fn new(config: MonitorConfig, source: A, sink: S, clock: C) -> ConfigResult<Self> {
        config.validate()?;
        let window = ReadingWindow::new(clock.now());
        Ok(Self {
            config,
            source,
            sink,
            clock,
            window,
            indicator: None,
        })
    }
}

impl<A, S, C, P> Monitor<A, S, C, P>
where
    A: AnalogSource,
    S: ReportSink,
    C: Clock,
    P: PixelStrand,
{
    /// Build the extended variant with a status pixel.
    ///
    /// The indicator runs its full-brightness self-test flash immediately.
    pub fn with_indicator(
        config: MonitorConfig,
        source: A,
        sink: S,
        clock: C,
        strand: P,
    ) -> ConfigResult<Self> {
        config.validate()?;
        let now = clock.now();
        let indicator = StatusIndicator::new(strand, now);
        let window = ReadingWindow::new(now);
        Ok(Self {
            config,
            source,
            sink,
            clock,
            window,
            indicator: Some(indicator),
        })
    }

    /// Emit the startup banner and open the first window.
    pub fn start(&mut self) {
        report::write_banner(&mut self.sink, &self.config);
        self.window.reset(self.clock.now());
    }

    /// One loop iteration: sample, indicator tick, maybe report.
    ///
    /// Must be called exactly once per loop pass; calling it more or less
    /// often changes sampling density, which is an accepted property of
    /// the design.
    pub fn tick(&mut self) {
        self.sample();

        let now = self.clock.now();
        if let Some(indicator) = self.indicator.as_mut() {
            indicator.fade_tick(now);
        }
        self.maybe_report(now);
    }

    /// Run the cooperative loop forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.tick();
        }
    }

    /// Current window state, for host-side inspection.
    pub fn window(&self) -> &ReadingWindow {
        &self.window
    }

    /// Read the analog input once, fold it into the window, and classify.
    ///
    /// Classification looks at the fresh sample. Escalation is monotone,
    /// so by the time a value has become the window minimum its severity
    /// has already been applied.
    fn sample(&mut self) {
        let raw = self.source.read();
        self.window.accumulate(raw);

        let classified = self
            .config
            .thresholds
            .classify(self.config.calibration.volts(raw));

        #[cfg(feature = "log")]
        if classified > self.window.severity() {
            log::debug!("escalating to {:?} on raw sample {}", classified, raw);
        }

        self.window.escalate(classified);
    }

    /// Emit a report and reset the window once the active period elapses.
    fn maybe_report(&mut self, now: Timestamp) {
        let severity = self.window.severity();
        let period_ms = self.config.periods.for_severity(severity);
        if self.window.elapsed(now) <= period_ms {
            return;
        }

        if let Some(min_raw) = self.window.min_raw() {
            let mut line: String<MAX_LINE_LEN> = String::new();
            if report::write_report_line(
                &mut line,
                &self.config,
                min_raw,
                self.window.samples(),
                severity,
            )
            .is_ok()
            {
                self.sink.write_line(&line);
            }

            #[cfg(feature = "log")]
            log::trace!(
                "report emitted: min {} over {} sample(s), severity {:?}",
                min_raw,
                self.window.samples(),
                severity
            );
        }

        self.window.reset(now);

        // Recolor with the severity that was just reported; the fresh
        // window is Normal by definition.
        if let Some(indicator) = self.indicator.as_mut() {
            indicator.refresh(severity);
        }
    }
}
