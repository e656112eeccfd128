//! Integration tests for the monitor loop
//!
//! Drives the full sample/classify/report cycle through scripted
//! collaborators and a settable clock, checking output text and cadence
//! against the stock tunables.

mod common;

use common::{ScriptedSource, SharedSink, SharedStrand};

use sagwatch_core::time::FixedTime;
use sagwatch_core::{
    ConfigError, Monitor, MonitorConfig, ReportUnit, Rgb, Severity, Thresholds,
};

#[test]
fn banner_then_first_report() {
    let clock = FixedTime::new(0);
    let sink = SharedSink::new();
    let mut monitor = Monitor::new(
        MonitorConfig::default(),
        ScriptedSource::new(&[1000]),
        sink.clone(),
        &clock,
    )
    .unwrap();

    monitor.start();
    assert_eq!(
        sink.lines(),
        vec![
            "",
            "sagwatch: log min voltage on pin A1.",
            "Highlight errors below 2.89 V.",
            "Warn below 3.00 V.",
        ]
    );
    sink.clear();

    // Base cadence is 4 s; the boundary itself does not fire.
    clock.set(4000);
    monitor.tick();
    assert!(sink.lines().is_empty());

    clock.set(4001);
    monitor.tick();
    assert_eq!(sink.lines(), vec!["3.22 V"]);
}

#[test]
fn error_state_tightens_cadence() {
    let clock = FixedTime::new(0);
    let sink = SharedSink::new();
    let mut monitor = Monitor::new(
        MonitorConfig::default(),
        ScriptedSource::new(&[850]), // 2.74 V, under the error level
        sink.clone(),
        &clock,
    )
    .unwrap();
    monitor.start();
    sink.clear();

    clock.set(1);
    monitor.tick();
    assert_eq!(monitor.window().severity(), Severity::Error);

    // Well before the 4 s base period, but past the 200 ms error period.
    clock.set(100);
    monitor.tick();
    assert!(sink.lines().is_empty());

    clock.set(201);
    monitor.tick();
    assert_eq!(sink.lines(), vec!["2.74 V !!!!"]);
}

#[test]
fn warning_state_uses_warning_cadence() {
    let clock = FixedTime::new(0);
    let sink = SharedSink::new();
    let mut monitor = Monitor::new(
        MonitorConfig::default(),
        ScriptedSource::new(&[920]), // 2.96 V, between the two levels
        sink.clone(),
        &clock,
    )
    .unwrap();
    monitor.start();
    sink.clear();

    clock.set(900);
    monitor.tick();
    assert_eq!(monitor.window().severity(), Severity::Warning);
    assert!(sink.lines().is_empty());

    clock.set(1001);
    monitor.tick();
    assert_eq!(sink.lines(), vec!["2.96 V ??"]);
}

#[test]
fn severity_holds_until_window_reset() {
    let clock = FixedTime::new(0);
    let sink = SharedSink::new();
    let mut monitor = Monitor::new(
        MonitorConfig::default(),
        // One sagging sample, then a healthy supply.
        ScriptedSource::new(&[850, 1023]),
        sink.clone(),
        &clock,
    )
    .unwrap();
    monitor.start();
    sink.clear();

    clock.set(1);
    monitor.tick();
    clock.set(100);
    monitor.tick();

    // Healthy samples since, but the window still reports the sag.
    assert_eq!(monitor.window().severity(), Severity::Error);
    clock.set(201);
    monitor.tick();
    assert_eq!(sink.lines(), vec!["2.74 V !!!!"]);
    sink.clear();

    // The next window starts clean: healthy minimum, base cadence.
    assert_eq!(monitor.window().severity(), Severity::Normal);
    clock.set(4202);
    monitor.tick();
    assert_eq!(sink.lines(), vec!["3.30 V"]);
}

#[test]
fn raw_mode_with_sample_count() {
    let config = MonitorConfig {
        unit: ReportUnit::AdCounts,
        count_samples: true,
        thresholds: Thresholds::disabled(),
        ..MonitorConfig::default()
    };

    let clock = FixedTime::new(0);
    let sink = SharedSink::new();
    let mut monitor = Monitor::new(config, ScriptedSource::new(&[500]), sink.clone(), &clock).unwrap();
    monitor.start();
    sink.clear();

    // Eleven quiet ticks, then one past the period: twelve samples total.
    for i in 1..=11 {
        clock.set(i * 300);
        monitor.tick();
    }
    assert!(sink.lines().is_empty());

    clock.set(4001);
    monitor.tick();
    assert_eq!(sink.lines(), vec!["500 (12)"]);
}

#[test]
fn disabled_thresholds_never_escalate() {
    let config = MonitorConfig {
        thresholds: Thresholds::disabled(),
        ..MonitorConfig::default()
    };

    let clock = FixedTime::new(0);
    let sink = SharedSink::new();
    let mut monitor = Monitor::new(config, ScriptedSource::new(&[100]), sink.clone(), &clock).unwrap();
    monitor.start();
    sink.clear();

    // 0.32 V would be a hard error with thresholds on; here it is just a
    // number, on the base cadence with no marker.
    clock.set(1001);
    monitor.tick();
    assert_eq!(monitor.window().severity(), Severity::Normal);
    assert!(sink.lines().is_empty());

    clock.set(4001);
    monitor.tick();
    assert_eq!(sink.lines(), vec!["0.32 V"]);
}

#[test]
fn error_boundary_is_inclusive() {
    let clock = FixedTime::new(0);
    let sink = SharedSink::new();
    let mut monitor = Monitor::new(
        MonitorConfig::default(),
        ScriptedSource::new(&[896]), // 2.8875 V, at or under 2.89 V
        sink.clone(),
        &clock,
    )
    .unwrap();
    monitor.start();
    sink.clear();

    clock.set(201);
    monitor.tick();
    assert_eq!(sink.lines(), vec!["2.89 V !!!!"]);
}

#[test]
fn just_above_error_level_is_a_warning() {
    let clock = FixedTime::new(0);
    let sink = SharedSink::new();
    let mut monitor = Monitor::new(
        MonitorConfig::default(),
        // 897 counts is 2.8907 V: prints as 2.89 but sits strictly above
        // the 2.89 V error level, so only the warning tier triggers.
        ScriptedSource::new(&[897]),
        sink.clone(),
        &clock,
    )
    .unwrap();
    monitor.start();
    sink.clear();

    clock.set(300);
    monitor.tick();
    assert_eq!(monitor.window().severity(), Severity::Warning);

    clock.set(1001);
    monitor.tick();
    assert_eq!(sink.lines(), vec!["2.89 V ??"]);
}

#[test]
fn indicator_follows_reported_severity() {
    let clock = FixedTime::new(0);
    let sink = SharedSink::new();
    let strand = SharedStrand::new();
    let mut monitor = Monitor::with_indicator(
        MonitorConfig::default(),
        ScriptedSource::new(&[850, 1000]),
        sink.clone(),
        &clock,
        strand.clone(),
    )
    .unwrap();

    // Construction runs the self-test flash before anything else.
    assert_eq!(strand.flushed_colors(), vec![Rgb::VIOLET_RED]);

    monitor.start();

    clock.set(1);
    monitor.tick();
    clock.set(201);
    monitor.tick();
    assert_eq!(strand.flushed_colors(), vec![Rgb::VIOLET_RED, Rgb::RED]);

    // Second window is healthy; its report turns the pixel blue.
    clock.set(4202);
    monitor.tick();
    assert_eq!(
        strand.flushed_colors(),
        vec![Rgb::VIOLET_RED, Rgb::RED, Rgb::BLUE]
    );
}

#[test]
fn misordered_thresholds_rejected_at_construction() {
    let mut config = MonitorConfig::default();
    config.thresholds.warning_volts = Some(2.5);
    config.thresholds.error_volts = Some(2.9);

    let clock = FixedTime::new(0);
    let result = Monitor::new(
        config,
        ScriptedSource::new(&[0]),
        SharedSink::new(),
        &clock,
    );
    assert!(matches!(
        result.err(),
        Some(ConfigError::ThresholdOrder { .. })
    ));
}
