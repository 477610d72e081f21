// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tudor Bosman

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::test_utils::FakeRunner;
use yare::parameterized;

#[parameterized(
    online = { "ONLINE", Severity::Healthy },
    offline = { "OFFLINE", Severity::Healthy },
    degraded = { "DEGRADED", Severity::Degraded },
    faulted = { "FAULTED", Severity::Unavailable },
    unavail = { "UNAVAIL", Severity::Unavailable },
    unknown = { "SUSPENDED", Severity::Unavailable },
    lowercase_is_unknown = { "online", Severity::Unavailable },
)]
fn classifies_health(health: &str, expected: Severity) {
    assert_eq!(classify(health, false), expected);
    assert_eq!(classify(health, true), expected);
}

#[test]
fn removed_depends_on_removable() {
    assert_eq!(classify("REMOVED", true), Severity::Healthy);
    assert_eq!(classify("REMOVED", false), Severity::Unavailable);
}

#[test]
fn severities_are_ordered() {
    assert!(Severity::Healthy < Severity::Degraded);
    assert!(Severity::Degraded < Severity::Unavailable);
}

#[parameterized(
    healthy = { Severity::Healthy, tracing::Level::INFO, ExitCode::Healthy, "healthy" },
    degraded = { Severity::Degraded, tracing::Level::WARN, ExitCode::Degraded, "degraded" },
    unavailable = { Severity::Unavailable, tracing::Level::ERROR, ExitCode::Unavailable, "unavailable" },
)]
fn severity_attributes(severity: Severity, level: tracing::Level, code: ExitCode, display: &str) {
    assert_eq!(severity.level(), level);
    assert_eq!(severity.exit_code(), code);
    assert_eq!(severity.to_string(), display);
}

#[test]
fn empty_report_is_healthy() {
    let report = HealthReport::new();
    assert_eq!(report.worst(), Severity::Healthy);
    assert_eq!(report.exit_code(), ExitCode::Healthy);
    assert_eq!(report.summary(), "0 healthy, 0 degraded, 0 unavailable");
}

#[test]
fn report_counts_and_summarizes() {
    let mut report = HealthReport::new();
    report.record("tank", "ONLINE", false);
    report.record("scratch", "OFFLINE", false);
    report.record("backup", "DEGRADED", false);

    assert_eq!(report.count(Severity::Healthy), 2);
    assert_eq!(report.count(Severity::Degraded), 1);
    assert_eq!(report.count(Severity::Unavailable), 0);
    assert_eq!(report.summary(), "2 healthy, 1 degraded, 0 unavailable");
    assert_eq!(report.exit_code(), ExitCode::Degraded);
}

#[test]
fn unavailable_outranks_degraded() {
    let mut report = HealthReport::new();
    report.record("backup", "DEGRADED", false);
    report.record("usb", "REMOVED", false);

    assert_eq!(report.worst(), Severity::Unavailable);
    assert_eq!(report.exit_code(), ExitCode::Unavailable);
}

#[test]
fn record_keeps_pool_details() {
    let mut report = HealthReport::new();
    let severity = report.record("usb", "REMOVED", true);

    assert_eq!(severity, Severity::Healthy);
    assert_eq!(
        report.pools(),
        [PoolStatus {
            pool: "usb".into(),
            health: "REMOVED".into(),
            severity: Severity::Healthy,
        }]
    );
}

#[test]
fn check_pools_classifies_every_listed_pool() {
    let runner = FakeRunner::new().with_output(
        "zpool list -H -oname,health",
        &["tank\tONLINE", "backup\tFAULTED", "usb\tREMOVED"],
    );
    let zfs = Zfs::new(&runner);

    let report = check_pools(&zfs, &[], true).unwrap();
    assert_eq!(report.summary(), "2 healthy, 0 degraded, 1 unavailable");
    assert_eq!(report.exit_code(), ExitCode::Unavailable);
}

#[test]
fn check_pools_propagates_command_errors() {
    let runner = FakeRunner::new();
    let zfs = Zfs::new(&runner);

    let err = check_pools(&zfs, &["tank".to_string()], false).unwrap_err();
    assert!(matches!(err, crate::Error::Spawn { .. }));
    assert_eq!(runner.calls(), ["zpool list -H -oname,health tank"]);
}
