// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tudor Bosman

//! Pool health classification and summary.
//!
//! Raw `zpool` health strings are mapped onto three ordered severities.
//! Each pool is logged at a level matching its severity and the summary
//! is logged at the worst level seen.

use std::fmt;

use crate::error::{ExitCode, Result};
use crate::zfs::{CommandRunner, Zfs};

/// Pool severity, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Healthy,
    Degraded,
    Unavailable,
}

impl Severity {
    /// All severities, best first.
    pub const ALL: [Severity; 3] = [Severity::Healthy, Severity::Degraded, Severity::Unavailable];

    /// Log level used when reporting this severity.
    pub const fn level(self) -> tracing::Level {
        match self {
            Severity::Healthy => tracing::Level::INFO,
            Severity::Degraded => tracing::Level::WARN,
            Severity::Unavailable => tracing::Level::ERROR,
        }
    }

    pub const fn exit_code(self) -> ExitCode {
        match self {
            Severity::Healthy => ExitCode::Healthy,
            Severity::Degraded => ExitCode::Degraded,
            Severity::Unavailable => ExitCode::Unavailable,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Healthy => f.write_str("healthy"),
            Severity::Degraded => f.write_str("degraded"),
            Severity::Unavailable => f.write_str("unavailable"),
        }
    }
}

/// `zpool` health → severity. `REMOVED` is handled separately.
const HEALTH_MAP: &[(&str, Severity)] = &[
    ("DEGRADED", Severity::Degraded),
    ("FAULTED", Severity::Unavailable),
    ("OFFLINE", Severity::Healthy),
    ("ONLINE", Severity::Healthy),
    ("UNAVAIL", Severity::Unavailable),
];

/// Classify a raw health string.
///
/// `REMOVED` pools count as healthy only when removable media is allowed.
/// Unknown states are logged and treated as unavailable.
pub fn classify(health: &str, allow_removable: bool) -> Severity {
    if health == "REMOVED" {
        return if allow_removable {
            Severity::Healthy
        } else {
            Severity::Unavailable
        };
    }

    match HEALTH_MAP.iter().find(|(state, _)| *state == health) {
        Some(&(_, severity)) => severity,
        None => {
            tracing::error!("Unknown pool health {}", health);
            Severity::Unavailable
        }
    }
}

/// Emit `message` at the level associated with `severity`.
fn log_at(severity: Severity, message: fmt::Arguments<'_>) {
    let level = severity.level();
    if level == tracing::Level::ERROR {
        tracing::error!("{}", message);
    } else if level == tracing::Level::WARN {
        tracing::warn!("{}", message);
    } else {
        tracing::info!("{}", message);
    }
}

/// Classification of one pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolStatus {
    pub pool: String,
    pub health: String,
    pub severity: Severity,
}

/// Accumulated classifications for a set of pools.
#[derive(Debug, Clone, Default)]
pub struct HealthReport {
    pools: Vec<PoolStatus>,
    counts: [usize; 3],
}

impl HealthReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify and record one pool, logging the result.
    pub fn record(&mut self, pool: &str, health: &str, allow_removable: bool) -> Severity {
        let severity = classify(health, allow_removable);
        log_at(
            severity,
            format_args!("Pool \"{}\": {} ({})", pool, severity, health),
        );

        self.counts[severity.index()] += 1;
        self.pools.push(PoolStatus {
            pool: pool.to_string(),
            health: health.to_string(),
            severity,
        });
        severity
    }

    pub fn pools(&self) -> &[PoolStatus] {
        &self.pools
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.counts[severity.index()]
    }

    /// Worst severity recorded; healthy when nothing was recorded.
    pub fn worst(&self) -> Severity {
        self.pools
            .iter()
            .map(|p| p.severity)
            .max()
            .unwrap_or(Severity::Healthy)
    }

    /// e.g. `"2 healthy, 0 degraded, 1 unavailable"`.
    pub fn summary(&self) -> String {
        Severity::ALL
            .iter()
            .map(|&s| format!("{} {}", self.count(s), s))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Log the summary at the worst level seen.
    pub fn log_summary(&self) {
        log_at(self.worst(), format_args!("Summary: {}", self.summary()));
    }

    pub fn exit_code(&self) -> ExitCode {
        self.worst().exit_code()
    }
}

/// Query `zpool` for the given pools (all pools when empty) and classify each.
pub fn check_pools<R: CommandRunner>(
    zfs: &Zfs<R>,
    pools: &[String],
    allow_removable: bool,
) -> Result<HealthReport> {
    let health = zfs.list_pool_health(pools)?;

    let mut report = HealthReport::new();
    for (pool, state) in &health {
        report.record(pool, state, allow_removable);
    }
    Ok(report)
}

#[cfg(test)]
#[path = "health_tests.rs"]
mod tests;
