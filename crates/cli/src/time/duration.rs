// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tudor Bosman

//! Duration string parsing.
//!
//! A duration is a sequence of `<number><unit>` components, optionally
//! separated by whitespace, that are summed:
//! - `"90"` → 90 seconds (no unit means seconds)
//! - `"1h30m"` → 5400 seconds
//! - `"1.5h"` → 5400 seconds
//! - `"1h -30m"` → 1800 seconds
//! - `"2 weeks 1d"` → 15 days

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::TimeDelta;
use regex::Regex;

use super::ParseError;

/// One component: a float literal followed by an optional unit token.
///
/// The unit token excludes digits so that components can be written
/// back to back (`1h30m`).
#[allow(clippy::expect_used)]
static COMPONENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*([-+]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][-+]?[0-9]+)?)\s*([^\W\d]*)\s*",
    )
    .expect("valid regex")
});

/// Abbreviation → unit name. Lookup is case-insensitive.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("h", "hours"),
    ("m", "minutes"),
    ("min", "minutes"),
    ("s", "seconds"),
    ("sec", "seconds"),
    ("ms", "milliseconds"),
    ("us", "microseconds"),
    ("d", "days"),
    ("w", "weeks"),
];

/// Units a duration component may be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
    Microseconds,
}

impl TimeUnit {
    /// Length of one unit in microseconds.
    pub const fn micros(self) -> i64 {
        match self {
            TimeUnit::Weeks => 7 * 86_400_000_000,
            TimeUnit::Days => 86_400_000_000,
            TimeUnit::Hours => 3_600_000_000,
            TimeUnit::Minutes => 60_000_000,
            TimeUnit::Seconds => 1_000_000,
            TimeUnit::Milliseconds => 1_000,
            TimeUnit::Microseconds => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            TimeUnit::Weeks => "weeks",
            TimeUnit::Days => "days",
            TimeUnit::Hours => "hours",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Seconds => "seconds",
            TimeUnit::Milliseconds => "milliseconds",
            TimeUnit::Microseconds => "microseconds",
        }
    }

    /// Resolve a unit token: abbreviations first, then the full unit name.
    ///
    /// An empty token means seconds.
    pub fn resolve(token: &str) -> Result<TimeUnit, String> {
        if token.is_empty() {
            return Ok(TimeUnit::Seconds);
        }
        let token = token.to_ascii_lowercase();
        let name = ABBREVIATIONS
            .iter()
            .find(|(abbrev, _)| *abbrev == token)
            .map_or(token.as_str(), |&(_, name)| name);
        name.parse()
    }
}

impl FromStr for TimeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weeks" => Ok(TimeUnit::Weeks),
            "days" => Ok(TimeUnit::Days),
            "hours" => Ok(TimeUnit::Hours),
            "minutes" => Ok(TimeUnit::Minutes),
            "seconds" => Ok(TimeUnit::Seconds),
            "milliseconds" => Ok(TimeUnit::Milliseconds),
            "microseconds" => Ok(TimeUnit::Microseconds),
            _ => Err(format!("unknown unit {s:?}")),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert one component to whole microseconds, rounding half to even.
fn component_micros(value: f64, unit: TimeUnit) -> Option<i128> {
    let micros = (value * unit.micros() as f64).round_ties_even();
    if !micros.is_finite() || micros.abs() > i64::MAX as f64 {
        return None;
    }
    Some(micros as i128)
}

/// Parse a duration string into a signed duration.
///
/// Fails unless the entire input is consumed by number+unit components.
pub fn parse_duration(text: &str) -> Result<TimeDelta, ParseError> {
    if text.is_empty() {
        return Err(ParseError::malformed(text, "empty duration string"));
    }

    let mut total: i128 = 0;
    let mut start = 0;
    while start < text.len() {
        let rest = &text[start..];
        let caps = COMPONENT_PATTERN
            .captures(rest)
            .ok_or_else(|| ParseError::malformed(text, format!("unexpected text at {rest:?}")))?;

        let number = caps.get(1).map_or("", |m| m.as_str());
        let value: f64 = number
            .parse()
            .map_err(|_| ParseError::malformed(text, format!("invalid number {number:?}")))?;

        let token = caps.get(2).map_or("", |m| m.as_str());
        let unit = TimeUnit::resolve(token).map_err(|reason| ParseError::malformed(text, reason))?;

        let micros = component_micros(value, unit)
            .ok_or_else(|| ParseError::malformed(text, format!("{number} {unit} is out of range")))?;
        total += micros;

        start += caps.get(0).map_or(0, |m| m.end());
    }

    i64::try_from(total)
        .map(TimeDelta::microseconds)
        .map_err(|_| ParseError::malformed(text, "duration is out of range"))
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
