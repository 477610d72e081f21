// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tudor Bosman

//! ZFS pool health checking, plus flexible date/time and duration parsing
//! for command-line and configuration values.

pub mod cli;
pub mod config;
pub mod error;
pub mod health;
pub mod time;
pub mod zfs;

pub use cli::{CheckArgs, CheckPlan, Cli, Command};
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use health::{HealthReport, PoolStatus, Severity};
pub use time::{ParseError, parse_datetime, parse_duration};
pub use zfs::{CommandRunner, SystemRunner, Zfs};

#[cfg(test)]
pub mod test_utils;
