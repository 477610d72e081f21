// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tudor Bosman

use std::path::PathBuf;

use crate::time::ParseError;

/// zcheck error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// External command could not be started.
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// External command exited unsuccessfully.
    #[error("command failed ({status}): {command}{}", format_stderr(.stderr))]
    Command {
        command: String,
        status: String,
        stderr: String,
    },

    /// External command produced output we could not interpret.
    #[error("unexpected output from {command}: {output:?}")]
    UnexpectedOutput { command: String, output: String },

    /// Date/time or duration value could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

fn format_stderr(stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        String::new()
    } else {
        format!("\n  {stderr}")
    }
}

/// Result type using zcheck Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
///
/// Health outcomes occupy 0-2; anything that prevented a check from
/// completing is 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum ExitCode {
    /// All checked pools are healthy (or none were checked)
    Healthy = 0,
    /// At least one pool is degraded, none unavailable
    Degraded = 1,
    /// At least one pool is unavailable
    Unavailable = 2,
    /// Configuration, command or I/O error
    Error = 3,
}

/// Every error means the check could not complete.
impl From<&Error> for ExitCode {
    fn from(_: &Error) -> Self {
        ExitCode::Error
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
