// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tudor Bosman

//! Flexible parsing of human-written date/time and duration values.
//!
//! Both parsers are pure: they consult only process-wide constant tables
//! and never log or perform I/O.

pub mod datetime;
pub mod duration;

pub use datetime::{TEMPLATES, Template, TemplateKind, match_template, parse_datetime};
pub use duration::{ABBREVIATIONS, TimeUnit, parse_duration};

/// Errors produced by the time parsers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input matched none of the calendar templates.
    #[error("unrecognized date/time format: {input:?}")]
    UnrecognizedFormat { input: String },

    /// Input is not a sequence of number+unit components.
    #[error("malformed duration {input:?}: {reason}")]
    MalformedDuration { input: String, reason: String },
}

impl ParseError {
    pub(crate) fn malformed(input: &str, reason: impl Into<String>) -> Self {
        ParseError::MalformedDuration {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// The original input string.
    pub fn input(&self) -> &str {
        match self {
            ParseError::UnrecognizedFormat { input } | ParseError::MalformedDuration { input, .. } => {
                input
            }
        }
    }
}
