// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tudor Bosman

//! Point-in-time parsing against a fixed, ordered list of calendar templates.
//!
//! Templates are tried top to bottom and the first one that consumes the
//! whole input wins. Where a template has a space, the input needs at
//! least one whitespace character:
//!
//! | # | Layout | Example |
//! |---|--------|---------|
//! | 1 | `%a %b %d %H:%M:%S %Y` | `Wed Jan 02 15:04:05 2006` |
//! | 2 | `%Y-%m-%d %H:%M:%S` | `2023-06-15 13:45:00` |
//! | 3 | `%Y-%m-%d %H:%M` | `2023-06-15 13:45` |
//! | 4 | `%Y-%m-%dT%H:%M` | `2023-06-15T13:45` |
//! | 5 | `%Y%m%d %H:%M:%S` | `20230615 13:45:00` |
//! | 6 | `%Y%m%d %H:%M` | `20230615 13:45` |
//! | 7 | `%Y-%m-%d` | `2023-06-15` |
//! | 8 | `%Y%m%d` | `20230615` |
//! | 9 | `%H:%M:%S` | `13:45:00` |
//! | 10 | `%H:%M` | `13:45` |

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use regex::Regex;

use super::ParseError;

/// Which calendar fields a template carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Abbreviated weekday name, then date and time. The weekday must be a
    /// valid name but is not checked against the date.
    WeekdayDateTime,
    /// Date and time of day.
    DateTime,
    /// Date only; time of day is midnight.
    Date,
    /// Time of day only; date is 1900-01-01.
    Time,
}

/// A calendar format template in chrono strftime syntax.
///
/// `shape` is an anchored regex the whole input must match before chrono
/// sees it: chrono lets a space match no whitespace at all and lets `%Y`
/// take a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub format: &'static str,
    pub kind: TemplateKind,
    pub shape: &'static str,
}

impl Template {
    const fn new(format: &'static str, kind: TemplateKind, shape: &'static str) -> Self {
        Self {
            format,
            kind,
            shape,
        }
    }

    /// Parse `text`, which already matches this template's shape.
    fn parse(&self, text: &str) -> Option<NaiveDateTime> {
        match self.kind {
            TemplateKind::WeekdayDateTime => {
                let (weekday, rest) = text.split_once(char::is_whitespace)?;
                weekday.parse::<Weekday>().ok()?;
                let format = self.format.strip_prefix("%a ")?;
                NaiveDateTime::parse_from_str(rest.trim_start(), format).ok()
            }
            TemplateKind::DateTime => NaiveDateTime::parse_from_str(text, self.format).ok(),
            TemplateKind::Date => NaiveDate::parse_from_str(text, self.format)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN)),
            TemplateKind::Time => {
                let time = NaiveTime::parse_from_str(text, self.format).ok()?;
                NaiveDate::from_ymd_opt(1900, 1, 1).map(|date| date.and_time(time))
            }
        }
    }
}

/// Supported templates, in resolution order.
pub const TEMPLATES: &[Template] = &[
    Template::new(
        "%a %b %d %H:%M:%S %Y",
        TemplateKind::WeekdayDateTime,
        r"^[A-Za-z]{3}\s+[A-Za-z]{3}\s+[0-9]{1,2}\s+[0-9]{1,2}:[0-9]{1,2}:[0-9]{1,2}\s+[0-9]{4}$",
    ),
    Template::new(
        "%Y-%m-%d %H:%M:%S",
        TemplateKind::DateTime,
        r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}\s+[0-9]{1,2}:[0-9]{1,2}:[0-9]{1,2}$",
    ),
    Template::new(
        "%Y-%m-%d %H:%M",
        TemplateKind::DateTime,
        r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}\s+[0-9]{1,2}:[0-9]{1,2}$",
    ),
    Template::new(
        "%Y-%m-%dT%H:%M",
        TemplateKind::DateTime,
        r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}T[0-9]{1,2}:[0-9]{1,2}$",
    ),
    Template::new(
        "%Y%m%d %H:%M:%S",
        TemplateKind::DateTime,
        r"^[0-9]{8}\s+[0-9]{1,2}:[0-9]{1,2}:[0-9]{1,2}$",
    ),
    Template::new(
        "%Y%m%d %H:%M",
        TemplateKind::DateTime,
        r"^[0-9]{8}\s+[0-9]{1,2}:[0-9]{1,2}$",
    ),
    Template::new(
        "%Y-%m-%d",
        TemplateKind::Date,
        r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$",
    ),
    Template::new("%Y%m%d", TemplateKind::Date, r"^[0-9]{8}$"),
    Template::new(
        "%H:%M:%S",
        TemplateKind::Time,
        r"^[0-9]{1,2}:[0-9]{1,2}:[0-9]{1,2}$",
    ),
    Template::new("%H:%M", TemplateKind::Time, r"^[0-9]{1,2}:[0-9]{1,2}$"),
];

/// Compiled `shape` of each entry in [`TEMPLATES`], same order.
#[allow(clippy::expect_used)]
static SHAPES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    TEMPLATES
        .iter()
        .map(|template| Regex::new(template.shape).expect("valid regex"))
        .collect()
});

/// Find the first template that fully matches `text`.
pub fn match_template(text: &str) -> Option<(&'static Template, NaiveDateTime)> {
    TEMPLATES
        .iter()
        .zip(SHAPES.iter())
        .filter(|(_, shape)| shape.is_match(text))
        .find_map(|(template, _)| template.parse(text).map(|parsed| (template, parsed)))
}

/// Parse a date/time string in any of the supported layouts.
pub fn parse_datetime(text: &str) -> Result<NaiveDateTime, ParseError> {
    match_template(text)
        .map(|(_, parsed)| parsed)
        .ok_or_else(|| ParseError::UnrecognizedFormat {
            input: text.to_string(),
        })
}

#[cfg(test)]
#[path = "datetime_tests.rs"]
mod tests;
