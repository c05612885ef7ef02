//! Pluggable date formatting and canonical name parsing.
//!
//! Every date string in a grid goes through a [`DateFormatter`]. Hosts with their
//! own calendar conventions can install one on [`crate::config::CalendarConfig`];
//! when none is installed [`LocalDateFormatter`] is used.

use chrono::{Datelike, Month, NaiveDate, Weekday};

use crate::calendar::days_in_month;
use crate::types::{ISO_DATE_FORMAT, MONTH_NAMES, WEEKDAY_NAMES, weekday_name};

/// Formatting tokens a [`DateFormatter`] must understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePattern {
    /// Full weekday name, ie `Monday`.
    WeekdayName,
    /// Full month name, ie `January`.
    MonthName,
    /// Four digit year.
    Year,
    /// Number of days in the date's month.
    DaysInMonth,
    /// `YYYY-MM-DD`.
    IsoDate,
}

/// Strategy for turning a boundary timestamp into text.
pub trait DateFormatter: Send + Sync {
    fn format(&self, pattern: DatePattern, date: NaiveDate) -> String;
}

impl<F> DateFormatter for F
where
    F: Fn(DatePattern, NaiveDate) -> String + Send + Sync,
{
    fn format(&self, pattern: DatePattern, date: NaiveDate) -> String {
        self(pattern, date)
    }
}

/// Default formatter backed by chrono's proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDateFormatter;

impl DateFormatter for LocalDateFormatter {
    fn format(&self, pattern: DatePattern, date: NaiveDate) -> String {
        match pattern {
            DatePattern::WeekdayName => weekday_name(date.weekday()).to_string(),
            DatePattern::MonthName => MONTH_NAMES[date.month0() as usize].to_string(),
            DatePattern::Year => date.format("%Y").to_string(),
            DatePattern::DaysInMonth => days_in_month(date.year(), date.month()).to_string(),
            DatePattern::IsoDate => date.format(ISO_DATE_FORMAT).to_string(),
        }
    }
}

/// Upper-case the first letter and leave the rest untouched (`august` -> `August`).
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Resolve a month name after first-letter normalization. Only full English names match.
pub fn parse_month_name(s: &str) -> Option<Month> {
    let normalized = capitalize_first(s);
    MONTH_NAMES
        .iter()
        .position(|name| *name == normalized)
        .and_then(month_from_index)
}

/// Zero-based month index, 0 = January.
pub fn month_from_index(index: usize) -> Option<Month> {
    if index >= MONTH_NAMES.len() {
        return None;
    }
    Month::try_from(index as u8 + 1).ok()
}

/// Resolve a weekday by its exact canonical name (`Monday` .. `Sunday`).
pub fn parse_weekday_name(s: &str) -> Option<Weekday> {
    WEEKDAY_NAMES
        .iter()
        .position(|name| *name == s)
        .map(|idx| crate::types::CANONICAL_WEEKDAYS[idx])
}
