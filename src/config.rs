//! Grid configuration.
//!
//! A [`CalendarConfig`] may hold an invalid month or year while it is being
//! assembled; nothing is checked until [`CalendarConfig::validate`] runs, which
//! [`crate::calendar::CalendarGridBuilder::new`] does exactly once.

use std::fmt;
use std::sync::Arc;

use chrono::{Month, NaiveDate, Weekday};

use crate::error::{CalendarError, Result};
use crate::formatter::{
    DateFormatter, capitalize_first, month_from_index, parse_month_name, parse_weekday_name,
};
use crate::types::{DEFAULT_FIRST_DAY_OF_WEEK, DEFAULT_MONTH, DEFAULT_YEAR, month_name};

/// How the target month was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthSelector {
    /// First-letter-normalized month name.
    Name(String),
    /// Zero-based index, 0 = January.
    Index(usize),
}

impl MonthSelector {
    pub fn resolve(&self) -> Option<Month> {
        match self {
            MonthSelector::Name(name) => parse_month_name(name),
            MonthSelector::Index(index) => month_from_index(*index),
        }
    }
}

impl fmt::Display for MonthSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthSelector::Name(name) => write!(f, "{name:?}"),
            MonthSelector::Index(index) => write!(f, "index {index}"),
        }
    }
}

/// Month and year that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedMonth {
    pub month: Month,
    /// Always four digits, 1000..=9999.
    pub year: i32,
}

/// Everything a grid build depends on.
#[derive(Clone)]
pub struct CalendarConfig {
    pub month: MonthSelector,
    pub year: i64,
    /// Weekday placed in column 0.
    pub first_day_of_week: Weekday,
    /// Date formatter override; `None` selects [`crate::formatter::LocalDateFormatter`].
    pub formatter: Option<Arc<dyn DateFormatter>>,
    /// Date treated as "today"; `None` reads the local clock on every build.
    pub today: Option<NaiveDate>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            month: MonthSelector::Name(month_name(DEFAULT_MONTH).to_string()),
            year: DEFAULT_YEAR,
            first_day_of_week: DEFAULT_FIRST_DAY_OF_WEEK,
            formatter: None,
            today: None,
        }
    }
}

impl fmt::Debug for CalendarConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarConfig")
            .field("month", &self.month)
            .field("year", &self.year)
            .field("first_day_of_week", &self.first_day_of_week)
            .field("formatter", &self.formatter.as_ref().map(|_| "<custom>"))
            .field("today", &self.today)
            .finish()
    }
}

impl CalendarConfig {
    /// Configuration for a month given by name, ie `"August"` or `"august"`.
    pub fn from_month_name(name: &str, year: i64) -> Self {
        let mut config = CalendarConfig::default();
        config.set_month_name(name);
        config.set_year(year);
        config
    }

    /// Configuration for a month given by zero-based index (0 = January).
    pub fn from_month_index(index: usize, year: i64) -> Self {
        let mut config = CalendarConfig::default();
        config.set_month_index(index);
        config.set_year(year);
        config
    }

    pub fn set_month_name(&mut self, name: &str) {
        self.month = MonthSelector::Name(capitalize_first(name));
    }

    pub fn set_month_index(&mut self, index: usize) {
        self.month = MonthSelector::Index(index);
    }

    pub fn set_year(&mut self, year: i64) {
        self.year = year;
    }

    /// Coerce textual input to a year the way a lenient integer cast would.
    pub fn set_year_str(&mut self, year: &str) {
        self.year = coerce_year(year);
    }

    /// Fails with [`CalendarError::InvalidArgument`] unless `name` is a canonical weekday name.
    pub fn set_first_day_of_week(&mut self, name: &str) -> Result<()> {
        self.first_day_of_week = parse_weekday_name(name)
            .ok_or_else(|| CalendarError::invalid(format!("invalid first day of week: {name:?}")))?;
        Ok(())
    }

    pub fn set_date_formatter(&mut self, formatter: Arc<dyn DateFormatter>) {
        self.formatter = Some(formatter);
    }

    pub fn clear_date_formatter(&mut self) {
        self.formatter = None;
    }

    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = Some(today);
    }

    /// Check year and month; intermediate invalid states are only rejected here.
    pub fn validate(&self) -> Result<ValidatedMonth> {
        if !(1000..=9999).contains(&self.year) {
            return Err(CalendarError::invalid(format!(
                "invalid year {}, expected YYYY",
                self.year
            )));
        }
        let month = self.month.resolve().ok_or_else(|| {
            CalendarError::invalid(format!(
                "invalid month {}, expected name of the month, ie: January",
                self.month
            ))
        })?;
        Ok(ValidatedMonth {
            month,
            year: self.year as i32,
        })
    }
}

/// Leading optional sign and digits after leading whitespace; anything else yields 0.
pub fn coerce_year(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return 0;
    }
    let value = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    if negative { -value } else { value }
}
