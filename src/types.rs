//! Type definitions and constants for the month grid model.

use chrono::{Month, NaiveDate, Weekday};
use serde::Serialize;

// Constants for grid layout
pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKS_PER_GRID: usize = 6;
pub const CELLS_PER_GRID: usize = DAYS_PER_WEEK * WEEKS_PER_GRID; // 42

/// Pattern used for every cell `date` string.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

// Configuration defaults
pub const DEFAULT_MONTH: Month = Month::January;
pub const DEFAULT_YEAR: i64 = 2023;
pub const DEFAULT_FIRST_DAY_OF_WEEK: Weekday = Weekday::Sun;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_DIM: &str = "\x1b[2m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";

/// Canonical month names, index 0 = January.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Canonical weekday names in Monday-first order.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// The fixed Monday-first weekday sequence that every header row is a rotation of.
pub const CANONICAL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn month_name(month: Month) -> &'static str {
    MONTH_NAMES[month.number_from_month() as usize - 1]
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_monday() as usize]
}

/// Facts about the displayed month and its neighbours, rebuilt on every grid build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBoundaryFacts {
    pub current_month_first_day: NaiveDate,
    pub current_month_first_weekday: Weekday,
    pub current_month_total_days: u32,
    pub prev_month: Month,
    pub prev_month_total_days: u32,
    /// Always the day before `current_month_first_day`.
    pub prev_month_last_day: NaiveDate,
    pub next_month: Month,
    pub next_month_year: i32,
    /// Always day 1 of the month following `current_month_first_day`.
    pub next_month_first_day: NaiveDate,
}

impl MonthBoundaryFacts {
    pub fn current_month_first_weekday_name(&self) -> &'static str {
        weekday_name(self.current_month_first_weekday)
    }

    pub fn prev_month_name(&self) -> &'static str {
        month_name(self.prev_month)
    }

    pub fn next_month_name(&self) -> &'static str {
        month_name(self.next_month)
    }
}

/// One day slot of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    /// Formatted `YYYY-MM-DD` string produced by the configured date formatter.
    pub date: String,
    pub day_of_month: u32,
    pub is_prev_month: bool,
    pub is_current_month: bool,
    pub is_next_month: bool,
    pub is_today: bool,
}

/// Exactly 42 cells, weeks-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CalendarGrid {
    cells: Vec<CalendarCell>,
}

impl CalendarGrid {
    pub(crate) fn from_cells(cells: Vec<CalendarCell>) -> Self {
        debug_assert_eq!(cells.len(), CELLS_PER_GRID);
        CalendarGrid { cells }
    }

    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CalendarCell> {
        self.cells.iter()
    }

    /// Rows of 7 cells, first row starting with the configured first day of week.
    pub fn weeks(&self) -> std::slice::Chunks<'_, CalendarCell> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn into_cells(self) -> Vec<CalendarCell> {
        self.cells
    }
}

impl std::ops::Index<usize> for CalendarGrid {
    type Output = CalendarCell;

    fn index(&self, index: usize) -> &CalendarCell {
        &self.cells[index]
    }
}

impl<'a> IntoIterator for &'a CalendarGrid {
    type Item = &'a CalendarCell;
    type IntoIter = std::slice::Iter<'a, CalendarCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
