//! Month boundary computation and 42-cell grid assembly (proleptic Gregorian).

use std::sync::Arc;

use chrono::{Datelike, Local, Month, NaiveDate, Weekday};
use tracing::{debug, trace};

use crate::config::{CalendarConfig, ValidatedMonth};
use crate::error::{CalendarError, Result};
use crate::formatter::{DateFormatter, DatePattern, LocalDateFormatter};
use crate::types::{
    CANONICAL_WEEKDAYS, CELLS_PER_GRID, CalendarCell, CalendarGrid, MonthBoundaryFacts,
    month_name, weekday_name,
};

static DEFAULT_FORMATTER: LocalDateFormatter = LocalDateFormatter;

/// Gregorian rule: divisible by 4, except centuries unless divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

/// Calculate weekday of the 1st using Zeller's congruence.
pub fn first_day_of_month(year: i32, month: u32) -> Weekday {
    let m = if month < 3 { month + 12 } else { month };
    let q: i32 = 1;
    let year_i = if month < 3 { year - 1 } else { year };
    let k: i32 = year_i.rem_euclid(100);
    let j: i32 = year_i.div_euclid(100);

    let h = (q + (13 * (m as i32 + 1)) / 5 + k + k / 4 + j / 4 - 2 * j).rem_euclid(7);
    // h: 0=Sat, 1=Sun, 2=Mon, 3=Tue, 4=Wed, 5=Thu, 6=Fri
    match h {
        0 => Weekday::Sat,
        1 => Weekday::Sun,
        2 => Weekday::Mon,
        3 => Weekday::Tue,
        4 => Weekday::Wed,
        5 => Weekday::Thu,
        _ => Weekday::Fri,
    }
}

/// Canonical weekday sequence rotated left until `first` sits at index 0.
pub fn rotate_weekdays(first: Weekday) -> [Weekday; 7] {
    let mut order = CANONICAL_WEEKDAYS;
    order.rotate_left(first.num_days_from_monday() as usize);
    order
}

fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(CalendarError::DateOutOfRange { year, month, day })
}

fn month_of(date: NaiveDate) -> Result<Month> {
    Month::try_from(date.month() as u8).map_err(|_| CalendarError::DateOutOfRange {
        year: date.year(),
        month: date.month(),
        day: date.day(),
    })
}

impl MonthBoundaryFacts {
    /// Derive current, previous and next month facts for a validated month.
    pub fn compute(target: ValidatedMonth) -> Result<Self> {
        let year = target.year;
        let month = target.month.number_from_month();

        let current_month_first_day = ymd(year, month, 1)?;
        let current_month_total_days = days_in_month(year, month);

        // Rolls back into December of the previous year for January.
        let prev_month_last_day = current_month_first_day.pred_opt().ok_or(
            CalendarError::DateOutOfRange {
                year,
                month,
                day: 0,
            },
        )?;

        // Rolls forward into January of the next year for December.
        let current_month_last_day = ymd(year, month, current_month_total_days)?;
        let next_month_first_day =
            current_month_last_day
                .succ_opt()
                .ok_or(CalendarError::DateOutOfRange {
                    year,
                    month,
                    day: current_month_total_days + 1,
                })?;

        Ok(MonthBoundaryFacts {
            current_month_first_day,
            current_month_first_weekday: first_day_of_month(year, month),
            current_month_total_days,
            prev_month: month_of(prev_month_last_day)?,
            prev_month_total_days: days_in_month(
                prev_month_last_day.year(),
                prev_month_last_day.month(),
            ),
            prev_month_last_day,
            next_month: month_of(next_month_first_day)?,
            next_month_year: next_month_first_day.year(),
            next_month_first_day,
        })
    }

    /// Build the cell for `date`; the three month flags are mutually exclusive.
    fn cell(&self, date: NaiveDate, formatter: &dyn DateFormatter, today: &str) -> CalendarCell {
        let formatted = formatter.format(DatePattern::IsoDate, date);
        let is_prev_month = date < self.current_month_first_day;
        let is_next_month = date >= self.next_month_first_day;
        CalendarCell {
            is_today: formatted == today,
            date: formatted,
            day_of_month: date.day(),
            is_prev_month,
            is_current_month: !is_prev_month && !is_next_month,
            is_next_month,
        }
    }
}

/// Builds the 42-cell grid for one validated month.
///
/// Month and year are fixed at construction; the first day of week and the
/// date formatter may still change between builds.
#[derive(Debug, Clone)]
pub struct CalendarGridBuilder {
    config: CalendarConfig,
    target: ValidatedMonth,
}

impl CalendarGridBuilder {
    /// Validate `config` and wrap it. Fails with [`CalendarError::InvalidArgument`]
    /// for a year that is not four digits or a month that does not resolve.
    pub fn new(config: CalendarConfig) -> Result<Self> {
        let target = config.validate()?;
        debug!(
            month = month_name(target.month),
            year = target.year,
            first_day_of_week = weekday_name(config.first_day_of_week),
            "validated calendar configuration"
        );
        Ok(CalendarGridBuilder { config, target })
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn month(&self) -> Month {
        self.target.month
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.target.month)
    }

    pub fn year(&self) -> i32 {
        self.target.year
    }

    pub fn first_day_of_week(&self) -> Weekday {
        self.config.first_day_of_week
    }

    pub fn set_first_day_of_week(&mut self, name: &str) -> Result<()> {
        self.config.set_first_day_of_week(name)
    }

    pub fn set_date_formatter(&mut self, formatter: Arc<dyn DateFormatter>) {
        self.config.set_date_formatter(formatter);
    }

    /// Header order for the grid columns.
    pub fn days_of_week(&self) -> [Weekday; 7] {
        rotate_weekdays(self.config.first_day_of_week)
    }

    pub fn day_names_of_week(&self) -> [&'static str; 7] {
        self.days_of_week().map(weekday_name)
    }

    pub fn boundary_facts(&self) -> Result<MonthBoundaryFacts> {
        MonthBoundaryFacts::compute(self.target)
    }

    /// Assemble previous-month padding, the month itself, and next-month padding.
    #[tracing::instrument(skip_all, fields(month = self.month_name(), year = self.year()))]
    pub fn to_grid(&self) -> Result<CalendarGrid> {
        let facts = self.boundary_facts()?;
        debug!(
            first_weekday = facts.current_month_first_weekday_name(),
            total_days = facts.current_month_total_days,
            prev_month = facts.prev_month_name(),
            prev_month_total_days = facts.prev_month_total_days,
            next_month = facts.next_month_name(),
            next_month_year = facts.next_month_year,
            "computed month boundaries"
        );

        let formatter = self.formatter();
        let today = formatter.format(DatePattern::IsoDate, self.today());

        let first_index = self
            .days_of_week()
            .iter()
            .position(|&day| day == facts.current_month_first_weekday)
            .unwrap_or(0) as u32;

        let mut cells = Vec::with_capacity(CELLS_PER_GRID);

        // Empty range when the 1st already sits in column 0
        let prev_year = facts.prev_month_last_day.year();
        let prev_month = facts.prev_month_last_day.month();
        for day in (facts.prev_month_total_days + 1 - first_index)..=facts.prev_month_total_days {
            cells.push(facts.cell(ymd(prev_year, prev_month, day)?, formatter, &today));
        }

        let year = self.year();
        let month = self.target.month.number_from_month();
        for day in 1..=facts.current_month_total_days {
            cells.push(facts.cell(ymd(year, month, day)?, formatter, &today));
        }

        // At most 6 + 31 cells so far, so at least one trailing week remains
        let remaining = (CELLS_PER_GRID - cells.len()) as u32;
        let next_month = facts.next_month.number_from_month();
        for day in 1..=remaining {
            cells.push(facts.cell(
                ymd(facts.next_month_year, next_month, day)?,
                formatter,
                &today,
            ));
        }

        trace!(
            leading = first_index,
            current = facts.current_month_total_days,
            trailing = remaining,
            "assembled grid"
        );

        Ok(CalendarGrid::from_cells(cells))
    }

    fn formatter(&self) -> &dyn DateFormatter {
        match &self.config.formatter {
            Some(formatter) => &**formatter,
            None => {
                trace!("no date formatter installed, using LocalDateFormatter");
                &DEFAULT_FORMATTER
            }
        }
    }

    fn today(&self) -> NaiveDate {
        self.config
            .today
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

/// One-shot grid build from a configuration value.
pub fn build_grid(config: CalendarConfig) -> Result<CalendarGrid> {
    CalendarGridBuilder::new(config)?.to_grid()
}
