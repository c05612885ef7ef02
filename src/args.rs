//! Command-line argument parsing for the demo binary.
//!
//! Arguments follow the `cal` convention: `[month] [year]`

use std::io::IsTerminal;

use chrono::Datelike;
use clap::{ArgAction, Parser, ValueHint};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::{CalendarConfig, MonthSelector};
use crate::display::DisplayOptions;
use crate::formatter::capitalize_first;
use crate::types::{MONTH_NAMES, weekday_name};

/// Environment variable overriding today's date (`YYYY-MM-DD`).
pub const TEST_TIME_ENV: &str = "CALGRID_TEST_TIME";

#[derive(Parser, Debug)]
#[command(name = "calgrid")]
#[command(about = "Displays the 7x6 calendar grid for a month", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// First day of the week (Monday .. Sunday).
    #[arg(
        short = 'f',
        long = "first-day",
        default_value = "Sunday",
        help_heading = "Calendar options",
        value_name = "day"
    )]
    pub first_day: String,

    /// Week starts on Monday (same as --first-day Monday).
    #[arg(short = 'm', long, help_heading = "Calendar options")]
    pub monday: bool,

    /// Print every cell of the grid as JSON.
    #[arg(long, help_heading = "Output options")]
    pub json: bool,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long, action = ArgAction::Count, help_heading = "Output options")]
    pub verbose: u8,

    /// Month (1-12 or name) or a 4-digit year when given alone.
    #[arg(index = 1, value_name = "month", value_hint = ValueHint::Other)]
    pub month_arg: Option<String>,

    /// Year (YYYY).
    #[arg(index = 2, value_name = "year", value_hint = ValueHint::Other)]
    pub year_arg: Option<String>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Display the 42-cell grid of a month, padded with days of the
previous and next months.

Without any arguments, display the current month.

Examples:
  calgrid                   Display current month
  calgrid august 2023       Display August 2023
  calgrid 2 2024            Display February 2024
  calgrid 2024              Display current month of 2024
  calgrid -m 12 2023        Weeks start on Monday
  calgrid --json 1 2023     Dump all cells as JSON";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build the grid configuration; month and year are validated later by the builder.
    pub fn to_config(&self) -> Result<CalendarConfig, String> {
        let today = get_today_date();
        let (month, year) = get_display_month(self, today);

        let mut config = CalendarConfig {
            month,
            ..CalendarConfig::default()
        };
        match year {
            Some(year) => config.set_year_str(&year),
            None => config.set_year(today.year() as i64),
        }

        let first_day = if self.monday {
            weekday_name(chrono::Weekday::Mon)
        } else {
            self.first_day.as_str()
        };
        config
            .set_first_day_of_week(&capitalize_first(first_day))
            .map_err(|e| e.to_string())?;
        config.set_today(today);
        Ok(config)
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            color: !self.no_color && std::io::stdout().is_terminal(),
        }
    }
}

/// Get today's date, respecting CALGRID_TEST_TIME environment variable for testing.
pub fn get_today_date() -> chrono::NaiveDate {
    if let Ok(test_time) = std::env::var(TEST_TIME_ENV)
        && let Ok(date) = chrono::NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}

/// Resolve the positional arguments to a month selector and raw year text.
///
/// Argument patterns:
/// - 0 args: current month
/// - 1 arg: year (4 digits) or month
/// - 2 args: month year
pub fn get_display_month(args: &Args, today: chrono::NaiveDate) -> (MonthSelector, Option<String>) {
    let current = MonthSelector::Index(today.month0() as usize);
    match (&args.month_arg, &args.year_arg) {
        (None, _) => (current, None),
        (Some(single), None) => match single.parse::<i64>() {
            Ok(num) if (1000..=9999).contains(&num) => (current, Some(single.clone())),
            _ => (parse_month_arg(single), None),
        },
        (Some(month), Some(year)) => (parse_month_arg(month), Some(year.clone())),
    }
}

/// Parse month from string (numeric 1-12, full or 3-letter English name, any case).
///
/// Unrecognized input is kept as a name so validation can report it.
pub fn parse_month_arg(s: &str) -> MonthSelector {
    if let Ok(n) = s.parse::<usize>()
        && (1..=12).contains(&n)
    {
        return MonthSelector::Index(n - 1);
    }

    let s_lower = s.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|name| {
            let name = name.to_lowercase();
            name == s_lower || (s_lower.len() == 3 && name.starts_with(&s_lower))
        })
        .map(MonthSelector::Index)
        .unwrap_or_else(|| MonthSelector::Name(capitalize_first(s)))
}

/// Install the stderr log subscriber; `RUST_LOG` takes precedence over `-v`.
pub fn init_tracing(verbose: u8) -> Result<(), String> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| format!("invalid RUST_LOG / log filter: {e}"))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }
    Ok(())
}
