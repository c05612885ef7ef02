//! Month grid model: a fixed 7x6 (42 cell) calendar page for any month.
//!
//! Features:
//! - Leading days of the previous month and trailing days of the next month
//! - Configurable first day of week (default Sunday)
//! - Per-cell previous/current/next month and "today" flags
//! - Pluggable date formatter for the cell date strings
//!
//! ```
//! use calgrid::calendar::CalendarGridBuilder;
//! use calgrid::config::CalendarConfig;
//!
//! let builder = CalendarGridBuilder::new(CalendarConfig::from_month_name("August", 2023))?;
//! let grid = builder.to_grid()?;
//! assert_eq!(grid.len(), 42);
//! assert_eq!(grid[0].date, "2023-07-30");
//! # Ok::<(), calgrid::error::CalendarError>(())
//! ```

pub mod args;
pub mod calendar;
pub mod config;
pub mod display;
pub mod error;
pub mod formatter;
pub mod types;

pub use calendar::{CalendarGridBuilder, build_grid};
pub use config::CalendarConfig;
pub use error::CalendarError;
pub use types::{CalendarCell, CalendarGrid, MonthBoundaryFacts};
