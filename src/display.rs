//! Plain-text and JSON presentation of a built grid.

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::types::{
    COLOR_DIM, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL, CalendarCell,
    CalendarGrid, DAYS_PER_WEEK,
};

/// Width of one rendered week row: seven 2-char cells separated by spaces.
pub const GRID_WIDTH: usize = DAYS_PER_WEEK * 3 - 1;

/// Display options for text output.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayOptions {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
}

/// Center text within a specified width, accounting for Unicode character widths.
pub fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Format `Month YYYY` centered over the grid.
pub fn format_month_header(month_name: &str, year: i32, opts: DisplayOptions) -> String {
    let centered = center_text(&format!("{} {}", month_name, year), GRID_WIDTH);
    if opts.color {
        format!("{}{}{}", COLOR_TEAL, centered, COLOR_RESET)
    } else {
        centered
    }
}

/// Two-letter weekday labels in column order.
pub fn format_weekday_headers(day_names: &[&str], opts: DisplayOptions) -> String {
    let labels: Vec<String> = day_names
        .iter()
        .map(|name| name.chars().take(2).collect())
        .collect();
    let row = labels.join(" ");
    if opts.color {
        format!("{}{}{}", COLOR_SAND_YELLOW, row, COLOR_RESET)
    } else {
        row
    }
}

/// Format day cell with color highlighting.
///
/// Color priority: today > adjacent month > regular
fn format_day(cell: &CalendarCell, opts: DisplayOptions) -> String {
    let day_str = format!("{:>2}", cell.day_of_month);
    if !opts.color {
        day_str
    } else if cell.is_today {
        format!("{}{}{}", COLOR_REVERSE, day_str, COLOR_RESET)
    } else if !cell.is_current_month {
        format!("{}{}{}", COLOR_DIM, day_str, COLOR_RESET)
    } else {
        day_str
    }
}

/// Render header, weekday row and six week rows.
pub fn format_grid(
    month_name: &str,
    year: i32,
    day_names: &[&str],
    grid: &CalendarGrid,
    opts: DisplayOptions,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(8);
    lines.push(format_month_header(month_name, year, opts));
    lines.push(format_weekday_headers(day_names, opts));
    for week in grid.weeks() {
        let days: Vec<String> = week.iter().map(|cell| format_day(cell, opts)).collect();
        lines.push(days.join(" "));
    }
    lines
}

/// Machine-readable dump of one grid build.
#[derive(Debug, Serialize)]
pub struct GridReport<'a> {
    pub month: &'a str,
    pub year: i32,
    pub days_of_week: &'a [&'a str],
    pub cells: &'a CalendarGrid,
}

pub fn format_grid_json(report: &GridReport<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
