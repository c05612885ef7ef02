//! Calendar grid CLI application.
//!
//! # Usage
//! ```ignore
//! calgrid               // Current month
//! calgrid august 2023   // August 2023
//! calgrid 2 2024        // February 2024
//! calgrid -m 12 2023    // Weeks starting on Monday
//! calgrid --json 1 2023 // All 42 cells as JSON
//! ```

use calgrid::args::{Args, init_tracing};
use calgrid::calendar::CalendarGridBuilder;
use calgrid::display::{GridReport, format_grid, format_grid_json};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("calgrid: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    init_tracing(args.verbose)?;

    let config = args.to_config()?;
    let builder = CalendarGridBuilder::new(config).map_err(|e| e.to_string())?;
    let grid = builder.to_grid().map_err(|e| e.to_string())?;
    let day_names = builder.day_names_of_week();

    if args.json {
        let report = GridReport {
            month: builder.month_name(),
            year: builder.year(),
            days_of_week: &day_names,
            cells: &grid,
        };
        let json = format_grid_json(&report).map_err(|e| e.to_string())?;
        println!("{}", json);
    } else {
        let lines = format_grid(
            builder.month_name(),
            builder.year(),
            &day_names,
            &grid,
            args.display_options(),
        );
        for line in lines {
            println!("{}", line);
        }
    }

    Ok(())
}
