//! Integration tests: grid properties across many months and the calgrid binary.

use chrono::{Datelike, NaiveDate};

use calgrid::calendar::CalendarGridBuilder;
use calgrid::config::CalendarConfig;
use calgrid::types::{CANONICAL_WEEKDAYS, CELLS_PER_GRID, DAYS_PER_WEEK, WEEKDAY_NAMES};

const YEARS: [i64; 8] = [1000, 1900, 2000, 2023, 2024, 2025, 2100, 9999];

fn all_builders() -> impl Iterator<Item = CalendarGridBuilder> {
    YEARS.into_iter().flat_map(|year| {
        (0..12).flat_map(move |month| {
            WEEKDAY_NAMES.into_iter().map(move |first_day| {
                let mut config = CalendarConfig::from_month_index(month, year);
                config.set_first_day_of_week(first_day).unwrap();
                config.set_today(NaiveDate::from_ymd_opt(2023, 8, 15).unwrap());
                CalendarGridBuilder::new(config).unwrap()
            })
        })
    })
}

fn parse(date: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()
}

mod grid_properties {
    use super::*;

    #[test]
    fn always_42_cells() {
        for b in all_builders() {
            assert_eq!(b.to_grid().unwrap().len(), CELLS_PER_GRID);
        }
    }

    #[test]
    fn cells_are_consecutive_days() {
        for b in all_builders() {
            let grid = b.to_grid().unwrap();
            for pair in grid.cells().windows(2) {
                assert_eq!(
                    parse(&pair[0].date).succ_opt(),
                    Some(parse(&pair[1].date)),
                    "{} {}",
                    b.month_name(),
                    b.year()
                );
            }
        }
    }

    #[test]
    fn first_column_matches_first_day_of_week() {
        for b in all_builders() {
            let grid = b.to_grid().unwrap();
            let first = b.days_of_week()[0];
            for week in grid.weeks() {
                assert_eq!(parse(&week[0].date).weekday(), first);
            }
        }
    }

    #[test]
    fn weeks_concatenate_back_to_grid() {
        for b in all_builders().step_by(7) {
            let grid = b.to_grid().unwrap();
            let weeks: Vec<_> = grid.weeks().collect();
            assert_eq!(weeks.len(), CELLS_PER_GRID / DAYS_PER_WEEK);
            let flat: Vec<_> = weeks.into_iter().flatten().cloned().collect();
            assert_eq!(flat.as_slice(), grid.cells());
        }
    }

    #[test]
    fn month_flags_are_mutually_exclusive() {
        for b in all_builders() {
            let grid = b.to_grid().unwrap();
            for cell in &grid {
                let set = [cell.is_prev_month, cell.is_current_month, cell.is_next_month]
                    .iter()
                    .filter(|&&flag| flag)
                    .count();
                assert_eq!(set, 1, "{}", cell.date);
            }
        }
    }

    #[test]
    fn current_month_cells_match_day_count() {
        for b in all_builders() {
            let facts = b.boundary_facts().unwrap();
            let grid = b.to_grid().unwrap();
            let current: Vec<u32> = grid
                .iter()
                .filter(|c| c.is_current_month)
                .map(|c| c.day_of_month)
                .collect();
            let expected: Vec<u32> = (1..=facts.current_month_total_days).collect();
            assert_eq!(current, expected);
        }
    }

    #[test]
    fn leading_cells_fewer_than_a_week() {
        for b in all_builders() {
            let grid = b.to_grid().unwrap();
            let leading = grid.iter().take_while(|c| c.is_prev_month).count();
            assert!(leading < DAYS_PER_WEEK);
            assert_eq!(grid[leading].day_of_month, 1);
        }
    }

    #[test]
    fn header_is_rotation_of_canonical_weekdays() {
        for b in all_builders().step_by(12) {
            let order = b.days_of_week();
            let start = CANONICAL_WEEKDAYS
                .iter()
                .position(|&d| d == order[0])
                .unwrap();
            for (i, day) in order.iter().enumerate() {
                assert_eq!(*day, CANONICAL_WEEKDAYS[(start + i) % 7]);
            }
        }
    }
}

mod cli {
    use assert_cmd::Command;
    use predicates::prelude::*;

    fn calgrid() -> Command {
        let mut cmd = Command::cargo_bin("calgrid").unwrap();
        cmd.env("CALGRID_TEST_TIME", "2023-08-15").env_remove("RUST_LOG");
        cmd
    }

    #[test]
    fn month_and_year() {
        calgrid()
            .args(["august", "2023"])
            .assert()
            .success()
            .stdout(predicate::str::contains("August 2023"))
            .stdout(predicate::str::contains("Su Mo Tu We Th Fr Sa"))
            .stdout(predicate::str::contains("30 31  1  2  3  4  5"));
    }

    #[test]
    fn defaults_to_current_month() {
        calgrid()
            .assert()
            .success()
            .stdout(predicate::str::contains("August 2023"));
    }

    #[test]
    fn monday_start() {
        calgrid()
            .args(["-m", "1", "2023"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Mo Tu We Th Fr Sa Su"))
            .stdout(predicate::str::contains("26 27 28 29 30 31  1"));
    }

    #[test]
    fn two_digit_year_fails() {
        calgrid()
            .args(["2", "23"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("calgrid: invalid argument"));
    }

    #[test]
    fn unknown_month_fails() {
        calgrid()
            .args(["smarch", "2023"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Smarch"));
    }

    #[test]
    fn unknown_first_day_fails() {
        calgrid()
            .args(["-f", "Funday", "1", "2023"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid first day of week"));
    }

    #[test]
    fn json_output() {
        let output = calgrid().args(["--json", "12", "2023"]).output().unwrap();
        assert!(output.status.success());

        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["month"], "December");
        assert_eq!(report["year"], 2023);
        assert_eq!(report["days_of_week"][0], "Sunday");

        let cells = report["cells"].as_array().unwrap();
        assert_eq!(cells.len(), 42);
        assert_eq!(cells[0]["date"], "2023-11-26");
        assert_eq!(cells[0]["is_prev_month"], true);
        assert_eq!(cells[41]["date"], "2024-01-06");
        assert_eq!(cells[41]["is_next_month"], true);
    }

    #[test]
    fn json_marks_today() {
        let output = calgrid().args(["--json", "8", "2023"]).output().unwrap();
        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let today: Vec<&serde_json::Value> = report["cells"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|c| c["is_today"] == true)
            .collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0]["date"], "2023-08-15");
    }
}
