// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::io::Cursor;

use anyhow::Result;
use chrono::{DateTime, Local, TimeZone};
use tally::application::TrackerService;
use tally::cli::{run_session, MenuConfig};
use tally::domain::FixedClock;

/// 2024-01-15 12:00:00 local time
pub fn start_of_session() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
}

/// Helper to create a service whose clock is frozen at `start_of_session()`
pub fn test_service() -> TrackerService<FixedClock> {
    TrackerService::with_clock(FixedClock::new(start_of_session()))
}

/// Feed `lines` to the interactive menu and capture everything it prints.
pub fn run_script(service: &mut TrackerService<FixedClock>, lines: &[&str]) -> Result<String> {
    let mut script = lines.join("\n");
    script.push('\n');

    let mut output = Vec::new();
    run_session(
        service,
        Cursor::new(script.into_bytes()),
        &mut output,
        MenuConfig::default(),
    )?;
    Ok(String::from_utf8(output)?)
}

/// Test fixture: the salary + food scenario
pub fn record_salary_and_food(service: &mut TrackerService<FixedClock>) -> Result<()> {
    service.record_income(100000, "salary")?;
    service.record_expense(20000, "food", "groceries")?;
    service.record_expense(5000, "food", "snacks")?;
    Ok(())
}
