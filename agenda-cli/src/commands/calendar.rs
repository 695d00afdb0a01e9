use agenda_core::MonthGrid;
use anyhow::{Context, Result};
use chrono::{Datelike, Local};

use crate::render::render_month;

/// Print the month grid; defaults to the current month.
pub fn run(year: Option<i32>, month: Option<u32>) -> Result<()> {
    let today = Local::now().date_naive();
    let year = year.unwrap_or_else(|| today.year());
    let month = month.unwrap_or_else(|| today.month());

    let grid = MonthGrid::for_month(year, month, today)
        .with_context(|| format!("Invalid month {}/{}. Expected a month between 1 and 12", month, year))?;

    println!("{}", render_month(&grid, year, month));
    Ok(())
}
