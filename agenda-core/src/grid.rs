//! Month calendar grid.
//!
//! A month is always laid out as 6 rows of 7 Sunday-first columns. Leading
//! cells are filled with the tail of the previous month and trailing cells
//! with the head of the next one.

use chrono::{Datelike, Months, NaiveDate};

pub const ROWS: usize = 6;
pub const COLUMNS: usize = 7;

/// What a grid cell represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// A trailing day of the previous month
    PreviousMonth,
    /// The current day
    Today,
    /// A day of the shown month
    CurrentMonth,
    /// A leading day of the next month
    NextMonth,
}

impl CellKind {
    pub fn is_overflow(self) -> bool {
        matches!(self, CellKind::PreviousMonth | CellKind::NextMonth)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// Day-of-month label shown in the cell
    pub day: u32,
    pub kind: CellKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    rows: [[GridCell; COLUMNS]; ROWS],
}

impl MonthGrid {
    /// Lay out a month from its shape.
    ///
    /// `first_weekday` is the column of day 1 (0 = Sunday). `today` is the
    /// day-of-month to mark; pass 0 to mark nothing.
    ///
    /// Cells are classified row-major, first match wins: previous-month
    /// padding in row 0, then the today marker, then next-month overflow,
    /// then a plain day. The day counter and the overflow counter advance
    /// independently.
    pub fn generate(first_weekday: u32, last_day: u32, last_day_prev: u32, today: u32) -> Self {
        let placeholder = GridCell {
            day: 0,
            kind: CellKind::CurrentMonth,
        };
        let mut rows = [[placeholder; COLUMNS]; ROWS];

        let mut day = 1;
        let mut next_month_day = 1;

        for (week, row) in rows.iter_mut().enumerate() {
            for (column, cell) in (0u32..).zip(row.iter_mut()) {
                *cell = if week == 0 && column < first_weekday {
                    GridCell {
                        day: last_day_prev.saturating_sub(first_weekday - column - 1),
                        kind: CellKind::PreviousMonth,
                    }
                } else if day == today {
                    day += 1;
                    GridCell {
                        day: today,
                        kind: CellKind::Today,
                    }
                } else if day > last_day {
                    next_month_day += 1;
                    GridCell {
                        day: next_month_day - 1,
                        kind: CellKind::NextMonth,
                    }
                } else {
                    day += 1;
                    GridCell {
                        day: day - 1,
                        kind: CellKind::CurrentMonth,
                    }
                };
            }
        }

        MonthGrid { rows }
    }

    /// Lay out `month` (1-12) of `year`, marking `today` if it falls inside it.
    ///
    /// Returns `None` for a month outside 1-12 or a year chrono cannot represent.
    pub fn for_month(year: i32, month: u32, today: NaiveDate) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
        let last_prev = first.pred_opt()?;

        let today_day = if today.year() == year && today.month() == month {
            today.day()
        } else {
            0
        };

        Some(Self::generate(
            first.weekday().num_days_from_sunday(),
            last.day(),
            last_prev.day(),
            today_day,
        ))
    }

    /// Lay out the month containing `today`.
    pub fn current(today: NaiveDate) -> Option<Self> {
        Self::for_month(today.year(), today.month(), today)
    }

    pub fn rows(&self) -> &[[GridCell; COLUMNS]; ROWS] {
        &self.rows
    }

    /// All 42 cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.rows.iter().flatten()
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&GridCell> {
        self.rows.get(row)?.get(column)
    }

    /// Position of the cell marked as today, if any.
    pub fn today_position(&self) -> Option<(usize, usize)> {
        self.cells()
            .position(|cell| cell.kind == CellKind::Today)
            .map(|index| (index / COLUMNS, index % COLUMNS))
    }
}
