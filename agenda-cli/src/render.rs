//! TUI rendering for agenda types.
//!
//! Extension traits that add colored terminal rendering to agenda-core types
//! using owo_colors.

use agenda_core::duration;
use agenda_core::{CellKind, Event, GridCell, MonthGrid};
use owo_colors::OwoColorize;

const MONTH_NAMES: [&str; 12] = [
    "gener", "febrer", "març", "abril", "maig", "juny", "juliol", "agost", "setembre", "octubre",
    "novembre", "desembre",
];

/// Sunday first, matching the grid columns.
const WEEKDAY_HEADERS: [&str; 7] = ["Dg", "Dl", "Dt", "Dc", "Dj", "Dv", "Ds"];

const CELL_WIDTH: usize = 5;
const RULE_WIDTH: usize = 60;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    /// Full detail block for one event.
    fn render(&self) -> String {
        let rule = "─".repeat(RULE_WIDTH);
        let lines = [
            rule.blue().to_string(),
            format!(
                "  {} {}   {} {}",
                "Esdeveniment:".yellow(),
                self.name.bold(),
                "Nº".yellow(),
                self.id
            ),
            format!("  {} {}", "Descripció:".green(), self.description),
            format!(
                "  {} {}   {} {}",
                "Lloc:".green(),
                self.location,
                "Durada:".green(),
                duration::label(self.duration)
            ),
            format!(
                "  {} {}   {} {}",
                "Data d'inici:".green(),
                self.start_date,
                "Data de fi:".green(),
                self.end_date
            ),
            format!(
                "  {} {}   {} {}",
                "Hora d'inici:".green(),
                self.start_time,
                "Hora de fi:".green(),
                self.end_time
            ),
            rule.blue().to_string(),
        ];
        lines.join("\n")
    }
}

/// One-line listing used when picking an event to modify or delete.
pub fn render_event_summary(event: &Event) -> String {
    format!("  {} {:>4}  {}", "Nº".yellow(), event.id, event.name)
}

impl Render for GridCell {
    fn render(&self) -> String {
        let label = format!("{:>width$}", self.day, width = CELL_WIDTH);
        if self.kind.is_overflow() {
            label.magenta().dimmed().to_string()
        } else if self.kind == CellKind::Today {
            label.on_magenta().bold().to_string()
        } else {
            label.blue().to_string()
        }
    }
}

/// Name of `month` (1-12), or an empty string for anything else.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
        .unwrap_or("")
}

/// Title, weekday header and the six week rows of a month.
pub fn render_month(grid: &MonthGrid, year: i32, month: u32) -> String {
    let width = CELL_WIDTH * WEEKDAY_HEADERS.len();
    let title = format!("<<<  {} {}  >>>", month_name(month).to_uppercase(), year);

    let mut lines = Vec::with_capacity(2 + grid.rows().len());
    lines.push(format!("{:^width$}", title, width = width).on_magenta().to_string());
    lines.push(
        WEEKDAY_HEADERS
            .iter()
            .map(|day| format!("{:>width$}", day, width = CELL_WIDTH))
            .collect::<String>()
            .bold()
            .to_string(),
    );
    for row in grid.rows() {
        lines.push(row.iter().map(|cell| cell.render()).collect());
    }

    lines.join("\n")
}
