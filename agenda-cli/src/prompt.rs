//! Interactive prompts.
//!
//! Date and time prompts keep asking until the answer matches its pattern.

use std::fmt::Display;
use std::str::FromStr;

use agenda_core::{AgendaError, EventDate, EventId, EventTime};
use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;

pub const DATE_HINT: &str = "!!! Fes servir 'DD/MM/AAAA' per a la data !!!";
pub const TIME_HINT: &str = "!!! Fes servir 'HH:MM' per a l'hora !!!";

/// Free text; an empty answer is allowed.
pub fn text(prompt: &str) -> Result<String> {
    let answer = Input::<String>::new()
        .with_prompt(format!("  {}", prompt))
        .allow_empty(true)
        .interact_text()?;
    Ok(answer)
}

/// Free text that falls back to `previous` on an empty answer.
pub fn text_or(prompt: &str, previous: &str) -> Result<String> {
    let answer = Input::<String>::new()
        .with_prompt(format!("  {}", prompt))
        .default(previous.to_string())
        .allow_empty(true)
        .interact_text()?;
    Ok(answer)
}

pub fn date(prompt: &str, previous: Option<EventDate>) -> Result<EventDate> {
    token(prompt, DATE_HINT, previous)
}

pub fn time(prompt: &str, previous: Option<EventTime>) -> Result<EventTime> {
    token(prompt, TIME_HINT, previous)
}

/// Prompt until the answer parses as `T`.
fn token<T>(prompt: &str, hint: &str, previous: Option<T>) -> Result<T>
where
    T: FromStr<Err = AgendaError> + Display,
{
    println!("  {}", hint.magenta());
    loop {
        let mut input = Input::<String>::new().with_prompt(format!("  {}", prompt));
        if let Some(previous) = &previous {
            input = input.default(previous.to_string());
        }

        let answer = input.interact_text()?;
        match answer.parse() {
            Ok(value) => return Ok(value),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}

/// Ask for an event number. An empty answer means "go back".
pub fn event_id(prompt: &str) -> Result<Option<EventId>> {
    loop {
        let answer = text(prompt)?;
        if answer.trim().is_empty() {
            return Ok(None);
        }
        match answer.parse() {
            Ok(id) => return Ok(Some(id)),
            Err(_) => eprintln!("  {}", format!("'{}' no és un número", answer.trim()).red()),
        }
    }
}

/// Whether an answer to "continue?" means yes. Empty counts as yes.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer.is_empty() || answer == "si" || answer == "sí" || answer == "s"
}

/// Whether an answer to "continue?" means no.
pub fn is_negative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "no" | "n")
}

/// Ask whether to go back to the menu, re-asking on anything but yes or no.
pub fn keep_going() -> Result<bool> {
    loop {
        let answer = text("Continuar? [Si|No]")?;
        if is_affirmative(&answer) {
            return Ok(true);
        }
        if is_negative(&answer) {
            return Ok(false);
        }
        eprintln!("  {}", "Respon 'Si' o 'No'".red());
    }
}
