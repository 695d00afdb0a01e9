pub mod add;
pub mod calendar;
pub mod delete;
pub mod help;
pub mod list;
pub mod menu;
pub mod onboarding;
pub mod update;

use agenda_core::{EventDate, EventDraft, EventId, EventTime};
use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use crate::prompt;
use crate::render::render_event_summary;
use crate::session::Session;

/// Event fields given on the command line. Missing ones are prompted for.
#[derive(Args, Debug, Default, Clone)]
pub struct EventArgs {
    /// Event name
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    /// Start date (DD/MM/YYYY)
    #[arg(long)]
    pub start_date: Option<EventDate>,

    /// End date (DD/MM/YYYY)
    #[arg(long)]
    pub end_date: Option<EventDate>,

    /// Start time (HH:MM)
    #[arg(long)]
    pub start_time: Option<EventTime>,

    /// End time (HH:MM)
    #[arg(long)]
    pub end_time: Option<EventTime>,
}

impl EventArgs {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.location.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
    }

    /// Build a complete draft.
    ///
    /// Without `previous` every missing field is prompted for. With
    /// `previous`, missing fields keep their previous value, unless no field
    /// was given at all, in which case every field is prompted for with the
    /// previous value as default.
    pub fn fill(self, previous: Option<&EventDraft>) -> Result<EventDraft> {
        let ask = previous.is_none() || self.is_empty();

        Ok(EventDraft {
            name: field(self.name, previous.map(|p| p.name.clone()), ask, |prev| {
                text_field("Nom de l'esdeveniment", prev)
            })?,
            description: field(
                self.description,
                previous.map(|p| p.description.clone()),
                ask,
                |prev| text_field("Descripció", prev),
            )?,
            location: field(
                self.location,
                previous.map(|p| p.location.clone()),
                ask,
                |prev| text_field("Ubicació de l'esdeveniment", prev),
            )?,
            start_date: field(self.start_date, previous.map(|p| p.start_date), ask, |prev| {
                prompt::date("Data d'inici de l'esdeveniment", prev)
            })?,
            end_date: field(self.end_date, previous.map(|p| p.end_date), ask, |prev| {
                prompt::date("Data de finalització de l'esdeveniment", prev)
            })?,
            start_time: field(self.start_time, previous.map(|p| p.start_time), ask, |prev| {
                prompt::time("Hora d'inici de l'esdeveniment", prev)
            })?,
            end_time: field(self.end_time, previous.map(|p| p.end_time), ask, |prev| {
                prompt::time("Hora de finalització de l'esdeveniment", prev)
            })?,
        })
    }
}

/// Given value, else the previous one when not asking, else a prompt.
fn field<T, F>(given: Option<T>, previous: Option<T>, ask: bool, prompt: F) -> Result<T>
where
    F: FnOnce(Option<T>) -> Result<T>,
{
    match (given, previous) {
        (Some(value), _) => Ok(value),
        (None, Some(previous)) if !ask => Ok(previous),
        (None, previous) => prompt(previous),
    }
}

fn text_field(label: &str, previous: Option<String>) -> Result<String> {
    match previous {
        Some(previous) => prompt::text_or(label, &previous),
        None => prompt::text(label),
    }
}

/// Use the id from the command line, or list the events and ask for one.
/// `None` means the user backed out.
pub(crate) fn pick_event(session: &Session, id: Option<EventId>) -> Result<Option<EventId>> {
    if id.is_some() {
        return Ok(id);
    }

    let events = session.store.list_events();
    if events.is_empty() {
        println!("  {}", "Encara no tens cap esdeveniment.".dimmed());
        return Ok(None);
    }

    println!();
    for event in events {
        println!("{}", render_event_summary(event));
    }
    println!();
    println!("  {}", "Si vols sortir, simplement prem la tecla Enter.".green());

    prompt::event_id("Introdueix el número de l'esdeveniment")
}

pub(crate) fn report_missing(id: EventId) {
    println!(
        "  {}",
        format!("No hi ha cap esdeveniment amb el número {}", id).yellow()
    );
}
