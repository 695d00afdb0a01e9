use agenda_core::{EventId, duration};
use anyhow::Result;
use owo_colors::OwoColorize;

use super::{EventArgs, pick_event, report_missing};
use crate::session::Session;

pub async fn run(session: &mut Session, id: Option<EventId>, fields: EventArgs) -> Result<()> {
    let interactive = id.is_none() || fields.is_empty();
    if interactive {
        println!();
        println!("  {}", "Amb aquesta eina, pots modificar un esdeveniment!".red());
    }

    let Some(id) = pick_event(session, id)? else {
        return Ok(());
    };

    let Some(current) = session.store.find_event(id).cloned() else {
        report_missing(id);
        return Ok(());
    };

    if interactive {
        println!();
        println!(
            "  {}",
            "Escriu el nou valor o prem ENTER per deixar l'anterior.".blue()
        );
    }

    let revised = current.revise(fields.fill(Some(&current.draft()))?);
    let label = duration::label(revised.duration);

    if session.store.update_event(id, revised) {
        session.persist().await;
        println!();
        println!(
            "{}",
            format!("  Modificat: Nº {} (durada {})", id, label).green()
        );
    } else {
        report_missing(id);
    }

    Ok(())
}
