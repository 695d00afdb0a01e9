use agenda_core::EventId;
use anyhow::Result;
use owo_colors::OwoColorize;

use super::{pick_event, report_missing};
use crate::session::Session;

pub async fn run(session: &mut Session, id: Option<EventId>) -> Result<()> {
    if id.is_none() {
        println!();
        println!("  {}", "Estàs segur que vols esborrar aquest element?".red());
        println!("  {}", "Una vegada esborrat no es pot restaurar!".red());
    }

    let Some(id) = pick_event(session, id)? else {
        return Ok(());
    };

    match session.store.delete_event(id) {
        0 => report_missing(id),
        removed => {
            session.persist().await;
            let message = if removed == 1 {
                format!("  Esborrat: Nº {}", id)
            } else {
                format!("  Esborrats {} esdeveniments amb el Nº {}", removed, id)
            };
            println!("{}", message.green());
        }
    }

    Ok(())
}
