use agenda_core::duration;
use anyhow::Result;
use owo_colors::OwoColorize;

use super::EventArgs;
use crate::session::Session;

pub async fn run(session: &mut Session, fields: EventArgs) -> Result<()> {
    if fields.is_empty() {
        println!();
        println!("{}", "    Crear un nou esdeveniment    ".on_blue());
        println!();
    }

    let draft = fields.fill(None)?;
    let event = session.store.add_event(draft).clone();
    session.persist().await;

    println!();
    println!(
        "{}",
        format!(
            "  Creat: {} (Nº {}, {})",
            event.name,
            event.id,
            duration::label(event.duration)
        )
        .green()
    );

    Ok(())
}
