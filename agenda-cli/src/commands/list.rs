use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::session::Session;

pub fn run(session: &Session) -> Result<()> {
    let events = session.store.list_events();

    if events.is_empty() {
        println!("  {}", "Encara no tens cap esdeveniment.".dimmed());
        return Ok(());
    }

    println!();
    println!(
        "  {}",
        "En aquesta pantalla trobaràs tots els esdeveniments que has creat.".bold()
    );
    for event in events {
        println!();
        println!("{}", event.render());
    }

    Ok(())
}
