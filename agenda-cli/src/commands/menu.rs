use anyhow::Result;
use dialoguer::Select;
use owo_colors::OwoColorize;

use super::{EventArgs, add, calendar, delete, help, list, update};
use crate::prompt;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Add,
    Show,
    Modify,
    Delete,
    Calendar,
    Help,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 7] = [
        MenuItem::Add,
        MenuItem::Show,
        MenuItem::Modify,
        MenuItem::Delete,
        MenuItem::Calendar,
        MenuItem::Help,
        MenuItem::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Add => "Afegir",
            MenuItem::Show => "Mostrar",
            MenuItem::Modify => "Modificar",
            MenuItem::Delete => "Esborrar",
            MenuItem::Calendar => "Calendari",
            MenuItem::Help => "Ajuda",
            MenuItem::Exit => "Sortir",
        }
    }
}

/// Interactive session: greeting, this month's calendar, then the menu loop.
pub async fn run(session: &mut Session) -> Result<()> {
    println!();
    println!(
        "{}",
        format!("  Benvingut/da, {}!  ", session.user().user_name).on_blue()
    );
    println!("  Fem una ullada al teu calendari per veure què et porta avui.");
    println!();
    calendar::run(None, None)?;

    let labels: Vec<&str> = MenuItem::ALL.iter().map(|item| item.label()).collect();

    loop {
        println!();
        let selection = Select::new()
            .with_prompt("  Què vols fer?")
            .items(&labels)
            .default(0)
            .interact()?;

        match MenuItem::ALL.get(selection).copied().unwrap_or(MenuItem::Exit) {
            MenuItem::Add => add::run(session, EventArgs::default()).await?,
            MenuItem::Show => list::run(session)?,
            MenuItem::Modify => update::run(session, None, EventArgs::default()).await?,
            MenuItem::Delete => delete::run(session, None).await?,
            MenuItem::Calendar => calendar::run(None, None)?,
            MenuItem::Help => help::run(),
            MenuItem::Exit => break,
        }

        println!();
        if !prompt::keep_going()? {
            break;
        }
    }

    println!("  {}", "Fins aviat!".dimmed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_is_last_and_labels_are_distinct() {
        assert_eq!(MenuItem::ALL.last(), Some(&MenuItem::Exit));

        let mut labels: Vec<&str> = MenuItem::ALL.iter().map(|i| i.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), MenuItem::ALL.len());
    }
}
