mod commands;
mod config;
mod prompt;
mod render;
mod session;

use std::path::PathBuf;

use agenda_core::{EventId, SnapshotStore};
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use crate::commands::EventArgs;
use crate::config::AgendaConfig;
use crate::session::Session;

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Keep track of your events and see the month at a glance")]
struct Cli {
    /// Read and write events from this file instead of the configured one
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Without a subcommand, starts the interactive menu
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an event
    Add(EventArgs),
    /// Show every event
    List,
    /// Change an event; fields not given keep their value
    Update {
        id: Option<EventId>,

        #[command(flatten)]
        fields: EventArgs,
    },
    /// Delete every event with this number
    Delete { id: Option<EventId> },
    /// Show a month calendar
    Calendar {
        #[arg(long)]
        year: Option<i32>,

        /// Month number (1-12)
        #[arg(long)]
        month: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let data_path = match cli.data_file {
        Some(path) => path,
        None => AgendaConfig::load()?.data_path(),
    };
    let snapshot = SnapshotStore::new(data_path);

    match cli.command {
        Some(Commands::Calendar { year, month }) => commands::calendar::run(year, month),
        Some(Commands::List) => {
            let session = open_session(snapshot).await?;
            commands::list::run(&session)
        }
        Some(Commands::Add(fields)) => {
            let mut session = open_session(snapshot).await?;
            commands::add::run(&mut session, fields).await
        }
        Some(Commands::Update { id, fields }) => {
            let mut session = open_session(snapshot).await?;
            commands::update::run(&mut session, id, fields).await
        }
        Some(Commands::Delete { id }) => {
            let mut session = open_session(snapshot).await?;
            commands::delete::run(&mut session, id).await
        }
        None => {
            let mut session = open_session(snapshot).await?;
            commands::menu::run(&mut session).await
        }
    }
}

/// Load the saved user, running first-time setup when there is none.
async fn open_session(snapshot: SnapshotStore) -> Result<Session> {
    let user = match Session::load_user(&snapshot).await? {
        Some(user) => user,
        None => commands::onboarding::run(&snapshot).await?,
    };
    Ok(Session::new(user, snapshot))
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("tracing init failed: {e}");
    }
}
