mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use daybook_core::config::DaybookConfig;

#[derive(Parser)]
#[command(name = "daybook")]
#[command(about = "Calendar, journal and picture-of-the-day memories in your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the calendar
    View {
        /// Reference date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// View mode: month, week or day
        #[arg(short, long, default_value = "month")]
        mode: String,

        /// Hide an event category (repeatable): birthday, festival,
        /// meeting, important, others
        #[arg(long)]
        hide: Vec<String>,
    },
    /// Add an event
    New {
        title: String,

        /// Event date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Event time (HH:MM)
        #[arg(short, long)]
        time: String,

        /// Free-form duration, e.g. "1h"
        #[arg(long)]
        duration: Option<String>,

        /// Category: birthday, festival, meeting, important, or any custom label
        #[arg(short, long, default_value = "meeting")]
        kind: String,
    },
    /// List events, optionally for a single day
    Events {
        /// Only this date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Toggle an event's completed state
    Done { id: i64 },
    /// Move an event to another date
    Move {
        id: i64,

        /// Target date (YYYY-MM-DD)
        date: String,
    },
    /// Manage the journal note for a day
    Note {
        #[command(subcommand)]
        action: NoteAction,
    },
    /// Manage the picture of the day
    Memory {
        #[command(subcommand)]
        action: MemoryAction,
    },
    /// Summarize all journal notes
    Journal,
    /// Show due notifications once
    Notify,
    /// Poll for due notifications and raise desktop alerts
    Watch {
        /// Override the poll interval in seconds
        #[arg(long)]
        interval: Option<u64>,
    },
}

#[derive(Subcommand)]
enum NoteAction {
    /// Write or replace the note for a day
    Set {
        text: String,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Mood emoji to prefix the note with
        #[arg(short, long)]
        mood: Option<String>,
    },
    /// Print the note for a day
    Show {
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete the note for a day
    Rm {
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List the available note templates
    Templates,
}

#[derive(Subcommand)]
enum MemoryAction {
    /// Store a picture for a day (compressed before storage)
    Set {
        /// Image file to store
        file: std::path::PathBuf,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        #[arg(short, long)]
        caption: Option<String>,
    },
    /// Print the stored picture entry for a day
    Show {
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete the picture for a day
    Rm {
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List all stored pictures
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = DaybookConfig::load()?;

    match cli.command {
        Commands::View { date, mode, hide } => {
            commands::view::run(&config, date.as_deref(), &mode, &hide)
        }
        Commands::New {
            title,
            date,
            time,
            duration,
            kind,
        } => commands::new::run(&config, title, &date, &time, duration, &kind),
        Commands::Events { date } => commands::events::run(&config, date.as_deref()),
        Commands::Done { id } => commands::done::run(&config, id),
        Commands::Move { id, date } => commands::move_event::run(&config, id, &date),
        Commands::Note { action } => match action {
            NoteAction::Set { text, date, mood } => {
                commands::note::set(&config, date.as_deref(), text, mood.as_deref())
            }
            NoteAction::Show { date } => commands::note::show(&config, date.as_deref()),
            NoteAction::Rm { date } => commands::note::rm(&config, date.as_deref()),
            NoteAction::Templates => commands::note::templates(),
        },
        Commands::Memory { action } => match action {
            MemoryAction::Set {
                file,
                date,
                caption,
            } => commands::memory::set(&config, date.as_deref(), &file, caption),
            MemoryAction::Show { date } => commands::memory::show(&config, date.as_deref()),
            MemoryAction::Rm { date } => commands::memory::rm(&config, date.as_deref()),
            MemoryAction::List => commands::memory::list(&config),
        },
        Commands::Journal => commands::journal::run(&config),
        Commands::Notify => commands::notify::run(&config),
        Commands::Watch { interval } => commands::watch::run(&config, interval).await,
    }
}
