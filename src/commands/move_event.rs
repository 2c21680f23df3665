use anyhow::Result;
use chrono::Local;
use daybook_core::config::DaybookConfig;
use daybook_core::error::DaybookError;
use daybook_core::event_source::{load_events, save_events};
use daybook_core::state::{Action, AppState};
use daybook_core::DateKey;
use owo_colors::OwoColorize;

pub fn run(config: &DaybookConfig, id: i64, date: &str) -> Result<()> {
    let to: DateKey = date.parse()?;

    let path = config.events_path();
    let events = load_events(&path);
    let from = events
        .iter()
        .find(|e| e.id == id)
        .map(|e| e.date)
        .ok_or(DaybookError::EventNotFound(id))?;

    let state = AppState::new(events, Local::now().date_naive())
        .apply(Action::Reschedule { id, to });
    save_events(&path, &state.events)?;

    let event = state.events.iter().find(|e| e.id == id).unwrap();
    println!(
        "Moved {} from {} to {}",
        event.title.bold(),
        from.to_string().dimmed(),
        to
    );
    Ok(())
}
