use anyhow::Result;
use chrono::{Local, Utc};
use daybook_core::config::DaybookConfig;
use daybook_core::error::DaybookError;
use daybook_core::event_source::{load_events, save_events};
use daybook_core::state::{Action, AppState};
use owo_colors::OwoColorize;

pub fn run(config: &DaybookConfig, id: i64) -> Result<()> {
    let path = config.events_path();
    let events = load_events(&path);
    if !events.iter().any(|e| e.id == id) {
        return Err(DaybookError::EventNotFound(id).into());
    }

    let state = AppState::new(events, Local::now().date_naive())
        .apply(Action::ToggleCompleted { id, now: Utc::now() });
    save_events(&path, &state.events)?;

    let event = state.events.iter().find(|e| e.id == id).unwrap();
    if event.completed {
        println!("{} {}", "Completed".green(), event.title.bold());
    } else {
        println!("{} {}", "Reopened".yellow(), event.title.bold());
    }
    Ok(())
}
