use anyhow::Result;
use chrono::{Local, Utc};
use daybook_core::config::DaybookConfig;
use daybook_core::event::{event_id_from, parse_time, EventDraft, EventKind};
use daybook_core::event_source::{load_events, save_events};
use daybook_core::state::{Action, AppState};
use owo_colors::OwoColorize;

pub fn run(
    config: &DaybookConfig,
    title: String,
    date: &str,
    time: &str,
    duration: Option<String>,
    kind: &str,
) -> Result<()> {
    let draft = EventDraft {
        title,
        date: Some(date.parse()?),
        time: Some(parse_time(time)?),
        duration,
        kind: Some(EventKind::parse(kind)),
    };
    let event = draft.validate(event_id_from(Utc::now()))?;

    let path = config.events_path();
    let state = AppState::new(load_events(&path), Local::now().date_naive())
        .apply(Action::AddEvent(event.clone()));
    save_events(&path, &state.events)?;

    println!(
        "Added {} {} on {} at {} (id {})",
        event.kind.icon(),
        event.title.bold(),
        event.date,
        event.time.format("%H:%M"),
        event.id
    );
    Ok(())
}
