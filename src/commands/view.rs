use anyhow::Result;
use chrono::Local;
use daybook_core::config::DaybookConfig;
use daybook_core::event_source::load_events;
use daybook_core::grid::ViewMode;
use daybook_core::state::{Action, AppState, FilterBucket};

use crate::render;

pub fn run(config: &DaybookConfig, date: Option<&str>, mode: &str, hide: &[String]) -> Result<()> {
    let today = Local::now().date_naive();
    let reference = super::resolve_date(date)?.date();
    let mode = parse_mode(mode)?;

    let mut state = AppState::new(load_events(&config.events_path()), today);
    state.reference_date = reference;
    state.view_mode = mode;
    for bucket in hide {
        state = state.apply(Action::ToggleFilter(parse_bucket(bucket)?));
    }

    let notes = super::open_notes(config);
    let memories = super::open_memories(config);

    let output = match mode {
        ViewMode::Month => render::month(&state, today, &notes, &memories),
        ViewMode::Week => render::week(&state, today, &notes, &memories),
        ViewMode::Day => render::day(&state, &notes, &memories),
    };
    println!("{}", output);
    Ok(())
}

fn parse_mode(s: &str) -> Result<ViewMode> {
    match s {
        "month" => Ok(ViewMode::Month),
        "week" => Ok(ViewMode::Week),
        "day" => Ok(ViewMode::Day),
        other => anyhow::bail!("Unknown view mode '{}'. Use month, week or day", other),
    }
}

fn parse_bucket(s: &str) -> Result<FilterBucket> {
    match s {
        "birthday" => Ok(FilterBucket::Birthday),
        "festival" => Ok(FilterBucket::Festival),
        "meeting" => Ok(FilterBucket::Meeting),
        "important" => Ok(FilterBucket::Important),
        "others" => Ok(FilterBucket::Others),
        other => anyhow::bail!(
            "Unknown category '{}'. Use birthday, festival, meeting, important or others",
            other
        ),
    }
}
