use anyhow::Result;
use chrono::{Days, Local, NaiveDate};
use daybook_core::config::DaybookConfig;
use daybook_core::event_source::load_events;
use owo_colors::OwoColorize;

use crate::render;

pub fn run(config: &DaybookConfig, date: Option<&str>) -> Result<()> {
    let mut events = load_events(&config.events_path());

    if let Some(date) = date {
        let key = super::resolve_date(Some(date))?;
        events.retain(|e| e.date == key);
    }

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    events.sort_by_key(|e| (e.date, e.time));

    // Group by day
    let today = Local::now().date_naive();
    let mut current: Option<NaiveDate> = None;
    for event in &events {
        let date = event.date.date();
        if current != Some(date) {
            if current.is_some() {
                println!();
            }
            println!("{}", date_label(date, today).bold());
            current = Some(date);
        }
        println!("{}  {}", render::event_line(event, false), format!("#{}", event.id).dimmed());
    }

    Ok(())
}

/// Human-readable day heading ("Today", "Tomorrow", "Wed Feb 25").
fn date_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if date == today + Days::new(1) {
        "Tomorrow".to_string()
    } else {
        date.format("%a %b %d %Y").to_string()
    }
}
