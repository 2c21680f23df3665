//! Terminal rendering for daybook views.
//!
//! Turns the grid engine's day cells into a colored month/week/day layout,
//! overlaying holidays, today, events, notes and pictures.

use chrono::{Datelike, NaiveDate};
use daybook_core::event::Event;
use daybook_core::grid::{generate_grid, ViewMode};
use daybook_core::holiday::{classify_holiday, HolidayKind};
use daybook_core::state::AppState;
use daybook_core::DateKey;
use owo_colors::OwoColorize;

use crate::commands::{MemoryStore, NoteStore};

const WEEKDAY_HEADER: &str = " Sun Mon Tue Wed Thu Fri Sat";

pub fn month(
    state: &AppState,
    today: NaiveDate,
    notes: &NoteStore,
    memories: &MemoryStore,
) -> String {
    let mut lines = Vec::new();
    let title = format!("{:^28}", state.reference_date.format("%B %Y"));
    lines.push(title.bold().to_string());
    lines.push(WEEKDAY_HEADER.dimmed().to_string());

    let grid = generate_grid(state.reference_date, ViewMode::Month);
    for week in grid.chunks(7) {
        let mut row = String::new();
        for key in week {
            row.push_str(&cell(*key, state, today, notes, memories));
        }
        lines.push(row);
    }

    lines.push(String::new());
    lines.push(legend());

    let events = month_event_lines(state);
    if !events.is_empty() {
        lines.push(String::new());
        lines.push("Events".bold().to_string());
        lines.extend(events);
    }

    lines.join("\n")
}

pub fn week(
    state: &AppState,
    today: NaiveDate,
    notes: &NoteStore,
    memories: &MemoryStore,
) -> String {
    let mut lines = Vec::new();

    for key in generate_grid(state.reference_date, ViewMode::Week) {
        let date = key.date();
        let label = date.format("%a %b %d").to_string();
        let label = if date == today {
            label.bold().cyan().to_string()
        } else {
            match classify_holiday(date) {
                Some(_) => label.magenta().to_string(),
                None => label.bold().to_string(),
            }
        };

        let mut suffixes = Vec::new();
        if let Some(holiday) = classify_holiday(date) {
            suffixes.push(holiday.name.magenta().to_string());
        }
        if notes.get(&key).is_some() {
            suffixes.push("note".dimmed().to_string());
        }
        if memories.get(&key).is_some() {
            suffixes.push("picture".dimmed().to_string());
        }
        lines.push(format!("{} {}", label, suffixes.join(" ")));

        let mut events = state.events_on(key);
        events.sort_by_key(|e| e.time);
        if events.is_empty() {
            lines.push(format!("   {}", "-".dimmed()));
        } else {
            for event in events {
                lines.push(event_line(event, false));
            }
        }
    }

    lines.join("\n")
}

pub fn day(state: &AppState, notes: &NoteStore, memories: &MemoryStore) -> String {
    let key = DateKey::new(state.reference_date);
    let mut lines = Vec::new();

    let header = state.reference_date.format("%A, %B %d, %Y").to_string();
    match classify_holiday(state.reference_date) {
        Some(holiday) => lines.push(format!(
            "{} {}",
            header.bold(),
            format!("({})", holiday.name).magenta()
        )),
        None => lines.push(header.bold().to_string()),
    }

    if let Some(note) = notes.get(&key) {
        let mood = note.mood().map(|m| format!("{} ", m)).unwrap_or_default();
        lines.push(format!("{} {}{}", "Note:".bold(), mood, note.body()));
    }
    if let Some(memory) = memories.get(&key) {
        let caption = memory.caption.as_deref().unwrap_or("(no caption)");
        lines.push(format!("{} {}", "Picture:".bold(), caption));
    }

    let mut events = state.events_on(key);
    events.sort_by_key(|e| e.time);
    if events.is_empty() {
        lines.push("No events".dimmed().to_string());
    } else {
        for event in events {
            lines.push(event_line(event, false));
        }
    }

    lines.join("\n")
}

/// One formatted event row, optionally prefixed with its date.
pub fn event_line(event: &Event, with_date: bool) -> String {
    let time = event.time.format("%H:%M").to_string();
    let when = if with_date {
        format!("{} {}", event.date, time)
    } else {
        format!("   {}", time)
    };

    let title = if event.completed {
        event.title.strikethrough().dimmed().to_string()
    } else {
        event.title.clone()
    };
    let duration = event
        .duration
        .as_deref()
        .map(|d| format!(" ({})", d))
        .unwrap_or_default();
    let tag = format!("[{}]", event.kind.display_label());

    format!(
        "{} {} {}{} {}",
        when.dimmed(),
        event.kind.icon(),
        title,
        duration,
        tag.dimmed()
    )
}

fn cell(
    key: DateKey,
    state: &AppState,
    today: NaiveDate,
    notes: &NoteStore,
    memories: &MemoryStore,
) -> String {
    let date = key.date();

    let marker = if !state.events_on(key).is_empty() {
        "•"
    } else if notes.get(&key).is_some() {
        "~"
    } else if memories.get(&key).is_some() {
        "°"
    } else {
        " "
    };

    let day = format!("{:>3}", date.day());
    let in_month = date.month() == state.reference_date.month()
        && date.year() == state.reference_date.year();

    let styled = if date == today {
        day.bold().reversed().to_string()
    } else if !in_month {
        day.dimmed().to_string()
    } else {
        match classify_holiday(date).map(|h| h.kind) {
            Some(HolidayKind::Sunday) => day.magenta().to_string(),
            Some(_) => day.bright_magenta().to_string(),
            None => day,
        }
    };

    format!("{}{}", styled, marker)
}

fn month_event_lines(state: &AppState) -> Vec<String> {
    let month = state.reference_date.month();
    let year = state.reference_date.year();

    let mut events: Vec<&Event> = state
        .visible_events()
        .into_iter()
        .filter(|e| e.date.date().month() == month && e.date.date().year() == year)
        .collect();
    events.sort_by_key(|e| (e.date, e.time));

    events
        .iter()
        .map(|e| format!("  {}", event_line(e, true)))
        .collect()
}

fn legend() -> String {
    format!(
        "{}  {}",
        "• events  ~ note  ° picture".dimmed(),
        "Sundays and 2nd & 4th Saturdays are holidays".dimmed()
    )
}
