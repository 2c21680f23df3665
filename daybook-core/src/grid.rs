//! Calendar grid engine.
//!
//! Pure date arithmetic: given a reference date and a view mode, produce the
//! exact ordered set of day cells to render, and move the reference date by
//! one unit of the mode's granularity. Weeks start on Sunday.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::date_key::DateKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Month,
    Week,
    Day,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

/// The Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(date.weekday().num_days_from_sunday() as u64)
}

fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap()
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    first_day_of_month(date) + Months::new(1) - Days::new(1)
}

/// Generate the ordered day cells for a view.
///
/// - `Month`: from the Sunday of the week containing the 1st through the
///   Saturday of the week containing the last day; always a multiple of 7.
/// - `Week`: the 7 days of the week containing `reference`.
/// - `Day`: just `reference`.
pub fn generate_grid(reference: NaiveDate, mode: ViewMode) -> Vec<DateKey> {
    match mode {
        ViewMode::Day => vec![DateKey::new(reference)],
        ViewMode::Week => {
            let start = week_start(reference);
            (0..7).map(|i| DateKey::new(start + Days::new(i))).collect()
        }
        ViewMode::Month => {
            let start = week_start(first_day_of_month(reference));
            let end = week_start(last_day_of_month(reference)) + Days::new(6);

            let mut days = Vec::new();
            let mut day = start;
            while day <= end {
                days.push(DateKey::new(day));
                day = day + Days::new(1);
            }
            days
        }
    }
}

/// Move the reference date one unit of the view mode's granularity.
///
/// Month steps clamp the day-of-month to the target month's end
/// (Jan 31 forward lands on Feb 28/29, never on Mar 3).
pub fn navigate(reference: NaiveDate, mode: ViewMode, direction: Direction) -> NaiveDate {
    match (mode, direction) {
        (ViewMode::Month, Direction::Forward) => reference + Months::new(1),
        (ViewMode::Month, Direction::Back) => reference - Months::new(1),
        (ViewMode::Week, Direction::Forward) => reference + Days::new(7),
        (ViewMode::Week, Direction::Back) => reference - Days::new(7),
        (ViewMode::Day, Direction::Forward) => reference + Days::new(1),
        (ViewMode::Day, Direction::Back) => reference - Days::new(1),
    }
}
