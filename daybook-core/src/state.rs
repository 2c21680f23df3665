//! Application state reducer.
//!
//! All mutable UI state lives in one explicit struct, and every change goes
//! through `apply(state, action) -> state`. No ambient mutation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::date_key::DateKey;
use crate::event::{Event, EventKind};
use crate::grid::{navigate, Direction, ViewMode};

/// Which event categories are visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilter {
    pub birthday: bool,
    pub festival: bool,
    pub meeting: bool,
    pub important: bool,
    pub others: bool,
}

impl Default for EventFilter {
    fn default() -> Self {
        EventFilter {
            birthday: true,
            festival: true,
            meeting: true,
            important: true,
            others: true,
        }
    }
}

/// Filter buckets; every custom-labeled kind falls into `Others`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterBucket {
    Birthday,
    Festival,
    Meeting,
    Important,
    Others,
}

impl EventKind {
    pub fn bucket(&self) -> FilterBucket {
        match self {
            EventKind::Birthday => FilterBucket::Birthday,
            EventKind::Festival => FilterBucket::Festival,
            EventKind::Meeting => FilterBucket::Meeting,
            EventKind::Important => FilterBucket::Important,
            EventKind::Other(_) => FilterBucket::Others,
        }
    }
}

impl EventFilter {
    pub fn allows(&self, kind: &EventKind) -> bool {
        match kind.bucket() {
            FilterBucket::Birthday => self.birthday,
            FilterBucket::Festival => self.festival,
            FilterBucket::Meeting => self.meeting,
            FilterBucket::Important => self.important,
            FilterBucket::Others => self.others,
        }
    }

    fn toggle(&mut self, bucket: FilterBucket) {
        let flag = match bucket {
            FilterBucket::Birthday => &mut self.birthday,
            FilterBucket::Festival => &mut self.festival,
            FilterBucket::Meeting => &mut self.meeting,
            FilterBucket::Important => &mut self.important,
            FilterBucket::Others => &mut self.others,
        };
        *flag = !*flag;
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub events: Vec<Event>,
    pub filter: EventFilter,
    pub reference_date: NaiveDate,
    pub view_mode: ViewMode,
    /// Distinct titles seen so far, for suggestions.
    pub previous_titles: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum Action {
    AddEvent(Event),
    ToggleCompleted { id: i64, now: DateTime<Utc> },
    Reschedule { id: i64, to: DateKey },
    ToggleFilter(FilterBucket),
    SetViewMode(ViewMode),
    Navigate(Direction),
    GoToToday(NaiveDate),
}

impl AppState {
    pub fn new(events: Vec<Event>, today: NaiveDate) -> Self {
        let mut previous_titles = Vec::new();
        for event in &events {
            if !previous_titles.contains(&event.title) {
                previous_titles.push(event.title.clone());
            }
        }
        AppState {
            events,
            filter: EventFilter::default(),
            reference_date: today,
            view_mode: ViewMode::Month,
            previous_titles,
        }
    }

    /// Events that pass the current filter.
    pub fn visible_events(&self) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| self.filter.allows(&e.kind))
            .collect()
    }

    /// Visible events on one day.
    pub fn events_on(&self, key: DateKey) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.date == key && self.filter.allows(&e.kind))
            .collect()
    }

    /// Produce the next state for an action.
    pub fn apply(mut self, action: Action) -> AppState {
        match action {
            Action::AddEvent(event) => {
                if !self.previous_titles.contains(&event.title) {
                    self.previous_titles.push(event.title.clone());
                }
                self.events.push(event);
            }
            Action::ToggleCompleted { id, now } => {
                for event in &mut self.events {
                    if event.id == id {
                        event.completed = !event.completed;
                        if event.completed {
                            event.completed_at = Some(now);
                        }
                        // Un-completing keeps the old timestamp.
                    }
                }
            }
            Action::Reschedule { id, to } => {
                for event in &mut self.events {
                    if event.id == id {
                        event.date = to;
                    }
                }
            }
            Action::ToggleFilter(bucket) => self.filter.toggle(bucket),
            Action::SetViewMode(mode) => self.view_mode = mode,
            Action::Navigate(direction) => {
                self.reference_date = navigate(self.reference_date, self.view_mode, direction);
            }
            Action::GoToToday(today) => self.reference_date = today,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{parse_time, EventDraft};
    use chrono::TimeZone;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
    }

    fn sample_event(id: i64, title: &str, kind: EventKind) -> Event {
        EventDraft {
            title: title.to_string(),
            date: Some(DateKey::new(today())),
            time: Some(parse_time("09:30").unwrap()),
            duration: None,
            kind: Some(kind),
        }
        .validate(id)
        .unwrap()
    }

    #[test]
    fn test_add_event_remembers_new_titles_once() {
        let state = AppState::new(vec![sample_event(1, "Standup", EventKind::Meeting)], today());
        let state = state.apply(Action::AddEvent(sample_event(2, "Review", EventKind::Meeting)));
        let state = state.apply(Action::AddEvent(sample_event(3, "Review", EventKind::Meeting)));

        assert_eq!(state.events.len(), 3);
        assert_eq!(state.previous_titles, vec!["Standup", "Review"]);
    }

    #[test]
    fn test_toggle_completed_sets_timestamp_once() {
        let now = Utc.with_ymd_and_hms(2025, 1, 31, 10, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2025, 1, 31, 11, 0, 0).unwrap();

        let state = AppState::new(vec![sample_event(1, "Standup", EventKind::Meeting)], today());
        let state = state.apply(Action::ToggleCompleted { id: 1, now });
        assert!(state.events[0].completed);
        assert_eq!(state.events[0].completed_at, Some(now));

        // Un-complete: flag flips, timestamp stays
        let state = state.apply(Action::ToggleCompleted { id: 1, now: later });
        assert!(!state.events[0].completed);
        assert_eq!(state.events[0].completed_at, Some(now));
    }

    #[test]
    fn test_reschedule_moves_only_the_target_event() {
        let state = AppState::new(
            vec![
                sample_event(1, "A", EventKind::Meeting),
                sample_event(2, "B", EventKind::Meeting),
            ],
            today(),
        );
        let to: DateKey = "2025-02-14".parse().unwrap();
        let state = state.apply(Action::Reschedule { id: 2, to });

        assert_eq!(state.events[0].date, DateKey::new(today()));
        assert_eq!(state.events[1].date, to);
    }

    #[test]
    fn test_filter_hides_matching_kinds_including_custom_labels() {
        let state = AppState::new(
            vec![
                sample_event(1, "Cake", EventKind::Birthday),
                sample_event(2, "Game night", EventKind::Other("games".to_string())),
            ],
            today(),
        );
        assert_eq!(state.visible_events().len(), 2);

        let state = state.apply(Action::ToggleFilter(FilterBucket::Others));
        let visible: Vec<i64> = state.visible_events().iter().map(|e| e.id).collect();
        assert_eq!(visible, vec![1]);

        let state = state.apply(Action::ToggleFilter(FilterBucket::Others));
        assert_eq!(state.visible_events().len(), 2);
    }

    #[test]
    fn test_navigation_uses_the_current_view_mode() {
        let state = AppState::new(vec![], today());
        // Month forward from Jan 31 clamps to Feb 28
        let state = state.apply(Action::Navigate(Direction::Forward));
        assert_eq!(state.reference_date, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());

        let state = state.apply(Action::SetViewMode(ViewMode::Week));
        let state = state.apply(Action::Navigate(Direction::Back));
        assert_eq!(state.reference_date, NaiveDate::from_ymd_opt(2025, 2, 21).unwrap());

        let state = state.apply(Action::GoToToday(today()));
        assert_eq!(state.reference_date, today());
    }
}
