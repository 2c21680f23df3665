//! Notification scan.
//!
//! Classifies events into `completed` / `upcoming` / `belated` for a given
//! "now", and turns the upcoming and completed ones into tagged alerts for an
//! external surface. The clock is injected so tests can simulate time; the
//! CLI polls this on a fixed interval.

use chrono::{DateTime, Local, Utc};

use crate::date_key::DateKey;
use crate::event::Event;

/// How long a completed event keeps showing up, inclusive.
pub const COMPLETED_WINDOW_MINUTES: i64 = 120;
/// How far ahead an event counts as upcoming, inclusive.
pub const UPCOMING_WINDOW_MINUTES: i64 = 30;
/// Default polling interval for the watch loop.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Completed,
    Upcoming,
    Belated,
}

/// One entry of the notification panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub event_id: i64,
    pub title: String,
    pub category: Category,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct ScanReport {
    pub completed: Vec<Notification>,
    pub upcoming: Vec<Notification>,
    pub belated: Vec<Notification>,
}

impl ScanReport {
    pub fn len(&self) -> usize {
        self.completed.len() + self.upcoming.len() + self.belated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.completed
            .iter()
            .chain(self.upcoming.iter())
            .chain(self.belated.iter())
    }
}

/// Scan all events against `now`. Each event lands in at most one category:
/// completed events are only eligible for `Completed`, and an upcoming event
/// is never also belated.
pub fn scan(events: &[Event], now: DateTime<Local>) -> ScanReport {
    let mut report = ScanReport::default();
    let today = DateKey::new(now.date_naive());

    for event in events {
        if event.completed {
            if let Some(completed_at) = event.completed_at {
                let minutes = now
                    .with_timezone(&Utc)
                    .signed_duration_since(completed_at)
                    .num_minutes();
                if (0..=COMPLETED_WINDOW_MINUTES).contains(&minutes) {
                    report.completed.push(Notification {
                        event_id: event.id,
                        title: event.title.clone(),
                        category: Category::Completed,
                        message: format!("✅ Completed: {}", event.title),
                    });
                }
            }
            continue;
        }

        if event.date == today {
            let event_dt = event.date.date().and_time(event.time);
            let minutes = event_dt.signed_duration_since(now.naive_local()).num_minutes();
            if minutes > 0 && minutes <= UPCOMING_WINDOW_MINUTES {
                report.upcoming.push(Notification {
                    event_id: event.id,
                    title: event.title.clone(),
                    category: Category::Upcoming,
                    message: format!("{} starts in {} minutes", event.title, minutes),
                });
                continue;
            }
        }

        if event.date < today || (event.date == today && event.time < now.time()) {
            report.belated.push(Notification {
                event_id: event.id,
                title: event.title.clone(),
                category: Category::Belated,
                message: format!(
                    "{} was scheduled for {} at {}",
                    event.title,
                    event.date.date().format("%b %d"),
                    event.time.format("%H:%M")
                ),
            });
        }
    }

    report
}

/// An alert for the external notification surface. The tag lets the surface
/// deduplicate repeated alerts for the same event across scan passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub tag: String,
    pub title: String,
    pub body: String,
}

/// Build the alerts for one scan pass: one per upcoming event
/// (`event-<id>`) and one per recently completed event (`completed-<id>`).
pub fn alerts(report: &ScanReport) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for notification in &report.upcoming {
        alerts.push(Alert {
            tag: format!("event-{}", notification.event_id),
            title: format!("Upcoming Event: {}", notification.title),
            body: notification.message.clone(),
        });
    }

    for notification in &report.completed {
        alerts.push(Alert {
            tag: format!("completed-{}", notification.event_id),
            title: format!("Event Completed: {}", notification.title),
            body: notification.message.clone(),
        });
    }

    alerts
}

/// Permission-gated alerting surface.
pub trait AlertSink {
    fn permission_granted(&self) -> bool;
    fn show(&mut self, alert: &Alert);
}

/// Injectable "now" source.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// One scan pass: classify, then emit alerts if the sink permits.
pub fn run_scan<S: AlertSink>(events: &[Event], now: DateTime<Local>, sink: &mut S) -> ScanReport {
    let report = scan(events, now);
    if sink.permission_granted() {
        for alert in alerts(&report) {
            sink.show(&alert);
        }
    }
    report
}
