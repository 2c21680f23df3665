use std::collections::HashSet;
use std::time::Duration;

use anyhow::Result;
use daybook_core::config::DaybookConfig;
use daybook_core::event_source::load_events;
use daybook_core::notify::{run_scan, Alert, AlertSink, Clock, SystemClock};
use owo_colors::OwoColorize;

/// Desktop alert surface. Alerts are deduplicated by tag, so a still-upcoming
/// event does not re-alert on every scan pass.
struct DesktopSink {
    seen: HashSet<String>,
}

impl AlertSink for DesktopSink {
    fn permission_granted(&self) -> bool {
        true
    }

    fn show(&mut self, alert: &Alert) {
        if !self.seen.insert(alert.tag.clone()) {
            return;
        }
        if let Err(e) = notify_rust::Notification::new()
            .summary(&alert.title)
            .body(&alert.body)
            .show()
        {
            log::warn!("Could not show desktop notification: {}", e);
        }
    }
}

pub async fn run(config: &DaybookConfig, interval_override: Option<u64>) -> Result<()> {
    let secs = interval_override
        .unwrap_or(config.poll_interval_secs)
        .max(1);

    println!(
        "Watching {} every {}s (Ctrl-C to stop)",
        config.events_path().display(),
        secs
    );

    let clock = SystemClock;
    let mut sink = DesktopSink { seen: HashSet::new() };
    let mut interval = tokio::time::interval(Duration::from_secs(secs));

    loop {
        interval.tick().await;

        let events = load_events(&config.events_path());
        let report = run_scan(&events, clock.now(), &mut sink);
        if !report.is_empty() {
            println!(
                "{} {} upcoming, {} completed, {} belated",
                clock.now().format("%H:%M").to_string().dimmed(),
                report.upcoming.len().to_string().cyan(),
                report.completed.len().to_string().green(),
                report.belated.len().to_string().red()
            );
        }
    }
}
