use anyhow::Result;
use daybook_core::config::DaybookConfig;
use daybook_core::event_source::load_events;
use daybook_core::notify::{scan, Clock, Notification, SystemClock};
use owo_colors::OwoColorize;

pub fn run(config: &DaybookConfig) -> Result<()> {
    let events = load_events(&config.events_path());
    let report = scan(&events, SystemClock.now());

    if report.is_empty() {
        println!("{}", "No notifications".dimmed());
        return Ok(());
    }

    section("Upcoming", &report.upcoming, |s| s.cyan().to_string());
    section("Completed", &report.completed, |s| s.green().to_string());
    section("Belated", &report.belated, |s| s.red().to_string());
    Ok(())
}

fn section(title: &str, notifications: &[Notification], color: impl Fn(&str) -> String) {
    if notifications.is_empty() {
        return;
    }
    println!("{}", color(title));
    for notification in notifications {
        println!(
            "  {} {}",
            notification.message,
            format!("#{}", notification.event_id).dimmed()
        );
    }
}
